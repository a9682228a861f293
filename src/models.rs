use serde::{Deserialize, Serialize};

/// Reserved transcript value for videos where retrieval failed. An empty
/// transcript is a successful fetch; this literal means "could not fetch".
pub const TRANSCRIPT_UNAVAILABLE: &str = "Unavailable";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub published_at: String,
    pub view_count: Option<u64>,
    pub duration_seconds: u64, // in seconds
    pub like_count: Option<u64>,
}

/// A harvested short: metadata plus its transcript text (or the
/// [`TRANSCRIPT_UNAVAILABLE`] sentinel).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestRecord {
    #[serde(flatten)]
    pub metadata: VideoMetadata,
    pub transcript_text: String,
}
