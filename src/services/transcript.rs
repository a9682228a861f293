use crate::models::TRANSCRIPT_UNAVAILABLE;
use async_trait::async_trait;
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Best-effort transcript retrieval. Infallible by contract: any failure
/// (transcripts disabled, none found, transport error) collapses to the
/// [`TRANSCRIPT_UNAVAILABLE`] sentinel so one broken video never aborts a
/// batch.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch_transcript(&self, video_id: &str) -> String;
}

#[derive(Default)]
pub struct YouTubeTranscripts;

#[async_trait]
impl TranscriptSource for YouTubeTranscripts {
    async fn fetch_transcript(&self, video_id: &str) -> String {
        let languages = &["en"];

        let api = match YouTubeTranscriptApi::new(None, None, None) {
            Ok(api) => api,
            Err(_) => return TRANSCRIPT_UNAVAILABLE.to_string(),
        };

        match api.fetch_transcript(video_id, languages, false).await {
            Ok(transcript) => {
                let texts: Vec<String> =
                    transcript.into_iter().map(|entry| entry.text).collect();
                texts.join(" ")
            }
            Err(_) => TRANSCRIPT_UNAVAILABLE.to_string(),
        }
    }
}
