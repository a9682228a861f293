use crate::error::Result;
use crate::models::HarvestRecord;
use crate::services::export::write_csv;
use crate::services::harvester::fetch_shorts;
use crate::services::platform::{VideoPlatform, YouTubeDataApi};
use crate::services::resolver::resolve_channel;
use crate::services::transcript::{TranscriptSource, YouTubeTranscripts};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Start parameters for one harvest run.
pub struct HarvestJob {
    pub api_key: String,
    pub channel_reference: String,
    pub max_shorts: usize,
    pub output_folder: PathBuf,
}

/// Handle to a running harvest: the task itself, the cooperative cancel
/// flag, and the one-way progress channel.
pub struct WorkerHandle {
    pub task: JoinHandle<()>,
    pub cancel: Arc<AtomicBool>,
    pub logs: UnboundedReceiver<String>,
}

/// Spawn the harvest pipeline on a background task so the interactive
/// surface stays responsive. Progress goes out as free-text lines; the
/// surface never touches the worker's state directly.
pub fn spawn(job: HarvestJob) -> WorkerHandle {
    let cancel = Arc::new(AtomicBool::new(false));
    let (log_tx, logs) = mpsc::unbounded_channel();

    let flag = cancel.clone();
    let task = tokio::spawn(async move {
        let platform = YouTubeDataApi::new(job.api_key.clone());
        let transcripts = YouTubeTranscripts;
        run_harvest(&platform, &transcripts, &job, &flag, &log_tx).await;
    });

    WorkerHandle { task, cancel, logs }
}

/// Run the full pipeline, converting any error into a log line. The run
/// never panics the surface; a failed run simply ends with no output file.
pub async fn run_harvest<P, T>(
    platform: &P,
    transcripts: &T,
    job: &HarvestJob,
    cancel: &AtomicBool,
    log: &UnboundedSender<String>,
) where
    P: VideoPlatform + ?Sized,
    T: TranscriptSource + ?Sized,
{
    if let Err(e) = harvest(platform, transcripts, job, cancel, log).await {
        let _ = log.send(format!("Error: {e}"));
    }
}

async fn harvest<P, T>(
    platform: &P,
    transcripts: &T,
    job: &HarvestJob,
    cancel: &AtomicBool,
    log: &UnboundedSender<String>,
) -> Result<()>
where
    P: VideoPlatform + ?Sized,
    T: TranscriptSource + ?Sized,
{
    let _ = log.send("Resolving channel ID...".to_string());
    let channel_id = resolve_channel(platform, &job.channel_reference).await?;
    let _ = log.send(format!("Channel ID: {channel_id}"));

    let shorts = fetch_shorts(platform, &channel_id, job.max_shorts).await?;
    let total = shorts.len();

    let mut records: Vec<HarvestRecord> = Vec::new();
    for (idx, metadata) in shorts.into_iter().enumerate() {
        // Checked between fetches; an in-flight fetch is never interrupted.
        if cancel.load(Ordering::Relaxed) {
            break;
        }
        let _ = log.send(format!(
            "Fetching transcript {}/{}: {}",
            idx + 1,
            total,
            metadata.title
        ));
        let transcript_text = transcripts.fetch_transcript(&metadata.video_id).await;
        records.push(HarvestRecord {
            metadata,
            transcript_text,
        });
    }

    // Partial results on cancellation are exported on purpose; a failed
    // harvest above never reaches this point.
    if !records.is_empty() {
        let path = write_csv(&records, &job.output_folder)?;
        let _ = log.send(format!("Saved to {}", path.display()));
    }
    let _ = log.send("Done".to_string());
    Ok(())
}
