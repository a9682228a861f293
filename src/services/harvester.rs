use crate::error::Result;
use crate::models::VideoMetadata;
use crate::services::platform::VideoPlatform;

/// Anything longer than this is regular long-form content.
pub const SHORT_MAX_SECONDS: u64 = 60;

/// The Data API caps search pages at 50 results.
const PAGE_SIZE_LIMIT: usize = 50;

/// Fetch up to `cap` shorts (duration <= 60s) from a channel, newest first.
///
/// Two-stage per page: one date-ordered id listing, then one batch detail
/// lookup for exactly those ids. The cap counts accepted shorts, not videos
/// processed, so a channel full of long-form uploads keeps paginating until
/// its history runs out. Upstream ordering is preserved as-is.
pub async fn fetch_shorts<P>(
    platform: &P,
    channel_id: &str,
    cap: usize,
) -> Result<Vec<VideoMetadata>>
where
    P: VideoPlatform + ?Sized,
{
    let mut shorts: Vec<VideoMetadata> = Vec::new();
    let mut collected = 0usize;
    let mut page_token: Option<String> = None;

    while collected < cap {
        let page_size = PAGE_SIZE_LIMIT.min(cap - collected);
        let page = platform
            .list_video_ids(channel_id, page_size, page_token.as_deref())
            .await?;
        if page.video_ids.is_empty() {
            // End of the channel's history.
            break;
        }

        let details = platform.video_details(&page.video_ids).await?;
        for metadata in details {
            if metadata.duration_seconds <= SHORT_MAX_SECONDS {
                shorts.push(metadata);
                collected += 1;
            }
        }

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    // A page may overshoot the remaining quota; the cap is exact.
    shorts.truncate(cap);
    Ok(shorts)
}
