use crate::error::{HarvestError, Result};
use crate::services::platform::VideoPlatform;
use url::Url;

/// Resolve the various channel URL shapes to a canonical channel id.
///
/// `…/channel/<id>` already carries the id and resolves without a network
/// call. Handles (`@name`), custom URLs (`c/<name>`, `user/<name>`) and bare
/// names are not canonical ids, so they go through a one-result channel
/// search for disambiguation.
pub async fn resolve_channel<P>(platform: &P, reference: &str) -> Result<String>
where
    P: VideoPlatform + ?Sized,
{
    // Scheme-less input ("@handle", "somename") is treated as the path.
    let path = match Url::parse(reference) {
        Ok(url) => url.path().to_string(),
        Err(_) => reference.trim().to_string(),
    };
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let Some(first) = segments.first().copied() else {
        return Err(HarvestError::InvalidReference {
            reference: reference.to_string(),
        });
    };

    if first == "channel" {
        if let Some(channel_id) = segments.get(1) {
            return Ok((*channel_id).to_string());
        }
    }

    let identifier = if let Some(handle) = first.strip_prefix('@') {
        handle
    } else if (first == "c" || first == "user") && segments.len() > 1 {
        segments[1]
    } else {
        first
    };

    match platform.search_channel(identifier).await? {
        Some(channel_id) => Ok(channel_id),
        None => Err(HarvestError::ChannelNotFound {
            query: identifier.to_string(),
        }),
    }
}
