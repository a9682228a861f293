use crate::error::{HarvestError, Result};
use crate::models::VideoMetadata;
use crate::utils::parse_iso8601_duration_to_seconds;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// One page of a channel's uploads, newest first.
#[derive(Debug, Clone)]
pub struct VideoIdPage {
    pub video_ids: Vec<String>,
    pub next_page_token: Option<String>,
}

/// The video-platform API surface the harvester depends on. Split out as a
/// trait so the pagination and resolution logic can run against an in-memory
/// implementation in tests.
#[async_trait]
pub trait VideoPlatform: Send + Sync {
    /// Channel-scoped free-text search, limited to the single best match.
    /// Returns the matched channel's canonical id, or `None` when nothing
    /// matched.
    async fn search_channel(&self, query: &str) -> Result<Option<String>>;

    /// One date-ordered page of video ids uploaded by the channel.
    async fn list_video_ids(
        &self,
        channel_id: &str,
        page_size: usize,
        page_token: Option<&str>,
    ) -> Result<VideoIdPage>;

    /// Batch detail lookup (snippet, contentDetails, statistics) for exactly
    /// the given ids.
    async fn video_details(&self, video_ids: &[String]) -> Result<Vec<VideoMetadata>>;
}

pub struct YouTubeDataApi {
    http: Client,
    api_key: String,
}

impl YouTubeDataApi {
    pub fn new(api_key: String) -> Self {
        YouTubeDataApi {
            http: Client::new(),
            api_key,
        }
    }

    // Documentation: https://developers.google.com/youtube/v3/docs
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{API_BASE}/{endpoint}");
        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(HarvestError::ApiStatus { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl VideoPlatform for YouTubeDataApi {
    async fn search_channel(&self, query: &str) -> Result<Option<String>> {
        let response: SearchListResponse = self
            .get_json(
                "search",
                &[
                    ("part", "snippet"),
                    ("q", query),
                    ("type", "channel"),
                    ("maxResults", "1"),
                ],
            )
            .await?;

        Ok(response
            .items
            .into_iter()
            .next()
            .and_then(|item| item.snippet.channel_id))
    }

    async fn list_video_ids(
        &self,
        channel_id: &str,
        page_size: usize,
        page_token: Option<&str>,
    ) -> Result<VideoIdPage> {
        let max_results = page_size.to_string();
        let mut query = vec![
            ("part", "id"),
            ("channelId", channel_id),
            ("order", "date"),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response: SearchListResponse = self.get_json("search", &query).await?;

        Ok(VideoIdPage {
            video_ids: response
                .items
                .into_iter()
                .filter_map(|item| item.id.video_id)
                .collect(),
            next_page_token: response.next_page_token,
        })
    }

    async fn video_details(&self, video_ids: &[String]) -> Result<Vec<VideoMetadata>> {
        let ids = video_ids.join(",");
        let response: VideoListResponse = self
            .get_json(
                "videos",
                &[("part", "snippet,contentDetails,statistics"), ("id", &ids)],
            )
            .await?;

        Ok(response
            .items
            .into_iter()
            .map(VideoItem::into_metadata)
            .collect())
    }
}

// Wire structs for the two endpoints. Missing optional fields default here,
// at the parse boundary, so the rest of the crate never sees raw API JSON.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    id: SearchItemId,
    #[serde(default)]
    snippet: SearchSnippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchSnippet {
    channel_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: String,
    #[serde(default)]
    snippet: VideoSnippet,
    #[serde(default)]
    content_details: ContentDetails,
    #[serde(default)]
    statistics: Statistics,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    published_at: String,
}

#[derive(Debug, Default, Deserialize)]
struct ContentDetails {
    #[serde(default)]
    duration: String,
}

// The Data API serializes counts as strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
    like_count: Option<String>,
}

impl VideoItem {
    fn into_metadata(self) -> VideoMetadata {
        VideoMetadata {
            video_id: self.id,
            title: self.snippet.title,
            description: self.snippet.description,
            published_at: self.snippet.published_at,
            view_count: self.statistics.view_count.and_then(|v| v.parse().ok()),
            duration_seconds: parse_iso8601_duration_to_seconds(&self.content_details.duration),
            like_count: self.statistics.like_count.and_then(|v| v.parse().ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_video_list_response() {
        let body = r#"{
            "items": [{
                "id": "abc123def45",
                "snippet": {
                    "title": "A short",
                    "description": "desc",
                    "publishedAt": "2024-01-01T00:00:00Z"
                },
                "contentDetails": {"duration": "PT45S"},
                "statistics": {"viewCount": "1200", "likeCount": "34"}
            }]
        }"#;

        let response: VideoListResponse = serde_json::from_str(body).unwrap();
        let metadata = response
            .items
            .into_iter()
            .next()
            .unwrap()
            .into_metadata();

        assert_eq!(metadata.video_id, "abc123def45");
        assert_eq!(metadata.title, "A short");
        assert_eq!(metadata.published_at, "2024-01-01T00:00:00Z");
        assert_eq!(metadata.duration_seconds, 45);
        assert_eq!(metadata.view_count, Some(1200));
        assert_eq!(metadata.like_count, Some(34));
    }

    #[test]
    fn missing_optional_fields_default_once_at_the_boundary() {
        let body = r#"{"items": [{"id": "abc123def45"}]}"#;

        let response: VideoListResponse = serde_json::from_str(body).unwrap();
        let metadata = response
            .items
            .into_iter()
            .next()
            .unwrap()
            .into_metadata();

        assert_eq!(metadata.title, "");
        assert_eq!(metadata.description, "");
        assert_eq!(metadata.published_at, "");
        assert_eq!(metadata.view_count, None);
        assert_eq!(metadata.like_count, None);
        assert_eq!(metadata.duration_seconds, 0);
    }

    #[test]
    fn search_response_skips_items_without_video_ids() {
        let body = r#"{
            "items": [
                {"id": {"kind": "youtube#video", "videoId": "vid00000001"}},
                {"id": {"kind": "youtube#channel"}}
            ],
            "nextPageToken": "CAUQAA"
        }"#;

        let response: SearchListResponse = serde_json::from_str(body).unwrap();
        let ids: Vec<String> = response
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect();

        assert_eq!(ids, vec!["vid00000001".to_string()]);
        assert_eq!(response.next_page_token.as_deref(), Some("CAUQAA"));
    }
}
