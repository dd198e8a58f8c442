use crate::error::GatewayError;
use crate::models::{
    CandidateEntity, ChannelStatistics, Comment, CommentThread, EntityKind, RawVideoDetail,
    VideoStatistics,
};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Read-only platform operations the enrichment pipeline depends on.
/// Implementations must be safe for concurrent use from many workers.
#[async_trait]
pub trait VideoPlatform: Send + Sync {
    async fn search_entities(
        &self,
        query: &str,
        kind: EntityKind,
        max_results: u32,
    ) -> Result<Vec<CandidateEntity>, GatewayError>;

    async fn channel_statistics(
        &self,
        channel_id: &str,
    ) -> Result<Option<ChannelStatistics>, GatewayError>;

    async fn video_detail(&self, video_id: &str) -> Result<Option<RawVideoDetail>, GatewayError>;

    async fn comment_threads(
        &self,
        video_id: &str,
        max_results: u32,
    ) -> Result<Vec<CommentThread>, GatewayError>;
}

// Documentation: https://developers.google.com/youtube/v3/docs
const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube Data API v3 client. Stateless per request; a single instance is
/// shared across all workers.
pub struct YouTubeGateway {
    client: Client,
    api_key: String,
}

impl YouTubeGateway {
    pub fn new(api_key: String) -> Self {
        YouTubeGateway {
            client: Client::new(),
            api_key,
        }
    }

    async fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value, GatewayError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl VideoPlatform for YouTubeGateway {
    async fn search_entities(
        &self,
        query: &str,
        kind: EntityKind,
        max_results: u32,
    ) -> Result<Vec<CandidateEntity>, GatewayError> {
        let kind_param = match kind {
            EntityKind::Channel => "channel",
            EntityKind::Video => "video",
            EntityKind::Other => "channel,video",
        };
        let max = max_results.to_string();

        // https://developers.google.com/youtube/v3/docs/search/list
        let url = format!("{API_BASE_URL}/search");
        let response = self
            .get_json(
                &url,
                &[
                    ("part", "id,snippet"),
                    ("q", query),
                    ("type", kind_param),
                    ("maxResults", &max),
                ],
            )
            .await?;

        let mut entities = Vec::new();
        if let Some(items) = response["items"].as_array() {
            for item in items {
                let kind = EntityKind::from_api_kind(item["id"]["kind"].as_str().unwrap_or(""));
                let id = match kind {
                    EntityKind::Channel => item["id"]["channelId"].as_str(),
                    EntityKind::Video => item["id"]["videoId"].as_str(),
                    EntityKind::Other => None,
                }
                .unwrap_or("")
                .to_string();

                entities.push(CandidateEntity {
                    id,
                    title: item["snippet"]["title"].as_str().unwrap_or("").to_string(),
                    kind,
                });
            }
        }

        Ok(entities)
    }

    async fn channel_statistics(
        &self,
        channel_id: &str,
    ) -> Result<Option<ChannelStatistics>, GatewayError> {
        // https://developers.google.com/youtube/v3/docs/channels/list
        let url = format!("{API_BASE_URL}/channels");
        let response = self
            .get_json(&url, &[("part", "statistics"), ("id", channel_id)])
            .await?;

        let item = &response["items"][0];
        if item.is_null() || !item["statistics"].is_object() {
            return Ok(None);
        }

        let stats = &item["statistics"];
        Ok(Some(ChannelStatistics {
            subscriber_count: string_count(&stats["subscriberCount"]),
            video_count: string_count(&stats["videoCount"]),
            view_count: string_count(&stats["viewCount"]),
        }))
    }

    async fn video_detail(&self, video_id: &str) -> Result<Option<RawVideoDetail>, GatewayError> {
        // https://developers.google.com/youtube/v3/docs/videos/list
        let url = format!("{API_BASE_URL}/videos");
        let response = self
            .get_json(
                &url,
                &[("part", "statistics,contentDetails"), ("id", video_id)],
            )
            .await?;

        let item = &response["items"][0];
        if item.is_null() {
            return Ok(None);
        }

        let statistics = item["statistics"].is_object().then(|| VideoStatistics {
            view_count: string_count(&item["statistics"]["viewCount"]),
            like_count: string_count(&item["statistics"]["likeCount"]),
            dislike_count: string_count(&item["statistics"]["dislikeCount"]),
        });

        Ok(Some(RawVideoDetail {
            duration_raw: item["contentDetails"]["duration"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            statistics,
        }))
    }

    async fn comment_threads(
        &self,
        video_id: &str,
        max_results: u32,
    ) -> Result<Vec<CommentThread>, GatewayError> {
        let max = max_results.to_string();

        // https://developers.google.com/youtube/v3/docs/commentThreads/list
        let url = format!("{API_BASE_URL}/commentThreads");
        let response = self
            .get_json(
                &url,
                &[
                    ("part", "snippet,replies"),
                    ("videoId", video_id),
                    ("maxResults", &max),
                ],
            )
            .await?;

        let mut threads = Vec::new();
        if let Some(items) = response["items"].as_array() {
            for item in items {
                let top_level = parse_comment(&item["snippet"]["topLevelComment"]["snippet"]);

                let replies = item["replies"]["comments"]
                    .as_array()
                    .map(|comments| {
                        comments
                            .iter()
                            .map(|reply| parse_comment(&reply["snippet"]))
                            .collect()
                    })
                    .unwrap_or_default();

                threads.push(CommentThread { top_level, replies });
            }
        }

        Ok(threads)
    }
}

fn parse_comment(snippet: &Value) -> Comment {
    Comment {
        author: snippet["authorDisplayName"]
            .as_str()
            .unwrap_or("")
            .to_string(),
        text: snippet["textDisplay"].as_str().unwrap_or("").to_string(),
        like_count: number_count(&snippet["likeCount"]),
    }
}

// Channel and video statistics counters arrive as JSON strings.
fn string_count(value: &Value) -> u64 {
    value.as_str().unwrap_or("0").parse().unwrap_or(0)
}

// Comment like counts arrive as JSON numbers, but tolerate the string form.
fn number_count(value: &Value) -> u64 {
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
        .unwrap_or(0)
}
