use serde::{Deserialize, Serialize};

/// The entity kinds the platform's search endpoint can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Channel,
    Video,
    Other,
}

impl EntityKind {
    /// Maps the API's kind discriminator (e.g. "youtube#channel") onto our enum.
    pub fn from_api_kind(kind: &str) -> Self {
        match kind {
            "youtube#channel" => EntityKind::Channel,
            "youtube#video" => EntityKind::Video,
            _ => EntityKind::Other,
        }
    }
}

/// One search hit, as resolved for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateEntity {
    pub id: String,
    pub title: String,
    pub kind: EntityKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStatistics {
    pub subscriber_count: u64,
    pub video_count: u64,
    pub view_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStatistics {
    pub view_count: u64,
    pub like_count: u64,
    pub dislike_count: u64,
}

/// Video detail as returned by the gateway, before duration normalization.
/// `statistics` is `None` when the API omits the statistics object; absent
/// counters are never substituted with zeros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVideoDetail {
    pub duration_raw: String,
    pub statistics: Option<VideoStatistics>,
}

/// Enriched video section of a channel report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoReport {
    pub video_id: String,
    pub duration_raw: String,
    pub duration_display: String,
    pub statistics: Option<VideoStatistics>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub like_count: u64,
}

/// A top-level comment with its replies in platform return order.
/// An empty `replies` vec means the thread has no replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentThread {
    pub top_level: Comment,
    pub replies: Vec<Comment>,
}

/// The enrichment stages a worker runs through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Stats,
    MediaSearch,
    MediaDetail,
    Comments,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageFailure {
    pub stage: Stage,
    pub detail: String,
}

/// One worker's aggregate output for a single channel candidate.
///
/// Fields fill in stage order; once `failure` is set, no later-stage field
/// is populated. `failure: None` means every attempted stage succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub candidate: CandidateEntity,
    pub stats: Option<ChannelStatistics>,
    pub video: Option<VideoReport>,
    pub threads: Vec<CommentThread>,
    pub failure: Option<StageFailure>,
}

impl AggregateResult {
    pub fn new(candidate: CandidateEntity) -> Self {
        AggregateResult {
            candidate,
            stats: None,
            video: None,
            threads: Vec::new(),
            failure: None,
        }
    }

    pub fn failed_at(&self) -> Option<Stage> {
        self.failure.as_ref().map(|f| f.stage)
    }
}
