use crate::models::{
    AggregateResult, CandidateEntity, EntityKind, Stage, StageFailure, VideoReport,
};
use crate::services::gateway::VideoPlatform;
use crate::utils::display_duration;
use log::{error, info};

/// Comment threads are fetched as a single page of at most this many items;
/// no continuation cursor is followed.
pub const COMMENT_PAGE_SIZE: u32 = 100;

fn fail(result: &mut AggregateResult, stage: Stage, detail: String) {
    error!(
        "Channel {} failed at {stage:?}: {detail}",
        result.candidate.id
    );
    result.failure = Some(StageFailure { stage, detail });
}

/// Runs the four enrichment stages for one channel candidate, strictly in
/// order, each gated on the previous one succeeding. A stage failure is
/// recorded on the result and stops the worker; it never propagates.
///
/// `query` is the original operator query, reused for the video search (not
/// the candidate's title).
pub async fn enrich_channel(
    gateway: &dyn VideoPlatform,
    query: &str,
    candidate: CandidateEntity,
) -> AggregateResult {
    let mut result = AggregateResult::new(candidate);

    // Stage 1: channel statistics. A channel without a statistics object
    // stops the worker here.
    match gateway.channel_statistics(&result.candidate.id).await {
        Ok(Some(stats)) => result.stats = Some(stats),
        Ok(None) => {
            fail(
                &mut result,
                Stage::Stats,
                "channel statistics not available".to_string(),
            );
            return result;
        }
        Err(e) => {
            fail(&mut result, Stage::Stats, e.to_string());
            return result;
        }
    }

    // Stage 2: one representative video for the same query.
    let video_id = match gateway.search_entities(query, EntityKind::Video, 1).await {
        Ok(entities) => match entities
            .into_iter()
            .find(|entity| entity.kind == EntityKind::Video)
        {
            Some(video) => video.id,
            None => {
                // A successful search with no video hit is not a failure;
                // the report simply has no video or comment sections.
                info!(
                    "No videos found for \"{query}\"; channel {} report has no video section",
                    result.candidate.id
                );
                return result;
            }
        },
        Err(e) => {
            fail(&mut result, Stage::MediaSearch, e.to_string());
            return result;
        }
    };

    // Stage 3: video statistics and content metadata.
    match gateway.video_detail(&video_id).await {
        Ok(Some(detail)) => {
            result.video = Some(VideoReport {
                video_id: video_id.clone(),
                duration_display: display_duration(&detail.duration_raw),
                duration_raw: detail.duration_raw,
                statistics: detail.statistics,
            });
        }
        Ok(None) => {
            fail(
                &mut result,
                Stage::MediaDetail,
                format!("no video details found for ID: {video_id}"),
            );
            return result;
        }
        Err(e) => {
            fail(&mut result, Stage::MediaDetail, e.to_string());
            return result;
        }
    }

    // Stage 4: one page of comment threads. Zero threads is a success.
    match gateway.comment_threads(&video_id, COMMENT_PAGE_SIZE).await {
        Ok(threads) => result.threads = threads,
        Err(e) => fail(&mut result, Stage::Comments, e.to_string()),
    }

    result
}
