use crate::models::{AggregateResult, CandidateEntity, Stage, StageFailure};
use crate::services::gateway::VideoPlatform;
use crate::services::worker;
use futures::future::join_all;
use log::{error, info};
use std::sync::Arc;

/// Fans out one worker task per candidate and joins them all.
///
/// The join is a barrier, not a race: the call returns only after every
/// spawned task has finished, and the output holds exactly one result per
/// candidate, in candidate order. `join_all` yields results in spawn order
/// regardless of completion order, so no slot bookkeeping is needed. A
/// failed or panicked worker fills its own slot and never affects siblings.
pub async fn run(
    gateway: Arc<dyn VideoPlatform>,
    query: &str,
    candidates: Vec<CandidateEntity>,
) -> Vec<AggregateResult> {
    info!("Enriching {} channel candidate(s)", candidates.len());

    let mut handles = Vec::with_capacity(candidates.len());
    for candidate in &candidates {
        let gateway = Arc::clone(&gateway);
        let query = query.to_string();
        let candidate = candidate.clone();
        handles.push(tokio::spawn(async move {
            worker::enrich_channel(gateway.as_ref(), &query, candidate).await
        }));
    }

    let joined = join_all(handles).await;

    let mut results = Vec::with_capacity(candidates.len());
    for (candidate, outcome) in candidates.into_iter().zip(joined) {
        match outcome {
            Ok(result) => results.push(result),
            Err(e) => {
                // A worker that never completed still owns its slot; record
                // it as failed before any stage produced output.
                error!(
                    "Worker task for channel {} did not complete: {e}",
                    candidate.id
                );
                let mut result = AggregateResult::new(candidate);
                result.failure = Some(StageFailure {
                    stage: Stage::Stats,
                    detail: format!("worker task did not complete: {e}"),
                });
                results.push(result);
            }
        }
    }

    results
}
