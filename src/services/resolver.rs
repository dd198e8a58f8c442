use crate::error::ResolveError;
use crate::models::{CandidateEntity, EntityKind};
use crate::services::gateway::VideoPlatform;
use log::info;

/// Resolves a free-text query to channel candidates, in search-result order.
///
/// The search is already scoped to channels, but the result is filtered again
/// since the API may echo other kinds. Zero channels is fatal to the run.
pub async fn resolve(
    gateway: &dyn VideoPlatform,
    query: &str,
    max_results: u32,
) -> Result<Vec<CandidateEntity>, ResolveError> {
    let entities = gateway
        .search_entities(query, EntityKind::Channel, max_results)
        .await?;

    let candidates: Vec<CandidateEntity> = entities
        .into_iter()
        .filter(|entity| entity.kind == EntityKind::Channel)
        .collect();

    if candidates.is_empty() {
        return Err(ResolveError::NoMatches(query.to_string()));
    }

    info!("Resolved {} channel candidate(s) for \"{query}\"", candidates.len());
    Ok(candidates)
}
