//! Evolution chain traversal
//!
//! Flattens a chain document into display stages. Nodes are planned in
//! depth-first pre-order, their images are resolved concurrently, and the
//! results are put back into plan order before returning. Branches are
//! flattened into the same sequence.

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{info, warn};

use super::image_resolver::StageImageResolver;
use crate::models::{EvolutionNode, EvolutionSequence};

/// Walks chain documents and resolves each stage's image
pub struct ChainTraverser {
    resolver: Arc<StageImageResolver>,
    max_concurrent: usize,
}

impl ChainTraverser {
    /// `max_concurrent` of 1 resolves stages one after another
    pub fn new(resolver: Arc<StageImageResolver>, max_concurrent: usize) -> Self {
        Self {
            resolver,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Resolve every stage of the chain rooted at `root`
    ///
    /// Stages whose image cannot be resolved are left out; the call itself
    /// never fails.
    pub async fn traverse(&self, root: &EvolutionNode) -> EvolutionSequence {
        let planned = root.species_in_order();
        let planned_count = planned.len();
        let resolver = &self.resolver;

        // Each result carries its pre-order index; completion order is arbitrary
        let pending: Vec<_> = planned
            .into_iter()
            .enumerate()
            .map(|(index, species)| async move { (index, resolver.resolve_stage(species).await) })
            .collect();
        let mut tagged: Vec<_> = stream::iter(pending)
            .buffer_unordered(self.max_concurrent)
            .collect()
            .await;

        tagged.sort_unstable_by_key(|(index, _)| *index);

        let stages: Vec<_> = tagged
            .into_iter()
            .filter_map(|(index, result)| match result {
                Ok(stage) => Some(stage),
                Err(e) => {
                    warn!(stage_index = index, error = %e, "Dropping unresolvable evolution stage");
                    None
                }
            })
            .collect();

        info!(
            planned = planned_count,
            resolved = stages.len(),
            "Evolution chain traversed"
        );

        EvolutionSequence::new(stages)
    }
}
