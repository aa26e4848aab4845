//! Evolution chain document
//!
//! The upstream chain endpoint returns a recursive tree: every node may carry
//! a `species` reference and an ordered `evolves_to` list of child nodes.
//! Child order is the canonical evolution order for that branch.

use serde::{Deserialize, Deserializer, Serialize};

pub use super::pokemon::NamedResource;

/// Species reference (`name` + `url` locating the species record)
///
/// The `url` ends in `.../pokemon-species/{id}/`.
pub type SpeciesRef = NamedResource;

/// Top-level chain document as served by `/evolution-chain/{id}/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvolutionChainDocument {
    /// Chain id
    #[serde(default)]
    pub id: Option<u32>,
    /// Root node of the lineage
    pub chain: EvolutionNode,
}

/// One point in the lineage tree
///
/// The tree owns its children, so a cyclic structure cannot be built.
/// Walking and dropping are iterative and work at any depth. Parsing goes
/// through serde_json, whose nesting limit of 128 levels caps an upstream
/// document at about 63 stages; a deeper document is a parse error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EvolutionNode {
    /// Species at this stage; absent only on malformed sentinel nodes
    #[serde(default)]
    pub species: Option<SpeciesRef>,
    /// Direct evolutions, in source order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub evolves_to: Vec<EvolutionNode>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<EvolutionNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<EvolutionNode>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Drop for EvolutionNode {
    fn drop(&mut self) {
        // Detach descendants onto a heap stack so each node drops childless
        let mut pending = std::mem::take(&mut self.evolves_to);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.evolves_to);
        }
    }
}

impl EvolutionNode {
    /// Node carrying a species reference and no children
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            species: Some(NamedResource {
                name: name.into(),
                url: url.into(),
            }),
            evolves_to: Vec::new(),
        }
    }

    /// Node without a species reference
    pub fn sentinel() -> Self {
        Self::default()
    }

    /// Append children, keeping their order
    pub fn with_children(mut self, children: impl IntoIterator<Item = EvolutionNode>) -> Self {
        self.evolves_to.extend(children);
        self
    }

    /// Depth-first pre-order walk over this subtree
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Total number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        self.pre_order().count()
    }

    /// Species references in pre-order, skipping nodes without one
    pub fn species_in_order(&self) -> Vec<&SpeciesRef> {
        self.pre_order()
            .filter_map(|node| node.species.as_ref())
            .collect()
    }
}

/// Pre-order iterator driven by an explicit work stack
///
/// Parent before children, siblings left to right. Depth is bounded only
/// by heap, not by the call stack.
pub struct PreOrder<'a> {
    stack: Vec<&'a EvolutionNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a EvolutionNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse so the leftmost child is popped first
        self.stack.extend(node.evolves_to.iter().rev());
        Some(node)
    }
}
