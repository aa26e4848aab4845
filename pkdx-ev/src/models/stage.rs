//! Resolved evolution stages handed to the view layer

use serde::Serialize;

/// One displayable stage of a lineage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageDescriptor {
    /// Species name, verbatim from the chain document
    pub name: String,
    /// Image URL (artwork, sprite, or id-derived fallback)
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Ordered stages produced by one traversal
///
/// Order is depth-first pre-order over the chain document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EvolutionSequence(Vec<StageDescriptor>);

impl EvolutionSequence {
    pub fn new(stages: Vec<StageDescriptor>) -> Self {
        Self(stages)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn stages(&self) -> &[StageDescriptor] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a view should show an evolution section
    ///
    /// Single-stage and empty lineages are not displayed.
    pub fn is_displayable(&self) -> bool {
        self.0.len() > 1
    }

    /// Stage names in order
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn into_inner(self) -> Vec<StageDescriptor> {
        self.0
    }
}

impl IntoIterator for EvolutionSequence {
    type Item = StageDescriptor;
    type IntoIter = std::vec::IntoIter<StageDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a EvolutionSequence {
    type Item = &'a StageDescriptor;
    type IntoIter = std::slice::Iter<'a, StageDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
