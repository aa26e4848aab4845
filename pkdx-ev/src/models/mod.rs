//! Data models for upstream documents and service output

pub mod catalog;
pub mod chain;
pub mod pokemon;
pub mod stage;

pub use catalog::{type_color, CatalogEntry, TypeInfo};
pub use chain::{EvolutionChainDocument, EvolutionNode, PreOrder, SpeciesRef};
pub use pokemon::{NamedResource, PokemonDetail, ResourceList, SpeciesRecord, Sprites};
pub use stage::{EvolutionSequence, StageDescriptor};
