use crate::types::{Annotation, Inventory, ReleaseItem};

/// Produces the resource-type inventory the engine scores against.
pub trait InventorySource: Send + Sync {
    fn load_inventory(&self) -> anyhow::Result<Inventory>;
}

/// Produces the normalized release-note items of one feed fetch.
pub trait ReleaseSource: Send + Sync {
    fn load_releases(&self) -> anyhow::Result<Vec<ReleaseItem>>;
}

/// Secondary judge that may attach annotations to scored results.
///
/// `resource_types` lists every inventory type; implementations should only
/// return annotations naming one of them.
pub trait Annotator: Send + Sync {
    fn annotate(&self, release: &ReleaseItem, resource_types: &[String]) -> anyhow::Result<Vec<Annotation>>;
}
