use crate::models::{Catalog, Room};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

/// Common trait for everything that can supply a room catalog.
/// The engine only ever sees the rooms; where they come from is up to the source.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load all rooms, in the order they should be presented
    async fn load(&self) -> Result<Vec<Room>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}

/// Load rooms from `source` and freeze them into a [`Catalog`].
pub async fn load_catalog(source: &dyn CatalogSource) -> Result<Catalog> {
    let rooms = source.load().await?;
    let catalog = Catalog::new(source.source_name(), rooms);

    for name in catalog.duplicate_names() {
        warn!("Duplicate room name {:?}, exact lookup returns the first one", name);
    }

    info!(
        "Loaded {} rooms from {}",
        catalog.len(),
        source.source_name()
    );
    Ok(catalog)
}
