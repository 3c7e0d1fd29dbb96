//! CLI command implementations.

pub mod orders;
pub mod products;

use kundan_core::source::{CachedCatalog, InMemoryCatalog, SourceError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::config::CliConfig;

/// Catalog used by every command: the configured file or the built-in seed,
/// behind the catalog cache.
pub type StoreCatalog = CachedCatalog<InMemoryCatalog>;

/// Open the configured catalog.
///
/// # Errors
///
/// Returns an error if a configured catalog file cannot be loaded.
pub async fn open_catalog(config: &CliConfig) -> Result<StoreCatalog, SourceError> {
    let source = match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "Loading catalog file");
            InMemoryCatalog::from_path(path).await?
        }
        None => InMemoryCatalog::seed(),
    };
    Ok(CachedCatalog::with_ttl(source, config.cache_ttl))
}

/// Random source for order numbers, seeded when configured.
pub fn order_rng(config: &CliConfig) -> StdRng {
    config
        .rng_seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
