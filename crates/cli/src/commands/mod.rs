//! CLI command implementations.

pub mod catalog;
pub mod quote;

use std::path::{Path, PathBuf};

use brunelli_core::catalog::Catalog;
use tracing::info;

/// Environment variable shared with the storefront for the catalog file.
const CATALOG_PATH_ENV: &str = "STOREFRONT_CATALOG_PATH";

/// Resolve the catalog to work against.
///
/// An explicit `--catalog` wins, then `STOREFRONT_CATALOG_PATH` (after
/// loading `.env`), then the built-in demo catalog.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid catalog.
pub fn load_catalog(explicit: Option<&Path>) -> Result<Catalog, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let path = explicit.map(Path::to_path_buf).or_else(|| {
        std::env::var(CATALOG_PATH_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    });

    let Some(path) = path else {
        return Ok(Catalog::demo());
    };

    info!(path = %path.display(), "Loading catalog");
    let json = std::fs::read_to_string(&path)
        .map_err(|e| format!("Cannot read {}: {e}", path.display()))?;
    Ok(Catalog::from_json(&json)?)
}
