//! Catalog source: a JSON document on disk or the built-in sample.

use std::path::Path;

use anyhow::Context;
use dishview_model::Catalog;

/// Read and parse a catalog document.
pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening catalog {}", path.display()))?;
    let catalog = Catalog::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    Ok(catalog)
}

/// Load the configured catalog, or the sample catalog when none is
/// configured or the configured one cannot be used.
pub fn load_or_sample(path: Option<&Path>) -> Catalog {
    let Some(path) = path else {
        log::info!("No catalog configured, using the sample menu");
        return Catalog::sample();
    };
    match load_catalog(path) {
        Ok(catalog) => {
            log::info!(
                "Loaded catalog {} ({} levels)",
                path.display(),
                catalog.levels.len()
            );
            catalog
        }
        Err(err) => {
            log::warn!("{err:#}; falling back to the sample menu");
            Catalog::sample()
        }
    }
}
