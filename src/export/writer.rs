//! Writes the catalog files

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::{
    ALL_RELEASES_FILE, ALL_SUPPORTED_RELEASES_FILE, MINOR_RELEASES_FILE,
    MINOR_SUPPORTED_RELEASES_FILE,
};
use crate::discovery::types::Family;
use crate::export::catalog::{reduce_to_minor_releases, sort_families};
use crate::export::error::ExportError;
use crate::export::json::CatalogDocument;
use crate::export::support::reduce_to_supported;

/// Writes `document` to `path`, which must end with `.json`
pub fn write_json_file(document: &CatalogDocument, path: &Path) -> Result<(), ExportError> {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(ExportError::InvalidExtension(path.to_path_buf()));
    }

    let json = document.to_json_pretty()?;
    std::fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes all, minor-only, supported and minor-only supported catalogs into `directory`.
///
/// Returns the written paths.
pub fn write_catalog_files(
    directory: &Path,
    mut families: Vec<Family>,
    now: DateTime<Utc>,
) -> Result<Vec<PathBuf>, ExportError> {
    sort_families(&mut families);

    let mut minor_releases = families.clone();
    reduce_to_minor_releases(&mut minor_releases);

    let mut supported_releases = families.clone();
    reduce_to_supported(&mut supported_releases, now);

    let mut minor_supported_releases = supported_releases.clone();
    reduce_to_minor_releases(&mut minor_supported_releases);

    let outputs = [
        (ALL_RELEASES_FILE, &families),
        (MINOR_RELEASES_FILE, &minor_releases),
        (ALL_SUPPORTED_RELEASES_FILE, &supported_releases),
        (MINOR_SUPPORTED_RELEASES_FILE, &minor_supported_releases),
    ];

    std::fs::create_dir_all(directory).map_err(|source| ExportError::Io {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(outputs.len());
    for (file_name, families) in outputs {
        let path = directory.join(file_name);
        write_json_file(&CatalogDocument::from_families(families, now), &path)?;
        info!("Wrote {} families to {}", families.len(), path.display());
        written.push(path);
    }

    Ok(written)
}
