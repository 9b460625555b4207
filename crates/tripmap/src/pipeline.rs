//! The per-request pipeline: read, extract, index, filter, render, persist.
//!
//! The history file is re-read from scratch on every run; nothing is
//! cached between requests. The artifact slot has no locking, so the
//! last writer wins when runs overlap.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::filter::{self, DateFilter};
use crate::map::{self, MapView};
use crate::options::{self, DateOptions};
use crate::timeline::TimelineDocument;

/// What a pipeline run did with the artifact slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// A new artifact was written with this many markers.
    Rendered {
        /// Number of markers in the written artifact.
        marker_count: usize,
    },
    /// The filter matched nothing; the stored artifact was left untouched.
    NoData,
}

/// Run the full pipeline and persist the artifact on a successful render.
///
/// Returns the date option index of the unfiltered sample set together
/// with the render outcome.
///
/// # Errors
///
/// Returns an error if the history cannot be read or parsed, a timestamp
/// is unparseable, or the artifact cannot be written.
pub fn run(
    history_path: &Path,
    artifact_path: &Path,
    criteria: &DateFilter,
) -> Result<(DateOptions, RenderOutcome)> {
    let document = TimelineDocument::load(history_path)?;
    let samples = document.extract_samples();
    debug!(
        "extracted {} samples from {} entries in {}",
        samples.len(),
        document.entry_count(),
        history_path.display()
    );

    let date_options = options::date_options(&samples)?;
    let matched = filter::filter_samples(&samples, criteria)?;

    match map::build_map(&matched)? {
        Some(view) => {
            let marker_count = view.markers.len();
            write_artifact(artifact_path, &view)?;
            info!(
                "rendered {marker_count} markers to {}",
                artifact_path.display()
            );
            Ok((date_options, RenderOutcome::Rendered { marker_count }))
        }
        None => {
            debug!("no samples matched {criteria:?}; artifact left untouched");
            Ok((date_options, RenderOutcome::NoData))
        }
    }
}

/// Write the rendered document, creating the parent directory if needed.
///
/// The previous artifact is overwritten unconditionally.
///
/// # Errors
///
/// Returns an error if the directory or the file cannot be written.
pub fn write_artifact(path: &Path, view: &MapView) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    let html = view.to_html()?;
    fs::write(path, html).map_err(|source| Error::ArtifactWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the stored artifact back for serving.
///
/// # Errors
///
/// Returns an error if the artifact cannot be read; a missing file shows
/// up as [`Error::is_artifact_missing`].
pub fn read_artifact(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::ArtifactRead {
        path: path.to_path_buf(),
        source,
    })
}
