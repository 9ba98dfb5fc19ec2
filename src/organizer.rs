//! Moves parsed media files into per-series directories.
//!
//! The walk is shallow on purpose: series directories created by earlier
//! runs sit next to the files being sorted, and descending into them would
//! re-sort files that are already in place.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// File extensions the organizer considers media files.
const MEDIA_EXTENSIONS: &[&str] = &["mkv", "mp4", "avi", "wmv"];

/// Check if a path has a media file extension.
pub fn is_media_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| MEDIA_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Options steering a single organize run.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrganizeOptions {
    /// Log the planned moves without touching the filesystem.
    pub dry_run: bool,
}

/// Why a file was left in place.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    /// The file name could not be parsed at all.
    #[error("file name could not be parsed")]
    Unparseable,

    /// Parsing succeeded but no series name was recovered.
    #[error("no series name found")]
    NoSeriesName,

    /// A file with the same name already exists in the series directory.
    #[error("destination already exists")]
    Collision,

    /// Creating the series directory or moving the file failed.
    #[error("move failed: {0}")]
    MoveFailed(#[source] std::io::Error),
}

/// Outcome of one organize run.
#[derive(Debug, Default)]
pub struct OrganizeReport {
    /// Files moved into place (or, on a dry run, files that would move).
    pub moved: usize,
    /// Files left where they were, with the reason per file.
    pub skipped: Vec<(PathBuf, SkipReason)>,
}

/// Sort every media file at the top level of `dir` into a subdirectory
/// named after its parsed series.
///
/// One bad file never aborts the batch: every failure is recorded in the
/// report and the walk continues with the next file.
pub fn organize_dir(dir: &Path, options: OrganizeOptions) -> Result<OrganizeReport> {
    if !dir.is_dir() {
        bail!("not a directory: {}", dir.display());
    }

    let mut report = OrganizeReport::default();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() || !is_media_file(entry.path()) {
            continue;
        }

        organize_file(dir, entry.path(), options, &mut report);
    }

    info!(
        "organize complete: {} moved, {} skipped",
        report.moved,
        report.skipped.len()
    );
    Ok(report)
}

fn organize_file(root: &Path, path: &Path, options: OrganizeOptions, report: &mut OrganizeReport) {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        warn!("skipping non-UTF-8 file name: {}", path.display());
        report
            .skipped
            .push((path.to_path_buf(), SkipReason::Unparseable));
        return;
    };

    let release = match fansort_parser::parse(name) {
        Ok(release) => release,
        Err(err) => {
            warn!("could not parse {name}: {err}");
            report
                .skipped
                .push((path.to_path_buf(), SkipReason::Unparseable));
            return;
        }
    };

    if release.series.is_empty() {
        warn!("no series name found in {name}");
        report
            .skipped
            .push((path.to_path_buf(), SkipReason::NoSeriesName));
        return;
    }

    let series_dir = root.join(&release.series);
    let destination = series_dir.join(name);

    if destination.exists() {
        warn!("destination already exists: {}", destination.display());
        report
            .skipped
            .push((path.to_path_buf(), SkipReason::Collision));
        return;
    }

    if options.dry_run {
        info!("would move {name} -> {}", destination.display());
        report.moved += 1;
        return;
    }

    let moved = fs::create_dir_all(&series_dir).and_then(|()| fs::rename(path, &destination));
    match moved {
        Ok(()) => {
            debug!("moved {name} -> {}", destination.display());
            report.moved += 1;
        }
        Err(err) => {
            warn!("could not move {name}: {err}");
            report
                .skipped
                .push((path.to_path_buf(), SkipReason::MoveFailed(err)));
        }
    }
}
