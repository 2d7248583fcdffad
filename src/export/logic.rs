// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, notify_export_success};
use crate::models::graph::GraphDataset;
use crate::ui::messages::{info, warning};
use crate::utils::path::staging_path;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes the node and edge collections to their files.
pub struct ExportLogic;

/// An output file being written next to its final location.
struct Staged<'a> {
    target: &'a Path,
    tmp: PathBuf,
}

impl<'a> Staged<'a> {
    fn new(target: &'a Path) -> Self {
        Staged {
            target,
            tmp: staging_path(target),
        }
    }
}

impl ExportLogic {
    /// Write `dataset.nodes` to `nodes_file` and `dataset.edges` to `edges_file`.
    ///
    /// Both targets are checked for overwrite before anything is written.
    /// Either both files end up in place or neither does: rows go to staging
    /// files first and are renamed over the targets only once both are complete.
    pub fn export(
        dataset: &GraphDataset,
        format: ExportFormat,
        nodes_file: &Path,
        edges_file: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(nodes_file, force)?;
        ensure_writable(edges_file, force)?;

        let nodes = Staged::new(nodes_file);
        let edges = Staged::new(edges_file);

        let written = write_rows(&dataset.nodes, format, &nodes)
            .and_then(|_| write_rows(&dataset.edges, format, &edges));
        if let Err(e) = written {
            discard(&[&nodes, &edges]);
            return Err(e);
        }

        commit(&[&nodes, &edges])?;

        notify_export_success("nodes", dataset.nodes.len(), nodes_file);
        notify_export_success("edges", dataset.edges.len(), edges_file);
        Ok(())
    }
}

fn write_rows<T: Serialize>(rows: &[T], format: ExportFormat, file: &Staged) -> AppResult<()> {
    ensure_parent_dir(file.target)?;
    info(format!(
        "Exporting to {}: {}",
        format.as_str().to_uppercase(),
        file.target.display()
    ));
    debug!(tmp = %file.tmp.display(), rows = rows.len(), "staging output");

    match format {
        ExportFormat::Csv => export_csv(rows, &file.tmp),
        ExportFormat::Json => export_json(rows, &file.tmp),
    }
}

/// Move every staged file over its target.
///
/// If a rename fails, the files already moved are removed again along with
/// the remaining staging files.
fn commit(files: &[&Staged]) -> AppResult<()> {
    for (i, file) in files.iter().enumerate() {
        if let Err(e) = fs::rename(&file.tmp, file.target) {
            for done in &files[..i] {
                remove_quietly(done.target);
            }
            discard(&files[i..]);
            return Err(e.into());
        }
    }
    Ok(())
}

fn discard(files: &[&Staged]) {
    for file in files {
        remove_quietly(&file.tmp);
    }
}

fn remove_quietly(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => debug!(path = %path.display(), "removed partial output"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warning(format!("Could not remove '{}': {e}", path.display())),
    }
}
