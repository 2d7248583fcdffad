use crate::config::Config;
use crate::core::graph::extract::extract_entities;
use crate::core::graph::filter::{DEFAULT_EXCLUSION_MARKER, filter_records};
use crate::core::graph::labels::LabelPolicy;
use crate::core::graph::nodes::assemble_nodes;
use crate::core::graph::structure::structural_edges;
use crate::core::graph::windows::{
    Grouping, WindowStrategy, build_windows, date_bounds, interaction_edges,
};
use crate::errors::{AppError, AppResult};
use crate::models::graph::{BuildStats, GraphDataset};
use crate::models::record::TimeRecord;
use tracing::debug;

/// Knobs of a single graph build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub include_projects: bool,
    pub labels: LabelPolicy,
    pub exclusion_marker: String,
    pub window: WindowStrategy,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            include_projects: false,
            labels: LabelPolicy::Anonymized,
            exclusion_marker: DEFAULT_EXCLUSION_MARKER.to_string(),
            window: WindowStrategy::default(),
        }
    }
}

impl From<&Config> for BuildOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            include_projects: cfg.include_projects,
            labels: LabelPolicy::from_flag(cfg.anonymize_labels),
            exclusion_marker: cfg.exclusion_marker.clone(),
            window: cfg.window,
        }
    }
}

pub struct Core;

impl Core {
    /// Run the whole pipeline on the raw records.
    ///
    /// Fails with [`AppError::EmptyInput`] when nothing survives the filter.
    pub fn build_graph(records: Vec<TimeRecord>, opts: &BuildOptions) -> AppResult<GraphDataset> {
        opts.window.validate()?;

        let records_read = records.len();
        let records = filter_records(records, &opts.exclusion_marker);
        debug!(
            read = records_read,
            kept = records.len(),
            marker = %opts.exclusion_marker,
            "records filtered"
        );

        let entities = extract_entities(&records)?;
        let (min_date, max_date) = date_bounds(&records).ok_or(AppError::EmptyInput)?;

        let width = opts.window.width(min_date, max_date)?;
        let windows = build_windows(min_date, max_date, width)?;
        debug!(%min_date, %max_date, %width, windows = windows.len(), "windows laid out");

        let nodes = assemble_nodes(&entities, opts.labels, opts.include_projects);

        let grouping = Grouping::from_flag(opts.include_projects);
        let mut edges = interaction_edges(&records, &entities, &windows, grouping)?;
        if opts.include_projects {
            edges.extend(structural_edges(&entities)?);
        }

        let stats = BuildStats {
            records_read,
            records_kept: records.len(),
            clients: entities.clients.len(),
            projects: entities.projects.len(),
            persons: entities.persons.len(),
            windows: windows.len(),
        };

        Ok(GraphDataset {
            nodes,
            edges,
            stats,
        })
    }
}
