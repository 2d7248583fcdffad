use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::graph::windows::WindowStrategy;
use crate::core::logic::{BuildOptions, Core};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::import::read_records;
use crate::ui::messages::{header, info, step};
use crate::utils::path::expand_tilde;

/// Handle the `build` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Build {
        input,
        nodes,
        edges,
        force,
        ..
    } = cmd
    {
        let cfg = apply_overrides(cmd, cfg);
        let opts = BuildOptions::from(&cfg);

        header("harvestgraph build");

        let input = expand_tilde(input);
        info(format!("Reading {}", input.display()));
        let records = read_records(&input)?;

        let dataset = Core::build_graph(records, &opts)?;
        let stats = &dataset.stats;

        step(format!("Initially got {} records", stats.records_read));
        step(format!("Filtered down to {} records", stats.records_kept));
        step(format!("Extracted {} clients", stats.clients));
        step(format!("Extracted {} projects", stats.projects));
        step(format!("Extracted {} persons", stats.persons));
        step(format!(
            "Combined {} nodes and {} edges over {} windows",
            dataset.nodes.len(),
            dataset.edges.len(),
            stats.windows
        ));

        let nodes_file = expand_tilde(nodes.as_deref().unwrap_or(cfg.nodes_file.as_str()));
        let edges_file = expand_tilde(edges.as_deref().unwrap_or(cfg.edges_file.as_str()));

        ExportLogic::export(&dataset, cfg.output_format, &nodes_file, &edges_file, *force)?;
    }
    Ok(())
}

/// Command-line flags win over the configuration file.
pub fn apply_overrides(cmd: &Commands, cfg: &Config) -> Config {
    let mut cfg = cfg.clone();

    if let Commands::Build {
        projects,
        plain_labels,
        anonymize,
        exclude,
        window_days,
        window_fraction,
        format,
        ..
    } = cmd
    {
        if *projects {
            cfg.include_projects = true;
        }
        if *plain_labels {
            cfg.anonymize_labels = false;
        }
        if *anonymize {
            cfg.anonymize_labels = true;
        }
        if let Some(marker) = exclude {
            cfg.exclusion_marker = marker.clone();
        }
        if let Some(days) = window_days {
            cfg.window = WindowStrategy::FixedDays { days: *days };
        }
        if let Some(divisor) = window_fraction {
            cfg.window = WindowStrategy::SpanFraction { divisor: *divisor };
        }
        if let Some(f) = format {
            cfg.output_format = *f;
        }
    }

    cfg
}
