mod common;
use common::{d, h, jo_doe_records, rec, team_records};
use harvestgraph::config::Config;
use harvestgraph::core::graph::labels::LabelPolicy;
use harvestgraph::core::graph::windows::{WindowStrategy, build_windows};
use harvestgraph::core::logic::{BuildOptions, Core};
use harvestgraph::errors::AppError;
use harvestgraph::models::graph::{Edge, EdgeType, EdgeVerb, NodeCategory};
use harvestgraph::models::record::TimeRecord;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};

fn opts(include_projects: bool) -> BuildOptions {
    BuildOptions {
        include_projects,
        ..BuildOptions::default()
    }
}

#[test]
fn test_scenario_client_mode() {
    let graph = Core::build_graph(jo_doe_records(), &opts(false)).expect("graph");

    let clients = graph.nodes.iter().filter(|n| n.category == NodeCategory::Client).count();
    let persons = graph.nodes.iter().filter(|n| n.category == NodeCategory::Person).count();
    assert_eq!((clients, persons, graph.nodes.len()), (2, 1, 3));

    assert_eq!(graph.edges.len(), 2);
    let a = &graph.edges[0];
    let b = &graph.edges[1];
    assert_eq!((a.source, a.target, a.weight), (1, 5, h("8")));
    assert_eq!((b.source, b.target, b.weight), (2, 5, h("0.5")));
    assert_eq!((a.start_date, a.end_date), (b.start_date, b.end_date));
    assert_eq!(a.start_date, d(2019, 1, 1));
    assert_eq!(a.verb, EdgeVerb::Worked);
    assert_eq!(graph.stats.windows, 1);
}

#[test]
fn test_scenario_project_mode() {
    let graph = Core::build_graph(jo_doe_records(), &opts(true)).expect("graph");

    assert_eq!(graph.nodes.len(), 5);

    let worked: Vec<&Edge> = graph.edges.iter().filter(|e| e.verb == EdgeVerb::Worked).collect();
    assert_eq!(worked.len(), 1);
    // ProjA (3) → Jo (5); ProjB's 0.5h of 8.5h is below the threshold
    assert_eq!((worked[0].source, worked[0].target, worked[0].weight), (3, 5, h("8")));

    let structural: Vec<&Edge> = graph.edges.iter().filter(|e| e.verb == EdgeVerb::Project).collect();
    assert_eq!(structural.len(), 2);
    assert_eq!((structural[0].source, structural[0].target), (3, 1));
    assert_eq!((structural[1].source, structural[1].target), (4, 2));
    assert_eq!(structural[1].weight, h("0.5"));
}

#[test]
fn test_empty_after_filter_is_an_error() {
    let records = vec![rec("IgNew internal", "Admin", "Ann", "Lee", d(2020, 1, 1), "1")];
    let err = Core::build_graph(records, &opts(false)).unwrap_err();
    assert!(matches!(err, AppError::EmptyInput));

    let err = Core::build_graph(Vec::new(), &opts(true)).unwrap_err();
    assert!(matches!(err, AppError::EmptyInput));
}

#[test]
fn test_invalid_window_aborts() {
    let o = BuildOptions {
        window: WindowStrategy::FixedDays { days: 0 },
        ..BuildOptions::default()
    };
    let err = Core::build_graph(jo_doe_records(), &o).unwrap_err();
    assert!(matches!(err, AppError::InvalidWindow(_)));
}

#[test]
fn test_node_ids_unique_and_in_range() {
    for include_projects in [false, true] {
        let graph = Core::build_graph(team_records(), &opts(include_projects)).expect("graph");
        let s = &graph.stats;
        let total = (s.clients + s.projects + s.persons) as u32;

        let ids: HashSet<u32> = graph.nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), graph.nodes.len());
        assert!(ids.iter().all(|&id| (1..=total).contains(&id)));

        let expected = s.clients + s.persons + if include_projects { s.projects } else { 0 };
        assert_eq!(graph.nodes.len(), expected);
    }
}

#[test]
fn test_stats_count_filtered_records() {
    let graph = Core::build_graph(team_records(), &opts(false)).expect("graph");
    assert_eq!(graph.stats.records_read, 10);
    assert_eq!(graph.stats.records_kept, 9);
    assert_eq!(
        (graph.stats.clients, graph.stats.projects, graph.stats.persons),
        (3, 4, 3)
    );
}

/// Brute force: per (window, person, client) sum of hours, ignoring empty groups.
fn expected_client_edges(records: &[TimeRecord], width: chrono::Duration) -> BTreeMap<(chrono::NaiveDate, String, String), Decimal> {
    let min = records.iter().map(|r| r.date).min().unwrap();
    let max = records.iter().map(|r| r.date).max().unwrap();
    let mut out = BTreeMap::new();
    for w in build_windows(min, max, width).unwrap() {
        for r in records.iter().filter(|r| w.contains(r.date)) {
            *out.entry((w.start_date(), format!("{} {}", r.first_name, r.last_name), r.client.clone()))
                .or_insert(Decimal::ZERO) += r.hours;
        }
    }
    out
}

#[test]
fn test_edge_iff_person_active_in_window() {
    let records: Vec<TimeRecord> = team_records()
        .into_iter()
        .filter(|r| !r.client.contains("IgNew"))
        .collect();

    for days in [1, 3, 7, 30] {
        let o = BuildOptions {
            window: WindowStrategy::FixedDays { days },
            labels: LabelPolicy::Verbatim,
            ..BuildOptions::default()
        };
        let graph = Core::build_graph(records.clone(), &o).expect("graph");

        let names: BTreeMap<u32, String> = graph.nodes.iter().map(|n| (n.id, n.label.clone())).collect();
        let person_name = |label: &str| -> String {
            records
                .iter()
                .map(|r| (format!("{} {}.", r.first_name, &r.last_name[..1]), format!("{} {}", r.first_name, r.last_name)))
                .find(|(l, _)| l == label)
                .map(|(_, full)| full)
                .unwrap()
        };

        let actual: BTreeMap<_, _> = graph
            .edges
            .iter()
            .map(|e| ((e.start_date, person_name(&names[&e.target]), names[&e.source].clone()), e.weight))
            .collect();

        assert_eq!(actual.len(), graph.edges.len(), "no duplicate edges for {days}-day windows");
        assert_eq!(actual, expected_client_edges(&records, chrono::Duration::days(i64::from(days))), "{days}-day windows");
    }
}

#[test]
fn test_structural_edges_use_all_time_hours() {
    let o = BuildOptions {
        include_projects: true,
        window: WindowStrategy::FixedDays { days: 1 },
        ..BuildOptions::default()
    };
    let graph = Core::build_graph(team_records(), &o).expect("graph");

    let structural: Vec<&Edge> = graph.edges.iter().filter(|e| e.verb == EdgeVerb::Project).collect();
    assert_eq!(structural.len(), 4);

    // Globex / Audit = project 6, client 2: 8 + 2 + 6 hours from 03-02 to 04-30
    let audit = structural.iter().find(|e| e.source == 6).expect("audit edge");
    assert_eq!(audit.target, 2);
    assert_eq!(audit.weight, h("16"));
    assert_eq!((audit.start_date, audit.end_date), (d(2020, 3, 2), d(2020, 4, 30)));
    assert_eq!(audit.edge_type, EdgeType::Undirected);

    // structural edges are appended after every interaction edge
    let first_structural = graph.edges.iter().position(|e| e.verb == EdgeVerb::Project).unwrap();
    assert!(graph.edges[first_structural..].iter().all(|e| e.verb == EdgeVerb::Project));
}

#[test]
fn test_both_window_strategies_build() {
    for window in [
        WindowStrategy::FixedDays { days: 7 },
        WindowStrategy::SpanFraction { divisor: 200 },
        WindowStrategy::SpanFraction { divisor: 4 },
    ] {
        let o = BuildOptions {
            window,
            ..BuildOptions::default()
        };
        let graph = Core::build_graph(team_records(), &o).expect("graph");
        let total: Decimal = graph.edges.iter().map(|e| e.weight).sum();
        // every kept hour lands in exactly one window
        assert_eq!(total, h("39"), "{window:?}");
    }
}

#[test]
fn test_build_is_idempotent() {
    let o = opts(true);
    let first = Core::build_graph(team_records(), &o).expect("first");
    let second = Core::build_graph(team_records(), &o).expect("second");
    assert_eq!(first.nodes, second.nodes);
    assert_eq!(first.edges, second.edges);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_options_from_config() {
    let cfg = Config {
        include_projects: true,
        anonymize_labels: false,
        exclusion_marker: "internal".into(),
        window: WindowStrategy::SpanFraction { divisor: 200 },
        ..Config::default()
    };
    let o = BuildOptions::from(&cfg);
    assert!(o.include_projects);
    assert_eq!(o.labels, LabelPolicy::Verbatim);
    assert_eq!(o.exclusion_marker, "internal");
    assert_eq!(o.window, WindowStrategy::SpanFraction { divisor: 200 });

    let defaults = BuildOptions::from(&Config::default());
    assert_eq!(defaults, BuildOptions::default());
}

#[test]
fn test_custom_marker_filters_other_clients() {
    let o = BuildOptions {
        exclusion_marker: "globex".into(),
        ..BuildOptions::default()
    };
    let graph = Core::build_graph(team_records(), &o).expect("graph");
    // IgNew internal is kept now, Globex is gone
    assert_eq!(graph.stats.records_kept, 7);
    assert_eq!(graph.stats.clients, 3);
}
