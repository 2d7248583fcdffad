use super::entity::EntityId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum NodeCategory {
    Client,
    Person,
    Project,
}

impl NodeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::Client => "Client",
            NodeCategory::Person => "Person",
            NodeCategory::Project => "Project",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an edge stands for: hours worked in a window, or project ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeVerb {
    Worked,
    Project,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    Directed,
    Undirected,
}

/// Flat node row, in the column order the graph tool imports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Node {
    pub id: EntityId,
    pub label: String,
    pub category: NodeCategory,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub size: Decimal,
}

/// Flat edge row, in the column order the graph tool imports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Edge {
    pub source: EntityId,
    pub target: EntityId,
    pub verb: EdgeVerb,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub weight: Decimal,
    #[serde(rename = "Type")]
    pub edge_type: EdgeType,
}

/// Counters collected while building, used for progress output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub records_read: usize,
    pub records_kept: usize,
    pub clients: usize,
    pub projects: usize,
    pub persons: usize,
    pub windows: usize,
}

#[derive(Debug, Clone, Default)]
pub struct GraphDataset {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub stats: BuildStats,
}
