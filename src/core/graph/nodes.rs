use super::labels::LabelPolicy;
use crate::models::entity::Entities;
use crate::models::graph::{Node, NodeCategory};
use rust_decimal::Decimal;

/// Project entities into nodes: clients, then persons, then (optionally) projects.
pub fn assemble_nodes(entities: &Entities, labels: LabelPolicy, include_projects: bool) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(entities.len());

    nodes.extend(entities.clients.iter().map(|c| Node {
        id: c.id,
        label: labels.client_label(&c.name),
        category: NodeCategory::Client,
        start_date: c.start_date,
        end_date: c.end_date,
        size: c.total_hours,
    }));

    nodes.extend(entities.persons.iter().map(|p| Node {
        id: p.id,
        label: labels.person_label(&p.first_name, &p.last_name),
        category: NodeCategory::Person,
        start_date: p.start_date,
        end_date: p.end_date,
        size: Decimal::ZERO,
    }));

    if include_projects {
        nodes.extend(entities.projects.iter().map(|p| Node {
            id: p.id,
            label: labels.project_label(&p.name),
            category: NodeCategory::Project,
            start_date: p.start_date,
            end_date: p.end_date,
            size: p.total_hours,
        }));
    }

    nodes
}
