use crate::errors::{AppError, AppResult};
use crate::models::entity::Entities;
use crate::models::graph::{Edge, EdgeType, EdgeVerb};

/// One static project → client edge per project, spanning the project's whole activity.
pub fn structural_edges(entities: &Entities) -> AppResult<Vec<Edge>> {
    entities
        .projects
        .iter()
        .map(|p| {
            let client = entities.client(&p.client_name).ok_or_else(|| {
                AppError::UnknownEntity(format!("client '{}' of project '{}'", p.client_name, p.name))
            })?;

            Ok(Edge {
                source: p.id,
                target: client.id,
                verb: EdgeVerb::Project,
                start_date: p.start_date,
                end_date: p.end_date,
                weight: p.total_hours,
                edge_type: EdgeType::Undirected,
            })
        })
        .collect()
}
