//! Derives clients, projects and persons from the filtered records.
//!
//! Ids come from a single [`IdSequence`] shared by the three passes, in the
//! order clients → projects → persons. Inside each pass entities are numbered
//! by first appearance in the input, so a fixed input always yields the same ids.

use crate::errors::{AppError, AppResult};
use crate::models::entity::{Client, Entities, EntityId, Person, PersonKey, Project, ProjectKey};
use crate::models::record::TimeRecord;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

/// Monotonic id generator; ids are never handed out twice.
#[derive(Debug)]
pub struct IdSequence {
    next: EntityId,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSequence {
    pub fn starting_at(first: EntityId) -> Self {
        Self { next: first }
    }

    pub fn next_id(&mut self) -> EntityId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Id the next call to `next_id` will return.
    pub fn peek(&self) -> EntityId {
        self.next
    }
}

/// Activity span of one group of records.
#[derive(Debug, Clone, Copy)]
struct Span {
    start: NaiveDate,
    end: NaiveDate,
    hours: Decimal,
}

impl Span {
    fn from_record(r: &TimeRecord) -> Self {
        Self {
            start: r.date,
            end: r.date,
            hours: r.hours,
        }
    }

    fn absorb(&mut self, r: &TimeRecord) {
        self.start = self.start.min(r.date);
        self.end = self.end.max(r.date);
        self.hours += r.hours;
    }
}

/// Group records by `key`, keeping groups in first-appearance order.
fn group_spans<K, F>(records: &[TimeRecord], key: F) -> Vec<(K, Span)>
where
    K: Hash + Eq + Clone,
    F: Fn(&TimeRecord) -> K,
{
    let mut order: Vec<(K, Span)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for r in records {
        let k = key(r);
        match index.get(&k) {
            Some(&i) => order[i].1.absorb(r),
            None => {
                index.insert(k.clone(), order.len());
                order.push((k, Span::from_record(r)));
            }
        }
    }

    order
}

pub fn extract_clients(records: &[TimeRecord], ids: &mut IdSequence) -> Vec<Client> {
    group_spans(records, |r| r.client.clone())
        .into_iter()
        .map(|(name, span)| Client {
            id: ids.next_id(),
            name,
            start_date: span.start,
            end_date: span.end,
            total_hours: span.hours,
        })
        .collect()
}

pub fn extract_projects(records: &[TimeRecord], ids: &mut IdSequence) -> Vec<Project> {
    group_spans(records, |r| ProjectKey::new(r.client.clone(), r.project.clone()))
        .into_iter()
        .map(|(key, span)| Project {
            id: ids.next_id(),
            client_name: key.client,
            name: key.project,
            start_date: span.start,
            end_date: span.end,
            total_hours: span.hours,
        })
        .collect()
}

pub fn extract_persons(records: &[TimeRecord], ids: &mut IdSequence) -> Vec<Person> {
    group_spans(records, |r| PersonKey::new(r.first_name.clone(), r.last_name.clone()))
        .into_iter()
        .map(|(key, span)| Person {
            id: ids.next_id(),
            first_name: key.first_name,
            last_name: key.last_name,
            start_date: span.start,
            end_date: span.end,
        })
        .collect()
}

/// Run the three extraction passes over a non-empty record set.
pub fn extract_entities(records: &[TimeRecord]) -> AppResult<Entities> {
    if records.is_empty() {
        return Err(AppError::EmptyInput);
    }

    let mut ids = IdSequence::default();
    let clients = extract_clients(records, &mut ids);
    let projects = extract_projects(records, &mut ids);
    let persons = extract_persons(records, &mut ids);

    debug!(
        clients = clients.len(),
        projects = projects.len(),
        persons = persons.len(),
        last_id = ids.peek() - 1,
        "entities extracted"
    );

    Ok(Entities::new(clients, projects, persons))
}
