//! Sliding-window interaction edges.
//!
//! The date range `[min_date, max_date]` is cut into contiguous half-open
//! windows `[t, t + W)`. For every window and every person active in it, the
//! person's hours are summed per client (or per client + project) and one
//! `worked` edge is emitted for each group.

use crate::errors::{AppError, AppResult};
use crate::models::entity::{Entities, EntityId, PersonKey, ProjectKey};
use crate::models::graph::{Edge, EdgeType, EdgeVerb};
use crate::models::record::TimeRecord;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace};

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A group below `person_total / SIGNIFICANCE_DIVISOR` hours in a window is
/// dropped in project mode.
pub const SIGNIFICANCE_DIVISOR: u32 = 8;

/// How wide each window is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowStrategy {
    /// A fixed number of days.
    FixedDays { days: u32 },
    /// Exactly `(max_date - min_date) / divisor`; one day when the span is empty.
    SpanFraction { divisor: u32 },
}

impl Default for WindowStrategy {
    fn default() -> Self {
        WindowStrategy::FixedDays {
            days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl WindowStrategy {
    pub fn validate(&self) -> AppResult<()> {
        match *self {
            WindowStrategy::FixedDays { days: 0 } => Err(AppError::InvalidWindow(
                "window width must be at least one day".into(),
            )),
            WindowStrategy::SpanFraction { divisor: 0 } => Err(AppError::InvalidWindow(
                "span divisor must be at least 1".into(),
            )),
            _ => Ok(()),
        }
    }

    /// Window width for the given date range.
    pub fn width(&self, min_date: NaiveDate, max_date: NaiveDate) -> AppResult<Duration> {
        self.validate()?;

        let width = match *self {
            WindowStrategy::FixedDays { days } => Duration::days(i64::from(days)),
            WindowStrategy::SpanFraction { divisor } => {
                let span = max_date - min_date;
                if span <= Duration::zero() {
                    Duration::days(1)
                } else {
                    let divisor = i32::try_from(divisor).map_err(|_| {
                        AppError::InvalidWindow(format!("span divisor {divisor} is too large"))
                    })?;
                    span / divisor
                }
            }
        };

        Ok(width)
    }
}

/// Midnight of `date`; record dates sit at the start of their day.
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        let at = midnight(date);
        self.start <= at && at < self.end
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }
}

/// Earliest and latest record dates, `None` for an empty slice.
pub fn date_bounds(records: &[TimeRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let min = records.iter().map(|r| r.date).min()?;
    let max = records.iter().map(|r| r.date).max()?;
    Some((min, max))
}

/// Cut `[min_date, max_date]` into windows `[min + i*W, min + (i+1)*W)`.
///
/// Windows keep coming while their start is not past `max_date`; the last one
/// is clipped at `max_date + 1 day`.
pub fn build_windows(
    min_date: NaiveDate,
    max_date: NaiveDate,
    width: Duration,
) -> AppResult<Vec<TimeWindow>> {
    if width <= Duration::zero() {
        return Err(AppError::InvalidWindow(format!(
            "window width must be positive, got {width}"
        )));
    }
    if max_date < min_date {
        return Err(AppError::InvalidWindow(format!(
            "range ends ({max_date}) before it starts ({min_date})"
        )));
    }

    let origin = midnight(min_date);
    let last = midnight(max_date);
    let upper = shift(last, Duration::days(1))?;

    let mut windows = Vec::new();
    let mut start = origin;
    let mut i: i32 = 0;

    while start <= last {
        i = i
            .checked_add(1)
            .ok_or_else(|| AppError::InvalidWindow("too many windows".into()))?;
        let end = shift(origin, offset(width, i)?)?.min(upper);
        windows.push(TimeWindow { start, end });
        start = end;
    }

    Ok(windows)
}

/// `width * i`, computed from the origin so fractional widths do not drift.
fn offset(width: Duration, i: i32) -> AppResult<Duration> {
    width
        .checked_mul(i)
        .ok_or_else(|| AppError::InvalidWindow(format!("window {i} overflows")))
}

fn shift(at: NaiveDateTime, by: Duration) -> AppResult<NaiveDateTime> {
    at.checked_add_signed(by)
        .ok_or_else(|| AppError::InvalidWindow(format!("date overflow after {at}")))
}

/// What a person's hours are grouped against inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    Client,
    ClientProject,
}

impl Grouping {
    pub fn from_flag(include_projects: bool) -> Self {
        if include_projects {
            Grouping::ClientProject
        } else {
            Grouping::Client
        }
    }
}

/// Resolve the id of the entity a record is grouped against.
fn group_id(r: &TimeRecord, entities: &Entities, grouping: Grouping) -> AppResult<EntityId> {
    match grouping {
        Grouping::Client => entities
            .client(&r.client)
            .map(|c| c.id)
            .ok_or_else(|| AppError::UnknownEntity(format!("client '{}'", r.client))),
        Grouping::ClientProject => {
            let key = ProjectKey::new(r.client.clone(), r.project.clone());
            entities.project(&key).map(|p| p.id).ok_or_else(|| {
                AppError::UnknownEntity(format!("project '{}' of client '{}'", r.project, r.client))
            })
        }
    }
}

fn person_id(r: &TimeRecord, entities: &Entities) -> AppResult<EntityId> {
    let key = PersonKey::new(r.first_name.clone(), r.last_name.clone());
    entities.person(&key).map(|p| p.id).ok_or_else(|| {
        AppError::UnknownEntity(format!("person '{} {}'", r.first_name, r.last_name))
    })
}

/// Hours of one person inside one window.
#[derive(Debug, Default)]
struct PersonWindow {
    total: Decimal,
    groups: BTreeMap<EntityId, Decimal>,
}

/// Emit the `worked` edges of every window.
///
/// Edges come out ordered by window, then person id, then group id.
/// In [`Grouping::ClientProject`] mode the project is the edge source and a
/// group only produces an edge when it reaches `1 / SIGNIFICANCE_DIVISOR` of
/// the person's hours in that window (inclusive).
pub fn interaction_edges(
    records: &[TimeRecord],
    entities: &Entities,
    windows: &[TimeWindow],
    grouping: Grouping,
) -> AppResult<Vec<Edge>> {
    // Resolve ids once, then walk the records in date order.
    let mut resolved = records
        .iter()
        .map(|r| -> AppResult<(NaiveDate, EntityId, EntityId, Decimal)> {
            Ok((r.date, person_id(r, entities)?, group_id(r, entities, grouping)?, r.hours))
        })
        .collect::<AppResult<Vec<_>>>()?;
    resolved.sort_by_key(|&(date, ..)| date);

    let threshold_divisor = Decimal::from(SIGNIFICANCE_DIVISOR);
    let mut edges = Vec::new();

    for window in windows {
        let from = resolved.partition_point(|&(date, ..)| midnight(date) < window.start);
        let to = resolved.partition_point(|&(date, ..)| midnight(date) < window.end);
        if from == to {
            continue;
        }

        let mut per_person: BTreeMap<EntityId, PersonWindow> = BTreeMap::new();
        for &(_, person, group, hours) in &resolved[from..to] {
            let pw = per_person.entry(person).or_default();
            pw.total += hours;
            *pw.groups.entry(group).or_insert(Decimal::ZERO) += hours;
        }

        let before = edges.len();
        for (person, pw) in per_person {
            for (group, hours) in pw.groups {
                if grouping == Grouping::ClientProject && hours < pw.total / threshold_divisor {
                    continue;
                }

                edges.push(Edge {
                    source: group,
                    target: person,
                    verb: EdgeVerb::Worked,
                    start_date: window.start_date(),
                    end_date: window.end_date(),
                    weight: hours,
                    edge_type: EdgeType::Undirected,
                });
            }
        }

        trace!(
            start = %window.start,
            end = %window.end,
            records = to - from,
            edges = edges.len() - before,
            "window processed"
        );
    }

    debug!(windows = windows.len(), edges = edges.len(), "interaction edges built");
    Ok(edges)
}
