//! Derived Views
//!
//! Pure sorting and filtering over a cache snapshot. Nothing here touches
//! the cache; callers recompute whenever the snapshot or the criteria change.
//!
//! Day boundaries are taken in UTC, the zone dates are displayed in.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Item, Task};

/// Order of the task list by creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSort {
    /// Oldest first
    CreatedAsc,
    /// Newest first
    CreatedDesc,
}

/// Inclusive creation-date interval, compared by calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// From two `<input type="date">` values; `None` unless both parse
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        let start = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d").ok()?;
        let end = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d").ok()?;
        Some(Self { start, end })
    }

    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        let day = ts.date_naive();
        self.start <= day && day <= self.end
    }
}

/// Criteria for the task list. The default shows the whole cache.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskQuery {
    /// Case-insensitive substring of the title
    pub search: String,
    pub sort: Option<TaskSort>,
    pub created_between: Option<DateRange>,
}

impl TaskQuery {
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.sort.is_some() || self.created_between.is_some()
    }

    /// Drop search text, sort and date range
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        let needle = self.search.trim().to_lowercase();
        let mut visible: Vec<Task> = tasks
            .iter()
            .filter(|task| {
                self.created_between
                    .map_or(true, |range| range.contains(task.created_at))
            })
            .filter(|task| needle.is_empty() || task.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        match self.sort {
            Some(TaskSort::CreatedAsc) => visible.sort_by_key(|task| task.created_at),
            Some(TaskSort::CreatedDesc) => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            None => {}
        }
        visible
    }
}

/// Order of a task's items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSort {
    /// High first
    PriorityDesc,
    /// Pending first, Canceled last
    StateAsc,
}

/// Sorted copy of `items`; `None` keeps the server's order. Stable.
pub fn sort_items(items: &[Item], sort: Option<ItemSort>) -> Vec<Item> {
    let mut sorted = items.to_vec();
    match sort {
        Some(ItemSort::PriorityDesc) => {
            sorted.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()))
        }
        Some(ItemSort::StateAsc) => sorted.sort_by_key(|item| item.state.rank()),
        None => {}
    }
    sorted
}

/// `dd/mm/yyyy` in UTC
pub fn format_display_date(ts: DateTime<Utc>) -> String {
    ts.format("%d/%m/%Y").to_string()
}
