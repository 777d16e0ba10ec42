//! Form Validation
//!
//! Rules checked before a request is issued. A form that fails never
//! reaches the network.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::models::{Item, ItemId, ItemState, NewItem, NewTask, Priority, TaskId, TaskUpdate};

/// Minimum title length, in characters, for tasks and items
pub const MIN_TITLE_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Title,
    Description,
    ExpiresAt,
    Priority,
    State,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("required")]
    Required,
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
    #[error("not a valid date")]
    InvalidDate,
    #[error("must be in the future")]
    NotInFuture,
}

/// Per-field failures of one submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.entry(field).or_insert(error);
    }
}

/// Raw input of the create/edit task dialogs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`
    pub expires_at: String,
}

impl TaskForm {
    pub fn validate(&self, now: DateTime<Utc>) -> Result<NewTask, FormErrors> {
        let mut errors = FormErrors::default();
        check_title(&self.title, &mut errors);
        check_required(&self.description, Field::Description, &mut errors);
        let expires_at = check_future_date(&self.expires_at, now, &mut errors);

        match expires_at {
            Some(expires_at) if errors.is_empty() => Ok(NewTask {
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                expires_at,
            }),
            _ => Err(errors),
        }
    }

    pub fn validate_update(
        &self,
        task_id: &TaskId,
        now: DateTime<Utc>,
    ) -> Result<TaskUpdate, FormErrors> {
        let task = self.validate(now)?;
        Ok(TaskUpdate {
            id: task_id.clone(),
            title: task.title,
            description: task.description,
            expires_at: task.expires_at,
        })
    }
}

/// Raw input of the add/edit item dialogs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub title: String,
    pub description: String,
    pub priority: Option<Priority>,
    pub state: Option<ItemState>,
}

impl ItemForm {
    /// Pre-filled from an existing item, for the edit dialog
    pub fn from_item(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            priority: Some(item.priority),
            state: Some(item.state),
        }
    }

    pub fn validate(&self) -> Result<NewItem, FormErrors> {
        let mut errors = FormErrors::default();
        check_title(&self.title, &mut errors);
        check_required(&self.description, Field::Description, &mut errors);
        if self.priority.is_none() {
            errors.insert(Field::Priority, FieldError::Required);
        }
        if self.state.is_none() {
            errors.insert(Field::State, FieldError::Required);
        }

        match (self.priority, self.state) {
            (Some(priority), Some(state)) if errors.is_empty() => Ok(NewItem {
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                priority,
                state,
            }),
            _ => Err(errors),
        }
    }

    pub fn validate_update(&self, item_id: &ItemId) -> Result<Item, FormErrors> {
        let item = self.validate()?;
        Ok(Item {
            id: item_id.clone(),
            title: item.title,
            description: item.description,
            priority: item.priority,
            state: item.state,
        })
    }
}

fn check_required(value: &str, field: Field, errors: &mut FormErrors) {
    if value.trim().is_empty() {
        errors.insert(field, FieldError::Required);
    }
}

fn check_title(title: &str, errors: &mut FormErrors) {
    let title = title.trim();
    if title.is_empty() {
        errors.insert(Field::Title, FieldError::Required);
    } else if title.chars().count() < MIN_TITLE_CHARS {
        errors.insert(Field::Title, FieldError::TooShort { min: MIN_TITLE_CHARS });
    }
}

/// The date counts from midnight UTC and must be strictly after `now`
fn check_future_date(raw: &str, now: DateTime<Utc>, errors: &mut FormErrors) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.insert(Field::ExpiresAt, FieldError::Required);
        return None;
    }
    let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
        errors.insert(Field::ExpiresAt, FieldError::InvalidDate);
        return None;
    };
    let starts = date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    match starts {
        Some(starts) if starts > now => Some(date),
        _ => {
            errors.insert(Field::ExpiresAt, FieldError::NotInFuture);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 15, 30, 0).unwrap()
    }

    fn valid_task() -> TaskForm {
        TaskForm {
            title: "  Renew the passport ".into(),
            description: " Before the trip ".into(),
            expires_at: "2024-06-01".into(),
        }
    }

    #[test]
    fn test_valid_task_is_trimmed() {
        let task = valid_task().validate(now()).unwrap();
        assert_eq!(task.title, "Renew the passport");
        assert_eq!(task.description, "Before the trip");
        assert_eq!(task.expires_at, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_short_title_rejected() {
        let form = TaskForm { title: "Too short".into(), ..valid_task() };
        let errors = form.validate(now()).unwrap_err();
        assert_eq!(errors.get(Field::Title), Some(&FieldError::TooShort { min: 10 }));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_title_length_counts_characters() {
        // ten characters, more than ten bytes
        let form = TaskForm { title: "Açúcar já!".into(), ..valid_task() };
        assert!(form.validate(now()).is_ok());
    }

    #[test]
    fn test_expiration_must_be_strictly_future() {
        let today = TaskForm { expires_at: "2024-05-10".into(), ..valid_task() };
        let past = TaskForm { expires_at: "2023-01-01".into(), ..valid_task() };
        let tomorrow = TaskForm { expires_at: "2024-05-11".into(), ..valid_task() };

        assert_eq!(
            today.validate(now()).unwrap_err().get(Field::ExpiresAt),
            Some(&FieldError::NotInFuture)
        );
        assert!(past.validate(now()).is_err());
        assert!(tomorrow.validate(now()).is_ok());
    }

    #[test]
    fn test_missing_fields_reported_together() {
        let errors = TaskForm::default().validate(now()).unwrap_err();
        assert_eq!(errors.get(Field::Title), Some(&FieldError::Required));
        assert_eq!(errors.get(Field::Description), Some(&FieldError::Required));
        assert_eq!(errors.get(Field::ExpiresAt), Some(&FieldError::Required));
    }

    #[test]
    fn test_garbage_date() {
        let form = TaskForm { expires_at: "next week".into(), ..valid_task() };
        assert_eq!(
            form.validate(now()).unwrap_err().get(Field::ExpiresAt),
            Some(&FieldError::InvalidDate)
        );
    }

    #[test]
    fn test_update_carries_task_id() {
        let update = valid_task().validate_update(&TaskId::new("t-9"), now()).unwrap();
        assert_eq!(update.id, TaskId::new("t-9"));
        assert_eq!(update.title, "Renew the passport");
    }

    #[test]
    fn test_item_requires_priority_and_state() {
        let form = ItemForm {
            title: "Call the embassy".into(),
            description: "Ask about fees".into(),
            priority: None,
            state: Some(ItemState::Pending),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::Priority), Some(&FieldError::Required));
        assert!(errors.get(Field::State).is_none());
    }

    #[test]
    fn test_item_edit_round_trip_keeps_id() {
        let item = Item {
            id: ItemId::new("i-3"),
            title: "Call the embassy".into(),
            description: "Ask about fees".into(),
            priority: Priority::High,
            state: ItemState::Doing,
        };
        let edited = ItemForm::from_item(&item).validate_update(&item.id).unwrap();
        assert_eq!(edited, item);
    }
}
