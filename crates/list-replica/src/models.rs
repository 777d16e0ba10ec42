//! Task / Item Models
//!
//! Entities as the task API returns them, and the request bodies it accepts.
//! Field names follow the API's camelCase JSON.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned task identifier (opaque)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Server-assigned item identifier (opaque)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Item priority. Wire values are the server's enum names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Baixa")]
    Low,
    #[serde(rename = "Media")]
    Medium,
    #[serde(rename = "Alta")]
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Sort rank, Low < Medium < High
    pub fn rank(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            Priority::Low => "Baixa",
            Priority::Medium => "Media",
            Priority::High => "Alta",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_wire() == s)
    }
}

/// Item progress state. Wire values are the server's enum names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemState {
    #[serde(rename = "Pendente")]
    Pending,
    #[serde(rename = "Fazendo")]
    Doing,
    #[serde(rename = "Completo")]
    Done,
    #[serde(rename = "Cancelado")]
    Canceled,
}

impl ItemState {
    pub const ALL: [ItemState; 4] = [
        ItemState::Pending,
        ItemState::Doing,
        ItemState::Done,
        ItemState::Canceled,
    ];

    /// Sort rank, Pending < Doing < Done < Canceled
    pub fn rank(self) -> u8 {
        match self {
            ItemState::Pending => 1,
            ItemState::Doing => 2,
            ItemState::Done => 3,
            ItemState::Canceled => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemState::Pending => "Pending",
            ItemState::Doing => "Doing",
            ItemState::Done => "Done",
            ItemState::Canceled => "Canceled",
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            ItemState::Pending => "Pendente",
            ItemState::Doing => "Fazendo",
            ItemState::Done => "Completo",
            ItemState::Canceled => "Cancelado",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_wire() == s)
    }
}

/// A persisted item, owned by exactly one task.
///
/// Also the body of the update-item and delete-item requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub state: ItemState,
}

/// A task with its items, as last confirmed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp")]
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Body of the create-task request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub expires_at: NaiveDate,
}

/// Body of the update-task request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub expires_at: NaiveDate,
}

/// Body of the add-item request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub state: ItemState,
}

/// Parse a server timestamp.
///
/// Accepts RFC 3339 instants, offset-less date-times and plain dates; the
/// last two are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp `{raw}`")))
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            ts: &Option<DateTime<Utc>>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match ts {
                Some(ts) => super::serialize(ts, s),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<String>::deserialize(d)? {
                Some(raw) => crate::models::parse_timestamp(&raw)
                    .map(Some)
                    .ok_or_else(|| de::Error::custom(format!("invalid timestamp `{raw}`"))),
                None => Ok(None),
            }
        }
    }
}
