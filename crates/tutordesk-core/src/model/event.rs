use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::person::PersonKind;

/// A scheduled lesson between one teacher and one student or parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub day: NaiveDate,
    pub time: NaiveTime,
    pub user_type: PersonKind,
    pub id_user: i64,
    pub id_teacher: i64,
    /// Copied from the teacher row when the event is created
    pub name_teacher: String,
    pub subject: String,
}

/// Event creation input
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewEvent {
    pub day: NaiveDate,
    pub time: NaiveTime,
    pub user_type: PersonKind,
    pub id_user: i64,
    pub id_teacher: i64,
    /// Falls back to the teacher's subject when absent
    #[serde(default)]
    pub subject: Option<String>,
}
