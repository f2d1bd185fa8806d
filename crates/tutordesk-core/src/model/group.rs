use serde::{Deserialize, Serialize};

/// A class of students taught by one or more teachers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub group_name: String,
}
