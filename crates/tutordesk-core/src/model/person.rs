use serde::{Deserialize, Serialize};
use tutordesk_core_types::Sensitive;

use crate::errors::TutorError;

/// The three registrable person types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    Student,
    Parent,
    Teacher,
}

impl PersonKind {
    /// Fixed order in which credentials are checked
    pub const AUTH_PRIORITY: [PersonKind; 3] =
        [PersonKind::Student, PersonKind::Parent, PersonKind::Teacher];

    /// Lowercase name used in JSON, SQL and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonKind::Student => "student",
            PersonKind::Parent => "parent",
            PersonKind::Teacher => "teacher",
        }
    }

    /// Whether events may be booked for this kind of user
    pub fn can_attend_events(&self) -> bool {
        matches!(self, PersonKind::Student | PersonKind::Parent)
    }
}

impl std::fmt::Display for PersonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PersonKind {
    type Err = TutorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(PersonKind::Student),
            "parent" => Ok(PersonKind::Parent),
            "teacher" => Ok(PersonKind::Teacher),
            other => Err(TutorError::InvalidUserType {
                user_type: other.to_string(),
            }),
        }
    }
}

/// A registered student, parent or teacher
///
/// The password is never loaded into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub kind: PersonKind,
    pub name: String,
    pub login: String,
    /// Only teachers carry a subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// Registration input shared by all person kinds
#[derive(Debug, Clone, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub login: String,
    pub password: Sensitive<String>,
    #[serde(default)]
    pub subject: Option<String>,
}

impl NewPerson {
    pub fn new(name: &str, login: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            login: login.to_string(),
            password: Sensitive::from(password),
            subject: None,
        }
    }

    pub fn with_subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }
}
