//! Domain models for people, groups and events

pub mod event;
pub mod group;
pub mod person;

pub use event::{Event, NewEvent};
pub use group::Group;
pub use person::{NewPerson, Person, PersonKind};
