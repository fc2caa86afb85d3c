use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::types::StudentId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
}

/// The fixed set of students known to the app, in display order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(pub Vec<Student>);

impl Roster {
    pub fn find(&self, id: &StudentId) -> Option<&Student> {
        self.0.iter().find(|student| &student.id == id)
    }
}

impl Deref for Roster {
    type Target = Vec<Student>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
