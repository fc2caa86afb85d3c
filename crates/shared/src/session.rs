use crate::{model::Roster, types::StudentId};

/// Who is using the app. Picked on the welcome screen, no credentials involved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Admin,
    Teacher,
    Student(StudentId),
}

impl Session {
    pub fn role_label(&self) -> &'static str {
        match self {
            Session::Admin => "Administrador",
            Session::Teacher => "Professor",
            Session::Student(_) => "Aluno",
        }
    }

    pub fn student_id(&self) -> Option<&StudentId> {
        match self {
            Session::Student(id) => Some(id),
            _ => None,
        }
    }

    /// Name shown under the role in the header. Students only
    pub fn subtitle<'r>(&self, roster: &'r Roster) -> Option<&'r str> {
        self.student_id()
            .and_then(|id| roster.find(id))
            .map(|student| student.name.as_str())
    }
}
