use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};

/// Declares a string backed id. Seeded records carry readable slugs
/// (`supino_reto`) while records created at runtime get a random v4 uuid
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new_v4() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifies an [Exercise](crate::model::Exercise) in the catalogue
    ExerciseId
);
string_id!(
    /// Identifies a saved [Workout](crate::model::Workout)
    WorkoutId
);
string_id!(
    /// Identifies a [Student](crate::model::Student) of the roster
    StudentId
);
string_id!(
    /// Identifies a row of a workout draft. Two rows may reference the same
    /// exercise so they need their own id
    DraftEntryId
);
