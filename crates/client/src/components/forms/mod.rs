mod exercise;
pub use exercise::*;

mod workout_draft;
pub use workout_draft::*;
