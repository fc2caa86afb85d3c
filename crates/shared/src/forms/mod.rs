//! Local form state of the admin and teacher screens. Nothing here touches the
//! store; a successful submit hands back the value to dispatch

mod exercise_form;
pub use exercise_form::*;

mod workout_draft;
pub use workout_draft::*;
