//! Domain core of App Academia: the exercise catalogue, workouts, student
//! assignments and the rest timer, free of any browser dependency.

pub mod error;
pub mod forms;
pub mod model;
pub mod seed;
pub mod session;
pub mod store;
pub mod timer;
pub mod types;
pub mod utils;
