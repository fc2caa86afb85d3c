mod exercise;
pub use exercise::*;

mod workout;
pub use workout::*;

mod student;
pub use student::*;

mod assignments;
pub use assignments::*;

pub mod constants;

/// Checks that must hold before a value is allowed into the store
pub trait ValidateModel {
    type Error;

    fn validate(&self) -> Result<(), Self::Error>;
}
