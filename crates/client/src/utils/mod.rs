mod alert;
pub use alert::*;
