mod login;
pub use login::*;

mod admin;
pub use admin::*;

mod teacher;
pub use teacher::*;

mod student;
pub use student::*;
