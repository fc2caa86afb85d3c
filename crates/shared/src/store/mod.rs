mod action;
pub use action::*;

mod state;
pub use state::*;

mod lookup;
pub use lookup::*;
