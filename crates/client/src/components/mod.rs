mod app;
pub use app::*;

mod header;
pub use header::*;

mod components;
pub use components::*;

mod forms;
pub use forms::*;

mod pages;
pub use pages::*;

#[cfg(feature = "debug-signals")]
mod debug;
#[cfg(feature = "debug-signals")]
pub use debug::*;
