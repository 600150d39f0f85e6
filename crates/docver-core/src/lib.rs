pub mod config;
pub mod logging;

pub mod picker;
pub mod rewrite;

pub use picker::{Location, SwitchOutcome, VersionPicker};
pub use rewrite::{rewrite, VersionRule};
