//! CLI command handlers, one per file.

mod current;
mod options;
mod rewrite;
mod switch;

pub use current::run_current;
pub use options::run_options;
pub use rewrite::run_rewrite;
pub use switch::run_switch;
