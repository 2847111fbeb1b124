//! CLI command handlers, one file per command.

mod classify;
mod completions;
mod domains;
mod extract;
mod filter;
mod has_tracking;
mod input;
mod params;
mod probe;
mod relative;
mod sanitize;
mod scheme;
mod strip;
mod tag;

pub use classify::run_classify;
pub use completions::run_completions;
pub use domains::run_domains;
pub use extract::run_extract;
pub use filter::{run_filter, FilterArgs};
pub use has_tracking::run_has_tracking;
pub use params::run_params;
pub use probe::run_probe;
pub use relative::run_relative;
pub use sanitize::run_sanitize;
pub use scheme::run_scheme;
pub use strip::run_strip;
pub use tag::{run_tag, TagArgs};
