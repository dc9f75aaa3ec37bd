pub mod tracing;
pub mod wiring;

pub use wiring::{build_deps, resolve_dirs, Runtime};
