//! Host bootstrap: configuration, logging and dependency wiring.

pub mod config;
pub mod paths;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use paths::AppPaths;
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{wire_dependencies, AppDeps};
