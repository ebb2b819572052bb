pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{default_config_path, load_config, resolve_config, ConfigOverrides};
pub use run::{handle_detection, run_app};
pub use wiring::{wire_dependencies, wire_with, AppRuntime, WiringError};
