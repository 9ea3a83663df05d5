//! Configuration management
//!
//! Configuration comes from three layers, later layers winning:
//! built-in defaults, an optional TOML file, `DRAGNET_*` environment
//! variables. CLI flags are applied on top by the binary.

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{DetectionConfig, DragnetConfig, ExtractionConfig, LoggingConfig, ScanConfig};
