//! Domain models and types for dragnet.
//!
//! This module contains the core domain models and business rules:
//!
//! - **Rule model** ([`RuleSpec`], [`RuleSet`]) - the PII categories loaded
//!   from the rules file, compiled once per run
//! - **Classification types** ([`ExtractionStrategy`], [`ProbeOutcome`])
//! - **Report model** ([`CategoryFindings`], [`ScanReport`])
//! - **Error types** ([`DragnetError`], [`ExtractionError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, DragnetError>`]:
//!
//! ```rust,no_run
//! use dragnet::domain::{Result, RuleSet};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let _rules = RuleSet::from_file("definitions.json")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod report;
pub mod result;
pub mod rules;
pub mod strategy;

// Re-export commonly used types for convenience
pub use errors::{DragnetError, ExtractionError};
pub use report::{CategoryFindings, ScanReport};
pub use result::Result;
pub use rules::{Rule, RuleSet, RuleSpec};
pub use strategy::{ExtractionStrategy, ProbeOutcome};
