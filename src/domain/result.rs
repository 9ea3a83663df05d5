//! Result type alias for dragnet
//!
//! This module provides a convenient Result type alias that uses DragnetError
//! as the error type.

use super::errors::DragnetError;

/// Result type alias for dragnet operations
///
/// This is a convenience type alias that uses `DragnetError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use dragnet::domain::result::Result;
/// use dragnet::domain::errors::DragnetError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(DragnetError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, DragnetError>;
