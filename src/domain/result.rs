//! Result type alias for margin reports

use super::errors::ReportError;

/// Result type alias for report operations
///
/// # Examples
///
/// ```
/// use margin_report::domain::result::Result;
/// use margin_report::domain::errors::ReportError;
///
/// fn failing_function() -> Result<()> {
///     Err(ReportError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ReportError>;
