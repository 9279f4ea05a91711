/// Options for [`sanitize_with`](crate::sanitize_with).
///
/// The default is the plain lossy conversion: no error positions are collected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SanitizeOptions {
    /// Record the byte position of every replaced subpart in
    /// [`Sanitized::errors`](crate::Sanitized::errors).
    pub report_errors: bool,
}

impl SanitizeOptions {
    /// Construct the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            report_errors: false,
        }
    }

    /// Enable or disable error position reporting.
    #[must_use]
    pub const fn with_error_report(mut self, report_errors: bool) -> Self {
        self.report_errors = report_errors;
        self
    }
}
