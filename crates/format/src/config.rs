//! crates/format/src/config.rs
//! Rendering limits and defaults.

use crate::numeric::MAX_PRECISION;

/// Default number of fraction digits for `%f` without a precision.
pub const DEFAULT_PRECISION: usize = 6;

/// Default upper bound accepted for a field width.
pub const DEFAULT_MAX_WIDTH: usize = 4096;

/// Limits and defaults applied while rendering.
///
/// `max_precision` never exceeds [`MAX_PRECISION`], the number of fraction
/// digits the fixed-point conversion produces reliably; larger requested
/// precisions are clipped rather than rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatConfig {
    default_precision: usize,
    max_precision: usize,
    max_width: usize,
}

impl FormatConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_precision: DEFAULT_PRECISION,
            max_precision: MAX_PRECISION,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }

    /// Sets the precision used by `%f` directives without one.
    #[must_use]
    pub fn with_default_precision(mut self, precision: usize) -> Self {
        self.default_precision = precision;
        self
    }

    /// Sets the largest precision honoured before clipping.
    #[must_use]
    pub fn with_max_precision(mut self, precision: usize) -> Self {
        self.max_precision = precision.min(MAX_PRECISION);
        self
    }

    /// Sets the largest accepted field width.
    #[must_use]
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Precision used when a `%f` directive has none.
    #[must_use]
    pub const fn default_precision(&self) -> usize {
        self.default_precision
    }

    /// Largest precision honoured.
    #[must_use]
    pub const fn max_precision(&self) -> usize {
        self.max_precision
    }

    /// Largest accepted field width.
    #[must_use]
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Resolves the precision for a `%f` directive.
    pub(crate) fn effective_precision(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_precision)
            .min(self.max_precision)
            .min(MAX_PRECISION)
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new()
    }
}
