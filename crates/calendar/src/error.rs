//! Error types for the almanac-calendar crate.
//!
//! Three failure kinds are shared with the layers built on top of this crate
//! (arithmetic, time zone and formatting). Each carries an optional message
//! and an optional underlying cause, so a fault raised by an external name
//! provider is kept as the [`source`](std::error::Error::source) instead of
//! being flattened into a string.

use std::error::Error;
use std::sync::Arc;

/// Boxed error returned by external collaborators such as name providers.
pub type ProviderError = Box<dyn Error + Send + Sync + 'static>;

/// Shared, cloneable cause attached to the chained error kinds.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// The message, or `fallback`. The cause is reported only through `source()`.
fn describe<'a>(message: &'a Option<String>, fallback: &'a str) -> &'a str {
    message.as_deref().unwrap_or(fallback)
}

macro_rules! chained_error {
    ($(#[$meta:meta])* $name:ident, $fallback:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, thiserror::Error)]
        #[error("{}", describe(.message, $fallback))]
        pub struct $name {
            message: Option<String>,
            #[source]
            cause: Option<Cause>,
        }

        impl $name {
            /// Creates the error with neither message nor cause.
            pub fn new() -> Self {
                Self::default()
            }

            /// Creates the error with a message.
            pub fn with_message(message: impl Into<String>) -> Self {
                Self {
                    message: Some(message.into()),
                    cause: None,
                }
            }

            /// Creates the error wrapping an underlying cause.
            pub fn with_cause(cause: impl Into<ProviderError>) -> Self {
                Self {
                    message: None,
                    cause: Some(Arc::from(cause.into())),
                }
            }

            /// Creates the error with both a message and an underlying cause.
            pub fn with_message_and_cause(
                message: impl Into<String>,
                cause: impl Into<ProviderError>,
            ) -> Self {
                Self {
                    message: Some(message.into()),
                    cause: Some(Arc::from(cause.into())),
                }
            }

            /// Returns the message given at construction, if any.
            pub fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }

            /// Returns the underlying cause, if any.
            pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
                self.cause.as_deref()
            }
        }
    };
}

chained_error!(
    /// A calendrical computation produced a result that cannot be represented,
    /// for example an instant shifted past the supported range.
    DateTimeArithmeticError,
    "date-time arithmetic result is not representable"
);

chained_error!(
    /// A time zone identifier has no known rules.
    IllegalTimeZoneError,
    "illegal time zone"
);

chained_error!(
    /// A display-name lookup or textual parse did not produce a result.
    ///
    /// Callers can recover by falling back to a numeric rendering.
    DateTimeFormatError,
    "date-time formatting failed"
);

/// Error type for all fallible operations in the almanac-calendar crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CalendarError {
    /// Returned when an ISO day-of-week number is outside 1..=7.
    #[error("invalid ISO day of week: {value} (must be 1..=7)")]
    InvalidDayOfWeek {
        /// The rejected number.
        value: i32,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {value} (must be 1..=12)")]
    InvalidMonth {
        /// The rejected number.
        value: i32,
    },

    /// Returned when a day number does not exist in the given year and month.
    #[error("invalid day: {day} for {year}-{month:02} (must be 1..={max_day})")]
    InvalidDay {
        /// Year of the rejected date.
        year: i32,
        /// Month number (1..=12) of the rejected date.
        month: u8,
        /// The rejected day.
        day: u32,
        /// Length of the month.
        max_day: u8,
    },

    /// See [`DateTimeArithmeticError`].
    #[error(transparent)]
    Arithmetic(#[from] DateTimeArithmeticError),

    /// See [`IllegalTimeZoneError`].
    #[error(transparent)]
    IllegalTimeZone(#[from] IllegalTimeZoneError),

    /// See [`DateTimeFormatError`].
    #[error(transparent)]
    Format(#[from] DateTimeFormatError),
}
