//! # almanac-calendar
//!
//! Calendrical primitives: clocks and elapsed-time marks, ISO-numbered days
//! of the week and months, localized display names, and ordering across
//! date values of differing precision.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Clock"] -->|".as_time_source()"| B["ClockTimeSource"]
//!     B -->|".mark_now()"| C["TimeMark"]
//!     A -->|"TimeZone::today()"| D["NaiveDate"]
//!     D -->|"DayOfWeek / Month"| E["CalendarName"]
//!     E -->|"DisplayNameResolver"| F["String"]
//!     G["NameProvider"] --> F
//!     H["Year / YearMonth / NaiveDate"] -->|"compare_to()"| I["Ordering"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use almanac_calendar::{
//!     Clock, DayOfWeek, DisplayNameResolver, FixedClock, Locale, Month, TimeZone,
//! };
//! use chrono::TimeZone as _;
//!
//! // ISO numbering
//! assert_eq!(DayOfWeek::from_iso_day_number(1).unwrap(), DayOfWeek::Monday);
//! assert!(DayOfWeek::from_iso_day_number(8).is_err());
//!
//! // Clock readings labelled and named
//! let clock = FixedClock::new(chrono::Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap());
//! let zone = TimeZone::of("UTC+01:00").unwrap();
//! let month = zone.month(clock.now());
//! assert_eq!(month, Month::March);
//!
//! let resolver = DisplayNameResolver::builtin(Locale::english());
//! assert_eq!(resolver.display_name(month).unwrap(), "March");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `clock` | `Clock` implementations, `TimeSource` and `TimeMark` |
//! | `day_of_week` | ISO day-of-week enumeration |
//! | `month` | Month enumeration and month lengths |
//! | `text_style` | Display-name styles and their degradation order |
//! | `locale` | Locale tags and parent chains |
//! | `names` | Name providers and the single-letter fallback table |
//! | `display` | Display-name resolver |
//! | `precision` | Mixed-precision ordering, `Year`, `YearMonth` |
//! | `time_zone` | Fixed-offset time zones |
//! | `config` | TOML resolver configuration |
//! | `error` | Error types |

mod clock;
mod config;
mod day_of_week;
mod display;
mod error;
mod locale;
mod month;
mod names;
mod precision;
mod text_style;
mod time_zone;

pub use clock::{
    Clock, ClockTimeSource, Duration, FixedClock, Instant, ManualClock, OffsetClock, SystemClock,
    TimeMark, TimeSource,
};
pub use config::{ConfigError, DayNamesToml, LocaleNamesToml, MonthNamesToml, ResolverConfig};
pub use day_of_week::DayOfWeek;
pub use display::DisplayNameResolver;
pub use error::{
    CalendarError, Cause, DateTimeArithmeticError, DateTimeFormatError, IllegalTimeZoneError,
    ProviderError,
};
pub use locale::Locale;
pub use month::Month;
pub use names::{BuiltinNames, CalendarName, Layered, LocaleNames, NameProvider, NameTables};
pub use precision::{ArbitraryPrecisionDate, Year, YearMonth, is_leap_year};
pub use text_style::TextStyle;
pub use time_zone::TimeZone;
