//! Name command: resolve one month or weekday display name.

use almanac_calendar::{CalendarName, DayOfWeek, Month};
use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::cli::{NameArgs, NameKind};
use crate::config::AlmanacConfig;

/// Run the name command.
pub fn run(args: NameArgs, config: &AlmanacConfig) -> Result<()> {
    let _cmd = info_span!("name").entered();
    let value: CalendarName = match args.kind {
        NameKind::Month => Month::from_number(args.number)?.into(),
        NameKind::Day => DayOfWeek::from_iso_day_number(args.number)?.into(),
    };

    let resolver = config.resolver(args.locale.as_deref())?;
    info!(value = %value, style = %args.style, locale = %resolver.locale(), "resolving name");
    let name = resolver
        .display_name_with(value, args.style, resolver.locale())
        .with_context(|| format!("failed to name {value}"))?;

    println!("{name}");
    Ok(())
}
