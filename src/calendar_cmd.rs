//! Calendar command: list every month and weekday name of a locale.

use almanac_calendar::{DayOfWeek, Month};
use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::cli::CalendarArgs;
use crate::config::AlmanacConfig;

/// Run the calendar command.
pub fn run(args: CalendarArgs, config: &AlmanacConfig) -> Result<()> {
    let _cmd = info_span!("calendar").entered();
    let resolver = config.resolver(args.locale.as_deref())?;
    let locale = resolver.locale().clone();
    info!(locale = %locale, style = %args.style, "listing names");

    println!("Months ({locale}, {}):", args.style);
    for month in Month::ALL {
        let name = resolver
            .display_name_with(month, args.style, &locale)
            .with_context(|| format!("failed to name {month}"))?;
        println!("  {:>2}  {name}", month.number());
    }

    println!("Days of week ({locale}, {}):", args.style);
    for day in DayOfWeek::ALL {
        let name = resolver
            .display_name_with(day, args.style, &locale)
            .with_context(|| format!("failed to name {day}"))?;
        println!("  {:>2}  {name}", day.iso_day_number());
    }
    Ok(())
}
