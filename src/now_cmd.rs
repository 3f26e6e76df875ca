//! Now command: print the current local date-time and its calendar names.

use almanac_calendar::{Clock, SystemClock, TimeSource};
use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::{debug, info, info_span};

use crate::cli::NowArgs;
use crate::config::AlmanacConfig;

/// Run the now command against the system clock.
pub fn run(args: NowArgs, config: &AlmanacConfig) -> Result<()> {
    let _cmd = info_span!("now").entered();
    let clock = SystemClock;
    let mark = clock.as_time_source().mark_now();

    let zone = config.time_zone(args.zone.as_deref())?;
    let resolver = config.resolver(args.locale.as_deref())?;
    info!(zone = %zone, locale = %resolver.locale(), "resolving current date");

    let instant = mark.instant();
    let local = zone.to_local(instant);
    let weekday = zone.day_of_week(instant);
    let month = zone.month(instant);

    let weekday_name = resolver
        .display_name(weekday)
        .with_context(|| format!("failed to name {weekday}"))?;
    let month_name = resolver
        .display_name(month)
        .with_context(|| format!("failed to name {month}"))?;

    println!("{}  ({zone})", local.format("%Y-%m-%d %H:%M:%S"));
    println!(
        "{weekday_name} (ISO day {}), {month_name} (month {}), day {} of year",
        weekday.iso_day_number(),
        month.number(),
        local.ordinal()
    );
    debug!(elapsed = %mark.elapsed_now(), "now command finished");
    Ok(())
}
