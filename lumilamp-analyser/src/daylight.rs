use lumilamp_api::models::Astronomy;
use time::Time;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::policy::DaylightPolicy;

// WeatherAPI reports sun times as `07:15 AM`.
const SUN_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour repr:12]:[minute] [period]");

pub fn parse_sun_time(value: &str) -> Option<Time> {
    Time::parse(value.trim(), SUN_TIME_FORMAT).ok()
}

/// Night is before sunrise or from sunset on. Falls back to the fixed night
/// window of the policy when either sun time is missing or unparsable.
pub fn is_night(now: Time, astronomy: Option<&Astronomy>, policy: &DaylightPolicy) -> bool {
    let sun_times = astronomy.and_then(|astro| {
        Some((parse_sun_time(&astro.sunrise)?, parse_sun_time(&astro.sunset)?))
    });

    match sun_times {
        Some((sunrise, sunset)) if sunrise < sunset => now < sunrise || now >= sunset,
        _ => now.hour() < policy.night_end_hour || now.hour() >= policy.night_start_hour,
    }
}
