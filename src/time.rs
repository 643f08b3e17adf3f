//! Date and sidereal-time routines used by SGP4.
//!
//! Julian dates are carried as a `(jd, fraction)` pair the way Vallado's 2015+
//! code does, so that minute-level offsets from an epoch keep full precision.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::propagation::TWOPI;

const DEG2RAD: f64 = std::f64::consts::PI / 180.0;

/// Julian date of 1949 December 31 00:00 UT, the zero of the SGP4 epoch.
pub const JD_1950_EPOCH: f64 = 2_433_281.5;

pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Greenwich sidereal time (radians, `[0, 2π)`) for a Julian UT1 date.
pub fn gstime(jdut1: f64) -> f64 {
    let tut1 = (jdut1 - 2_451_545.0) / 36_525.0;
    let temp = -6.2e-6 * tut1 * tut1 * tut1
        + 0.093_104 * tut1 * tut1
        + (876_600.0 * 3600.0 + 8_640_184.812_866) * tut1
        + 67_310.548_41;
    // 360/86400 = 1/240, seconds to degrees, then degrees to radians
    let temp = (temp * DEG2RAD / 240.0) % TWOPI;
    if temp < 0.0 {
        temp + TWOPI
    } else {
        temp
    }
}

/// Legacy sidereal time at an SGP4 epoch (days since 1950), counted from
/// 0 Jan 1970 as in the original AFSPC code.
pub fn gstime_afspc(epoch: f64) -> f64 {
    let ts70 = epoch - 7305.0;
    let ds70 = (ts70 + 1.0e-8).floor();
    let tfrac = ts70 - ds70;
    let c1 = 1.720_279_169_407_036_39e-2_f64;
    let thgr70 = 1.732_134_385_650_937_4_f64;
    let fk5r = 5.075_514_194_322_694_42e-15_f64;
    let c1p2p = c1 + TWOPI;
    let gsto = (thgr70 + c1 * ds70 + c1p2p * tfrac + ts70 * ts70 * fk5r) % TWOPI;
    if gsto < 0.0 {
        gsto + TWOPI
    } else {
        gsto
    }
}

/// Julian date as `(jd, fraction)`.
///
/// `jd` is the date at the midnight starting the calendar day (always ends
/// in `.5`), `fraction` the time of day. A fraction spilling past a whole
/// day is folded back into `jd`.
pub fn jday(year: i32, mon: i32, day: i32, hr: i32, minute: i32, sec: f64) -> (f64, f64) {
    let year_f = year as f64;
    let mon_f = mon as f64;

    let mut jd = 367.0 * year_f - (7.0 * (year_f + ((mon_f + 9.0) / 12.0).floor()) * 0.25).floor()
        + (275.0 * mon_f / 9.0).floor()
        + day as f64
        + 1_721_013.5;
    let mut fr = (sec + minute as f64 * 60.0 + hr as f64 * 3600.0) / 86400.0;

    if fr.abs() > 1.0 {
        let whole = fr.floor();
        jd += whole;
        fr -= whole;
    }

    (jd, fr)
}

/// Convert a fractional day of year into `(month, day, hour, minute, second)`.
///
/// `days` is 1.0 at the start of January 1.
pub fn days2mdhms(year: i32, days: f64) -> (i32, i32, i32, i32, f64) {
    let dayofyr = days.floor() as i32;
    let is_leap = year % 4 == 0;
    let (mon, day) = day_of_year_to_month_day(dayofyr, is_leap);

    let temp = (days - dayofyr as f64) * 24.0;
    let hr = temp.floor();
    let temp = (temp - hr) * 60.0;
    let minute = temp.floor();
    let sec = (temp - minute) * 60.0;

    (mon, day, hr as i32, minute as i32, sec)
}

/// Turn a 1-based day of year into `(month, day)`.
pub fn day_of_year_to_month_day(day_of_year: i32, is_leap: bool) -> (i32, i32) {
    let mut lmonth = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if is_leap {
        lmonth[1] = 29;
    }

    let mut month = 0;
    let mut elapsed = 0;
    while month < 11 && day_of_year > elapsed + lmonth[month] {
        elapsed += lmonth[month];
        month += 1;
    }

    (month as i32 + 1, day_of_year - elapsed)
}

/// Inverse of [`jday`]: `(year, month, day, hour, minute, second)`.
pub fn invjday(jd: f64, jdfrac: f64) -> (i32, i32, i32, i32, i32, f64) {
    let mut jd = jd;
    let mut jdfrac = jdfrac;

    if jdfrac.abs() >= 1.0 {
        jd += jdfrac.floor();
        jdfrac -= jdfrac.floor();
    }

    // move any fraction of a day hiding in jd over to jdfrac
    let dt = jd - jd.floor() - 0.5;
    if dt.abs() > 0.000_000_01 {
        jd -= dt;
        jdfrac += dt;
    }

    let temp = jd - 2_415_019.5;
    let tu = temp / 365.25;
    let mut year = 1900 + tu.floor() as i32;
    let mut leapyrs = ((year - 1901) as f64 * 0.25).floor();
    let mut days = (temp - ((year - 1900) as f64 * 365.0 + leapyrs)).floor();

    // beginning of a year
    if days + jdfrac < 1.0 {
        year -= 1;
        leapyrs = ((year - 1901) as f64 * 0.25).floor();
        days = (temp - ((year - 1900) as f64 * 365.0 + leapyrs)).floor();
    }

    let (mon, day, hr, minute, sec) = days2mdhms(year, days + jdfrac);
    (year, mon, day, hr, minute, sec)
}

/// Split Julian date at a fractional day of year, e.g. a TLE epoch.
pub fn jd_from_year_day(year: i32, days: f64) -> (f64, f64) {
    let (jan0, _) = jday(year, 1, 0, 0, 0, 0.0);
    let whole = days.floor();
    (jan0 + whole, days - whole)
}

/// SGP4 epoch (days since 1949 December 31 00:00 UT) for a full year and a
/// fractional day of year.
pub fn epoch_from_year_day(year: i32, days: f64) -> f64 {
    let (jd, fr) = jd_from_year_day(year, days);
    (jd - JD_1950_EPOCH) + fr
}

/// Julian date of a UTC instant as `(jd, fraction)`.
pub fn julian_date(when: &DateTime<Utc>) -> (f64, f64) {
    let sec = when.second() as f64 + when.nanosecond() as f64 * 1.0e-9;
    jday(
        when.year(),
        when.month() as i32,
        when.day() as i32,
        when.hour() as i32,
        when.minute() as i32,
        sec,
    )
}

/// UTC instant for a split Julian date, to the nearest microsecond.
pub fn datetime_from_julian_date(jd: f64, fr: f64) -> Option<DateTime<Utc>> {
    let (year, mon, day, hr, minute, sec) = invjday(jd, fr);
    let micros = (sec * 1.0e6).round() as i64;
    let midnight = Utc
        .with_ymd_and_hms(year, mon as u32, day as u32, 0, 0, 0)
        .single()?;
    Some(
        midnight
            + chrono::Duration::hours(hr as i64)
            + chrono::Duration::minutes(minute as i64)
            + chrono::Duration::microseconds(micros),
    )
}
