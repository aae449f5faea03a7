// libs/cita-cell/src/services/range.rs
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::models::CitaError;

/// Inclusive `[start, end]` instant pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRange<Tz: TimeZone> {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> DateRange<Tz> {
    pub fn contains<Other: TimeZone>(&self, instant: &DateTime<Other>) -> bool {
        *instant >= self.start && *instant <= self.end
    }

    pub fn to_utc(&self) -> DateRange<Utc> {
        DateRange {
            start: self.start.with_timezone(&Utc),
            end: self.end.with_timezone(&Utc),
        }
    }
}

/// Range covering the whole of `month`/`year` in calendar `tz`, as received
/// from the query string.
pub fn range_for_month<Tz: TimeZone>(tz: &Tz, month: &str, year: &str) -> Result<DateRange<Tz>, CitaError> {
    let month: u32 = month
        .trim()
        .parse()
        .map_err(|_| CitaError::InvalidInput(format!("Mes inválido: {}", month)))?;
    let year: i32 = year
        .trim()
        .parse()
        .map_err(|_| CitaError::InvalidInput(format!("Año inválido: {}", year)))?;

    month_range(tz, month, year)
}

/// `month` is 1-based.
pub fn month_range<Tz: TimeZone>(tz: &Tz, month: u32, year: i32) -> Result<DateRange<Tz>, CitaError> {
    if !(1..=12).contains(&month) {
        return Err(CitaError::InvalidInput(format!(
            "El mes debe estar entre 1 y 12, se recibió {}",
            month
        )));
    }

    let first_day = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CitaError::InvalidInput(format!("Año fuera de rango: {}", year)))?;
    let last_day = last_day_of_month(first_day)
        .ok_or_else(|| CitaError::InvalidInput(format!("Año fuera de rango: {}", year)))?;

    Ok(DateRange {
        start: start_of_day(tz, first_day),
        end: end_of_day(tz, last_day),
    })
}

/// Range covering the calendar day that contains `now`, in `now`'s timezone.
pub fn range_for_today<Tz: TimeZone>(now: &DateTime<Tz>) -> DateRange<Tz> {
    let tz = now.timezone();
    let today = now.date_naive();

    DateRange {
        start: start_of_day(&tz, today),
        end: end_of_day(&tz, today),
    }
}

fn last_day_of_month(first_day: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if first_day.month() == 12 {
        (first_day.year() + 1, 1)
    } else {
        (first_day.year(), first_day.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

// Wraps around to 23:59:59.999
fn end_of_day_time() -> NaiveTime {
    NaiveTime::MIN - Duration::milliseconds(1)
}

fn start_of_day<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> DateTime<Tz> {
    resolve_local(tz, day.and_time(NaiveTime::MIN), Duration::hours(1))
}

fn end_of_day<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> DateTime<Tz> {
    resolve_local(tz, day.and_time(end_of_day_time()), Duration::hours(-1))
}

// Walks off a DST gap in `step` increments; ambiguous times resolve to the
// earliest instant for a forward step and the latest for a backward one.
fn resolve_local<Tz: TimeZone>(tz: &Tz, wall: NaiveDateTime, step: Duration) -> DateTime<Tz> {
    let mut candidate = wall;
    loop {
        let resolved = tz.from_local_datetime(&candidate);
        let instant = if step > Duration::zero() {
            resolved.earliest()
        } else {
            resolved.latest()
        };
        if let Some(instant) = instant {
            return instant;
        }
        candidate += step;
    }
}
