//! Date/time token resolver.
//!
//! # Responsibility
//! - Replace `{[D|NAME]}` tokens with values from one clock snapshot.
//! - Keep the TiddlyWiki DateFormat name set stable for authored templates.
//!
//! # Invariants
//! - The clock is sampled exactly once per `resolve` call.
//! - Names in the unsupported set render as empty string, never as an error.
//! - Unrecognized names pass through untouched.

use chrono::{DateTime, Datelike, Local, Timelike};

/// One recognized date-token name.
///
/// The week-year, raw-offset and timezone names intentionally render empty:
/// existing templates rely on them disappearing rather than erroring, and
/// inventing values would change document content under authored templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateToken {
    WeekdayFull,
    WeekdayShort,
    Day,
    DayPadded,
    IsoWeek,
    IsoWeekPadded,
    MonthFull,
    MonthShort,
    Month,
    MonthPadded,
    Year,
    YearShort,
    WeekYear,
    WeekYearShort,
    Hour,
    HourPadded,
    Hour12,
    Hour12Padded,
    Minute,
    MinutePadded,
    Second,
    SecondPadded,
    AmLower,
    PmLower,
    AmUpper,
    PmUpper,
    OffsetRaw,
    OffsetRawPadded,
    TimezoneDesignator,
    UtcMarker,
}

impl DateToken {
    /// Every recognized name, in template-author documentation order.
    pub const ALL: &'static [DateToken] = &[
        Self::WeekdayFull,
        Self::WeekdayShort,
        Self::Day,
        Self::DayPadded,
        Self::IsoWeek,
        Self::IsoWeekPadded,
        Self::MonthFull,
        Self::MonthShort,
        Self::Month,
        Self::MonthPadded,
        Self::Year,
        Self::YearShort,
        Self::WeekYear,
        Self::WeekYearShort,
        Self::Hour,
        Self::HourPadded,
        Self::Hour12,
        Self::Hour12Padded,
        Self::Minute,
        Self::MinutePadded,
        Self::Second,
        Self::SecondPadded,
        Self::AmLower,
        Self::PmLower,
        Self::AmUpper,
        Self::PmUpper,
        Self::OffsetRaw,
        Self::OffsetRawPadded,
        Self::TimezoneDesignator,
        Self::UtcMarker,
    ];

    /// Stable template name as it appears between `{[D|` and `]}`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WeekdayFull => "DDD",
            Self::WeekdayShort => "ddd",
            Self::Day => "DD",
            Self::DayPadded => "0DD",
            Self::IsoWeek => "WW",
            Self::IsoWeekPadded => "0WW",
            Self::MonthFull => "MMM",
            Self::MonthShort => "mmm",
            Self::Month => "MM",
            Self::MonthPadded => "0MM",
            Self::Year => "YYYY",
            Self::YearShort => "YY",
            Self::WeekYear => "wYYYY",
            Self::WeekYearShort => "wYY",
            Self::Hour => "hh",
            Self::HourPadded => "0hh",
            Self::Hour12 => "hh12",
            Self::Hour12Padded => "0hh12",
            Self::Minute => "mm",
            Self::MinutePadded => "0mm",
            Self::Second => "ss",
            Self::SecondPadded => "0ss",
            Self::AmLower => "am",
            Self::PmLower => "pm",
            Self::AmUpper => "AM",
            Self::PmUpper => "PM",
            Self::OffsetRaw => "XXX",
            Self::OffsetRawPadded => "0XXX",
            Self::TimezoneDesignator => "TZD",
            Self::UtcMarker => "[UTC]",
        }
    }

    /// Whether this name belongs to the designated empty-output set.
    pub fn renders_empty(self) -> bool {
        matches!(
            self,
            Self::WeekYear
                | Self::WeekYearShort
                | Self::OffsetRaw
                | Self::OffsetRawPadded
                | Self::TimezoneDesignator
                | Self::UtcMarker
        )
    }

    /// Renders this name against one clock snapshot.
    pub fn render(self, now: &DateTime<Local>) -> String {
        match self {
            Self::WeekdayFull => now.format("%A").to_string(),
            Self::WeekdayShort => now.format("%a").to_string(),
            Self::Day => now.day().to_string(),
            Self::DayPadded => format!("{:02}", now.day()),
            Self::IsoWeek => now.iso_week().week().to_string(),
            Self::IsoWeekPadded => format!("{:02}", now.iso_week().week()),
            Self::MonthFull => now.format("%B").to_string(),
            Self::MonthShort => now.format("%b").to_string(),
            Self::Month => now.month().to_string(),
            Self::MonthPadded => format!("{:02}", now.month()),
            Self::Year => now.year().to_string(),
            Self::YearShort => format!("{:02}", now.year().rem_euclid(100)),
            Self::Hour => now.hour().to_string(),
            Self::HourPadded => format!("{:02}", now.hour()),
            Self::Hour12 => now.hour12().1.to_string(),
            Self::Hour12Padded => format!("{:02}", now.hour12().1),
            Self::Minute => now.minute().to_string(),
            Self::MinutePadded => format!("{:02}", now.minute()),
            Self::Second => now.second().to_string(),
            Self::SecondPadded => format!("{:02}", now.second()),
            Self::AmLower | Self::PmLower => ampm(now, "am", "pm"),
            Self::AmUpper | Self::PmUpper => ampm(now, "AM", "PM"),
            Self::WeekYear
            | Self::WeekYearShort
            | Self::OffsetRaw
            | Self::OffsetRawPadded
            | Self::TimezoneDesignator
            | Self::UtcMarker => String::new(),
        }
    }

    /// Full delimited token as it appears in templates.
    pub fn token(self) -> String {
        format!("{{[D|{}]}}", self.as_str())
    }
}

fn ampm(now: &DateTime<Local>, am: &str, pm: &str) -> String {
    if now.hour12().0 { pm } else { am }.to_string()
}

/// Replaces every recognized date token in `text` with the current moment.
pub fn resolve(text: &str) -> String {
    resolve_at(text, &Local::now())
}

/// Replaces every recognized date token against a caller-supplied snapshot.
pub fn resolve_at(text: &str, now: &DateTime<Local>) -> String {
    let mut out = text.to_string();
    for token in DateToken::ALL {
        let needle = token.token();
        if out.contains(&needle) {
            out = out.replace(&needle, &token.render(now));
        }
    }
    out
}
