//! Elections: a type code plus a year-month date
//!
//! The data tree stores one election per `<type>/<YYYY-MM>/` directory.

use std::cmp::Ordering;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("static regex"));

/// Election category code (e.g. `TK` for the lower house)
///
/// Any non-empty directory name is a valid type; there is no registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElectionType(String);

impl ElectionType {
    /// Wrap a type code, rejecting blank names
    pub fn new(code: impl Into<String>) -> Result<Self, String> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err("empty election type".to_string());
        }
        Ok(Self(code))
    }

    /// The code as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Year and month of an election (the day is not tracked)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ElectionDate {
    year: i32,
    month: u32,
}

impl ElectionDate {
    /// Build a date from year and month (1-12)
    pub fn new(year: i32, month: u32) -> Result<Self, String> {
        if !(0..=9999).contains(&year) {
            return Err(format!("year {year} out of range"));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|_| Self { year, month })
            .ok_or_else(|| format!("month {month} out of range"))
    }

    /// Parse a `YYYY-MM` string
    pub fn parse(s: &str) -> Result<Self, String> {
        let caps = DATE_RE.captures(s).ok_or_else(|| format!("'{s}' is not YYYY-MM"))?;
        let year = caps[1].parse::<i32>().map_err(|e| e.to_string())?;
        let month = caps[2].parse::<u32>().map_err(|e| e.to_string())?;
        Self::new(year, month)
    }

    /// The year
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// The month (1-12)
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }
}

impl std::fmt::Display for ElectionDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for ElectionDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ElectionDate {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ElectionDate> for String {
    fn from(date: ElectionDate) -> Self {
        date.to_string()
    }
}

/// One election: identity is `(type, date)`
///
/// Ordering is chronological first, then by type, so sorted collections of
/// elections read as a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Election {
    /// Election category
    #[serde(rename = "type")]
    pub kind: ElectionType,
    /// When it was held
    pub date: ElectionDate,
}

impl Election {
    /// Create an election
    #[must_use]
    pub const fn new(kind: ElectionType, date: ElectionDate) -> Self {
        Self { kind, date }
    }
}

impl Ord for Election {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date).then_with(|| self.kind.cmp(&other.kind))
    }
}

impl PartialOrd for Election {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Election {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.date)
    }
}
