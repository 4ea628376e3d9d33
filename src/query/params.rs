//! Query parameters parsed from untyped input.
//!
//! Values stay raw until asked for. Each accessor applies its own fallback policy:
//! `page` and `limit` degrade to defaults, `status` ignores unknown values, and only
//! `season` can reject the request.

use std::ops::RangeInclusive;

use super::QueryError;
use crate::model::Status;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 12;
pub const MAX_LIMIT: u32 = 100;
pub const SEASONS: RangeInclusive<i64> = 1..=11;

/// Raw listing parameters. Empty values are stored as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub name: Option<String>,
    pub status: Option<String>,
    pub season: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl QueryParams {
    /// Builds parameters from key/value pairs. Unknown keys are ignored and the first
    /// occurrence of a repeated key wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "name" => &mut params.name,
                "status" => &mut params.status,
                "season" => &mut params.season,
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            let value = value.into();
            if slot.is_none() && !value.is_empty() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Parses a URL query string (`name=rick&page=2`), percent-decoding values.
    pub fn from_query(query: &str) -> Self {
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    /// Requested page: defaults to 1, never below 1.
    pub fn page(&self) -> u32 {
        match self.page.as_deref().and_then(parse_leading_int) {
            Some(n) if n >= 1 => n.min(u32::MAX as i64) as u32,
            _ => DEFAULT_PAGE,
        }
    }

    /// Effective page size: defaults to 12 when missing, unparseable or zero, otherwise
    /// clamped into `[1, 100]`.
    pub fn limit(&self) -> u32 {
        match self.limit.as_deref().and_then(parse_leading_int) {
            None | Some(0) => DEFAULT_LIMIT,
            Some(n) => n.clamp(1, MAX_LIMIT as i64) as u32,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Status filter; a value outside `{alive, deceased}` means no filter.
    pub fn status(&self) -> Option<Status> {
        self.status.as_deref().and_then(Status::parse)
    }

    /// Season filter, validated against `1..=11`.
    pub fn season(&self) -> Result<Option<i64>, QueryError> {
        let Some(raw) = self.season.as_deref() else {
            return Ok(None);
        };
        match raw.trim().parse::<i64>() {
            Ok(season) if SEASONS.contains(&season) => Ok(Some(season)),
            _ => Err(QueryError::invalid(
                "season",
                format!(
                    "Season must be a number between {} and {}",
                    SEASONS.start(),
                    SEASONS.end()
                ),
            )),
        }
    }
}

/// Reads an optionally signed integer prefix, ignoring leading whitespace and anything
/// after the digits (`"3abc"` is 3, `"2.7"` is 2). Saturates instead of overflowing.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}
