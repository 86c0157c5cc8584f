//! Pure detection predicates for the built-in column types.
//!
//! Each predicate answers one question: could this single field be stored
//! in the given PostgreSQL type? None of them keep state, so calling one
//! twice with the same input always gives the same answer.

use std::net::IpAddr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};

pub fn is_integer(value: &str) -> bool {
    value.parse::<i32>().is_ok()
}

pub fn is_bigint(value: &str) -> bool {
    value.parse::<i64>().is_ok()
}

pub fn is_real(value: &str) -> bool {
    match value.parse::<f32>() {
        Ok(parsed) => !parsed.is_infinite() || is_infinity_token(value),
        Err(_) => false,
    }
}

pub fn is_double(value: &str) -> bool {
    match value.parse::<f64>() {
        Ok(parsed) => !parsed.is_infinite() || is_infinity_token(value),
        Err(_) => false,
    }
}

// Float parsing saturates to infinity on overflow; only explicit spellings
// should count as infinite.
fn is_infinity_token(value: &str) -> bool {
    let unsigned = value
        .strip_prefix(['+', '-'])
        .unwrap_or(value)
        .to_ascii_lowercase();
    matches!(unsigned.as_str(), "inf" | "infinity")
}

/// Network address whose bits right of the prefix are all zero.
pub fn is_cidr(value: &str) -> bool {
    matches!(parse_network(value), Some((addr, prefix)) if host_bits_zero(addr, prefix))
}

/// Bare address literal, or a network address with host bits set.
pub fn is_inet(value: &str) -> bool {
    if value.parse::<IpAddr>().is_ok() {
        return true;
    }
    matches!(parse_network(value), Some((addr, prefix)) if !host_bits_zero(addr, prefix))
}

fn parse_network(value: &str) -> Option<(IpAddr, u32)> {
    let (address, prefix) = value.split_once('/')?;
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let addr: IpAddr = address.parse().ok()?;
    let prefix: u32 = prefix.parse().ok()?;
    let width = match addr {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    };
    (prefix <= width).then_some((addr, prefix))
}

fn host_bits_zero(addr: IpAddr, prefix: u32) -> bool {
    match addr {
        IpAddr::V4(v4) => {
            let host_mask = u32::MAX.checked_shr(prefix).unwrap_or(0);
            u32::from(v4) & host_mask == 0
        }
        IpAddr::V6(v6) => {
            let host_mask = u128::MAX.checked_shr(prefix).unwrap_or(0);
            u128::from(v6) & host_mask == 0
        }
    }
}

/// Calendar date: parses as a date/time whose time of day is midnight.
pub fn is_date(value: &str) -> bool {
    parse_flexible_datetime(value).is_some_and(|parsed| {
        parsed.hour() == 0 && parsed.minute() == 0 && parsed.second() == 0
    })
}

pub fn is_timestamptz(value: &str) -> bool {
    parse_flexible_datetime(value).is_some()
}

const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%z",
    "%Y-%m-%dT%H:%M%z",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    "%a %b %e %H:%M:%S %Y",
    "%d.%m.%Y %H:%M:%S",
    "%b %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d.%m.%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%d-%b-%Y",
    "%Y%m%d",
];

/// Parses the date/time spellings commonly found in exported data.
///
/// Zoned values are reported in their own offset, so `2024-01-01T00:00:00+05:00`
/// still reads as midnight. Date-only values parse as midnight.
pub fn parse_flexible_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed != value {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_local());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(parsed.naive_local());
    }

    let zoned = zulu_as_offset(strip_zone_name(trimmed));
    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(&zoned, fmt) {
            return Some(parsed.naive_local());
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(parsed);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, fmt) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }
    None
}

// `2006-01-02 15:04:05 +0000 UTC` carries both an offset and a zone
// abbreviation; the offset alone is authoritative.
fn strip_zone_name(value: &str) -> &str {
    let Some((rest, name)) = value.rsplit_once(' ') else {
        return value;
    };
    let is_name = (1..=5).contains(&name.len()) && name.bytes().all(|b| b.is_ascii_uppercase());
    let follows_offset = rest
        .rsplit_once(' ')
        .map_or(rest, |(_, last)| last)
        .strip_prefix(['+', '-'])
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
    if is_name && follows_offset { rest } else { value }
}

fn zulu_as_offset(value: &str) -> String {
    if let Some(stripped) = value.strip_suffix(" UTC") {
        format!("{stripped}+0000")
    } else if let Some(stripped) = value.strip_suffix('Z') {
        format!("{stripped}+0000")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_bounds_follow_storage_width() {
        assert!(is_integer("2147483647"));
        assert!(is_integer("-2147483648"));
        assert!(is_integer("+42"));
        assert!(!is_integer("2147483648"));
        assert!(is_bigint("2147483648"));
        assert!(is_bigint("-9223372036854775808"));
        assert!(!is_bigint("9223372036854775808"));
        assert!(!is_integer(""));
        assert!(!is_integer("1.0"));
    }

    #[test]
    fn float_overflow_is_rejected() {
        assert!(is_real("3.5"));
        assert!(is_real("1e38"));
        assert!(!is_real("1e39"));
        assert!(is_double("1e39"));
        assert!(!is_double("1e400"));
        assert!(is_real("-Infinity"));
        assert!(is_double("NaN"));
        assert!(!is_double("abc"));
    }

    #[test]
    fn cidr_requires_zero_host_bits() {
        assert!(is_cidr("10.0.0.0/8"));
        assert!(is_cidr("192.168.1.0/24"));
        assert!(is_cidr("0.0.0.0/0"));
        assert!(is_cidr("2001:db8::/32"));
        assert!(!is_cidr("10.0.0.1/8"));
        assert!(!is_cidr("10.0.0.0"));
        assert!(!is_cidr("10.0.0.0/33"));
        assert!(!is_cidr("10.0.0.0/+8"));
    }

    #[test]
    fn inet_is_the_complement_of_cidr_for_networks() {
        assert!(is_inet("10.0.0.1"));
        assert!(is_inet("::1"));
        assert!(is_inet("10.0.0.1/8"));
        assert!(!is_inet("10.0.0.0/8"));
        assert!(!is_inet("example.com"));
    }

    #[test]
    fn date_requires_midnight() {
        assert!(is_date("2024-05-06"));
        assert!(is_date("05/06/2024"));
        assert!(is_date("2024-05-06 00:00:00"));
        assert!(is_date("2024-05-06T00:00:00+05:00"));
        assert!(is_date("March 7, 2021"));
        assert!(is_date("20240506"));
        assert!(is_date("5/6/2024 12:00 AM"));
        assert!(is_date("5/6/2024 12:00:00 AM"));
        assert!(is_date("2024-05-06 12:00:00 AM"));
        assert!(is_date("Mon May  6 00:00:00 2024"));
        assert!(is_date("2024-05-06 00:00:00 +0000 UTC"));
        assert!(!is_date("5/6/2024 3:04 PM"));
        assert!(!is_date("2024-05-06 12:00:00 PM"));
        assert!(!is_date("Mon May  6 15:04:05 2024"));
        assert!(!is_date("2024-05-06 14:30:00"));
        assert!(!is_date("hello"));
    }

    #[test]
    fn timestamps_accept_common_spellings() {
        assert!(is_timestamptz("2024-01-01T08:30:00Z"));
        assert!(is_timestamptz("2024-01-01 08:30:00.123"));
        assert!(is_timestamptz("2024-01-01 08:30:00 UTC"));
        assert!(is_timestamptz("Tue, 1 Jul 2003 10:52:37 +0200"));
        assert!(is_timestamptz("2024-01-01"));
        assert!(is_timestamptz("1/2/2024 3:04 PM"));
        assert!(is_timestamptz("1/2/2024 3:04:05 pm"));
        assert!(is_timestamptz("2024-01-02 03:04:05 PM"));
        assert!(is_timestamptz("2024-01-02 03:04 AM"));
        assert!(is_timestamptz("20240102"));
        assert!(is_timestamptz("Mon Jan  2 15:04:05 2006"));
        assert!(is_timestamptz("2006-01-02 15:04:05 +0000 UTC"));
        assert!(is_timestamptz("2006-01-02 15:04:05.123 -0700 MST"));
        assert!(!is_timestamptz("2006-01-02 15:04:05 UTC MST"));
        assert!(!is_timestamptz("20241301"));
        assert!(!is_timestamptz("2024-13-01"));
        assert!(!is_timestamptz("42"));
        assert!(!is_timestamptz(" 2024-01-01"));
    }
}
