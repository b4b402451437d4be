// file: src/format/timestamp.rs
// description: date and time rendering for log line prefixes
// reference: https://docs.rs/chrono

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Which instant a logger stamps onto its lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampMode {
    /// The instant the logger was constructed, reused for every line.
    #[default]
    Captured,
    /// The local clock at the moment each line is emitted.
    PerCall,
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// `DD/MM/YYYY`
pub fn format_date(at: &NaiveDateTime) -> String {
    at.format("%d/%m/%Y").to_string()
}

/// `HH:MM:SS`
pub fn format_time(at: &NaiveDateTime) -> String {
    at.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_date_zero_padding() {
        assert_eq!(format_date(&at(2023, 7, 3, 0, 0, 0)), "03/07/2023");
        assert_eq!(format_date(&at(2023, 12, 25, 0, 0, 0)), "25/12/2023");
    }

    #[test]
    fn test_time_zero_padding() {
        assert_eq!(format_time(&at(2023, 7, 3, 9, 5, 0)), "09:05:00");
        assert_eq!(format_time(&at(2023, 7, 3, 23, 59, 59)), "23:59:59");
    }

    #[test]
    fn test_default_mode_is_captured() {
        assert_eq!(TimestampMode::default(), TimestampMode::Captured);
    }
}
