use chrono::NaiveDate;

use crate::consts::DATE_FORMAT;
use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    // Try YYYYMMDD
    if s.len() == 8 {
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d") {
            return Ok(d);
        }
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dashed_form() {
        let d = parse_date("2024-06-01").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn parses_compact_form() {
        let d = parse_date("20240601").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date("abc").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("").is_err());
    }
}
