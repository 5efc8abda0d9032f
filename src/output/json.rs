use crate::consts::DATE_FORMAT;
use crate::core::{Mode, RankedEntry};
use crate::output::text::lookup_message;

fn entry_json(entry: &RankedEntry, mode: Mode) -> serde_json::Value {
    let mut value = serde_json::json!({
        "name": entry.name,
        "date": entry.date.format(DATE_FORMAT).to_string(),
        "effective_date": entry.effective_date.format(DATE_FORMAT).to_string(),
        "days_remaining": entry.days_remaining,
    });
    match mode {
        Mode::Birthday => {
            value["age"] = serde_json::json!(entry.age);
        }
        Mode::Event => {
            value["location"] = serde_json::json!(entry.location);
        }
    }
    value
}

pub(crate) fn ranked_json(entries: &[RankedEntry], mode: Mode) -> String {
    let output: Vec<serde_json::Value> = entries
        .iter()
        .map(|entry| entry_json(entry, mode))
        .collect();
    serde_json::to_string_pretty(&output).unwrap()
}

pub(crate) fn lookup_json(entry: &RankedEntry, mode: Mode) -> String {
    let mut value = entry_json(entry, mode);
    value["message"] = serde_json::json!(lookup_message(entry, mode));
    serde_json::to_string_pretty(&value).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn entry() -> RankedEntry {
        RankedEntry {
            name: "Ada".to_string(),
            date: d(1990, 1, 15),
            effective_date: d(2025, 1, 15),
            days_remaining: 228,
            age: Some(35),
            location: None,
        }
    }

    #[test]
    fn ranked_json_is_an_array_of_entries() {
        let json = ranked_json(&[entry()], Mode::Birthday);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["name"].as_str(), Some("Ada"));
        assert_eq!(arr[0]["date"].as_str(), Some("1990-01-15"));
        assert_eq!(arr[0]["effective_date"].as_str(), Some("2025-01-15"));
        assert_eq!(arr[0]["days_remaining"].as_i64(), Some(228));
        assert_eq!(arr[0]["age"].as_i64(), Some(35));
        assert!(arr[0].get("location").is_none());
    }

    #[test]
    fn event_json_carries_location() {
        let mut e = entry();
        e.age = None;
        e.location = Some("Zurich".to_string());
        let json = ranked_json(&[e], Mode::Event);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["location"].as_str(), Some("Zurich"));
        assert!(value[0].get("age").is_none());
    }

    #[test]
    fn lookup_json_includes_message() {
        let json = lookup_json(&entry(), Mode::Birthday);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(
            value["message"]
                .as_str()
                .unwrap()
                .contains("days remaining until Ada's birthday")
        );
    }
}
