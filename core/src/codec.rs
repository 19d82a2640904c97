//! Line codec for the flat-file store, plus JSON rendering.
//!
//! A record is one line: `id|title|range|description|PRIORITY`, where the
//! three text fields are base64 so the delimiter can never collide with
//! field content, whatever the user typed. The range field carries the
//! `DateRange` display text, so an end date survives the 5-field layout.
//! JSON rendering is a separate concern and rides serde_json, which
//! escapes `"` and `\` in string fields.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::DecodeError;
use crate::model::{DateRange, Priority, Task};

const FIELD_COUNT: usize = 5;
const DELIMITER: char = '|';

pub fn encode_line(task: &Task) -> String {
    let range = DateRange {
        start: task.date,
        end: task.end_date,
    };
    format!(
        "{id}{d}{title}{d}{range}{d}{desc}{d}{priority}",
        id = task.id,
        title = STANDARD.encode(&task.title),
        range = STANDARD.encode(range.to_string()),
        desc = STANDARD.encode(&task.description),
        priority = task.priority.as_str(),
        d = DELIMITER,
    )
}

pub fn decode_line(line: &str) -> Result<Task, DecodeError> {
    let parts: Vec<&str> = line.splitn(FIELD_COUNT, DELIMITER).collect();
    if parts.len() < FIELD_COUNT {
        return Err(DecodeError::TruncatedLine(parts.len()));
    }

    let id: u64 = parts[0]
        .parse()
        .map_err(|_| DecodeError::BadId(parts[0].to_string()))?;
    let title = decode_text(parts[1])?;
    let range_text = decode_text(parts[2])?;
    let range =
        DateRange::parse(&range_text).map_err(|_| DecodeError::BadDate(range_text.clone()))?;
    let description = decode_text(parts[3])?;
    let priority =
        Priority::from_name(parts[4]).ok_or_else(|| DecodeError::BadPriority(parts[4].to_string()))?;

    Ok(Task {
        id,
        title,
        description,
        date: range.start,
        end_date: range.end,
        priority,
    })
}

fn decode_text(field: &str) -> Result<String, DecodeError> {
    let bytes = STANDARD
        .decode(field)
        .map_err(|_| DecodeError::BadText(field.to_string()))?;
    String::from_utf8(bytes).map_err(|_| DecodeError::BadText(field.to_string()))
}

pub fn to_json(task: &Task) -> serde_json::Result<String> {
    serde_json::to_string(task)
}

pub fn to_json_array(tasks: &[Task]) -> serde_json::Result<String> {
    serde_json::to_string(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_task() -> Task {
        Task {
            id: 7,
            title: "Study Rust".to_string(),
            description: "Ownership chapter".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 13).unwrap(),
            end_date: None,
            priority: Priority::UrgentImportant,
        }
    }

    #[test]
    fn test_round_trip() {
        let task = sample_task();
        let decoded = decode_line(&encode_line(&task)).unwrap();
        assert_eq!(decoded, task);
    }

    #[test]
    fn test_round_trip_with_end_date() {
        let mut task = sample_task();
        task.end_date = Some(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        let decoded = decode_line(&encode_line(&task)).unwrap();
        assert_eq!(decoded, task);
    }

    #[test]
    fn test_round_trip_hostile_text() {
        // Field content must never collide with the line format
        let mut task = sample_task();
        task.title = "a|b|c\nd".to_string();
        task.description = "URGENT_IMPORTANT|99|\"quoted\"\\".to_string();
        let line = encode_line(&task);
        assert_eq!(line.lines().count(), 1);
        assert_eq!(decode_line(&line).unwrap(), task);
    }

    #[test]
    fn test_re_encode_is_stable() {
        let line = encode_line(&sample_task());
        let decoded = decode_line(&line).unwrap();
        assert_eq!(encode_line(&decoded), line);
    }

    #[test]
    fn test_decode_truncated_line() {
        assert_eq!(
            decode_line("1|dGl0bGU=|MjAyNS0wOC0xMw==|ZGVzYw=="),
            Err(DecodeError::TruncatedLine(4))
        );
        assert!(matches!(
            decode_line(""),
            Err(DecodeError::TruncatedLine(_))
        ));
    }

    #[test]
    fn test_decode_bad_id() {
        let line = encode_line(&sample_task());
        let line = line.replacen('7', "x7", 1);
        assert_eq!(decode_line(&line), Err(DecodeError::BadId("x7".to_string())));
    }

    #[test]
    fn test_decode_bad_base64() {
        let line = format!(
            "1|%%%|{}|{}|URGENT_IMPORTANT",
            STANDARD.encode("2025-08-13"),
            STANDARD.encode("desc")
        );
        assert!(matches!(decode_line(&line), Err(DecodeError::BadText(_))));
    }

    #[test]
    fn test_decode_bad_stored_date() {
        let line = format!(
            "1|{}|{}|{}|URGENT_IMPORTANT",
            STANDARD.encode("title"),
            STANDARD.encode("yesterday"),
            STANDARD.encode("desc")
        );
        assert_eq!(
            decode_line(&line),
            Err(DecodeError::BadDate("yesterday".to_string()))
        );
    }

    #[test]
    fn test_decode_unknown_priority() {
        let line = format!(
            "1|{}|{}|{}|HIGH",
            STANDARD.encode("title"),
            STANDARD.encode("2025-08-13"),
            STANDARD.encode("desc")
        );
        assert_eq!(
            decode_line(&line),
            Err(DecodeError::BadPriority("HIGH".to_string()))
        );
    }

    #[test]
    fn test_json_escapes_quotes_and_backslashes() {
        let mut task = sample_task();
        task.title = r#"say "hi" \ bye"#.to_string();
        let json = to_json(&task).unwrap();
        assert!(json.contains(r#"say \"hi\" \\ bye"#));
        assert!(json.contains("\"priority\":\"URGENT_IMPORTANT\""));
    }

    #[test]
    fn test_json_array() {
        let json = to_json_array(&[sample_task()]).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"title\":\"Study Rust\""));
    }
}
