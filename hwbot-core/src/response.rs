//! Status API response validation and parsing
//!
//! The status endpoint returns loosely structured JSON; nothing downstream
//! trusts it until it has passed through [`check_response`]. Records picked
//! for notification are then formatted by [`parse_status`].
//!
//! Both functions are pure: same input, same output, no side effects.

use serde_json::Value;
use thiserror::Error;

use crate::domain::homework::HomeworkStatus;

/// Errors produced while validating or parsing a status API payload
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResponseError {
    /// Top-level payload is not a JSON object
    #[error("API response is not a JSON object")]
    NotAnObject,

    /// A required key is absent
    #[error("API response has no `{0}` key")]
    MissingKey(&'static str),

    /// The `homeworks` field is present but not a list
    #[error("`homeworks` is not a list")]
    NotAnArray,

    /// A required field holds a value of the wrong type
    #[error("`{0}` is not a string")]
    NotAString(&'static str),

    /// The record's status code is outside the known set
    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),
}

/// Validates the shape of a status API response
///
/// Checks that the payload is an object carrying a `homeworks` list and
/// returns that list unchanged (it may be empty). Any other shape is an
/// error; nothing is coerced or defaulted.
pub fn check_response(response: &Value) -> Result<&[Value], ResponseError> {
    let object = response.as_object().ok_or(ResponseError::NotAnObject)?;

    let homeworks = object
        .get("homeworks")
        .ok_or(ResponseError::MissingKey("homeworks"))?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(ResponseError::NotAnArray)
}

/// Formats a single submission record into a notification text
///
/// Expects the record to carry `homework_name` and `status` string fields,
/// with `status` being one of the three known codes. An unrecognized code is
/// a hard error, never a silent skip.
pub fn parse_status(record: &Value) -> Result<String, ResponseError> {
    let name = string_field(record, "homework_name")?;
    let code = string_field(record, "status")?;

    let status = HomeworkStatus::from_code(code)
        .ok_or_else(|| ResponseError::UnknownStatus(code.to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}

fn string_field<'a>(record: &'a Value, key: &'static str) -> Result<&'a str, ResponseError> {
    let value = record.get(key).ok_or(ResponseError::MissingKey(key))?;
    value.as_str().ok_or(ResponseError::NotAString(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_response_returns_homeworks() {
        let response = json!({
            "homeworks": [{"homework_name": "proj1", "status": "approved"}],
            "current_date": 1000
        });

        let homeworks = check_response(&response).unwrap();
        assert_eq!(homeworks.len(), 1);
        assert_eq!(homeworks[0]["homework_name"], "proj1");
    }

    #[test]
    fn test_check_response_allows_empty_list() {
        let response = json!({"homeworks": [], "current_date": 2000});
        assert!(check_response(&response).unwrap().is_empty());
    }

    #[test]
    fn test_check_response_rejects_non_object() {
        for response in [json!([1, 2, 3]), json!("text"), json!(42), json!(null)] {
            assert_eq!(check_response(&response), Err(ResponseError::NotAnObject));
        }
    }

    #[test]
    fn test_check_response_rejects_missing_homeworks() {
        let response = json!({"current_date": 1000});
        assert_eq!(
            check_response(&response),
            Err(ResponseError::MissingKey("homeworks"))
        );
    }

    #[test]
    fn test_check_response_rejects_non_list_homeworks() {
        let response = json!({"homeworks": {"homework_name": "x"}});
        assert_eq!(check_response(&response), Err(ResponseError::NotAnArray));
    }

    #[test]
    fn test_parse_status_known_codes() {
        let cases = [
            (
                "approved",
                "Работа проверена: ревьюеру всё понравилось. Ура!",
            ),
            ("reviewing", "Работа взята на проверку ревьюером."),
            ("rejected", "Работа проверена: у ревьюера есть замечания."),
        ];

        for (code, verdict) in cases {
            let record = json!({"homework_name": "proj1", "status": code});
            let text = parse_status(&record).unwrap();
            assert_eq!(
                text,
                format!("Изменился статус проверки работы \"proj1\". {verdict}")
            );
        }
    }

    #[test]
    fn test_parse_status_unknown_code() {
        let record = json!({"homework_name": "x", "status": "unknown_code"});
        assert_eq!(
            parse_status(&record),
            Err(ResponseError::UnknownStatus("unknown_code".to_string()))
        );
    }

    #[test]
    fn test_parse_status_missing_fields() {
        let record = json!({"status": "approved"});
        assert_eq!(
            parse_status(&record),
            Err(ResponseError::MissingKey("homework_name"))
        );

        let record = json!({"homework_name": "proj1"});
        assert_eq!(
            parse_status(&record),
            Err(ResponseError::MissingKey("status"))
        );
    }

    #[test]
    fn test_parse_status_non_string_fields() {
        let record = json!({"homework_name": 42, "status": "approved"});
        assert_eq!(
            parse_status(&record),
            Err(ResponseError::NotAString("homework_name"))
        );

        let record = json!({"homework_name": "proj1", "status": 1});
        assert_eq!(parse_status(&record), Err(ResponseError::NotAString("status")));
    }

    #[test]
    fn test_parse_status_is_idempotent() {
        let record = json!({"homework_name": "proj1", "status": "reviewing"});
        let first = parse_status(&record).unwrap();
        let second = parse_status(&record).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_status_ignores_extra_fields() {
        let record = json!({
            "homework_name": "proj1",
            "status": "approved",
            "reviewer_comment": "nice",
            "id": 123
        });
        assert!(parse_status(&record).is_ok());
    }
}
