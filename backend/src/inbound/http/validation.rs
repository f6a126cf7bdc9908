//! Request validation for the employee endpoints.
//!
//! Extractor failures (malformed JSON, missing or mistyped fields, bad path
//! ids) and domain validation failures all become `invalid_request` errors
//! whose `details` name the offending `field` and a machine-readable `code`.
//!
//! A path id written as an integer that does not fit the id column is not a
//! malformed request: no such employee can exist, so callers answer 404.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::{EmployeeId, EmployeeValidationError, Error};

/// Validation failure codes reported in error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidType,
    InvalidJson,
    InvalidPath,
}

impl ValidationCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidType => "invalid_type",
            Self::InvalidJson => "invalid_json",
            Self::InvalidPath => "invalid_path",
        }
    }
}

fn validation_error(
    message: impl Into<String>,
    field: Option<&str>,
    code: ValidationCode,
) -> Error {
    let details = field.map_or_else(
        || json!({ "code": code.as_str() }),
        |name| json!({ "field": name, "code": code.as_str() }),
    );
    Error::invalid_request(message).with_details(details)
}

/// Map a domain validation failure to a request error.
pub(crate) fn employee_validation_error(err: &EmployeeValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": err.field(),
        "code": err.code(),
    }))
}

/// Extract the field name from serde's "missing field `x`" message.
fn missing_field_name(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split_once('`').map(|(field, _)| field)
}

/// Map a JSON body extraction failure to a request error.
pub(crate) fn json_payload_error(err: &JsonPayloadError) -> Error {
    match err {
        JsonPayloadError::Deserialize(inner) => {
            let message = inner.to_string();
            if inner.is_data() {
                let field = missing_field_name(&message).map(str::to_owned);
                let code = if field.is_some() {
                    ValidationCode::MissingField
                } else {
                    ValidationCode::InvalidType
                };
                validation_error(message, field.as_deref(), code)
            } else {
                validation_error(message, None, ValidationCode::InvalidJson)
            }
        }
        other => validation_error(other.to_string(), None, ValidationCode::InvalidJson),
    }
}

/// Map a path extraction failure to a request error.
pub(crate) fn path_error(err: &PathError) -> Error {
    validation_error(
        format!("invalid path parameter: {err}"),
        None,
        ValidationCode::InvalidPath,
    )
}

/// Parse an `{id}` path segment.
///
/// Returns `Ok(None)` for integers outside the `i32` range and an
/// `invalid_path` error for anything that is not an integer.
pub(crate) fn parse_employee_id(raw: &str) -> Result<Option<EmployeeId>, Error> {
    if let Ok(value) = raw.parse::<i32>() {
        return Ok(Some(EmployeeId::new(value)));
    }
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit()) {
        debug!(id = raw, "employee id outside the id column range");
        return Ok(None);
    }
    Err(validation_error(
        format!("employee id must be an integer: `{raw}`"),
        Some("id"),
        ValidationCode::InvalidPath,
    ))
}

/// JSON extractor configuration reporting failures as `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req: &HttpRequest| {
        debug!(error = %err, path = req.path(), "rejected JSON payload");
        actix_web::Error::from(json_payload_error(&err))
    })
}

/// Path extractor configuration reporting failures as `invalid_request`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req: &HttpRequest| {
        debug!(error = %err, path = req.path(), "rejected path parameter");
        actix_web::Error::from(path_error(&err))
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::Deserialize;

    use super::*;
    use crate::domain::ErrorCode;

    #[derive(Debug, Deserialize)]
    #[expect(dead_code, reason = "fields exist only to drive deserialisation")]
    struct Body {
        name: String,
        role: String,
    }

    fn deserialize_error(raw: &str) -> JsonPayloadError {
        let err = serde_json::from_str::<Body>(raw).expect_err("payload is invalid");
        JsonPayloadError::Deserialize(err)
    }

    #[rstest]
    #[case(r#"{"name": "Ada"}"#, Some("role"), "missing_field")]
    #[case(r#"{"role": "Dev"}"#, Some("name"), "missing_field")]
    #[case(r#"{"name": 5, "role": "Dev"}"#, None, "invalid_type")]
    #[case(r#"{"name": "Ada", "role": "#, None, "invalid_json")]
    #[case("not json", None, "invalid_json")]
    fn json_errors_report_field_and_code(
        #[case] raw: &str,
        #[case] field: Option<&str>,
        #[case] code: &str,
    ) {
        let error = json_payload_error(&deserialize_error(raw));
        let details = error.details().expect("details present");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(details["code"], code);
        assert_eq!(details.get("field").and_then(|v| v.as_str()), field);
    }

    #[rstest]
    fn content_type_errors_are_invalid_requests() {
        let error = json_payload_error(&JsonPayloadError::ContentType);
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    fn domain_validation_errors_keep_field() {
        let error = employee_validation_error(&EmployeeValidationError::EmptyRole);
        assert_eq!(error.message(), "role must not be empty");
        assert_eq!(
            error.details(),
            Some(&json!({"field": "role", "code": "empty_value"}))
        );
    }

    #[rstest]
    #[case("missing field `role` at line 1 column 15", Some("role"))]
    #[case("invalid type: integer `5`, expected a string", None)]
    fn missing_field_name_parses_serde_messages(
        #[case] message: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(missing_field_name(message), expected);
    }

    #[rstest]
    #[case("7", 7)]
    #[case("0", 0)]
    #[case("-3", -3)]
    #[case("2147483647", i32::MAX)]
    fn integer_ids_in_range_parse(#[case] raw: &str, #[case] expected: i32) {
        let id = parse_employee_id(raw).expect("integer id is accepted");
        assert_eq!(id, Some(EmployeeId::new(expected)));
    }

    #[rstest]
    #[case("3000000000")]
    #[case("2147483648")]
    #[case("-2147483649")]
    #[case("+99999999999999999999999")]
    fn integer_ids_out_of_range_name_no_employee(#[case] raw: &str) {
        let id = parse_employee_id(raw).expect("integer syntax is accepted");
        assert_eq!(id, None);
    }

    #[rstest]
    #[case("abc")]
    #[case("1.5")]
    #[case("12a")]
    #[case("-")]
    #[case("")]
    fn non_integer_ids_are_invalid_paths(#[case] raw: &str) {
        let error = parse_employee_id(raw).expect_err("non-integer id is rejected");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            error.details(),
            Some(&json!({"field": "id", "code": "invalid_path"}))
        );
    }
}
