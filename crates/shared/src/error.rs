use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the directory API on non-2xx responses.
///
/// `detail` is a plain string for missing records and database failures, and a list of
/// field errors when the request body fails validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: Value,
}

impl ApiErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Value::String(detail.into()),
        }
    }

    pub fn summary(&self) -> String {
        match &self.detail {
            Value::String(message) => message.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    let field = item
                        .get("loc")
                        .and_then(Value::as_array)
                        .and_then(|loc| loc.last())
                        .map(|part| part.to_string().trim_matches('"').to_string());
                    let msg = item
                        .get("msg")
                        .and_then(Value::as_str)
                        .unwrap_or("invalid value");
                    match field {
                        Some(field) => format!("{field}: {msg}"),
                        None => msg.to_string(),
                    }
                })
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_string_detail() {
        assert_eq!(
            ApiErrorBody::new("Employee not found").summary(),
            "Employee not found"
        );
    }

    #[test]
    fn summarizes_validation_detail() {
        let body: ApiErrorBody = serde_json::from_value(serde_json::json!({
            "detail": [
                {"loc": ["body", "gender"], "msg": "value is not a valid enumeration member"},
                {"loc": ["body", "dob"], "msg": "invalid datetime format"}
            ]
        }))
        .expect("decode");
        assert_eq!(
            body.summary(),
            "gender: value is not a valid enumeration member; dob: invalid datetime format"
        );
    }
}
