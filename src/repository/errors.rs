use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            RepositoryError::Network(err.to_string())
        } else if err.is_decode() {
            RepositoryError::Unexpected(format!("Malformed response body: {err}"))
        } else {
            RepositoryError::Unexpected(err.to_string())
        }
    }
}

/// Flattens a validation body into a single `; `-joined message.
///
/// The backend answers 400 with a map of field name to list of messages
/// (occasionally a plain string, as with `detail`). Only the messages are
/// kept, in the order the fields appear.
#[must_use]
pub fn flatten_validation(body: &serde_json::Value) -> String {
    match body {
        serde_json::Value::Object(map) => {
            let mut messages = Vec::new();
            for value in map.values() {
                match value {
                    serde_json::Value::Array(items) => {
                        messages.extend(items.iter().filter_map(|v| v.as_str().map(String::from)));
                    }
                    serde_json::Value::String(s) => messages.push(s.clone()),
                    other => messages.push(other.to_string()),
                }
            }
            messages.join("; ")
        }
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_errors_are_joined_in_order() {
        let body = json!({
            "email": ["customer with this email already exists."],
            "first_name": ["This field may not be blank.", "Too short."]
        });

        assert_eq!(
            flatten_validation(&body),
            "customer with this email already exists.; This field may not be blank.; Too short."
        );
    }

    #[test]
    fn detail_string_passes_through() {
        let body = json!({"detail": "Invalid page."});
        assert_eq!(flatten_validation(&body), "Invalid page.");
    }

    #[test]
    fn server_error_display_includes_status() {
        let err = RepositoryError::Server {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (502): Bad Gateway");
    }
}
