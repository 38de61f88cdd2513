use serde::Serialize;
use serde_json::Value;

use crate::API_VERSION;
use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope {
    pub ok: bool,
    pub command: String,
    pub version: String,
    pub data: Value,
}

/// Failure document. `operation` names the command that failed, if any.
#[derive(Debug, Clone, Serialize)]
pub struct FailureEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    pub error: ErrorContract,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorContract {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u64>,
    pub recovery_steps: Vec<String>,
}

pub fn success<T>(command: &str, data: T) -> ClientResult<SuccessEnvelope>
where
    T: Serialize,
{
    let json_data = serde_json::to_value(data)
        .map_err(|err| ClientError::internal_serialization(&err.to_string()))?;
    Ok(SuccessEnvelope {
        ok: true,
        command: command.to_string(),
        version: API_VERSION.to_string(),
        data: json_data,
    })
}

pub fn failure_from_error(error: &ClientError) -> FailureEnvelope {
    FailureEnvelope {
        operation: error.operation.clone(),
        error: ErrorContract {
            code: error.code.clone(),
            message: error.message.clone(),
            http_status: error.http_status(),
            recovery_steps: error.recovery_steps.clone(),
        },
        data: error.data.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{failure_from_error, success};
    use crate::error::ClientError;

    #[test]
    fn success_wraps_serialized_data() {
        let envelope = success("payees", json!({"rows": []}));
        assert!(envelope.is_ok());
        if let Ok(envelope) = envelope {
            assert!(envelope.ok);
            assert_eq!(envelope.command, "payees");
            assert_eq!(envelope.data, json!({"rows": []}));
        }
    }

    #[test]
    fn failure_names_operation_and_remote_status() {
        let error = ClientError::remote(429, None, "too_many_requests", "Slow down")
            .in_operation("get_transactions");
        let rendered = serde_json::to_value(failure_from_error(&error));
        assert!(rendered.is_ok());
        if let Ok(value) = rendered {
            assert_eq!(value["operation"], json!("get_transactions"));
            assert_eq!(value["error"]["code"], json!("remote_error"));
            assert_eq!(value["error"]["http_status"], json!(429));
        }
    }

    #[test]
    fn failure_omits_absent_operation_and_status() {
        let rendered = serde_json::to_value(failure_from_error(&ClientError::missing_token()));
        assert!(rendered.is_ok());
        if let Ok(value) = rendered {
            assert!(value.get("operation").is_none());
            assert!(value["error"].get("http_status").is_none());
        }
    }
}
