use serde::{Deserialize, Serialize};

use super::PassengerRecord;

/// Body of `GET /api/data`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ResponsePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default)]
    pub passengers: Option<Vec<PassengerRecord>>,
}

impl ResponsePayload {
    /// Interprets an already-parsed JSON document. A falsy document
    /// (`null`, `false`, `0`, `""`) is an empty payload rather than an error.
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        if is_falsy(&value) {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
    }

    /// Records in the order the service sent them.
    pub fn records(&self) -> &[PassengerRecord] {
        self.passengers.as_deref().unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

fn is_falsy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(b) => !b,
        serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
        serde_json::Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Error document the service returns alongside a 5xx status.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_documents_are_empty() {
        for doc in ["null", "false", "0", "\"\""] {
            let value: serde_json::Value = serde_json::from_str(doc).unwrap();
            let payload = ResponsePayload::from_json(value).unwrap();
            assert!(payload.is_empty(), "{} should be empty", doc);
        }
    }

    #[test]
    fn null_passengers_is_empty() {
        let value = serde_json::json!({"message": "Data from MySQL", "passengers": null});
        let payload = ResponsePayload::from_json(value).unwrap();
        assert!(payload.is_empty());
        assert_eq!(payload.message.as_deref(), Some("Data from MySQL"));
    }

    #[test]
    fn array_document_is_rejected() {
        let value = serde_json::json!([1, 2, 3]);
        assert!(ResponsePayload::from_json(value).is_err());
    }
}
