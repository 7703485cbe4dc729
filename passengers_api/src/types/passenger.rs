use serde::{Deserialize, Serialize};

/// A column that is shown as-is. The backend table declares every column
/// nullable, so any JSON value is accepted; missing and `null` both read
/// as no value.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Verbatim(pub Option<serde_json::Value>);

impl Verbatim {
    pub fn value(&self) -> Option<&serde_json::Value> {
        self.0.as_ref()
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.value().and_then(serde_json::Value::as_str)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.value().and_then(serde_json::Value::as_f64)
    }
}

impl From<serde_json::Value> for Verbatim {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self(None),
            other => Self(Some(other)),
        }
    }
}

/// One row of the `passengers` table as served by the backend.
///
/// Only `Age` and `Survived` are interpreted; the other display columns
/// are carried through untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PassengerRecord {
    #[serde(rename = "PassengerId", default)]
    pub passenger_id: Verbatim,

    #[serde(rename = "Name", default)]
    pub name: Verbatim,

    #[serde(rename = "Sex", default)]
    pub sex: Verbatim,

    #[serde(rename = "Age", default)]
    pub age: Verbatim,

    #[serde(rename = "Survived", default)]
    pub survived: Verbatim,

    #[serde(rename = "Pclass", default)]
    pub pclass: Verbatim,

    #[serde(rename = "Fare", default)]
    pub fare: Verbatim,

    #[serde(rename = "SibSp", default)]
    pub sib_sp: Option<i64>,

    #[serde(rename = "Parch", default)]
    pub parch: Option<i64>,

    #[serde(rename = "Ticket", default)]
    pub ticket: Option<String>,

    #[serde(rename = "Cabin", default)]
    pub cabin: Option<String>,

    #[serde(rename = "Embarked", default)]
    pub embarked: Option<String>,
}

impl PassengerRecord {
    /// Only a numeric `1` counts as survived.
    pub fn survived(&self) -> bool {
        self.survived.as_f64() == Some(1.0)
    }
}
