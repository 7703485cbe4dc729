//! Localized display strings for the passenger table.

use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    ZhTw,
    En,
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh-tw" | "zh_tw" | "zh" | "tw" => Ok(Self::ZhTw),
            "en" | "en-us" | "en_us" => Ok(Self::En),
            other => Err(Error::UnknownLanguage(other.to_string())),
        }
    }
}

/// Every user-facing string the table can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Shown in the Age column when the record has no age.
    pub age_placeholder: String,
    /// Shown in any other column whose value is missing or `null`.
    pub missing_value: String,
    pub survived_yes: String,
    pub survived_no: String,
    /// Body of the single placeholder row for an empty payload.
    pub no_data: String,
    /// Prefix of the error row; the failure detail follows after `": "`.
    pub load_failed: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self::zh_tw()
    }
}

impl Labels {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::ZhTw => Self::zh_tw(),
            Language::En => Self::en(),
        }
    }

    pub fn zh_tw() -> Self {
        Self {
            age_placeholder: "N/A".to_string(),
            missing_value: "-".to_string(),
            survived_yes: "是".to_string(),
            survived_no: "否".to_string(),
            no_data: "沒有找到乘客資料。".to_string(),
            load_failed: "載入資料失敗".to_string(),
        }
    }

    pub fn en() -> Self {
        Self {
            age_placeholder: "N/A".to_string(),
            missing_value: "-".to_string(),
            survived_yes: "Yes".to_string(),
            survived_no: "No".to_string(),
            no_data: "No passenger data found.".to_string(),
            load_failed: "Failed to load data".to_string(),
        }
    }

    pub fn survived(&self, survived: bool) -> &str {
        if survived {
            &self.survived_yes
        } else {
            &self.survived_no
        }
    }

    /// Text of the error row for a failure whose description is `detail`.
    pub fn error_message(&self, detail: &str) -> String {
        format!("{}: {}", self.load_failed, detail)
    }
}
