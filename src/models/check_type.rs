use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Attendance event kinds accepted by the `check_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckType {
    In,
    Out,
    Away,
}

impl CheckType {
    pub const ALL: [CheckType; 3] = [CheckType::In, CheckType::Out, CheckType::Away];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckType::In => "IN",
            CheckType::Out => "OUT",
            CheckType::Away => "AWAY",
        }
    }

    /// Launcher keyword that triggers this event ("checkin", "checkout", "away")
    pub fn keyword(&self) -> &'static str {
        match self {
            CheckType::In => "checkin",
            CheckType::Out => "checkout",
            CheckType::Away => "away",
        }
    }

    pub fn from_keyword(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.keyword() == s)
    }

    /// Label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            CheckType::In => "출근",
            CheckType::Out => "퇴근",
            CheckType::Away => "자리비움",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_map_to_wire_values() {
        assert_eq!(CheckType::from_keyword("checkin"), Some(CheckType::In));
        assert_eq!(CheckType::from_keyword("checkout").map(|c| c.as_str()), Some("OUT"));
        assert_eq!(CheckType::from_keyword("away").map(|c| c.as_str()), Some("AWAY"));
        assert_eq!(CheckType::from_keyword("CHECKIN"), None);
    }

    #[test]
    fn serializes_uppercase() {
        assert_eq!(serde_json::to_string(&CheckType::Away).unwrap(), "\"AWAY\"");
    }
}
