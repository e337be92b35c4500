//! Approval codes attached to a worktime entry.
//!
//! The server reports one code per side of the day (e.g. `APV_IN/NUL_OUT`),
//! so the display form replaces every known code occurrence and leaves
//! anything else untouched.

/// Value assumed when the record carries no approval field.
pub const DEFAULT_APPROVAL: &str = "NUL_IN/NUL_OUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Requested,
    Denied,
}

impl ApprovalStatus {
    pub const ALL: [ApprovalStatus; 4] = [
        ApprovalStatus::Approved,
        ApprovalStatus::Requested,
        ApprovalStatus::Denied,
        ApprovalStatus::Pending,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "NUL",
            ApprovalStatus::Approved => "APV",
            ApprovalStatus::Requested => "REQ",
            ApprovalStatus::Denied => "DNY",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "대기",
            ApprovalStatus::Approved => "승인",
            ApprovalStatus::Requested => "요청",
            ApprovalStatus::Denied => "반려",
        }
    }
}

/// Replace every known code in `raw` with its label.
pub fn localize(raw: &str) -> String {
    ApprovalStatus::ALL
        .iter()
        .fold(raw.to_string(), |acc, s| acc.replace(s.code(), s.label()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_codes() {
        assert_eq!(localize("APV"), "승인");
        assert_eq!(localize("REQ"), "요청");
        assert_eq!(localize("DNY"), "반려");
        assert_eq!(localize("NUL"), "대기");
    }

    #[test]
    fn compound_and_default_values() {
        assert_eq!(localize("APV_IN/REQ_OUT"), "승인_IN/요청_OUT");
        assert_eq!(localize(DEFAULT_APPROVAL), "대기_IN/대기_OUT");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(localize("XYZ"), "XYZ");
        assert_eq!(localize(""), "");
    }
}
