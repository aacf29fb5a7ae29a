//! The category of information to extract for each row.

use std::fmt;

/// Column label used for custom-prompt results.
pub const CUSTOM_RESULT_LABEL: &str = "result";

/// What to extract for each entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Address,
    PhoneNumber,
    /// Free-form prompt; `{company}` in the template is replaced by the entry.
    Custom { template: String },
}

impl FieldKind {
    /// The fixed kinds, in menu order.
    pub fn fixed() -> [FieldKind; 3] {
        [FieldKind::Email, FieldKind::Address, FieldKind::PhoneNumber]
    }

    pub fn custom(template: impl Into<String>) -> Self {
        FieldKind::Custom {
            template: template.into(),
        }
    }

    /// Human label used in queries, instructions, and sentinels.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Address => "address",
            FieldKind::PhoneNumber => "phone number",
            FieldKind::Custom { .. } => "custom",
        }
    }

    /// Header of the value column in the result table.
    pub fn column_label(&self) -> &'static str {
        match self {
            FieldKind::Custom { .. } => CUSTOM_RESULT_LABEL,
            other => other.label(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, FieldKind::Custom { .. })
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(FieldKind::PhoneNumber.label(), "phone number");
        assert_eq!(FieldKind::PhoneNumber.column_label(), "phone number");
        assert_eq!(FieldKind::custom("x").column_label(), "result");
    }

    #[test]
    fn test_fixed_excludes_custom() {
        assert!(FieldKind::fixed().iter().all(|k| !k.is_custom()));
    }
}
