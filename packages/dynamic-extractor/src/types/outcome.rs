//! Per-row extraction outcomes.

use std::fmt;

use super::field_kind::FieldKind;

pub const NO_RESULTS: &str = "No results found";
pub const NO_RELEVANT_INFORMATION: &str = "No relevant information found";
const FAILED_PREFIX: &str = "Extraction failed: ";

/// The final value for one row.
///
/// Sentinel variants are normal outcomes, not errors: the row is always
/// present in the result table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// Pattern matches for a fixed kind, joined with `", "`.
    Found(String),
    /// Trimmed model text for a custom prompt.
    Answer(String),
    /// The search returned nothing (or failed), so the model was never asked.
    NoResults,
    /// The model answered but the kind's pattern matched nothing.
    NoMatch { label: String },
    /// The model's answer to a custom prompt was blank.
    NoRelevantInformation,
    /// The model call failed for this row only.
    Failed { reason: String },
}

impl ExtractionOutcome {
    pub fn no_match(kind: &FieldKind) -> Self {
        ExtractionOutcome::NoMatch {
            label: kind.label().to_string(),
        }
    }

    /// The cell value written to the result table.
    pub fn value(&self) -> String {
        self.to_string()
    }

    /// True when the row carries an extracted value rather than a sentinel.
    pub fn is_found(&self) -> bool {
        matches!(self, ExtractionOutcome::Found(_) | ExtractionOutcome::Answer(_))
    }

    /// Recover an outcome from a rendered cell value.
    pub fn from_value(kind: &FieldKind, value: &str) -> Self {
        if value == NO_RESULTS {
            return ExtractionOutcome::NoResults;
        }
        if let Some(reason) = value.strip_prefix(FAILED_PREFIX) {
            return ExtractionOutcome::Failed {
                reason: reason.to_string(),
            };
        }
        if kind.is_custom() {
            if value == NO_RELEVANT_INFORMATION {
                return ExtractionOutcome::NoRelevantInformation;
            }
            return ExtractionOutcome::Answer(value.to_string());
        }
        if value == format!("No {} found", kind.label()) {
            return ExtractionOutcome::no_match(kind);
        }
        ExtractionOutcome::Found(value.to_string())
    }
}

impl fmt::Display for ExtractionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionOutcome::Found(value) | ExtractionOutcome::Answer(value) => {
                f.write_str(value)
            }
            ExtractionOutcome::NoResults => f.write_str(NO_RESULTS),
            ExtractionOutcome::NoMatch { label } => write!(f, "No {} found", label),
            ExtractionOutcome::NoRelevantInformation => f.write_str(NO_RELEVANT_INFORMATION),
            ExtractionOutcome::Failed { reason } => write!(f, "{}{}", FAILED_PREFIX, reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_rendering() {
        assert_eq!(ExtractionOutcome::NoResults.value(), "No results found");
        assert_eq!(
            ExtractionOutcome::no_match(&FieldKind::PhoneNumber).value(),
            "No phone number found"
        );
        assert_eq!(
            ExtractionOutcome::NoRelevantInformation.value(),
            "No relevant information found"
        );
    }

    #[test]
    fn test_from_value_recognises_sentinels() {
        let kind = FieldKind::Email;
        assert_eq!(
            ExtractionOutcome::from_value(&kind, "No email found"),
            ExtractionOutcome::no_match(&kind)
        );
        assert_eq!(
            ExtractionOutcome::from_value(&kind, "a@b.com"),
            ExtractionOutcome::Found("a@b.com".into())
        );
        assert_eq!(
            ExtractionOutcome::from_value(&FieldKind::custom("q"), "Founded in 1999"),
            ExtractionOutcome::Answer("Founded in 1999".into())
        );
    }
}
