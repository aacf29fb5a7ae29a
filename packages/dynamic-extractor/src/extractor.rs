//! Turns the model's raw answer into a row outcome.

use crate::patterns::{find_all, pattern_for};
use crate::types::{field_kind::FieldKind, outcome::ExtractionOutcome};

/// Apply the kind's pattern (fixed kinds) or pass the trimmed text through
/// (custom prompts).
pub fn extract_field(kind: &FieldKind, response: &str) -> ExtractionOutcome {
    match pattern_for(kind) {
        Some(regex) => {
            let matches = find_all(regex, response);
            if matches.is_empty() {
                ExtractionOutcome::no_match(kind)
            } else {
                ExtractionOutcome::Found(matches.join(", "))
            }
        }
        None => {
            let answer = response.trim();
            if answer.is_empty() {
                ExtractionOutcome::NoRelevantInformation
            } else {
                ExtractionOutcome::Answer(answer.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_kind_joins_matches() {
        let outcome = extract_field(
            &FieldKind::Email,
            "The emails are info@globex.com and press@globex.com.",
        );
        assert_eq!(
            outcome,
            ExtractionOutcome::Found("info@globex.com, press@globex.com".into())
        );
    }

    #[test]
    fn test_fixed_kind_without_match() {
        let outcome = extract_field(&FieldKind::Email, "I could not find any email address.");
        assert_eq!(outcome.value(), "No email found");
    }

    #[test]
    fn test_custom_trims() {
        let outcome = extract_field(&FieldKind::custom("{company}"), "\n  Founded in 1989.  \n");
        assert_eq!(outcome, ExtractionOutcome::Answer("Founded in 1989.".into()));
    }

    #[test]
    fn test_custom_blank_answer() {
        let outcome = extract_field(&FieldKind::custom("{company}"), "   \n\t");
        assert_eq!(outcome.value(), "No relevant information found");
    }
}
