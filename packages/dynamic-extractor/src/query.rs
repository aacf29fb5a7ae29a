//! Search query and model instruction construction.
//!
//! Everything here is pure: the same entry, column, and kind always yield
//! the same query and instruction.

use crate::types::field_kind::FieldKind;

/// Token in a custom template that is replaced by the row's entry.
pub const PLACEHOLDER: &str = "{company}";

const CUSTOM_INSTRUCTION: &str = "Extract the requested information accurately based on the query. \
Ensure the output is clear, relevant, and practical.";

/// A search query and the system instruction for the model call that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    pub query: String,
    pub instruction: String,
}

/// Build the query and instruction for one entry.
///
/// Returns `None` for a custom kind whose template is blank; callers map
/// that to the no-results outcome.
pub fn build_query(entry: &str, column: &str, kind: &FieldKind) -> Option<PreparedQuery> {
    match kind {
        FieldKind::Custom { template } => {
            if template.trim().is_empty() {
                return None;
            }
            Some(PreparedQuery {
                query: template.replace(PLACEHOLDER, entry),
                instruction: CUSTOM_INSTRUCTION.to_string(),
            })
        }
        fixed => Some(PreparedQuery {
            query: format!(
                "{} of {} {}",
                capitalize(fixed.label()),
                entry,
                capitalize(column)
            ),
            instruction: fixed_instruction(fixed.label()),
        }),
    }
}

fn fixed_instruction(label: &str) -> String {
    format!(
        "Extract only the valid and specific {label}s from the provided JSON search results. \
         Exclude generic patterns, placeholder formats, or incomplete entries. \
         Ensure the extracted {label}s are accurate, unique, and suitable for practical use."
    )
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_kind_query() {
        let prepared = build_query("Acme Corp", "company NAME", &FieldKind::PhoneNumber).unwrap();
        assert_eq!(prepared.query, "Phone number of Acme Corp Company name");
        assert!(prepared.instruction.contains("specific phone numbers"));
        assert!(prepared.instruction.contains("placeholder formats"));
    }

    #[test]
    fn test_entry_is_not_recased() {
        let prepared = build_query("ACME corp", "Company", &FieldKind::Email).unwrap();
        assert_eq!(prepared.query, "Email of ACME corp Company");
    }

    #[test]
    fn test_custom_substitutes_every_placeholder() {
        let kind = FieldKind::custom("Who founded {company}? When was {company} founded?");
        let prepared = build_query("Globex", "Company", &kind).unwrap();
        assert_eq!(
            prepared.query,
            "Who founded Globex? When was Globex founded?"
        );
        assert_eq!(prepared.instruction, CUSTOM_INSTRUCTION);
    }

    #[test]
    fn test_custom_without_placeholder_is_verbatim() {
        let kind = FieldKind::custom("Best pizza in Chicago");
        let prepared = build_query("Globex", "Company", &kind).unwrap();
        assert_eq!(prepared.query, "Best pizza in Chicago");
    }

    #[test]
    fn test_blank_custom_template_builds_nothing() {
        assert!(build_query("Globex", "Company", &FieldKind::custom("")).is_none());
        assert!(build_query("Globex", "Company", &FieldKind::custom("  \n")).is_none());
    }

    #[test]
    fn test_deterministic() {
        let a = build_query("Acme", "Company", &FieldKind::Address);
        let b = build_query("Acme", "Company", &FieldKind::Address);
        assert_eq!(a, b);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("email"), "Email");
        assert_eq!(capitalize("ÉCOLE"), "École");
    }
}
