//! Text patterns used to post-filter model output for the fixed kinds.
//!
//! These are intentionally permissive: the phone pattern in particular
//! accepts plenty of digit runs that are not phone numbers.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::field_kind::FieldKind;

static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap()
});
static RE_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{1,5}\s\w+(?:\s\w+)*,\s\w+(?:\s\w+)*,\s\w+(?:\s\w+)*").unwrap()
});
static RE_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3}?[-.\s]??\(?\d{1,4}?\)?[-.\s]??\d{1,4}[-.\s]??\d{1,9})").unwrap()
});

/// Pattern for a fixed kind; `None` for custom prompts.
pub fn pattern_for(kind: &FieldKind) -> Option<&'static Regex> {
    match kind {
        FieldKind::Email => Some(&*RE_EMAIL),
        FieldKind::Address => Some(&*RE_ADDRESS),
        FieldKind::PhoneNumber => Some(&*RE_PHONE),
        FieldKind::Custom { .. } => None,
    }
}

/// All non-overlapping matches, left to right.
pub fn find_all<'t>(regex: &Regex, text: &'t str) -> Vec<&'t str> {
    regex.find_iter(text).map(|m| m.as_str()).collect()
}
