//! Placeholder grammar and extraction.
//!
//! Story templates mark blanks with braces. Three forms are recognized:
//!
//! - `{3:noun}` defines numbered blank `3` with the label `noun`
//! - `{adjective}` is an anonymous blank, identified only by its position
//! - `{3}` refers back to the answer given for numbered blank `3`
//!
//! Any of them may be preceded by a bracketed hint such as `[quick]`, optionally separated from
//! the brace by spaces or tabs. The hint is consumed along with the blank but carries no meaning.
//! Braces that fit none of the forms are ordinary text.
//!
//! Both [`extract`] and [`crate::fill`] scan with [`PLACEHOLDER_RE`], so they always agree on
//! which spans are blanks and in what order they appear.

use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};
use variantly::Variantly;

lazy_static! {
    /// Matches one placeholder, including any leading hint.
    ///
    /// Capture groups: 1 and 2 are the id and label of a numbered definition, 3 is an
    /// anonymous label, 4 is the id of a back-reference.
    pub static ref PLACEHOLDER_RE: Regex =
        Regex::new(r"(?:\[[^\]]*\][ \t]*)?\{(?:(\d+):([A-Za-z_]+)|([A-Za-z_]+)|(\d+))\}")
            .expect("placeholder pattern is valid");
}

/// A single blank found in a story template.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Placeholder {
    /// `{id:label}`: defines the answer for `id`.
    Numbered { id: String, label: String },
    /// `{label}`: answered on its own every time it appears.
    Unnumbered { label: String },
    /// `{id}`: reuses the answer for `id`.
    NumberedRef { id: String },
}

impl Placeholder {
    /// Build a `Placeholder` from a [`PLACEHOLDER_RE`] match.
    pub fn from_captures(caps: &Captures<'_>) -> Option<Placeholder> {
        if let (Some(id), Some(label)) = (caps.get(1), caps.get(2)) {
            Some(Placeholder::Numbered {
                id: id.as_str().to_string(),
                label: label.as_str().to_string(),
            })
        } else if let Some(label) = caps.get(3) {
            Some(Placeholder::Unnumbered {
                label: label.as_str().to_string(),
            })
        } else {
            caps.get(4).map(|id| Placeholder::NumberedRef {
                id: id.as_str().to_string(),
            })
        }
    }

    /// The label to prompt with, if this placeholder carries one.
    pub fn label(&self) -> Option<&str> {
        match self {
            Placeholder::Numbered { label, .. } | Placeholder::Unnumbered { label } => Some(label),
            Placeholder::NumberedRef { .. } => None,
        }
    }
}

/// Scan `template` and return its placeholders in order of appearance.
///
/// Repeated definitions of the same id are all returned; deciding which ones need an answer is
/// left to [`crate::collect`].
pub fn extract(template: &str) -> Vec<Placeholder> {
    let placeholders: Vec<Placeholder> = PLACEHOLDER_RE
        .captures_iter(template)
        .filter_map(|caps| Placeholder::from_captures(&caps))
        .collect();
    debug!("extracted {} placeholders from template", placeholders.len());
    placeholders
}
