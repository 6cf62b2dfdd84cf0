//! Answer collection.
//!
//! Walks a template's placeholders and asks for one answer per blank that needs one. The
//! resulting [`AnswerMap`] is keyed the same way [`crate::fill`] looks answers up.

use std::collections::HashMap;

use log::info;

use crate::Placeholder;

/// Answers supplied for a story, keyed by numbered id or by `unnumbered_<n>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerMap {
    answers: HashMap<String, String>,
}

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key under which the `index`th anonymous blank (zero-based) is stored.
    pub fn unnumbered_key(index: usize) -> String {
        format!("unnumbered_{index}")
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.answers.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.answers.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, answer: impl Into<String>) {
        self.answers.insert(key.into(), answer.into());
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AnswerMap::new();
        for (key, answer) in iter {
            map.insert(key, answer);
        }
        map
    }
}

/// Returns "an" if `label` starts with a vowel, "a" otherwise.
pub fn article(label: &str) -> &'static str {
    match label.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Prompt text shown when asking for a blank with the given label.
pub fn prompt_text(label: &str) -> String {
    format!("Enter {} {label}: ", article(label))
}

/// Ask for an answer to each placeholder that needs one and collect the results.
///
/// A numbered blank is asked for only the first time its id appears; back-references are never
/// asked for. Every anonymous blank is asked for, stored under [`AnswerMap::unnumbered_key`] with
/// a counter that starts at zero for each call.
///
/// # Errors
/// Returns the first error produced by `ask`; answers gathered so far are discarded.
pub fn collect<F, E>(placeholders: &[Placeholder], mut ask: F) -> Result<AnswerMap, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    let mut answers = AnswerMap::new();
    let mut unnumbered_idx = 0;
    for placeholder in placeholders {
        let Some(label) = placeholder.label() else {
            continue;
        };
        let key = match placeholder {
            Placeholder::Numbered { id, .. } if answers.contains_key(id) => continue,
            Placeholder::Numbered { id, .. } => id.clone(),
            _ => {
                unnumbered_idx += 1;
                AnswerMap::unnumbered_key(unnumbered_idx - 1)
            },
        };
        let answer = ask(&prompt_text(label))?;
        answers.insert(key, answer);
    }
    info!(
        "collected {} answers for {} placeholders",
        answers.len(),
        placeholders.len()
    );
    Ok(answers)
}
