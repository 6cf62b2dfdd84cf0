//! Substitution of collected answers back into a template.

use log::debug;
use regex::Captures;

use crate::placeholder::PLACEHOLDER_RE;
use crate::{AnswerMap, Placeholder};

/// Replace every placeholder in `template` with its answer.
///
/// The template is rescanned with the same pattern used by [`crate::extract`], and anonymous
/// blanks are numbered again from zero in order of appearance, so keys line up with what
/// [`crate::collect`] produced for the same template. A placeholder with no answer is left
/// exactly as written, hint included.
pub fn fill(template: &str, answers: &AnswerMap) -> String {
    let mut unnumbered_idx = 0;
    let mut missing = 0;
    let filled = PLACEHOLDER_RE.replace_all(template, |caps: &Captures<'_>| {
        let key = match Placeholder::from_captures(caps) {
            Some(Placeholder::Numbered { id, .. } | Placeholder::NumberedRef { id }) => id,
            Some(Placeholder::Unnumbered { .. }) => {
                let key = AnswerMap::unnumbered_key(unnumbered_idx);
                unnumbered_idx += 1;
                key
            },
            None => return caps[0].to_string(),
        };
        answers.get(&key).map_or_else(
            || {
                missing += 1;
                caps[0].to_string()
            },
            str::to_string,
        )
    });
    if missing > 0 {
        debug!("{missing} placeholders left unfilled");
    }
    filled.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> AnswerMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn fills_the_fox_story() {
        let story = "The [quick] {1:animal} jumped over the {2:adjective} {1}.";
        let filled = fill(story, &answers(&[("1", "fox"), ("2", "lazy")]));
        assert_eq!(filled, "The fox jumped over the lazy fox.");
    }

    #[test]
    fn plain_text_is_unchanged() {
        let text = "No blanks here, just [brackets] and {braces with spaces}.";
        assert_eq!(fill(text, &AnswerMap::new()), text);
    }

    #[test]
    fn unknown_reference_stays_literal() {
        assert_eq!(fill("Lucky number {7}!", &AnswerMap::new()), "Lucky number {7}!");
    }

    #[test]
    fn missing_answer_keeps_hint_text() {
        assert_eq!(fill("[shiny]{noun}", &AnswerMap::new()), "[shiny]{noun}");
    }

    #[test]
    fn unnumbered_counter_advances_past_missing_answers() {
        let filled = fill("{a} {b} {c}", &answers(&[("unnumbered_0", "x"), ("unnumbered_2", "z")]));
        assert_eq!(filled, "x {b} z");
    }

    #[test]
    fn each_fill_starts_counting_at_zero() {
        let map = answers(&[("unnumbered_0", "first")]);
        assert_eq!(fill("{noun}", &map), "first");
        assert_eq!(fill("{noun}", &map), "first");
    }
}
