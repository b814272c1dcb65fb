//! Tense inference and scaffold markers.
//!
//! Sign gloss carries no verb inflection, so the dominant tense of the input
//! is signalled by a marker sign placed in front of the sequence.

use crate::gloss::tag::{Tag, Token};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tense {
    Future,
    Present,
    Past,
    PresentContinuous,
}

impl Tense {
    /// Tie-break order used unless configured otherwise.
    pub const DEFAULT_PRECEDENCE: [Tense; 4] = [
        Tense::Future,
        Tense::Present,
        Tense::Past,
        Tense::PresentContinuous,
    ];
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tense::Future => "future",
            Tense::Present => "present",
            Tense::Past => "past",
            Tense::PresentContinuous => "present_continuous",
        };
        f.write_str(name)
    }
}

pub const PAST_MARKER: &str = "before";
pub const FUTURE_MARKER: &str = "will";
pub const CONTINUOUS_MARKER: &str = "now";

/// Per-tense token counts over one tagged input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagDistribution {
    pub future: usize,
    pub present: usize,
    pub past: usize,
    pub present_continuous: usize,
}

impl TagDistribution {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut dist = Self::default();
        for token in tokens {
            match token.tag {
                Tag::MD => dist.future += 1,
                Tag::VBZ | Tag::VBP => dist.present += 1,
                Tag::VBG => {
                    dist.present += 1;
                    dist.present_continuous += 1;
                }
                Tag::VBD | Tag::VBN => dist.past += 1,
                _ => {}
            }
        }
        dist
    }

    pub fn count(&self, tense: Tense) -> usize {
        match tense {
            Tense::Future => self.future,
            Tense::Present => self.present,
            Tense::Past => self.past,
            Tense::PresentContinuous => self.present_continuous,
        }
    }

    /// The tense with the highest count; ties go to whichever comes first
    /// in `precedence`.
    pub fn dominant(&self, precedence: &[Tense; 4]) -> Tense {
        let mut best = precedence[0];
        for &tense in &precedence[1..] {
            if self.count(tense) > self.count(best) {
                best = tense;
            }
        }
        best
    }

    /// Marker to prepend for this distribution, if any. `normalized` is
    /// consulted so an explicit "will" is not doubled.
    pub fn marker(&self, precedence: &[Tense; 4], normalized: &[String]) -> Option<&'static str> {
        match self.dominant(precedence) {
            Tense::Past if self.past >= 1 => Some(PAST_MARKER),
            Tense::Future
                if self.future >= 1 && !normalized.iter().any(|w| w == FUTURE_MARKER) =>
            {
                Some(FUTURE_MARKER)
            }
            Tense::Present if self.present_continuous >= 1 => Some(CONTINUOUS_MARKER),
            _ => None,
        }
    }
}

/// Prepends the tense marker (if any) to the normalized sequence and
/// returns the dominant tense alongside the marker that was inserted.
pub fn apply_tense_marker(
    normalized: Vec<String>,
    dist: &TagDistribution,
    precedence: &[Tense; 4],
) -> (Vec<String>, Tense, Option<&'static str>) {
    let tense = dist.dominant(precedence);
    match dist.marker(precedence, &normalized) {
        Some(marker) => {
            let mut words = Vec::with_capacity(normalized.len() + 1);
            words.push(marker.to_string());
            words.extend(normalized);
            (words, tense, Some(marker))
        }
        None => (normalized, tense, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(tags: &[Tag]) -> TagDistribution {
        let tokens: Vec<Token> = tags.iter().map(|t| Token::new("w", *t)).collect();
        TagDistribution::from_tokens(&tokens)
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_counts_by_tag_group() {
        let d = dist(&[Tag::MD, Tag::VBZ, Tag::VBP, Tag::VBG, Tag::VBD, Tag::VBN, Tag::NN]);
        assert_eq!(d.future, 1);
        assert_eq!(d.present, 3);
        assert_eq!(d.past, 2);
        assert_eq!(d.present_continuous, 1);
    }

    #[test]
    fn test_past_marker() {
        let d = dist(&[Tag::PRP, Tag::VBD, Tag::TO, Tag::NN]);
        let (out, tense, marker) =
            apply_tense_marker(words(&["walk", "to", "school"]), &d, &Tense::DEFAULT_PRECEDENCE);
        assert_eq!(tense, Tense::Past);
        assert_eq!(marker, Some("before"));
        assert_eq!(out, words(&["before", "walk", "to", "school"]));
    }

    #[test]
    fn test_future_marker_not_duplicated() {
        let d = dist(&[Tag::PRP, Tag::MD, Tag::VB, Tag::NN]);
        let (out, tense, marker) =
            apply_tense_marker(words(&["will", "go", "home"]), &d, &Tense::DEFAULT_PRECEDENCE);
        assert_eq!(tense, Tense::Future);
        assert_eq!(marker, None);
        assert_eq!(out, words(&["will", "go", "home"]));
    }

    #[test]
    fn test_future_marker_inserted_for_other_modals() {
        let d = dist(&[Tag::PRP, Tag::MD, Tag::VB]);
        let (out, _, marker) =
            apply_tense_marker(words(&["shall", "go"]), &d, &Tense::DEFAULT_PRECEDENCE);
        assert_eq!(marker, Some("will"));
        assert_eq!(out[0], "will");
    }

    #[test]
    fn test_continuous_marker() {
        let d = dist(&[Tag::PRP, Tag::VBP, Tag::VBG, Tag::RB]);
        let (out, tense, _) =
            apply_tense_marker(words(&["run", "now"]), &d, &Tense::DEFAULT_PRECEDENCE);
        assert_eq!(tense, Tense::Present);
        assert_eq!(out, words(&["now", "run", "now"]));
    }

    #[test]
    fn test_simple_present_has_no_marker() {
        let d = dist(&[Tag::PRP, Tag::VBZ]);
        let (out, tense, marker) =
            apply_tense_marker(words(&["walk"]), &d, &Tense::DEFAULT_PRECEDENCE);
        assert_eq!(tense, Tense::Present);
        assert_eq!(marker, None);
        assert_eq!(out, words(&["walk"]));
    }

    #[test]
    fn test_no_verbs_no_marker() {
        let d = dist(&[Tag::NN, Tag::JJ]);
        assert_eq!(d.dominant(&Tense::DEFAULT_PRECEDENCE), Tense::Future);
        assert_eq!(d.marker(&Tense::DEFAULT_PRECEDENCE, &[]), None);
    }

    #[test]
    fn test_tie_uses_precedence() {
        let d = dist(&[Tag::MD, Tag::VBD]);
        assert_eq!(d.dominant(&Tense::DEFAULT_PRECEDENCE), Tense::Future);

        let past_first = [Tense::Past, Tense::Future, Tense::Present, Tense::PresentContinuous];
        assert_eq!(d.dominant(&past_first), Tense::Past);
    }
}
