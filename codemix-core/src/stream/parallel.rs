//! Segment-parallel tagging
//!
//! Context resets at every blank line, so segments are independent and can
//! be tagged on separate threads with output identical to a sequential pass.

use super::{Context, TaggedLine, Tagger};
use rayon::prelude::*;

impl Tagger {
    /// Tag lines with one rayon task per segment
    pub fn tag_lines_parallel<S>(&self, lines: &[S]) -> Vec<TaggedLine>
    where
        S: AsRef<str> + Sync,
    {
        let segments: Vec<&[S]> = lines
            .split_inclusive(|line| line.as_ref().trim().is_empty())
            .collect();
        log::debug!("tagging {} segments in parallel", segments.len());

        segments
            .par_iter()
            .map(|segment| {
                let mut context = Context::new();
                segment
                    .iter()
                    .map(|line| self.tag_line(line.as_ref(), &mut context))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::classifier::{AmbiguityPolicy, Classifier};
    use crate::label::Label;
    use crate::resources::{Resources, WordMap, WordSet};
    use crate::stream::Tagger;
    use std::sync::Arc;

    fn tagger() -> Tagger {
        let resources = Resources::new(
            WordSet::from_iter(["the", "is", "main"]),
            WordSet::from_iter(["hai", "kya", "main"]),
            WordMap::from_iter([("lol", Label::Universal)]),
        );
        Tagger::new(Classifier::new(
            Arc::new(resources),
            AmbiguityPolicy::Fallback,
        ))
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let tagger = tagger();
        let mut lines = Vec::new();
        for i in 0..200 {
            lines.push(if i % 2 == 0 { "kya" } else { "the" });
            lines.push("main");
            lines.push("lol");
            lines.push("???");
            if i % 3 == 0 {
                lines.push("");
            }
        }
        lines.push("");
        lines.push("");

        assert_eq!(tagger.tag_lines_parallel(&lines), tagger.tag_lines(&lines));
    }

    #[test]
    fn test_parallel_empty_input() {
        let tagger = tagger();
        let lines: Vec<String> = Vec::new();
        assert!(tagger.tag_lines_parallel(&lines).is_empty());
    }
}
