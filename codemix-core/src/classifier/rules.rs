//! The ordered rule cascade
//!
//! Each rule is a guard over a token and the resources; the first rule whose
//! guard matches decides the label. Rules never fall through once matched.

use super::text::{is_all_digits, is_all_non_word, strip_non_word, title_case};
use crate::label::Label;
use crate::resources::{Resources, WordMap};
use serde::Serialize;
use std::fmt;

/// A token together with the case variants the rules look up
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    /// Token as it appears in the input
    pub token: &'a str,
    /// Lowercased form
    pub lower: String,
    /// Title-cased form
    pub title: String,
}

impl<'a> Candidate<'a> {
    /// Compute the case variants of a token
    pub fn new(token: &'a str) -> Self {
        Self {
            token,
            lower: token.to_lowercase(),
            title: title_case(token),
        }
    }
}

/// One step of the classification cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Exact, lowercase or title-case hit in the manual word map
    ManualOverride,
    /// Only punctuation or symbols
    Punctuation,
    /// Mentions, hashtags, URLs and the retweet marker
    SocialMarker,
    /// Digits once punctuation is removed (numbers, times, dates)
    Numeric,
    /// Starts with `:` or `;`
    Emoticon,
    /// Found in the English list but not the Hindi list
    EnglishOnly,
    /// Found in the Hindi list but not the English list
    HindiOnly,
}

impl Rule {
    /// Rules in evaluation order
    pub const CASCADE: [Rule; 7] = [
        Rule::ManualOverride,
        Rule::Punctuation,
        Rule::SocialMarker,
        Rule::Numeric,
        Rule::Emoticon,
        Rule::EnglishOnly,
        Rule::HindiOnly,
    ];

    /// Short machine-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Rule::ManualOverride => "manual_override",
            Rule::Punctuation => "punctuation",
            Rule::SocialMarker => "social_marker",
            Rule::Numeric => "numeric",
            Rule::Emoticon => "emoticon",
            Rule::EnglishOnly => "english_only",
            Rule::HindiOnly => "hindi_only",
        }
    }

    /// One-line human description
    pub fn description(&self) -> &'static str {
        match self {
            Rule::ManualOverride => "token, lowercase or title case found in the manual word map",
            Rule::Punctuation => "token consists only of punctuation or symbols",
            Rule::SocialMarker => "token contains '@', '#' or 'http', or is 'RT'",
            Rule::Numeric => "token is all digits once punctuation is removed",
            Rule::Emoticon => "token starts with ':' or ';'",
            Rule::EnglishOnly => "token is in the English list and not in the Hindi list",
            Rule::HindiOnly => "token is in the Hindi list and not in the English list",
        }
    }

    /// Evaluate this rule alone
    pub fn apply(&self, candidate: &Candidate<'_>, resources: &Resources) -> Option<Label> {
        match self {
            Rule::ManualOverride => manual_override(candidate, &resources.word_map),
            Rule::Punctuation => is_all_non_word(candidate.token).then_some(Label::Universal),
            Rule::SocialMarker => is_social_marker(candidate.token).then_some(Label::Universal),
            Rule::Numeric => is_numeric(candidate.token).then_some(Label::Universal),
            Rule::Emoticon => is_emoticon(candidate.token).then_some(Label::Universal),
            Rule::EnglishOnly => is_english_only(candidate, resources).then_some(Label::English),
            Rule::HindiOnly => is_hindi_only(candidate, resources).then_some(Label::Hindi),
        }
    }

    /// Evaluate this rule alone on a raw token
    pub fn check(&self, token: &str, resources: &Resources) -> Option<Label> {
        self.apply(&Candidate::new(token), resources)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run the cascade; `None` means the token is in both lists or in neither
pub fn evaluate(token: &str, resources: &Resources) -> Option<(Rule, Label)> {
    let candidate = Candidate::new(token);
    Rule::CASCADE
        .iter()
        .find_map(|rule| rule.apply(&candidate, resources).map(|label| (*rule, label)))
}

fn manual_override(candidate: &Candidate<'_>, map: &WordMap) -> Option<Label> {
    map.get(candidate.token)
        .or_else(|| map.get(&candidate.lower))
        .or_else(|| map.get(&candidate.title))
}

fn is_social_marker(token: &str) -> bool {
    token.contains('@') || token.contains('#') || token.contains("http") || token == "RT"
}

fn is_numeric(token: &str) -> bool {
    is_all_digits(&strip_non_word(token))
}

fn is_emoticon(token: &str) -> bool {
    matches!(token.chars().next(), Some(':') | Some(';'))
}

fn is_english_only(candidate: &Candidate<'_>, resources: &Resources) -> bool {
    let english = &resources.english;
    (english.contains(candidate.token)
        || english.contains(&candidate.title)
        || english.contains(&candidate.lower))
        && !resources.hindi.contains(&candidate.lower)
}

fn is_hindi_only(candidate: &Candidate<'_>, resources: &Resources) -> bool {
    !resources.english.contains(&candidate.lower) && resources.hindi.contains(&candidate.lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{WordMap, WordSet};

    fn resources() -> Resources {
        Resources::new(
            WordSet::from_iter(["the", "London", "main", "love", "to"]),
            WordSet::from_iter(["pyaar", "main", "hai", "to"]),
            WordMap::from_iter([("to", Label::Hindi), ("LOL", Label::Universal)]),
        )
    }

    #[test]
    fn test_cascade_order() {
        assert_eq!(Rule::CASCADE[0], Rule::ManualOverride);
        assert_eq!(Rule::CASCADE[6], Rule::HindiOnly);
        let mut sorted = Rule::CASCADE;
        sorted.sort();
        assert_eq!(sorted, Rule::CASCADE);
    }

    #[test]
    fn test_manual_override_case_forms() {
        let res = resources();
        assert_eq!(Rule::ManualOverride.check("to", &res), Some(Label::Hindi));
        assert_eq!(Rule::ManualOverride.check("TO", &res), Some(Label::Hindi));
        assert_eq!(Rule::ManualOverride.check("LOL", &res), Some(Label::Universal));
        assert_eq!(Rule::ManualOverride.check("lol", &res), None);
        assert_eq!(Rule::ManualOverride.check("the", &res), None);
    }

    #[test]
    fn test_manual_override_title_form() {
        let res = Resources::new(
            WordSet::new(),
            WordSet::new(),
            WordMap::from_iter([("Delhi", Label::Universal)]),
        );
        assert_eq!(Rule::ManualOverride.check("DELHI", &res), Some(Label::Universal));
        assert_eq!(Rule::ManualOverride.check("delhi", &res), Some(Label::Universal));
    }

    #[test]
    fn test_punctuation() {
        let res = resources();
        for token in ["...", "!", "?!", "-", "_", "\"", "।"] {
            assert_eq!(
                Rule::Punctuation.check(token, &res),
                Some(Label::Universal),
                "token {token:?}"
            );
        }
        assert_eq!(Rule::Punctuation.check("a!", &res), None);
    }

    #[test]
    fn test_social_markers() {
        let res = resources();
        for token in ["@user", "#IndvsPak", "http://t.co/x", "https", "RT", "a@b"] {
            assert_eq!(Rule::SocialMarker.check(token, &res), Some(Label::Universal));
        }
        assert_eq!(Rule::SocialMarker.check("rt", &res), None);
        assert_eq!(Rule::SocialMarker.check("HTTP", &res), None);
    }

    #[test]
    fn test_numeric() {
        let res = resources();
        for token in ["123", "12:34", "1,000", "25/12/2014", "१२"] {
            assert_eq!(Rule::Numeric.check(token, &res), Some(Label::Universal));
        }
        assert_eq!(Rule::Numeric.check("2day", &res), None);
        assert_eq!(Rule::Numeric.check("...", &res), None);
        // Numbers that are not decimal digits
        assert_eq!(Rule::Numeric.check("Ⅻ", &res), None);
        assert_eq!(Rule::Numeric.check("½", &res), None);
    }

    #[test]
    fn test_vulgar_fraction_is_not_punctuation() {
        let res = resources();
        assert_eq!(Rule::Punctuation.check("½", &res), None);
        assert_eq!(evaluate("½", &res), None);
        assert_eq!(evaluate("Ⅻ", &res), None);
    }

    #[test]
    fn test_emoticon() {
        let res = resources();
        assert_eq!(Rule::Emoticon.check(":P", &res), Some(Label::Universal));
        assert_eq!(Rule::Emoticon.check(";)", &res), Some(Label::Universal));
        assert_eq!(Rule::Emoticon.check("P:", &res), None);
    }

    #[test]
    fn test_english_only() {
        let res = resources();
        assert_eq!(Rule::EnglishOnly.check("the", &res), Some(Label::English));
        assert_eq!(Rule::EnglishOnly.check("THE", &res), Some(Label::English));
        // Title form hits the proper noun
        assert_eq!(Rule::EnglishOnly.check("LONDON", &res), Some(Label::English));
        // In both lists
        assert_eq!(Rule::EnglishOnly.check("main", &res), None);
        assert_eq!(Rule::EnglishOnly.check("pyaar", &res), None);
    }

    #[test]
    fn test_hindi_only() {
        let res = resources();
        assert_eq!(Rule::HindiOnly.check("pyaar", &res), Some(Label::Hindi));
        assert_eq!(Rule::HindiOnly.check("Hai", &res), Some(Label::Hindi));
        assert_eq!(Rule::HindiOnly.check("main", &res), None);
        assert_eq!(Rule::HindiOnly.check("xyz", &res), None);
    }

    #[test]
    fn test_evaluate_first_match_wins() {
        let res = resources();
        // "to" is in both lists but the manual map decides first
        assert_eq!(evaluate("to", &res), Some((Rule::ManualOverride, Label::Hindi)));
        assert_eq!(evaluate("#1", &res), Some((Rule::SocialMarker, Label::Universal)));
        assert_eq!(evaluate(":-)", &res), Some((Rule::Punctuation, Label::Universal)));
        assert_eq!(evaluate(":D", &res), Some((Rule::Emoticon, Label::Universal)));
        assert_eq!(evaluate("main", &res), None);
        assert_eq!(evaluate("XYZ_unknown", &res), None);
    }
}
