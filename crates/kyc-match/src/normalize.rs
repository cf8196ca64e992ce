//! # Text Normalization
//!
//! Canonicalizes free-text names before they are compared.
//!
//! ## Latin script
//!
//! 1. Lowercase, and turn combining marks into spaces.
//! 2. Strip honorifics (`mr`, `dr`, `sheikh`, ...) as whole words, along with
//!    a trailing period and following whitespace. `"drew"` is untouched.
//! 3. Replace every character that is not a letter, a number (any `\p{N}`,
//!    so `²` survives), an underscore or whitespace with a space.
//! 4. Collapse whitespace runs to one space and trim.
//!
//! ## Arabic script
//!
//! 1. NFKD decomposition, dropping combining marks.
//! 2. Fold letter variants: alef forms to bare alef, alef maqsura to ya,
//!    ta marbuta to ha, hamza carriers to their base letter.
//! 3. Strip harakat (U+064B..=U+065F), superscript alef (U+0670) and
//!    tatweel (U+0640).
//! 4. Collapse whitespace and trim.
//!
//! Normalization never fails. Empty input yields an empty string.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Honorific tokens removed from Latin-script names.
pub const HONORIFICS: &[&str] = &[
    "mr", "mrs", "ms", "miss", "dr", "prof", "eng", "sir", "madam", "lord", "lady", "haj", "sheikh",
];

static HONORIFIC_RE: Lazy<Option<Regex>> = Lazy::new(|| {
    let pattern = format!(r"\b(?:{})\b\.?\s*", HONORIFICS.join("|"));
    Regex::new(&pattern).ok()
});

static PUNCTUATION_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").ok());

const ARABIC_FOLDS: &[(char, char)] = &[
    ('\u{0622}', '\u{0627}'), // alef with madda
    ('\u{0623}', '\u{0627}'), // alef with hamza above
    ('\u{0625}', '\u{0627}'), // alef with hamza below
    ('\u{0649}', '\u{064A}'), // alef maqsura
    ('\u{0629}', '\u{0647}'), // ta marbuta
    ('\u{0624}', '\u{0648}'), // waw with hamza
    ('\u{0626}', '\u{064A}'), // ya with hamza
];

const TATWEEL: char = '\u{0640}';

/// Writing system of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// Latin alphabet.
    Latin,
    /// Arabic alphabet.
    Arabic,
}

impl Script {
    /// Arabic if the text contains any character from the Arabic block,
    /// otherwise Latin.
    pub fn detect(text: &str) -> Self {
        if text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c)) {
            Self::Arabic
        } else {
            Self::Latin
        }
    }
}

/// Normalize `text` under the rules for `script`.
pub fn normalize(text: &str, script: Script) -> String {
    match script {
        Script::Latin => normalize_latin(text),
        Script::Arabic => normalize_arabic(text),
    }
}

/// Normalize a Latin-script name.
pub fn normalize_latin(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    let (Some(honorifics), Some(punctuation)) = (HONORIFIC_RE.as_ref(), PUNCTUATION_RE.as_ref())
    else {
        tracing::error!("name normalization patterns unavailable, using trimmed input");
        return text.trim().to_string();
    };

    // Combining marks end a word, so `dr\u{301}` is still an honorific.
    let lowered: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_combining_mark(c) { ' ' } else { c })
        .collect();
    let untitled = honorifics.replace_all(lowered.trim(), "");
    let spaced = punctuation.replace_all(&untitled, " ");
    collapse_whitespace(&spaced)
}

/// Normalize an Arabic-script name.
pub fn normalize_arabic(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    let folded: String = text
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .map(fold_arabic)
        .filter(|c| !is_arabic_diacritic(*c))
        .collect();
    collapse_whitespace(&folded)
}

fn fold_arabic(c: char) -> char {
    ARABIC_FOLDS
        .iter()
        .find(|(from, _)| *from == c)
        .map_or(c, |(_, to)| *to)
}

fn is_arabic_diacritic(c: char) -> bool {
    ('\u{064B}'..='\u{065F}').contains(&c) || c == '\u{0670}' || c == TATWEEL
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn latin_lowercases_and_collapses() {
        assert_eq!(normalize_latin("  John   SMITH "), "john smith");
    }

    #[test]
    fn latin_strips_honorifics_as_whole_words() {
        assert_eq!(normalize_latin("Dr. Ahmed Ali"), "ahmed ali");
        assert_eq!(normalize_latin("Sheikh Mohamed"), "mohamed");
        assert_eq!(normalize_latin("MR John Smith"), "john smith");
        assert_eq!(normalize_latin("Prof.Dr. Hassan"), "hassan");
    }

    #[test]
    fn latin_keeps_honorific_substrings() {
        assert_eq!(normalize_latin("Drew Mrsic"), "drew mrsic");
        assert_eq!(normalize_latin("Sirius Black"), "sirius black");
        assert_eq!(normalize_latin("Lordes"), "lordes");
    }

    #[test]
    fn latin_replaces_punctuation() {
        assert_eq!(normalize_latin("Ahmed Ali Al-Masri"), "ahmed ali al masri");
        assert_eq!(normalize_latin("O'Brien, Patrick"), "o brien patrick");
    }

    #[test]
    fn latin_keeps_unicode_letters() {
        assert_eq!(normalize_latin("José Müller"), "josé müller");
    }

    #[test]
    fn latin_drops_combining_marks() {
        assert_eq!(normalize_latin("Jose\u{301} Mu\u{308}ller"), "jose mu ller");
        assert_eq!(normalize_latin("Jose\u{301}"), "jose");
        assert_eq!(normalize_latin("Dr\u{301} Ahmed"), "ahmed");
    }

    #[test]
    fn latin_keeps_non_decimal_numbers() {
        assert_eq!(normalize_latin("Unit 7²"), "unit 7²");
        assert_eq!(normalize_latin("Louis XIV ½"), "louis xiv ½");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(normalize_latin(""), "");
        assert_eq!(normalize_latin("   "), "");
        assert_eq!(normalize_arabic(""), "");
        assert_eq!(normalize("", Script::Arabic), "");
    }

    #[test]
    fn name_made_only_of_honorifics_is_empty() {
        assert_eq!(normalize_latin("Mr. Dr."), "");
    }

    #[test]
    fn arabic_folds_alef_variants() {
        assert_eq!(normalize_arabic("أحمد"), "احمد");
        assert_eq!(normalize_arabic("إبراهيم"), "ابراهيم");
        assert_eq!(normalize_arabic("آمنة"), "امنه");
    }

    #[test]
    fn arabic_folds_maqsura_and_hamza_carriers() {
        assert_eq!(normalize_arabic("مصطفى"), "مصطفي");
        assert_eq!(normalize_arabic("مؤمن"), "مومن");
        assert_eq!(normalize_arabic("هائل"), "هايل");
    }

    #[test]
    fn arabic_strips_harakat_and_tatweel() {
        assert_eq!(normalize_arabic("مُحَمَّد"), "محمد");
        assert_eq!(normalize_arabic("محـــمد"), "محمد");
    }

    #[test]
    fn arabic_collapses_whitespace() {
        assert_eq!(normalize_arabic("  أحمد   علي "), "احمد علي");
    }

    #[test]
    fn script_detection() {
        assert_eq!(Script::detect("أحمد علي"), Script::Arabic);
        assert_eq!(Script::detect("Ahmed Ali"), Script::Latin);
        assert_eq!(Script::detect(""), Script::Latin);
    }

    proptest! {
        #[test]
        fn latin_normalization_is_idempotent(
            s in "[a-zA-Z\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{17F}\u{300}-\u{36F}² .,'-]{0,40}"
        ) {
            let once = normalize_latin(&s);
            prop_assert_eq!(normalize_latin(&once), once);
        }

        #[test]
        fn arabic_normalization_is_idempotent(
            s in "[\u{0621}-\u{064A}\u{064B}-\u{0652}\u{0640} ]{0,30}"
        ) {
            let once = normalize_arabic(&s);
            prop_assert_eq!(normalize_arabic(&once), once);
        }

        #[test]
        fn latin_output_has_no_edge_or_double_spaces(s in "\\PC{0,40}") {
            let out = normalize_latin(&s);
            prop_assert_eq!(out.trim(), out.as_str());
            prop_assert!(!out.contains("  "));
        }
    }
}
