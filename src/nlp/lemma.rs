//! Rule-based English lemmatizer
//!
//! Reduces tokens to a dictionary base form using an irregular-forms table
//! plus regular suffix handling.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::stem::{has_vowel, is_consonant};

/// Irregular forms that suffix rules cannot reach
static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("went", "go"),
        ("gone", "go"),
        ("ran", "run"),
        ("better", "good"),
        ("best", "good"),
        ("worse", "bad"),
        ("worst", "bad"),
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("people", "person"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("made", "make"),
        ("said", "say"),
        ("took", "take"),
        ("taken", "take"),
        ("came", "come"),
        ("got", "get"),
        ("gotten", "get"),
        ("saw", "see"),
        ("seen", "see"),
        ("knew", "know"),
        ("known", "know"),
        ("thought", "think"),
        ("bought", "buy"),
        ("brought", "bring"),
        ("felt", "feel"),
        ("kept", "keep"),
        ("left", "leave"),
        ("lost", "lose"),
        ("met", "meet"),
        ("paid", "pay"),
        ("sold", "sell"),
        ("told", "tell"),
        ("flew", "fly"),
        ("flown", "fly"),
        ("gave", "give"),
        ("given", "give"),
        ("found", "find"),
        ("heard", "hear"),
        ("held", "hold"),
        ("spoke", "speak"),
        ("spoken", "speak"),
        ("stood", "stand"),
        ("wrote", "write"),
        ("written", "write"),
    ]
    .into_iter()
    .collect()
});

/// Lemmatize a single lowercase token
pub fn lemmatize(token: &str) -> String {
    if let Some(lemma) = IRREGULAR.get(token) {
        return (*lemma).to_string();
    }
    if let Some(base) = noun_singular(token) {
        return base;
    }
    if let Some(base) = verb_base(token, "ing") {
        return base;
    }
    if let Some(base) = verb_base(token, "ed") {
        return base;
    }
    token.to_string()
}

fn noun_singular(token: &str) -> Option<String> {
    if let Some(base) = token.strip_suffix("ies") {
        if base.len() >= 2 {
            return Some(format!("{base}y"));
        }
    }
    if let Some(base) = token.strip_suffix("sses") {
        return Some(format!("{base}ss"));
    }
    if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
        return None;
    }
    if let Some(base) = token.strip_suffix("es") {
        // boxes -> box, watches -> watch
        if base.ends_with('x')
            || base.ends_with('z')
            || base.ends_with("ch")
            || base.ends_with("sh")
        {
            return Some(base.to_string());
        }
    }
    if let Some(base) = token.strip_suffix('s') {
        if base.len() >= 2 {
            return Some(base.to_string());
        }
    }
    None
}

fn verb_base(token: &str, suffix: &str) -> Option<String> {
    let base = token.strip_suffix(suffix)?;
    if base.len() < 2 || !has_vowel(base) {
        return None;
    }

    let bytes = base.as_bytes();
    let n = bytes.len();

    // running -> run, stopped -> stop
    if n >= 3
        && bytes[n - 1] == bytes[n - 2]
        && is_consonant(bytes[n - 1])
        && !matches!(bytes[n - 1], b'l' | b's' | b'z')
    {
        return Some(base[..n - 1].to_string());
    }

    // amazing -> amaze, loved -> love
    if ends_cvc(bytes) {
        return Some(format!("{base}e"));
    }

    Some(base.to_string())
}

fn ends_cvc(bytes: &[u8]) -> bool {
    let n = bytes.len();
    n >= 3
        && is_consonant(bytes[n - 3])
        && !is_consonant(bytes[n - 2])
        && is_consonant(bytes[n - 1])
        && !matches!(bytes[n - 1], b'w' | b'x' | b'y')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("running", "run")]
    #[case("amazing", "amaze")]
    #[case("loved", "love")]
    #[case("flights", "flight")]
    #[case("cities", "city")]
    #[case("watches", "watch")]
    #[case("children", "child")]
    #[case("went", "go")]
    #[case("delayed", "delay")]
    #[case("product", "product")]
    fn lemmatizes_common_forms(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(lemmatize(input), expected);
    }

    #[test]
    fn words_ending_in_double_s_keep_their_suffix() {
        assert_eq!(lemmatize("class"), "class");
        assert_eq!(lemmatize("glasses"), "glass");
    }
}
