//! Rule-based English stemmer
//!
//! Coarse suffix stripping in the Snowball tradition. Stems are not
//! guaranteed to be dictionary words.

/// Stem a single lowercase token
pub fn stem(token: &str) -> String {
    let mut word = strip_plural(token);

    if let Some(base) = strip_participle(&word, "ing") {
        word = base;
    } else if let Some(base) = strip_participle(&word, "ed") {
        word = base;
    }

    if let Some(base) = word.strip_suffix("ly") {
        if base.len() > 2 {
            word = base.to_string();
        }
    }

    word
}

fn strip_plural(token: &str) -> String {
    if let Some(base) = token.strip_suffix("sses") {
        return format!("{base}ss");
    }
    if let Some(base) = token.strip_suffix("ies") {
        return format!("{base}i");
    }
    if token.ends_with("ss") || token.ends_with("us") {
        return token.to_string();
    }
    if let Some(base) = token.strip_suffix('s') {
        if base.len() > 1 {
            return base.to_string();
        }
    }
    token.to_string()
}

fn strip_participle(word: &str, suffix: &str) -> Option<String> {
    let base = word.strip_suffix(suffix)?;
    if base.len() < 2 || !has_vowel(base) {
        return None;
    }

    let bytes = base.as_bytes();
    let n = bytes.len();

    // stopped -> stop, running -> run
    if n >= 3
        && bytes[n - 1] == bytes[n - 2]
        && is_consonant(bytes[n - 1])
        && !matches!(bytes[n - 1], b'l' | b's' | b'z')
    {
        return Some(base[..n - 1].to_string());
    }

    // hated -> hate, troubling -> trouble
    if base.ends_with("at") || base.ends_with("bl") || base.ends_with("iz") {
        return Some(format!("{base}e"));
    }

    Some(base.to_string())
}

pub(super) fn is_consonant(byte: u8) -> bool {
    byte.is_ascii_alphabetic() && !matches!(byte, b'a' | b'e' | b'i' | b'o' | b'u')
}

pub(super) fn has_vowel(word: &str) -> bool {
    word.bytes().any(|b| !is_consonant(b) && b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("running", "run")]
    #[case("flights", "flight")]
    #[case("delayed", "delay")]
    #[case("hated", "hate")]
    #[case("classes", "class")]
    #[case("cities", "citi")]
    #[case("quickly", "quick")]
    #[case("love", "love")]
    fn stems_common_forms(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(stem(input), expected);
    }

    #[test]
    fn short_tokens_survive_unchanged() {
        assert_eq!(stem("go"), "go");
        assert_eq!(stem("is"), "is");
    }
}
