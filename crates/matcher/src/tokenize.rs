//! Query and question tokenization.

/// Lowercase a text and split it into alphanumeric tokens, dropping
/// stop words and tokens shorter than two characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(|w| w.to_lowercase())
        .filter(|w| w.len() >= 2 && !is_stop_word(w))
        .collect()
}

fn is_stop_word(word: &str) -> bool {
    matches!(
        word,
        "a" | "an"
            | "and"
            | "are"
            | "as"
            | "at"
            | "be"
            | "but"
            | "by"
            | "do"
            | "for"
            | "from"
            | "had"
            | "has"
            | "have"
            | "in"
            | "is"
            | "it"
            | "its"
            | "of"
            | "on"
            | "or"
            | "that"
            | "the"
            | "their"
            | "they"
            | "this"
            | "to"
            | "was"
            | "were"
            | "will"
            | "with"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits_on_punctuation() {
        let tokens = tokenize("How do I reset my password?");
        assert_eq!(tokens, vec!["how", "reset", "my", "password"]);
    }

    #[test]
    fn test_drops_stop_words_and_short_tokens() {
        let tokens = tokenize("What is the weather today?");
        assert_eq!(tokens, vec!["what", "weather", "today"]);
    }

    #[test]
    fn test_all_stop_words_yields_empty() {
        assert!(tokenize("is it the and of").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ?!  ").is_empty());
    }
}
