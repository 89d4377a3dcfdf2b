//! Deterministic extractive summarizer — used whenever the generative
//! capability is unavailable or fails.

/// Word cap applied when the caller does not supply one. Matches the cap the
/// generative summary prompt asks for.
pub const DEFAULT_WORD_CAP: usize = 300;

/// Earliest-position extractive summary.
///
/// Splits on `.`, `!` and `?`, drops candidates that are empty after
/// trimming, keeps the first five in original order (no ranking), joins them
/// with `". "`, and truncates the result to `max_words` space-separated
/// tokens.
///
/// Total and pure: identical input always yields identical output, and text
/// with no qualifying sentence candidates yields the empty string.
pub fn fallback_summarize(text: &str, max_words: usize) -> String {
    let sentences: Vec<&str> = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let keep = sentences.len().min(5);
    let joined = sentences[..keep].join(". ");
    joined
        .split(' ')
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_five_sentences() {
        assert_eq!(fallback_summarize("A. B. C. D. E. F.", 100), "A. B. C. D. E");
    }

    #[test]
    fn test_deterministic() {
        let text = "Build services! Own reliability? Ship weekly. Mentor juniors.";
        assert_eq!(
            fallback_summarize(text, 50),
            fallback_summarize(text, 50),
        );
    }

    #[test]
    fn test_all_delimiters_normalized_to_periods() {
        assert_eq!(fallback_summarize("Wow! Really? Yes.", 100), "Wow. Really. Yes");
    }

    #[test]
    fn test_word_cap_truncates() {
        let summary = fallback_summarize("one two three four five six seven.", 3);
        assert_eq!(summary, "one two three");
    }

    #[test]
    fn test_never_exceeds_word_cap() {
        let text = "alpha beta gamma delta. epsilon zeta eta theta. iota kappa.";
        for cap in [1, 2, 5, 8, 100] {
            let summary = fallback_summarize(text, cap);
            let tokens = summary.split(' ').filter(|t| !t.is_empty()).count();
            assert!(tokens <= cap, "cap {cap} produced {tokens} tokens: {summary:?}");
        }
    }

    #[test]
    fn test_no_sentences_yields_empty() {
        assert_eq!(fallback_summarize("", 300), "");
        assert_eq!(fallback_summarize("   \t ", 300), "");
        assert_eq!(fallback_summarize("...!!??", 300), "");
    }

    #[test]
    fn test_undelimited_text_is_one_candidate() {
        assert_eq!(
            fallback_summarize("just one fragment with no terminator", 300),
            "just one fragment with no terminator"
        );
    }
}
