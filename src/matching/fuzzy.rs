//! Approximate string scoring on a 0-100 scale.
//!
//! Both strings are normalized first: lower-cased, every character that is not
//! a letter or digit replaced by a space, and runs of whitespace collapsed. The
//! score is the better of the Jaro-Winkler similarity of the normalized strings
//! and of their alphabetically sorted tokens, so word order does not matter.

use std::cmp::Reverse;

/// Lower-case, strip punctuation, and collapse whitespace
pub fn normalize(s: &str) -> String {
    let replaced: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn sorted_tokens(normalized: &str) -> String {
    let mut tokens: Vec<&str> = normalized.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Similarity of `query` and `choice` on a 0-100 scale.
///
/// Returns 0 when either string is empty after normalization.
pub fn score(query: &str, choice: &str) -> u8 {
    let (a, b) = (normalize(query), normalize(choice));
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let direct = strsim::jaro_winkler(&a, &b);
    let token_sorted = strsim::jaro_winkler(&sorted_tokens(&a), &sorted_tokens(&b));
    let best = direct.max(token_sorted).clamp(0.0, 1.0);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // 0.0..=100.0
    {
        (best * 100.0).round() as u8
    }
}

/// Score every choice against `query` and return the best `limit` of them.
///
/// Results are ordered by score, highest first; equal scores keep the order in
/// which the choices were given.
pub fn extract<'a, I>(query: &str, choices: I, limit: usize) -> Vec<(&'a str, u8)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(&'a str, u8)> = choices
        .into_iter()
        .map(|choice| (choice, score(query, choice)))
        .collect();
    scored.sort_by_key(|&(_, s)| Reverse(s));
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello,   World! "), "hello world");
        assert_eq!(normalize("print('hi')"), "print hi");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_score_identity_and_disjoint() {
        assert_eq!(score("alice", "alice"), 100);
        assert_eq!(score("Alice", "alice!"), 100);
        assert_eq!(score("alice", "bob"), 0);
        assert_eq!(score("", "alice"), 0);
        assert_eq!(score("alice", "..."), 0);
    }

    #[test]
    fn test_score_close_names() {
        assert!(score("alice", "alicia") >= 75);
        assert!(score("alice", "alice_smith") >= 75);
        assert!(score("alice", "zed") < 75);
    }

    #[test]
    fn test_score_ignores_token_order() {
        assert_eq!(score("hello world", "world hello"), 100);
    }

    #[test]
    fn test_extract_orders_and_limits() {
        let choices = ["bob", "alicia", "alice", "alina"];
        let ranked = extract("alice", choices, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0], ("alice", 100));
        assert!(ranked[0].1 >= ranked[1].1);
    }

    #[test]
    fn test_extract_ties_keep_input_order() {
        let choices = ["zz", "yy", "xx"];
        let ranked = extract("alice", choices, 10);
        let names: Vec<&str> = ranked.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["zz", "yy", "xx"]);
    }
}
