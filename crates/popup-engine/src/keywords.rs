//! Keyword matching on message bodies.

/// Return the first configured keyword contained in `body`.
///
/// Matching is a case-sensitive substring search in list order. Empty
/// keywords never match.
pub fn first_match<'a>(body: &str, keywords: &'a [String]) -> Option<&'a str> {
    keywords
        .iter()
        .map(String::as_str)
        .filter(|keyword| !keyword.is_empty())
        .find(|keyword| body.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::first_match;

    fn list(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn first_keyword_in_list_order_wins() {
        let keywords = list(&["deploy", "alice"]);
        assert_eq!(first_match("alice: deploy done", &keywords), Some("deploy"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let keywords = list(&["Urgent"]);
        assert_eq!(first_match("urgent: please look", &keywords), None);
        assert_eq!(first_match("Urgent: please look", &keywords), Some("Urgent"));
    }

    #[test]
    fn empty_keywords_are_ignored() {
        let keywords = list(&["", "build"]);
        assert_eq!(first_match("hello", &keywords), None);
        assert_eq!(first_match("build failed", &keywords), Some("build"));
    }

    #[test]
    fn no_keywords_no_match() {
        assert_eq!(first_match("anything", &[]), None);
    }
}
