//! Ordered-subsequence fuzzy matcher.
//!
//! This is the matcher that decides which checklist rows are visible, so
//! its semantics are load-bearing: every character of the query must
//! appear in the label in order, contiguity not required, case ignored.
//! The empty query matches everything. It is not edit-distance or token
//! matching.

/// Whether `label` matches `query` as a case-insensitive ordered
/// subsequence.
pub fn fuzzy_match(query: &str, label: &str) -> bool {
    let query: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if query.is_empty() {
        return true;
    }

    let mut qi = 0;
    for c in label.chars().flat_map(char::to_lowercase) {
        if c == query[qi] {
            qi += 1;
            if qi == query.len() {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_query_matches_everything() {
        assert!(fuzzy_match("", "anything"));
        assert!(fuzzy_match("", ""));
    }

    #[test]
    fn interleaved_subsequence_matches() {
        assert!(fuzzy_match("abc", "aXbXc"));
    }

    #[test]
    fn out_of_order_does_not_match() {
        assert!(!fuzzy_match("abc", "acb"));
    }

    #[test]
    fn case_insensitive() {
        assert!(fuzzy_match("BELL", "ship bell"));
        assert!(fuzzy_match("bell", "Ship BELL"));
    }

    #[test]
    fn contiguous_match() {
        assert!(fuzzy_match("door", "front door chime"));
    }

    #[test]
    fn query_longer_than_label_fails() {
        assert!(!fuzzy_match("abcd", "abc"));
    }

    #[test]
    fn nonempty_query_empty_label_fails() {
        assert!(!fuzzy_match("a", ""));
    }

    proptest! {
        #[test]
        fn label_matches_itself(s in "[a-zA-Z0-9 ]{0,24}") {
            prop_assert!(fuzzy_match(&s, &s));
        }

        #[test]
        fn every_other_char_is_a_subsequence(s in "[a-z0-9]{1,24}") {
            let sub: String = s.chars().step_by(2).collect();
            prop_assert!(fuzzy_match(&sub, &s));
        }

        #[test]
        fn padding_the_label_preserves_a_match(
            q in "[a-z]{0,8}",
            l in "[a-z]{0,16}",
            pad in "[0-9]{0,8}",
        ) {
            if fuzzy_match(&q, &l) {
                let suffixed = format!("{l}{pad}");
                let prefixed = format!("{pad}{l}");
                prop_assert!(fuzzy_match(&q, &suffixed));
                prop_assert!(fuzzy_match(&q, &prefixed));
            }
        }
    }
}
