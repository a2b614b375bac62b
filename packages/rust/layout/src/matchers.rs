//! Line-pattern predicates for numbered-list structure.
//!
//! Resolutions number their levels `1)` / `(a)` / `i)`. These predicates
//! drive both the classifier and the clause-tree builder. Each one evaluates
//! the line after trimming surrounding whitespace — indentation depth travels
//! separately through [`crate::body::indent_depth`].

/// Whether a line is a member of a numbered list at any level.
///
/// True for a non-empty trimmed line whose second character is `')'`
/// (covers `1)` and `i)` prefixes), for a `(a)`-style subclause, or for a
/// small-roman prefix line.
pub fn is_list_element(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }
    trimmed.chars().nth(1) == Some(')') || is_sub_clause(line) || has_small_roman(line)
}

/// Whether a line starts with a lowercase roman-numeral list prefix
/// (`i)`, `iv)`, `xii)`, …).
///
/// The prefix before the first `')'` must be non-empty and drawn entirely
/// from `{i, v, x, l}`; uppercase never matches. A line without `')'` is not
/// a list prefix at all.
pub fn has_small_roman(line: &str) -> bool {
    let Some((prefix, _)) = line.trim().split_once(')') else {
        return false;
    };
    !prefix.is_empty() && prefix.chars().all(|c| matches!(c, 'i' | 'v' | 'x' | 'l'))
}

/// Whether a line opens a top-level clause: a digit `1`–`9` followed by
/// `')'` or `'.'`.
pub fn is_top_level_clause(line: &str) -> bool {
    let mut chars = line.trim().chars();
    matches!(chars.next(), Some(c) if c.is_ascii_digit() && c != '0')
        && matches!(chars.next(), Some(')' | '.'))
}

/// Whether a line opens a subclause: `'('`, a lowercase ASCII letter, `')'`.
pub fn is_sub_clause(line: &str) -> bool {
    let mut chars = line.trim().chars();
    chars.next() == Some('(')
        && matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.next() == Some(')')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_roman_prefixes() {
        assert!(has_small_roman("i) first"));
        assert!(has_small_roman("iv) fourth"));
        assert!(has_small_roman("xii) twelfth"));
        assert!(has_small_roman("\t\tviii) indented"));
    }

    #[test]
    fn small_roman_rejects_uppercase() {
        assert!(!has_small_roman("I) first"));
        assert!(!has_small_roman("IV) fourth"));
    }

    #[test]
    fn small_roman_rejects_non_roman_prefix() {
        assert!(!has_small_roman("ab) letters"));
        assert!(!has_small_roman("1) numbered"));
    }

    #[test]
    fn small_roman_requires_nonempty_prefix() {
        assert!(!has_small_roman(") stray paren"));
    }

    #[test]
    fn small_roman_requires_closing_paren() {
        assert!(!has_small_roman("iv"));
        assert!(!has_small_roman("visit the library"));
    }

    #[test]
    fn list_elements_at_every_level() {
        assert!(is_list_element("1) Urges all states"));
        assert!(is_list_element("(a) To act"));
        assert!(is_list_element("i) promptly"));
        assert!(is_list_element("\t\t(b) To cooperate"));
    }

    #[test]
    fn list_element_rejects_prose_and_blanks() {
        assert!(!is_list_element(""));
        assert!(!is_list_element("\t\t"));
        assert!(!is_list_element("The General Assembly,"));
        // Two-digit prefixes fall outside the single-character convention.
        assert!(!is_list_element("10) Urges"));
    }

    #[test]
    fn top_level_clause_prefixes() {
        assert!(is_top_level_clause("1) Urges all states"));
        assert!(is_top_level_clause("2. Calls upon"));
        assert!(is_top_level_clause("\t9) Decides"));
        assert!(!is_top_level_clause("0) zero is not a clause number"));
        assert!(!is_top_level_clause("(a) To act"));
        assert!(!is_top_level_clause("10) two digits"));
        assert!(!is_top_level_clause("Recalling its resolution,"));
    }

    #[test]
    fn sub_clause_prefixes() {
        assert!(is_sub_clause("(a) To act"));
        assert!(is_sub_clause("\t\t(z) Last"));
        assert!(!is_sub_clause("(A) uppercase"));
        assert!(!is_sub_clause("(1) numeric"));
        assert!(!is_sub_clause("a) bare letter"));
    }
}
