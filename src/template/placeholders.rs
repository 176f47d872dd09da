//! Placeholder name extraction

use std::collections::HashSet;

use super::lexer::Token;
use crate::model::is_reserved_placeholder;

/// Distinct user-defined placeholder names referenced by `tokens`.
/// Reserved names (`end`, `selected`) are excluded.
pub fn extract_placeholder_names<'a, I>(tokens: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a Token>,
{
    tokens
        .into_iter()
        .filter_map(Token::placeholder_name)
        .filter(|name| !is_reserved_placeholder(name))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::tokenize;

    #[test]
    fn test_extract_deduplicates() {
        let tokens = tokenize("$a$ + $b$ + $a$", '$');
        let names = extract_placeholder_names(&tokens);
        assert_eq!(names.len(), 2);
        assert!(names.contains("a"));
        assert!(names.contains("b"));
    }

    #[test]
    fn test_extract_skips_reserved_and_bad() {
        let tokens = tokenize("$selected$$end$ $name$ $broken", '$');
        let names = extract_placeholder_names(&tokens);
        assert_eq!(names, HashSet::from(["name".to_string()]));
    }

    #[test]
    fn test_extract_ignores_escapes() {
        let tokens = tokenize("price: $$10", '$');
        assert!(extract_placeholder_names(&tokens).is_empty());
    }
}
