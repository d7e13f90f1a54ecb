//! Subcommand routing.
//!
//! Finds the point where a token stream splits into a root segment and a
//! subcommand segment. Only the first bare token that matches a
//! registered canonical name qualifies; bare tokens that match nothing
//! are left in place for the flag resolvers to reject.

/// Scans `tokens` for the first bare token matching one of `names`.
///
/// Matching is ASCII case-insensitive against the canonical (lowercase)
/// registration names. Returns the token index and the index of the
/// matched registration, or `None` when every token either carries a
/// dash prefix or matches no registration.
pub(crate) fn route(tokens: &[String], names: &[&str]) -> Option<(usize, usize)> {
    tokens.iter().enumerate().find_map(|(pos, token)| {
        if token.starts_with('-') {
            return None;
        }
        names
            .iter()
            .position(|name| name.eq_ignore_ascii_case(token))
            .map(|cmd| (pos, cmd))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_route_finds_first_matching_bare_token() {
        let stream = tokens(&["-v", "--work-dir=/tmp", "second", "-d"]);
        assert_eq!(route(&stream, &["first", "second"]), Some((2, 1)));
    }

    #[test]
    fn test_route_skips_non_matching_bare_tokens() {
        let stream = tokens(&["stray", "first"]);
        assert_eq!(route(&stream, &["first"]), Some((1, 0)));
    }

    #[test]
    fn test_route_is_case_insensitive() {
        let stream = tokens(&["First"]);
        assert_eq!(route(&stream, &["first"]), Some((0, 0)));
    }

    #[test]
    fn test_route_without_match_returns_none() {
        let stream = tokens(&["-v", "--dry-run"]);
        assert_eq!(route(&stream, &["first"]), None);
        assert_eq!(route(&tokens(&["third"]), &["first"]), None);
        assert_eq!(route(&tokens(&[]), &["first"]), None);
    }

    #[test]
    fn test_route_ignores_dash_prefixed_homonyms() {
        let stream = tokens(&["-first", "first"]);
        assert_eq!(route(&stream, &["first"]), Some((1, 0)));
    }
}
