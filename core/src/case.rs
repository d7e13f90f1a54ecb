//! Case conversion between kebab-case flag names and PascalCase field
//! identifiers.
//!
//! Long flag names on the command line are kebab-case (`--work-dir`) while
//! field identifiers in schema tables are PascalCase (`WorkDir`). The two
//! functions here convert between the forms and are exact inverses on
//! identifier-shaped input (ASCII letters plus interior hyphens), which the
//! descriptor builder relies on when it derives default long names.

/// Converts a PascalCase (or camelCase) identifier to kebab-case.
///
/// The first character is lowered; every subsequent ASCII uppercase
/// character is emitted as a hyphen followed by its lowercase form. All
/// other characters pass through unchanged.
///
/// # Examples
///
/// ```
/// use argline_core::to_kebab;
///
/// assert_eq!(to_kebab("WorkDir"), "work-dir");
/// assert_eq!(to_kebab("Verbose"), "verbose");
/// assert_eq!(to_kebab("x"), "x");
/// ```
pub fn to_kebab(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 2);
    for (i, ch) in ident.chars().enumerate() {
        if i == 0 {
            out.push(ch.to_ascii_lowercase());
        } else if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Converts a kebab-case token to PascalCase.
///
/// The first character is uppered; every hyphen that is not the last
/// character is dropped and the character after it uppered. A trailing
/// hyphen passes through unchanged.
///
/// # Examples
///
/// ```
/// use argline_core::to_pascal;
///
/// assert_eq!(to_pascal("work-dir"), "WorkDir");
/// assert_eq!(to_pascal("verbose"), "Verbose");
/// assert_eq!(to_pascal("trailing-"), "Trailing-");
/// ```
pub fn to_pascal(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars().peekable();
    let mut first = true;
    while let Some(ch) = chars.next() {
        if first {
            out.push(ch.to_ascii_uppercase());
            first = false;
        } else if ch == '-' && chars.peek().is_some() {
            if let Some(next) = chars.next() {
                out.push(next.to_ascii_uppercase());
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kebab_splits_on_uppercase() {
        assert_eq!(to_kebab("WorkDir"), "work-dir");
        assert_eq!(to_kebab("DryRun"), "dry-run");
        assert_eq!(to_kebab("BpFileSizeLimit"), "bp-file-size-limit");
    }

    #[test]
    fn test_to_kebab_single_word() {
        assert_eq!(to_kebab("Verbose"), "verbose");
        assert_eq!(to_kebab("v"), "v");
        assert_eq!(to_kebab(""), "");
    }

    #[test]
    fn test_to_pascal_joins_on_hyphen() {
        assert_eq!(to_pascal("work-dir"), "WorkDir");
        assert_eq!(to_pascal("dry-run"), "DryRun");
        assert_eq!(to_pascal("bp-file-size-limit"), "BpFileSizeLimit");
    }

    #[test]
    fn test_to_pascal_preserves_trailing_hyphen() {
        assert_eq!(to_pascal("trailing-"), "Trailing-");
    }

    #[test]
    fn test_to_pascal_consecutive_hyphens() {
        assert_eq!(to_pascal("a--b"), "A-b");
    }

    #[test]
    fn test_round_trip_on_kebab_identifiers() {
        for kebab in ["work-dir", "dry-run", "verbose", "a", "bp-file-size-limit"] {
            assert_eq!(to_kebab(&to_pascal(kebab)), kebab);
        }
    }

    #[test]
    fn test_round_trip_on_pascal_identifiers() {
        for pascal in ["WorkDir", "DryRun", "Verbose", "A", "BpFileSizeLimit"] {
            assert_eq!(to_pascal(&to_kebab(pascal)), pascal);
        }
    }
}
