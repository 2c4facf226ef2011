//! Address pattern matching.
//!
//! The accepted address shape is a restricted practical subset: an ASCII
//! local part with at most two `-`, `+`, `.` or `_` separated segments, an
//! `@`, and a domain that ends in one or two labels from a fixed list of
//! top-level-domain spellings. Quoted local parts and internationalized
//! domains are rejected.

use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled address pattern, shared process-wide.
///
/// Case-insensitive and dot-matches-newline. The pattern is searched for
/// anywhere in the candidate; it is not anchored.
static VALID_EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?is)[a-z0-9]+([-+._][a-z0-9]+){0,2}@.*?(\.(",
        r"a(?:[cdefgilmnoqrstuwxz]|ero|(?:rp|si)a)",
        r"|b(?:[abdefghijmnorstvwyz]iz)",
        r"|c(?:[acdfghiklmnoruvxyz]|at|o(?:m|op))",
        r"|d[ejkmoz]",
        r"|e(?:[ceghrstu]|du)",
        r"|f[ijkmor]",
        r"|g(?:[abdefghilmnpqrstuwy]|ov)",
        r"|h[kmnrtu]",
        r"|i(?:[delmnoqrst]|n(?:fo|t))",
        r"|j(?:[emop]|obs)",
        r"|k[eghimnprwyz]",
        r"|l[abcikrstuvy]",
        r"|m(?:[acdeghklmnopqrstuvwxyz]|il|obi|useum)",
        r"|n(?:[acefgilopruz]|ame|et)",
        r"|o(?:m|rg)",
        r"|p(?:[aefghklmnrstwy]|ro)",
        r"|qa",
        r"|r[eosuw]",
        r"|s[abcdeghijklmnortuvyz]",
        r"|t(?:[cdfghjklmnoprtvwz]|(?:rav)?el)",
        r"|u[agkmsyz]",
        r"|v[aceginu]",
        r"|w[fs]",
        r"|y[etu]",
        r"|z[amw]",
        r")\b){1,2}",
    ))
    .expect("Failed to compile e-mail address regex")
});

/// Returns `true` if an accepted address appears anywhere in `candidate`.
///
/// Callers are expected to trim the candidate first; surrounding text does
/// not prevent a match.
pub fn contains_valid_address(candidate: &str) -> bool {
    VALID_EMAIL_REGEX.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        assert!(contains_valid_address("user@example.com"));
        assert!(contains_valid_address("a@b.com"));
        assert!(contains_valid_address("first.last@example.org"));
        assert!(contains_valid_address("user.name+tag@example.co.uk"));
        assert!(contains_valid_address("dev_ops@mail.example.net"));
        assert!(contains_valid_address("someone@museum.museum"));
        assert!(contains_valid_address("x1@host.info"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(contains_valid_address("USER@EXAMPLE.COM"));
        assert!(contains_valid_address("Mixed.Case@Example.Org"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!contains_valid_address("not-an-email"));
        assert!(!contains_valid_address("user@domain"));
        assert!(!contains_valid_address("@example.com"));
        assert!(!contains_valid_address("user@"));
        assert!(!contains_valid_address("a@b.c"));
    }

    #[test]
    fn test_rejects_unlisted_tld() {
        assert!(!contains_valid_address("user@example.xyz"));
        assert!(!contains_valid_address("user@example.qq"));
    }

    #[test]
    fn test_local_part_suffix_is_enough() {
        // Only the trailing run of the local part has to fit the shape.
        assert!(contains_valid_address("a.b.c.d@example.com"));
        assert!(contains_valid_address("a..b@example.com"));
    }

    #[test]
    fn test_rejects_separator_before_at() {
        assert!(!contains_valid_address("user.@example.com"));
        assert!(!contains_valid_address("user-@example.com"));
    }

    #[test]
    fn test_rejects_non_ascii_local_part() {
        assert!(!contains_valid_address("jos\u{e9}@example.com"));
    }

    #[test]
    fn test_match_is_unanchored() {
        assert!(contains_valid_address("Alice <alice@example.com>"));
        assert!(contains_valid_address("mailto:bob@example.com"));
        assert!(contains_valid_address("user@@example.com"));
    }

    #[test]
    fn test_tld_requires_word_boundary() {
        assert!(!contains_valid_address("user@example.comx"));
        assert!(contains_valid_address("user@example.com-"));
    }
}
