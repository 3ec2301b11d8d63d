//! Short code generation and validation utilities.
//!
//! Codes are drawn uniformly from a fixed alphabet using a cryptographically
//! secure RNG, so live codes cannot be predicted or enumerated.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use serde_json::json;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Alphabet for generated codes.
///
/// Excludes characters that are easily confused when read aloud or retyped
/// (the digit zero vs. `O`, the digit one vs. `l` vs. `I`).
pub const ALPHABET: &str = "ABCDEFGHJKMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz23456789";

/// Length used for newly generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Inclusive bounds accepted by [`generate_code`].
pub const MIN_CODE_LENGTH: usize = 1;
pub const MAX_CODE_LENGTH: usize = 20;

/// Accepted short-code shape at the HTTP boundary.
///
/// Wider than the generation alphabet so codes created by earlier deployments
/// with `_` or `-` keep resolving.
static CODE_PARAM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{4,20}$").unwrap());

fn random_alphabet_char<R: Rng>(rng: &mut R) -> char {
    let bytes = ALPHABET.as_bytes();
    bytes[rng.random_range(0..bytes.len())] as char
}

/// Generates a random short code of the given length.
///
/// Each position is an independent uniform draw from [`ALPHABET`] using
/// `rand::rng()`, a CSPRNG reseeded from the operating system.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if `length` is outside
/// [`MIN_CODE_LENGTH`]..=[`MAX_CODE_LENGTH`].
pub fn generate_code(length: usize) -> Result<String, AppError> {
    if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&length) {
        return Err(AppError::bad_request(
            "Code length must be between 1 and 20 characters",
            json!({ "length": length }),
        ));
    }

    let mut rng = rand::rng();
    Ok((0..length).map(|_| random_alphabet_char(&mut rng)).collect())
}

/// Generates `count` distinct codes of the given length.
///
/// Duplicate draws are discarded and sampling continues until the requested
/// number of distinct codes is reached.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if `length` is out of range.
pub fn generate_distinct_codes(count: usize, length: usize) -> Result<Vec<String>, AppError> {
    let mut seen = HashSet::with_capacity(count);
    let mut codes = Vec::with_capacity(count);

    while codes.len() < count {
        let code = generate_code(length)?;
        if seen.insert(code.clone()) {
            codes.push(code);
        }
    }

    Ok(codes)
}

/// Returns true if `code` is non-empty and uses only [`ALPHABET`] characters.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| ALPHABET.contains(c))
}

/// Strips every character not present in [`ALPHABET`].
pub fn sanitize_code(input: &str) -> String {
    input.chars().filter(|c| ALPHABET.contains(*c)).collect()
}

/// Generates a code following a template.
///
/// Every `X` is replaced with a random alphabet draw; all other characters
/// pass through unchanged.
pub fn generate_from_template(template: &str) -> String {
    let mut rng = rand::rng();
    template
        .chars()
        .map(|c| {
            if c == 'X' {
                random_alphabet_char(&mut rng)
            } else {
                c
            }
        })
        .collect()
}

/// Validates a short code received as a path parameter.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the code is not 4-20 characters of
/// `[A-Za-z0-9_-]`.
pub fn validate_code_param(code: &str) -> Result<(), AppError> {
    if CODE_PARAM_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(AppError::bad_request(
            "Short code must be 4-20 characters of letters, numbers, hyphens, and underscores",
            json!({ "code": code }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_code_has_requested_length() {
        for length in MIN_CODE_LENGTH..=MAX_CODE_LENGTH {
            let code = generate_code(length).unwrap();
            assert_eq!(code.len(), length);
        }
    }

    #[test]
    fn test_generate_code_uses_alphabet_only() {
        let code = generate_code(DEFAULT_CODE_LENGTH).unwrap();
        assert!(code.chars().all(|c| ALPHABET.contains(c)));
    }

    #[test]
    fn test_generate_code_rejects_zero_length() {
        let result = generate_code(0);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            AppError::Validation { .. }
        ));
    }

    #[test]
    fn test_generate_code_rejects_excessive_length() {
        assert!(generate_code(21).is_err());
    }

    #[test]
    fn test_generate_code_is_unpredictable() {
        let mut codes = HashSet::new();
        for _ in 0..100 {
            codes.insert(generate_code(DEFAULT_CODE_LENGTH).unwrap());
        }
        // Collisions at length 6 are astronomically unlikely; allow a handful
        // anyway so the test never flakes.
        assert!(codes.len() >= 95, "only {} distinct codes", codes.len());
    }

    #[test]
    fn test_generate_distinct_codes_returns_exact_count() {
        let codes = generate_distinct_codes(50, 6).unwrap();
        assert_eq!(codes.len(), 50);

        let unique: HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn test_generate_distinct_codes_dedupes_small_space() {
        // Length 1 over a 55-character alphabet forces repeated draws.
        let codes = generate_distinct_codes(20, 1).unwrap();
        let unique: HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn test_is_valid_code() {
        assert!(is_valid_code("AbCdE2"));
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("with space"));
        assert!(!is_valid_code("zero0"));
        assert!(!is_valid_code("one1"));
        assert!(!is_valid_code("ell-l"));
    }

    #[test]
    fn test_sanitize_code_strips_disallowed_characters() {
        assert_eq!(sanitize_code("Ab!0Cd 1O#l"), "AbCd");
        assert_eq!(sanitize_code(""), "");
        assert_eq!(sanitize_code("0O1lI"), "");
    }

    #[test]
    fn test_generate_from_template_replaces_placeholders() {
        let code = generate_from_template("promo-XXXX");
        assert_eq!(code.len(), 10);
        assert!(code.starts_with("promo-"));
        assert!(code[6..].chars().all(|c| ALPHABET.contains(c)));
    }

    #[test]
    fn test_generate_from_template_passthrough() {
        assert_eq!(generate_from_template("static"), "static");
        assert_eq!(generate_from_template(""), "");
    }

    #[test]
    fn test_validate_code_param() {
        assert!(validate_code_param("AbCdE2").is_ok());
        assert!(validate_code_param("with_underscore-ok").is_ok());
        assert!(validate_code_param("abc").is_err());
        assert!(validate_code_param("a".repeat(21).as_str()).is_err());
        assert!(validate_code_param("bad!char").is_err());
    }
}
