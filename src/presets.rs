//! Preset registry
//!
//! A preset is a named, pure boolean predicate over a candidate password.
//! Each descriptor is reachable by a short id ("ml8") or a long name
//! ("min_length_8"); both resolve to the same entry. The registry is built
//! once at startup and never mutated.

use crate::error::FilterError;
use std::collections::HashSet;

/// Special characters recognised by the `special` family of presets
pub const SPECIAL_CHARS: &str = r##"!@#$%^&*()_+-=[]{};':"\|,.<>/?~`"##;

/// Weak substrings checked by the `contains_common_pattern` preset
pub const COMMON_PATTERNS: &[&str] = &[
    "password", "123456", "qwerty", "letmein", "admin", "welcome",
];

/// Shared read-only context handed to every predicate
///
/// Built by the filter engine once per run. The dictionary, when present,
/// has already been lower-cased if `case_insensitive` is set.
#[derive(Debug, Default)]
pub struct EvalContext<'a> {
    pub case_insensitive: bool,
    pub dictionary: Option<&'a HashSet<String>>,
}

type PredicateFn = fn(&str, &EvalContext) -> bool;

/// An immutable preset descriptor
#[derive(Debug, Clone, Copy)]
pub struct PresetDescriptor {
    pub short_id: &'static str,
    pub long_name: &'static str,
    pub description: &'static str,
    /// Requesting this preset without a dictionary is a setup error,
    /// caught before any input is consumed.
    pub requires_dictionary: bool,
    predicate: PredicateFn,
}

impl PresetDescriptor {
    /// Evaluate this preset's predicate against one line
    #[inline]
    pub fn matches(&self, line: &str, ctx: &EvalContext) -> bool {
        (self.predicate)(line, ctx)
    }
}

const fn preset(
    short_id: &'static str,
    long_name: &'static str,
    description: &'static str,
    predicate: PredicateFn,
) -> PresetDescriptor {
    PresetDescriptor {
        short_id,
        long_name,
        description,
        requires_dictionary: false,
        predicate,
    }
}

/// Declaration-order table of every preset
///
/// Uniqueness of both keys is asserted by tests; resolve() relies on it.
static PRESETS: &[PresetDescriptor] = &[
    preset(
        "ml8",
        "min_length_8",
        "Passwords with a minimum length of 8 characters.",
        |l, _| min_length(l, 8),
    ),
    preset(
        "ml12",
        "min_length_12",
        "Passwords with a minimum length of 12 characters.",
        |l, _| min_length(l, 12),
    ),
    preset(
        "upper",
        "has_uppercase",
        "Passwords containing at least one uppercase letter.",
        |l, _| has_uppercase(l),
    ),
    preset(
        "lower",
        "has_lowercase",
        "Passwords containing at least one lowercase letter.",
        |l, _| has_lowercase(l),
    ),
    preset(
        "digit",
        "has_digit",
        "Passwords containing at least one digit.",
        |l, _| has_digit(l),
    ),
    preset(
        "special",
        "has_special_char",
        "Passwords containing at least one special character.",
        |l, _| has_special_char(l),
    ),
    preset(
        "consec",
        "has_consecutive_repeated_chars",
        "Passwords with consecutive repeated characters (use --invert to exclude these).",
        |l, _| has_consecutive_repeated_chars(l),
    ),
    preset(
        "common",
        "contains_common_pattern",
        "Passwords containing a well-known weak substring like 'password' or 'qwerty'.",
        contains_common_pattern,
    ),
    PresetDescriptor {
        short_id: "dict",
        long_name: "in_dictionary",
        description: "Passwords found in the provided dictionary file (requires --dictionary-file).",
        requires_dictionary: true,
        predicate: in_dictionary,
    },
    preset(
        "s8all",
        "strong_8_plus_all_types",
        "Min 8 chars, 1 lower, 1 upper, 1 digit, 1 special.",
        |l, _| strong(l, 8),
    ),
    preset(
        "s12all",
        "strong_12_plus_all_types",
        "Min 12 chars, 1 lower, 1 upper, 1 digit, 1 special.",
        |l, _| strong(l, 12),
    ),
    preset(
        "s10lud",
        "strong_10_plus_lud",
        "Min 10 chars, at least 1 lower, 1 upper, 1 digit.",
        |l, _| min_length(l, 10) && has_lowercase(l) && has_uppercase(l) && has_digit(l),
    ),
    preset(
        "onlylow",
        "only_lowercase",
        "Passwords consisting only of lowercase letters.",
        |l, _| only(l, |c| c.is_ascii_lowercase()),
    ),
    preset(
        "onlyup",
        "only_uppercase",
        "Passwords consisting only of uppercase letters.",
        |l, _| only(l, |c| c.is_ascii_uppercase()),
    ),
    preset(
        "onlydig",
        "only_digits",
        "Passwords consisting only of digits.",
        |l, _| only(l, |c| c.is_ascii_digit()),
    ),
    preset(
        "onlyalpha",
        "only_alphabetic",
        "Passwords consisting only of alphabetic characters.",
        |l, _| only(l, |c| c.is_ascii_alphabetic()),
    ),
    preset(
        "onlyalnum",
        "only_alphanumeric",
        "Passwords consisting only of alphanumeric characters.",
        |l, _| only(l, |c| c.is_ascii_alphanumeric()),
    ),
    preset(
        "startlet",
        "starts_with_letter",
        "Passwords starting with an alphabetic character.",
        |l, _| l.chars().next().is_some_and(|c| c.is_ascii_alphabetic()),
    ),
    preset(
        "enddig",
        "ends_with_digit",
        "Passwords ending with a digit.",
        |l, _| l.chars().last().is_some_and(|c| c.is_ascii_digit()),
    ),
    preset(
        "nodig",
        "no_digits",
        "Passwords containing no digits.",
        |l, _| !has_digit(l),
    ),
    preset(
        "nolet",
        "no_letters",
        "Passwords containing no letters (alphabetic characters).",
        |l, _| !l.chars().any(|c| c.is_ascii_alphabetic()),
    ),
];

/// Immutable registry of preset descriptors
///
/// Keeping this behind a value (rather than ambient statics) lets the engine
/// be tested with a custom table.
#[derive(Debug, Clone, Copy)]
pub struct PresetRegistry {
    table: &'static [PresetDescriptor],
}

impl PresetRegistry {
    /// Registry over the built-in preset table
    pub fn new() -> Self {
        Self { table: PRESETS }
    }

    /// Resolve a short id or long name to its descriptor (exact,
    /// case-sensitive match)
    pub fn resolve(&self, identifier: &str) -> Result<&'static PresetDescriptor, FilterError> {
        self.table
            .iter()
            .find(|p| p.short_id == identifier || p.long_name == identifier)
            .ok_or_else(|| FilterError::UnknownPreset(identifier.to_string()))
    }

    /// All descriptors, in declaration order
    pub fn list_all(&self) -> &'static [PresetDescriptor] {
        self.table
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// -- Predicate implementations ------------------------------------------------
//
// All pure. Character classes are ASCII-based; lengths count Unicode scalar
// values. Case classification never honors case_insensitive -- only the
// dictionary and common-pattern comparisons do.

#[inline]
fn min_length(line: &str, n: usize) -> bool {
    // Byte length is the char count for ASCII, which is the common case
    if line.is_ascii() {
        line.len() >= n
    } else {
        line.chars().count() >= n
    }
}

#[inline]
fn has_uppercase(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_uppercase())
}

#[inline]
fn has_lowercase(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_lowercase())
}

#[inline]
fn has_digit(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_digit())
}

#[inline]
fn has_special_char(line: &str) -> bool {
    line.chars().any(|c| SPECIAL_CHARS.contains(c))
}

#[inline]
fn has_consecutive_repeated_chars(line: &str) -> bool {
    let mut chars = line.chars();
    let mut prev = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    for c in chars {
        if c == prev {
            return true;
        }
        prev = c;
    }
    false
}

fn contains_common_pattern(line: &str, ctx: &EvalContext) -> bool {
    if ctx.case_insensitive {
        let haystack = line.to_lowercase();
        COMMON_PATTERNS.iter().any(|p| haystack.contains(p))
    } else {
        COMMON_PATTERNS.iter().any(|p| line.contains(p))
    }
}

fn in_dictionary(line: &str, ctx: &EvalContext) -> bool {
    // The engine guarantees a dictionary is present whenever this preset is
    // selected; an absent one here simply never matches.
    let Some(dict) = ctx.dictionary else {
        return false;
    };
    if ctx.case_insensitive {
        dict.contains(&line.to_lowercase())
    } else {
        dict.contains(line)
    }
}

#[inline]
fn strong(line: &str, n: usize) -> bool {
    min_length(line, n)
        && has_uppercase(line)
        && has_lowercase(line)
        && has_digit(line)
        && has_special_char(line)
}

#[inline]
fn only(line: &str, class: impl Fn(char) -> bool) -> bool {
    !line.is_empty() && line.chars().all(class)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> EvalContext<'static> {
        EvalContext::default()
    }

    fn eval(identifier: &str, line: &str) -> bool {
        let registry = PresetRegistry::new();
        registry.resolve(identifier).unwrap().matches(line, &ctx())
    }

    #[test]
    fn test_resolve_by_short_id_and_long_name() {
        let registry = PresetRegistry::new();
        let by_id = registry.resolve("ml8").unwrap();
        let by_name = registry.resolve("min_length_8").unwrap();
        assert_eq!(by_id.short_id, by_name.short_id);
        assert_eq!(by_id.long_name, "min_length_8");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = PresetRegistry::new();
        assert!(matches!(
            registry.resolve("ML8"),
            Err(FilterError::UnknownPreset(id)) if id == "ML8"
        ));
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = PresetRegistry::new();
        assert!(matches!(
            registry.resolve("nope"),
            Err(FilterError::UnknownPreset(id)) if id == "nope"
        ));
    }

    #[test]
    fn test_keys_are_unique() {
        let registry = PresetRegistry::new();
        let mut keys = HashSet::new();
        for p in registry.list_all() {
            assert!(keys.insert(p.short_id), "duplicate short id {}", p.short_id);
            assert!(keys.insert(p.long_name), "duplicate long name {}", p.long_name);
        }
    }

    #[test]
    fn test_list_all_is_declaration_order() {
        let registry = PresetRegistry::new();
        let all = registry.list_all();
        assert_eq!(all.first().unwrap().short_id, "ml8");
        assert_eq!(all.last().unwrap().short_id, "nolet");
    }

    #[test]
    fn test_min_length() {
        assert!(eval("ml8", "password"));
        assert!(!eval("ml8", "pass"));
        assert!(eval("ml12", "verylongpassword"));
        assert!(!eval("ml12", "password"));
    }

    #[test]
    fn test_min_length_counts_chars_not_bytes() {
        // 8 chars, more than 8 bytes
        assert!(eval("ml8", "pässwörd"));
        assert!(!eval("ml12", "pässwörd"));
    }

    #[test]
    fn test_character_classes() {
        assert!(eval("upper", "Password"));
        assert!(!eval("upper", "password"));
        assert!(eval("lower", "PASSWORd"));
        assert!(!eval("lower", "PASSWORD"));
        assert!(eval("digit", "pass1"));
        assert!(!eval("digit", "pass"));
        assert!(eval("special", "pass!"));
        assert!(!eval("special", "pass1"));
    }

    #[test]
    fn test_consecutive_repeated_chars() {
        assert!(eval("consec", "aabbcc"));
        assert!(eval("consec", "xyzz"));
        assert!(!eval("consec", "abcabc"));
        assert!(!eval("consec", "a"));
    }

    #[test]
    fn test_common_pattern() {
        assert!(eval("common", "mypassword1"));
        assert!(eval("common", "qwerty99"));
        assert!(!eval("common", "MyPassword1")); // case-sensitive by default

        let registry = PresetRegistry::new();
        let p = registry.resolve("common").unwrap();
        let ci = EvalContext {
            case_insensitive: true,
            dictionary: None,
        };
        assert!(p.matches("MyPASSWORD1", &ci));
    }

    #[test]
    fn test_in_dictionary() {
        let registry = PresetRegistry::new();
        let p = registry.resolve("dict").unwrap();
        assert!(p.requires_dictionary);

        let dict: HashSet<String> = ["secret".to_string(), "hunter2".to_string()].into();
        let ctx = EvalContext {
            case_insensitive: false,
            dictionary: Some(&dict),
        };
        assert!(p.matches("secret", &ctx));
        assert!(!p.matches("Secret", &ctx));
        assert!(!p.matches("other", &ctx));

        // No dictionary at all: never matches
        assert!(!p.matches("secret", &EvalContext::default()));
    }

    #[test]
    fn test_strong_presets() {
        assert!(eval("s8all", "Abcdef1!"));
        assert!(!eval("s8all", "abcdef1!")); // no uppercase
        assert!(!eval("s8all", "Abcde1!")); // too short
        assert!(eval("s12all", "Abcdefghij1!"));
        assert!(eval("s10lud", "Abcdefghi1"));
        assert!(!eval("s10lud", "abcdefghi1"));
    }

    #[test]
    fn test_only_classes() {
        assert!(eval("onlylow", "password"));
        assert!(!eval("onlylow", "Password"));
        assert!(eval("onlyup", "PASSWORD"));
        assert!(eval("onlydig", "123456"));
        assert!(!eval("onlydig", "123a"));
        assert!(eval("onlyalpha", "PassWord"));
        assert!(!eval("onlyalpha", "pass1"));
        assert!(eval("onlyalnum", "pass1"));
        assert!(!eval("onlyalnum", "pass1!"));
    }

    #[test]
    fn test_position_presets() {
        assert!(eval("startlet", "abc123"));
        assert!(!eval("startlet", "1abc"));
        assert!(eval("enddig", "abc1"));
        assert!(!eval("enddig", "1abc"));
    }

    #[test]
    fn test_negative_presets() {
        assert!(eval("nodig", "password!"));
        assert!(!eval("nodig", "pass1"));
        assert!(eval("nolet", "12345!"));
        assert!(!eval("nolet", "1234a"));
    }
}
