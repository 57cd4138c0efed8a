//! Filter engine
//!
//! Drives one pass over an input line sequence, ANDing every selected preset
//! predicate (and the optional custom regex) per line, applying inversion,
//! and accumulating the run result. The engine performs no I/O of its own
//! beyond consuming the iterator, which keeps it independently testable.

use crate::error::FilterError;
use crate::presets::{EvalContext, PresetDescriptor};

use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use std::io;

/// Options applying uniformly to one run; never mutated mid-run
#[derive(Debug, Default, Clone)]
pub struct Options {
    /// Case-insensitive matching for regex, dictionary, and common-pattern
    /// comparisons. Character-class presets are unaffected.
    pub case_insensitive: bool,
    /// Keep lines that do NOT satisfy all criteria (like grep -v)
    pub invert: bool,
    /// Word set for the 'in_dictionary' preset
    pub dictionary: Option<HashSet<String>>,
}

/// Accumulated result of one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Non-blank lines evaluated (blank-after-trim lines are never counted)
    pub lines_seen: u64,
    /// Lines retained after inversion
    pub lines_matched: u64,
    /// Retained lines, in original input order
    pub matched: Vec<String>,
}

/// Compile a custom regex pattern, honoring the case-insensitive flag
pub fn compile_pattern(pattern: &str, case_insensitive: bool) -> Result<Regex, FilterError> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| FilterError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })
}

/// Run the combined filter over a lazy line sequence
///
/// Preconditions are checked before the first line is consumed: at least one
/// preset or a regex must be selected, and any dictionary-backed preset must
/// have a dictionary available. Lines that are blank after trimming are
/// skipped entirely: not evaluated, not counted, never emitted. Everything
/// else is evaluated and emitted with its original content intact.
pub fn run<I>(
    lines: I,
    selected: &[&PresetDescriptor],
    custom_regex: Option<&Regex>,
    options: &Options,
) -> Result<RunResult, FilterError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    if selected.is_empty() && custom_regex.is_none() {
        return Err(FilterError::NoFilterSpecified);
    }
    if selected.iter().any(|p| p.requires_dictionary) && options.dictionary.is_none() {
        return Err(FilterError::MissingDictionary);
    }

    // Normalize the dictionary once so per-line lookups stay O(1)
    let lowered_dict: Option<HashSet<String>> =
        match (&options.dictionary, options.case_insensitive) {
            (Some(dict), true) => Some(dict.iter().map(|w| w.to_lowercase()).collect()),
            _ => None,
        };
    let ctx = EvalContext {
        case_insensitive: options.case_insensitive,
        dictionary: lowered_dict.as_ref().or(options.dictionary.as_ref()),
    };

    let mut result = RunResult::default();

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        result.lines_seen += 1;

        let mut matched = selected.iter().all(|p| p.matches(&line, &ctx));
        if matched {
            if let Some(rx) = custom_regex {
                matched = rx.is_match(&line);
            }
        }
        if options.invert {
            matched = !matched;
        }

        if matched {
            result.lines_matched += 1;
            result.matched.push(line);
        }
    }

    Ok(result)
}
