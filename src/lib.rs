//! # pwfilter
//!
//! Password wordlist filtering tool for penetration testing.
//!
//! ## Features
//!
//! - **Policy presets**: named predicates like minimum length, character
//!   classes, and strong-password compounds, combinable via logical AND
//! - **Custom regex**: filter by an arbitrary pattern, optionally
//!   case-insensitive
//! - **Dictionary membership**: keep (or with `--invert`, drop) passwords
//!   found in a supplied dictionary file
//! - **Inverted matching**: select the lines that do NOT satisfy the
//!   criteria, like `grep -v`
//!
//! ## Usage
//!
//! ```bash
//! # Keep strong passwords (min 8 chars, all character types)
//! pwfilter rockyou.txt --presets s8all -o strong.txt
//!
//! # At least 12 chars, with uppercase and digit
//! pwfilter rockyou.txt --presets ml12 upper digit
//!
//! # Custom regex
//! pwfilter rockyou.txt --regex '^[a-z]{4}[0-9]{4}$'
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pwfilter::filter::{self, Options};
//! use pwfilter::presets::PresetRegistry;
//!
//! let registry = PresetRegistry::new();
//! let strong = registry.resolve("s8all").unwrap();
//!
//! let lines = ["abc12345", "ABC12345!"]
//!     .into_iter()
//!     .map(|l| Ok(l.to_string()));
//! let result = filter::run(lines, &[strong], None, &Options::default()).unwrap();
//!
//! assert_eq!(result.matched, vec!["ABC12345!"]);
//! ```

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod filter;
pub mod input;
pub mod output;
pub mod presets;
pub mod report;

pub use cli::Args;
pub use error::FilterError;
pub use filter::{Options, RunResult};
pub use presets::{PresetDescriptor, PresetRegistry};
