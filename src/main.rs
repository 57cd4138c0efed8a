//! pwfilter - password wordlist filtering for penetration testing
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use pwfilter::cli::Args;
use pwfilter::dictionary;
use pwfilter::filter::{self, Options};
use pwfilter::input::LineReader;
use pwfilter::output::OutputSink;
use pwfilter::presets::{PresetDescriptor, PresetRegistry};
use pwfilter::report::{print_error, print_preset_table, print_summary, print_warning};

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let registry = PresetRegistry::new();

    if args.list_presets {
        print_preset_table(&registry);
        return Ok(());
    }

    // Resolve presets up front so a bad identifier fails before any I/O.
    // Duplicates collapse to one evaluation.
    let mut selected: Vec<&PresetDescriptor> = Vec::new();
    for identifier in &args.presets {
        let descriptor = registry.resolve(identifier)?;
        if !selected
            .iter()
            .any(|p| p.short_id == descriptor.short_id)
        {
            selected.push(descriptor);
        }
    }

    let custom_regex = args
        .regex
        .as_deref()
        .map(|p| filter::compile_pattern(p, args.case_insensitive))
        .transpose()?;

    let wants_dictionary = selected.iter().any(|p| p.requires_dictionary);
    let dictionary = match (&args.dictionary_file, wants_dictionary) {
        (Some(path), true) => Some(dictionary::load(path)?),
        (Some(_), false) => {
            print_warning(
                "--dictionary-file is provided but the 'in_dictionary' (dict) preset is not selected; it will be ignored",
            );
            None
        }
        (None, _) => None,
    };

    let options = Options {
        case_insensitive: args.case_insensitive,
        invert: args.invert,
        dictionary,
    };

    let lines = if args.reads_stdin() {
        LineReader::stdin()
    } else {
        // Presence enforced by clap when --list-presets is absent
        let path = args
            .wordlist
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("no wordlist path provided"))?;
        LineReader::open(path)?
    };

    log::debug!(
        "running with {} presets, regex: {}, invert: {}, case_insensitive: {}",
        selected.len(),
        custom_regex.is_some(),
        options.invert,
        options.case_insensitive
    );

    let result = filter::run(lines, &selected, custom_regex.as_ref(), &options)?;

    // Open the sink only now: a failed run must not leave partial output
    let mut sink = match &args.output {
        Some(path) => OutputSink::file(path)?,
        None => OutputSink::stdout(),
    };
    for line in &result.matched {
        sink.write_line(line)?;
    }
    sink.flush()?;

    if !args.quiet {
        print_summary(&result, &sink.describe());
    }

    Ok(())
}
