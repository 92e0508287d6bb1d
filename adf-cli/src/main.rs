// Command-line interface for adf2md
//
// This binary converts Atlassian Document Format (ADF) JSON documents to Markdown.
// The conversion itself lives in the adf-markdown crate; this crate only deals with the shell:
// picking the input, layering configuration, writing the output and reporting failures.
//
// Usage:
//  adf2md -i <file> [-o <file>]          - Convert a file
//  adf2md '<json>' [-o <file>]           - Convert a document passed as argument
//  cat doc.json | adf2md [-o <file>]     - Convert stdin
//  adf2md -v                             - Print the version
//
// Configuration:
//
// Defaults are layered with ./adf2md.toml (when present) and the file given with --config.
// Command-line flags such as --list-indent override everything else.

mod input;

use adf_config::{Adf2mdConfig, Loader, CONFIG_FILE_NAME};
use adf_markdown::{parse_document, RenderOptions, Renderer};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use input::InputSource;
use std::fs;
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("adf2md")
        .about("Convert Atlassian Document Format (ADF) JSON to Markdown")
        .long_about(
            "adf2md renders ADF documents, the JSON rich-text format used by Jira and\n\
            Confluence, as Markdown.\n\n\
            Input is taken from --input, else from the positional argument, else from stdin.\n\
            Output goes to stdout unless --output is given.\n\n\
            Examples:\n  \
            adf2md -i page.json                   # Convert a file to stdout\n  \
            adf2md -i page.json -o page.md        # Convert a file to a file\n  \
            cat page.json | adf2md                # Convert stdin\n  \
            adf2md --list-indent 4 -i page.json   # Wider nested lists",
        )
        .disable_version_flag(true)
        .arg(
            Arg::new("document")
                .help("ADF JSON document (read from stdin when omitted)")
                .index(1)
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("PATH")
                .help("Input file containing ADF JSON")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .help("Output file for Markdown (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-indent")
                .long("list-indent")
                .value_name("SPACES")
                .help("Spaces used to indent list continuation lines")
                .long_help(
                    "Number of spaces prefixed to continuation lines of list, task and\n\
                    decision items, including nested lists.\n\n\
                    Overrides render.list_indent from the configuration (default 2).",
                )
                .value_parser(clap::value_parser!(usize))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an adf2md.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Log debug information to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('v')
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        println!("adf2md version {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    init_logging(matches.get_flag("verbose"));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &matches);

    let source = InputSource::resolve(
        matches.get_one::<String>("input").map(|s| s.as_str()),
        matches.get_one::<String>("document").map(|s| s.as_str()),
    );
    let output = matches.get_one::<String>("output").map(|s| s.as_str());

    handle_convert_command(source, RenderOptions::from(&config.render), output);
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the conversion: read, parse, render, write
fn handle_convert_command(source: InputSource, options: RenderOptions, output: Option<&str>) {
    let origin = source.to_string();
    tracing::debug!(input = %origin, list_indent = options.list_indent, "converting");

    let text = source.read().unwrap_or_else(|e| {
        eprintln!("Error reading input from {origin}: {e}");
        std::process::exit(1);
    });

    let doc = parse_document(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing ADF: {e}");
        std::process::exit(1);
    });

    let markdown = Renderer::new(options)
        .render(Some(&doc))
        .unwrap_or_else(|e| {
            eprintln!("Error rendering Markdown: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, markdown).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            tracing::debug!(output = path, "wrote Markdown");
        }
        None => print!("{markdown}"),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> Adf2mdConfig {
    let loader = Loader::new().with_optional_file(CONFIG_FILE_NAME);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut Adf2mdConfig, matches: &ArgMatches) {
    if let Some(indent) = matches.get_one::<usize>("list-indent") {
        config.render.list_indent = *indent;
    }
}
