use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the arguments from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("adf2md")
        .about("Convert Atlassian Document Format (ADF) JSON to Markdown")
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
                .help("Input file containing ADF JSON")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file for Markdown (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-indent")
                .long("list-indent")
                .help("Spaces used to indent list continuation lines")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("config")
                .long("config")
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "adf2md", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "adf2md", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "adf2md", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
