//! Command-line interface for cobol-ast
//!
//! Parses one fixed-format COBOL file and writes its parse tree next to it.
//!
//! Usage:
//!   cobol-ast `<input.cbl>` [--comments enable|disable] [--config `<file>`] [--format tree|json] [-v]
//!
//! The tree lands in `<input dir>/<input stem> AST.txt`. User-facing messages go to
//! stdout/stderr directly; `-v` (or `RUST_LOG`) turns on tracing output on stderr.

mod error;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use cobol_config::{CobolConfig, Loader};
use cobol_parser::cobol::formats::render;
use cobol_parser::cobol::loader::SourceLoader;
use cobol_parser::cobol::transforms::standard::tree_pipeline;
use error::CliError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("cobol-ast")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a parse tree from a fixed-format COBOL source file")
        .arg(
            Arg::new("input")
                .help("Path to the COBOL source file (.cbl)")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("comments")
                .long("comments")
                .help("Remove comments before parsing (enable) or parse the source as is (disable)")
                .value_parser(["enable", "disable"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Additional TOML configuration file layered over the defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format of the tree file")
                .value_parser(["tree", "json"]),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline details to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(output) => println!("AST generated successfully: {}", output.display()),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `-v`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<CobolConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if let Some(handling) = matches.get_one::<String>("comments") {
        loader = loader.set_override("comments.handling", handling.as_str())?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    Ok(loader.build()?)
}

fn run(matches: &ArgMatches) -> Result<PathBuf, CliError> {
    let input = matches
        .get_one::<PathBuf>("input")
        .cloned()
        .unwrap_or_default();

    if !input.is_file() {
        return Err(CliError::MissingInput(input));
    }

    let config = load_config(matches)?;
    if !config.input.matches(&input) {
        eprintln!(
            "Warning: Input file should have .{} extension",
            config.input.extension
        );
    }

    tracing::debug!(
        input = %input.display(),
        handling = config.comments.handling.as_str(),
        strip_metadata = config.comments.strip_metadata,
        format = config.output.format.as_str(),
        "starting run"
    );

    let loader = SourceLoader::from_path(&input)?;
    let pipeline = tree_pipeline(config.comments.handling, config.comments.strip_metadata);
    let tree = loader.with(pipeline)?;
    let rendered = render(&tree, config.output.format)?;

    let output = config.output.path_for(&input);
    write_output(&output, &rendered)?;
    tracing::info!(output = %output.display(), bytes = rendered.len(), "wrote tree");
    Ok(output)
}

fn write_output(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_rejects_unknown_comment_mode() {
        let result = build_cli().try_get_matches_from(["cobol-ast", "a.cbl", "--comments", "maybe"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_input_message() {
        let matches = build_cli().get_matches_from(["cobol-ast", "no/such/file.cbl"]);
        let err = run(&matches).unwrap_err();
        assert_eq!(err.to_string(), "File 'no/such/file.cbl' does not exist");
    }

    #[test]
    fn test_directory_is_not_an_input_file() {
        let matches = build_cli().get_matches_from(["cobol-ast", "."]);
        let err = run(&matches).unwrap_err();
        assert!(matches!(err, CliError::MissingInput(_)));
        assert_eq!(err.to_string(), "File '.' does not exist");
    }

    #[test]
    fn test_overrides_reach_config() {
        let matches = build_cli().get_matches_from([
            "cobol-ast",
            "a.cbl",
            "--comments",
            "enable",
            "--format",
            "json",
        ]);
        let config = load_config(&matches).unwrap();
        assert!(config.comments.handling.is_enabled());
        assert_eq!(config.output.format.as_str(), "json");
    }
}
