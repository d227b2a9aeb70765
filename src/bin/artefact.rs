//! Command-line interface for artefact
//! This binary renders artefact documents and exposes the intermediate stages for inspection.
//!
//! Usage:
//!   artefact render `<path>` [--format `<format>`]  - Render to html or markdown
//!   artefact tokens `<path>`                      - Print the token sequence as JSON
//!   artefact ast `<path>` [--format json|yaml]    - Print the document tree
//!   artefact check `<path>`                       - Report diagnostics and validation issues
//!   artefact list-formats                       - List the available output formats
//!
//! Every command accepts `--config <file>`, layered over the built-in defaults.

use artefact::artefact::config::{ArtefactConfig, Loader};
use artefact::artefact::pipeline::Pipeline;
use artefact::artefact::validation::{default_rules, validate_document};
use clap::{Arg, ArgMatches, Command};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("artefact")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render and inspect artefact documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .subcommand(
            Command::new("render")
                .about("Render a document to html or markdown")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'html', 'markdown'); defaults to render.format"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token sequence as JSON")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("ast")
                .about("Print the document tree")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Serialization of the tree")
                        .value_parser(["json", "yaml"])
                        .default_value("json"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report lexer, parser and validation issues")
                .arg(path_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    let config = load_config(&matches);
    init_logging(&config);

    let pipeline = Pipeline::new();
    match matches.subcommand() {
        Some(("render", render_matches)) => {
            let source = read_source(render_matches);
            let format = render_matches
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or_else(|| config.render.format.name());
            handle_render_command(&pipeline, &source, format);
        }
        Some(("tokens", tokens_matches)) => {
            let source = read_source(tokens_matches);
            let report = pipeline.inspect(&source);
            print_json(&report.tokens, config.inspect.pretty);
        }
        Some(("ast", ast_matches)) => {
            let source = read_source(ast_matches);
            let format = ast_matches
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or("json");
            handle_ast_command(&pipeline, &source, format, config.inspect.pretty);
        }
        Some(("check", check_matches)) => {
            let source = read_source(check_matches);
            handle_check_command(&pipeline, &source, &config);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command(&pipeline);
        }
        _ => unreachable!(),
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the artefact file")
        .required(true)
        .index(1)
}

fn load_config(matches: &ArgMatches) -> ArtefactConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    })
}

/// RUST_LOG wins over the configured level
fn init_logging(config: &ArtefactConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_source(matches: &ArgMatches) -> String {
    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T, pretty: bool) {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the render command
fn handle_render_command(pipeline: &Pipeline, source: &str, format: &str) {
    let output = pipeline.convert(source, format).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    println!("{}", output);
}

/// Handle the ast command
fn handle_ast_command(pipeline: &Pipeline, source: &str, format: &str, pretty: bool) {
    let snapshot = pipeline.inspect(source).document.snapshot();
    match format {
        "yaml" => match serde_yaml::to_string(&snapshot) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            }
        },
        _ => print_json(&snapshot, pretty),
    }
}

/// Handle the check command; exits with status 1 when anything is reported
fn handle_check_command(pipeline: &Pipeline, source: &str, config: &ArtefactConfig) {
    let report = pipeline.inspect(source);
    let rules = default_rules(&report.document, config.check.max_heading_length);
    let issues = validate_document(&report.document, &rules);

    for error in &report.lexer_errors {
        println!("{}", error);
    }
    for error in &report.parser_errors {
        println!("{}", error);
    }
    for issue in &issues {
        println!("{}", issue);
    }

    if report.has_errors() || !issues.is_empty() {
        std::process::exit(1);
    }
    println!("No issues found");
}

/// Handle the list-formats command
fn handle_list_formats_command(pipeline: &Pipeline) {
    println!("Available formats:\n");
    for name in pipeline.registry().list_formats() {
        if let Ok(format) = pipeline.registry().get(&name) {
            println!("  {}", name);
            println!("    {}", format.description());
            println!("    extensions: {}", format.file_extensions().join(", "));
        }
    }
}
