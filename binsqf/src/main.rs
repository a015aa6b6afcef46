//! SQF command-line tool for checking question banks and emitting
//! import-ready JSON.
//!
//! Usage: sqf [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --to <FORMAT>      Output format (json, sqf) [default: json]
//!   -o, --output <FILE>    Write output to specified file
//!   --check                Validate only; print every problem, exit 0 if clean
//!   -h, --help             Print help
//!   -V, --version          Print version
//!
//! FILE must have an .sqf extension; "-" or no FILE reads stdin. The json
//! output is the camelCase array the bulk-import endpoint consumes; the sqf
//! output is the canonical re-encoding of the parsed questions.

use libsqf::{encode, parse, validate_messages};
use std::fs;
use std::io::{self, Read, Write};
use std::process;

/// Recognized -t output formats.
fn is_format_name(s: &str) -> bool {
    matches!(s, "json" | "sqf")
}

fn print_help() {
    println!("Usage: sqf [OPTIONS] [FILE]");
    println!();
    println!("Parse an SQF question bank, validate it, and emit it for import.");
    println!();
    println!("Options:");
    println!("  -t, --to <FORMAT>    Output format (json, sqf) [default: json]");
    println!("  -o, --output <FILE>  Write output to specified file");
    println!("  --check              Validate only; print every problem, exit 0 if clean");
    println!("  -h, --help           Print help");
    println!("  -V, --version        Print version");
    println!();
    println!("FILE must have an .sqf extension. \"-\" or no FILE reads stdin.");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut to_format: Option<&str> = None;
    let mut output_file: Option<&str> = None;
    let mut check_only = false;
    let mut input_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("sqf {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-t" | "--to" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: -t requires a format argument");
                    process::exit(1);
                }
                if !is_format_name(&args[i]) {
                    eprintln!("Error: Unknown format: {}", args[i]);
                    process::exit(1);
                }
                to_format = Some(&args[i]);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires an argument");
                    process::exit(1);
                }
                output_file = Some(&args[i]);
            }
            "--check" => {
                check_only = true;
            }
            "-" => {
                // Explicit stdin
                // input_path stays None, which means stdin
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            _ => {
                if input_path.is_some() {
                    eprintln!("Error: Multiple input paths not supported");
                    process::exit(1);
                }
                input_path = Some(&args[i]);
            }
        }
        i += 1;
    }

    let to_format = to_format.unwrap_or("json");

    // Read input. Uploads are gated on the .sqf extension before their text
    // is ever parsed; the same gate applies to file arguments here.
    let (content, input_name) = match input_path {
        Some(path) => {
            if !path.ends_with(".sqf") {
                eprintln!("Error: {}: not an .sqf file", path);
                process::exit(1);
            }
            match fs::read_to_string(path) {
                Ok(content) => (content, path.to_string()),
                Err(e) => {
                    eprintln!("Error: Failed to read {}: {}", path, e);
                    process::exit(1);
                }
            }
        }
        None => {
            let mut content = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut content) {
                eprintln!("Error: Failed to read stdin: {}", e);
                process::exit(1);
            }
            (content, "<stdin>".to_string())
        }
    };

    let questions = parse(&content);

    // An empty result is its own failure, distinct from validation errors
    // on questions that did parse.
    if questions.is_empty() {
        eprintln!("Error: no valid questions found in {}", input_name);
        process::exit(1);
    }

    let problems = validate_messages(&questions);
    if !problems.is_empty() {
        if check_only {
            for problem in &problems {
                eprintln!("{}", problem);
            }
        } else {
            // Same truncation the import endpoint shows authors: the first
            // problem plus a count of the rest.
            if problems.len() > 1 {
                eprintln!(
                    "Error: {} (and {} more problems)",
                    problems[0],
                    problems.len() - 1
                );
            } else {
                eprintln!("Error: {}", problems[0]);
            }
        }
        process::exit(1);
    }

    if check_only {
        println!("ok");
        return;
    }

    let output = match to_format {
        "json" => match serde_json::to_string_pretty(&questions) {
            Ok(json) => json + "\n",
            Err(e) => {
                eprintln!("Error: Failed to serialize questions: {}", e);
                process::exit(1);
            }
        },
        "sqf" => encode(&questions),
        _ => unreachable!("format names are validated during argument parsing"),
    };

    match output_file {
        Some(path) => {
            if let Err(e) = fs::write(path, &output) {
                eprintln!("Error: Failed to write {}: {}", path, e);
                process::exit(1);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            if handle.write_all(output.as_bytes()).is_err() {
                // Broken pipe; nothing useful left to do.
                process::exit(1);
            }
        }
    }
}
