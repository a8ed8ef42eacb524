use std::{env, fs, io};

use ereport::{
    diagnostics::{ColorChoice, Position, Reporter},
    report_error, report_warning,
};

fn main() {
    let mut args: Vec<String> = env::args().collect();
    let verbose = args.iter().any(|arg| arg == "--verbose");
    if verbose {
        args.retain(|arg| arg != "--verbose");
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }
    let color = match extract_color(&mut args) {
        Some(value) => value,
        None => return,
    };
    let position = match extract_position(&mut args) {
        Some(value) => value,
        None => return,
    };
    let program = match extract_value(&mut args, "--program") {
        Some(value) => value,
        None => return,
    };
    let source = match extract_value(&mut args, "--source") {
        Some(value) => value,
        None => return,
    };
    let echo = match extract_value(&mut args, "--echo") {
        Some(value) => value,
        None => return,
    };

    if args.len() < 2 {
        print_help();
        return;
    }

    let mut builder = Reporter::builder().color(color).platform_program_name();
    if let Some(path) = program {
        builder = builder.program_name(path);
    }
    if let Some(path) = source {
        builder = builder.source_name(path);
    }
    let reporter = builder.build();
    if let Some(position) = position {
        reporter.set_position(position);
    }
    if let Some(text) = echo {
        print!("{text}");
    }

    let operand = |index: usize, usage: &str| -> Option<String> {
        let value = args.get(index).cloned();
        if value.is_none() {
            eprintln!("Usage: ereport {}", usage);
        }
        value
    };

    match args[1].as_str() {
        "-h" | "--help" | "help" => print_help(),
        "error" => {
            let Some(msg) = operand(2, "error <message>") else {
                return;
            };
            reporter.error(&msg, format_args!("{msg}"))
        }
        "error-at" => {
            let Some(msg) = operand(2, "error-at <message>") else {
                return;
            };
            reporter.error_at(&msg, format_args!("{msg}"))
        }
        "warn" => {
            let Some(msg) = operand(2, "warn <message>") else {
                return;
            };
            reporter.warning(&msg, format_args!("{msg}"));
        }
        "tag" => {
            let (Some(tag), Some(msg)) = (
                operand(2, "tag <tag> <message>"),
                operand(3, "tag <tag> <message>"),
            ) else {
                return;
            };
            reporter.tagged_at(&tag, &msg, format_args!("{msg}"))
        }
        "alloc" => {
            let Some(size) = parse_size(&reporter, operand(2, "alloc <bytes>")) else {
                return;
            };
            let block = reporter.alloc_or_die(size);
            println!("allocated {} bytes", block.len());
        }
        "alloc-warn" => {
            let Some(size) = parse_size(&reporter, operand(2, "alloc-warn <bytes>")) else {
                return;
            };
            match reporter.alloc_or_warn(size) {
                Some(block) => println!("allocated {} bytes", block.len()),
                None => println!("allocation skipped"),
            }
        }
        "realloc" => {
            let Some(size) = parse_size(&reporter, operand(2, "realloc <bytes>")) else {
                return;
            };
            let block = reporter.realloc_or_die(reporter.alloc_or_die(16), size);
            println!("resized to {} bytes", block.len());
        }
        "strdup" => {
            let Some(text) = operand(2, "strdup <text>") else {
                return;
            };
            let copy = reporter.strdup_or_die(&text);
            println!("{copy}");
        }
        "open" => {
            let Some(path) = operand(2, "open <path>") else {
                return;
            };
            match fs::File::open(&path) {
                Ok(_) => println!("opened {path}"),
                Err(_) => report_error!(reporter, "open of {} failed:", path),
            }
        }
        other => {
            report_warning!(reporter, "unknown command `{}`", other);
            print_help();
        }
    }

    reporter.finish();
}

fn print_help() {
    println!(
        "\
ereport diagnostics driver

Usage:
  ereport error <message>          Report an error and exit with status 2
  ereport error-at <message>       Report an error at --at and exit with status 2
  ereport warn <message>           Report a warning and continue
  ereport tag <tag> <message>      Report a tagged error at --at and exit with status 3
  ereport alloc <bytes>            Allocate or die
  ereport alloc-warn <bytes>       Allocate or warn
  ereport realloc <bytes>          Resize a 16-byte block or die
  ereport strdup <text>            Duplicate a string or die
  ereport open <path>              Open a file, reporting the OS error on failure

Messages ending in ':' are completed with the last OS error.

Flags:
  --program <path>       Program name shown in the prefix (default: this executable)
  --source <path>        Source file name shown in the prefix
  --at <line>:<col>      Current source position (default: 1:1)
  --color <when>         auto, always or never (default: auto; NO_COLOR disables auto)
  --echo <text>          Print <text> to stdout, without a newline, before the command
  --verbose              Log facility events to stderr
"
    );
}

fn extract_value(args: &mut Vec<String>, flag: &str) -> Option<Option<String>> {
    let mut value = None;
    let mut i = 0;
    while i < args.len() {
        if args[i] == flag {
            if i + 1 >= args.len() {
                eprintln!("Usage: ereport {} <value> <command>", flag);
                return None;
            }
            value = Some(args.remove(i + 1));
            args.remove(i);
            continue;
        }
        i += 1;
    }
    Some(value)
}

fn extract_color(args: &mut Vec<String>) -> Option<ColorChoice> {
    let value = extract_value(args, "--color")?;
    match value {
        None => Some(ColorChoice::Auto),
        Some(value) => match ColorChoice::parse(&value) {
            Some(choice) => Some(choice),
            None => {
                eprintln!("Error: --color expects auto, always or never.");
                None
            }
        },
    }
}

fn extract_position(args: &mut Vec<String>) -> Option<Option<Position>> {
    let Some(value) = extract_value(args, "--at")? else {
        return Some(None);
    };
    let parsed = value
        .split_once(':')
        .and_then(|(line, column)| Some(Position::new(line.parse().ok()?, column.parse().ok()?)));
    match parsed {
        Some(position) => Some(Some(position)),
        None => {
            eprintln!("Error: --at expects <line>:<col>, e.g. --at 12:5.");
            None
        }
    }
}

fn parse_size(reporter: &Reporter, value: Option<String>) -> Option<usize> {
    let value = value?;
    match value.parse::<usize>() {
        Ok(size) => Some(size),
        Err(_) => report_error!(reporter, "invalid byte count `{}`", value),
    }
}
