//! utfscan inspector
//!
//! Validates files as UTF-8 from the command line, or runs an
//! interactive shell for probing byte sequences and UTF-16 sizing.

use regex::Regex;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use utfscan::{encode_utf16, encoded_length, is_well_formed, utf16_len};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        // Validate files
        scan_files(&args[1..]);
    } else {
        // Interactive shell
        run_repl();
    }
}

fn scan_files(paths: &[String]) {
    let mut rejected = false;

    for path in paths {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                std::process::exit(1);
            }
        };

        if is_well_formed(&bytes) {
            let text = String::from_utf8_lossy(&bytes);
            println!(
                "{}: well-formed UTF-8 ({} bytes, {} UTF-16 units)",
                path,
                bytes.len(),
                utf16_len(&text)
            );
        } else {
            println!("{}: not well-formed UTF-8", path);
            rejected = true;
        }
    }

    if rejected {
        std::process::exit(1);
    }
}

fn run_repl() {
    println!("utfscan inspector");
    println!("Type `help` for commands, Ctrl+D to exit.\n");

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Error starting editor: {}", e);
            std::process::exit(1);
        }
    };
    // `\uXXXX` escapes in shell input, including lone surrogates
    let escape = Regex::new(r"\\u([0-9A-Fa-f]{4})").unwrap();

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);
                run_command(&escape, line);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }
}

fn run_command(escape: &Regex, line: &str) {
    let (cmd, rest) = match line.split_once(' ') {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    match cmd {
        "check" => {
            let bytes = match parse_bytes(rest) {
                Some(bytes) => bytes,
                None => {
                    println!(
                        "Usage: check <hex bytes>, e.g. `check C3 A9` or `check 0xED,0xA0,0x80`"
                    );
                    return;
                }
            };
            if is_well_formed(&bytes) {
                println!("well-formed UTF-8 ({} bytes)", bytes.len());
            } else {
                println!("not well-formed");
            }
        }
        "len" => {
            let units = parse_units(escape, rest);
            match encoded_length(&units) {
                Ok(n) => println!("{} UTF-16 units, {} UTF-8 bytes", units.len(), n),
                Err(e) => println!("Error: {}", e),
            }
        }
        "encode" => {
            let units = parse_units(escape, rest);
            match encode_utf16(&units) {
                Ok(bytes) => {
                    let hex: Vec<String> = bytes.iter().map(|b| format!("{:02X}", b)).collect();
                    println!("{} ({} bytes)", hex.join(" "), bytes.len());
                }
                Err(e) => println!("Error: {}", e),
            }
        }
        "help" => {
            println!("Commands:");
            println!("  check <hex bytes>   scan bytes for UTF-8 well-formedness");
            println!("  len <text>          UTF-8 byte count of UTF-16 text");
            println!("  encode <text>       encode UTF-16 text as UTF-8, printed as hex");
            println!("  help                show this message");
            println!();
            println!("Text accepts \\uXXXX escapes, e.g. `len a\\uD83D\\uDE00` or `len \\uDC00`.");
        }
        _ => {
            println!("Unknown command `{}`, type `help` for a list.", cmd);
        }
    }
}

/// Parse a whitespace- or comma-separated list of hex bytes.
fn parse_bytes(input: &str) -> Option<Vec<u8>> {
    if input.is_empty() {
        return None;
    }
    input
        .split([' ', ','])
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            let tok = tok.strip_prefix("0x").unwrap_or(tok);
            u8::from_str_radix(tok, 16).ok()
        })
        .collect()
}

/// Expand `\uXXXX` escapes and convert the rest of the text to UTF-16.
fn parse_units(escape: &Regex, input: &str) -> Vec<u16> {
    let mut units = Vec::new();
    let mut last = 0;

    for caps in escape.captures_iter(input) {
        let m = caps.get(0).unwrap();
        units.extend(input[last..m.start()].encode_utf16());
        // The pattern guarantees exactly four hex digits
        units.push(u16::from_str_radix(&caps[1], 16).unwrap());
        last = m.end();
    }
    units.extend(input[last..].encode_utf16());

    units
}
