//! ktools entry point: runs one JSON request read from stdin.

use ktools::audit::AuditLogger;
use ktools::config::Config;
use ktools::outcome::Outcome;
use ktools::output::{Response, format_json_error, format_response};
use ktools::request::Request;
use ktools::run::run;

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let json_errors = std::env::args().skip(1).any(|a| a == "--json-errors");

    let mut input_str = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input_str) {
        eprintln!("failed to read stdin: {}", e);
        return ExitCode::FAILURE;
    }

    let request = match Request::parse(&input_str) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Request error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let cwd = request.cwd.as_deref().map(Path::new);
    let compiled = match Config::load(cwd).and_then(Config::compile) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = run(&request.op, &compiled);

    // Audit logging is best-effort
    if compiled.raw.audit.enabled
        && let Some(path) = &compiled.raw.audit.path
    {
        match AuditLogger::open(Path::new(path)) {
            Ok(mut logger) => {
                if let Err(e) = logger.log_outcome(&request, &outcome) {
                    eprintln!("audit log write failed: {}", e);
                }
            }
            Err(e) => eprintln!("audit log unavailable: {}", e),
        }
    }

    match (&outcome, json_errors) {
        (Outcome::Failure(info), true) => {
            eprintln!("{}", format_json_error(info));
            ExitCode::from(2)
        }
        _ => match format_response(&outcome) {
            Response::Stdout(out) => {
                println!("{}", out);
                ExitCode::SUCCESS
            }
            Response::Stderr(msg) => {
                eprintln!("{}", msg);
                ExitCode::from(2)
            }
        },
    }
}
