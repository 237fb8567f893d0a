//! CLI command implementation.
//!
//! The CLI is a thin client: it supplies the caller principal and a block
//! height per request, and prints the handler's response envelope verbatim.
//! All checks are enforced inside the registry.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use crate::api::RegistryHandler;
use crate::identity::{CallContext, Principal};
use crate::observability::Logger;

use super::args::Cli;
use super::errors::{CliError, CliResult};

/// Parse arguments and serve requests
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let principal = match &cli.principal {
        Some(s) => Principal::parse_str(s)
            .map_err(|e| CliError::arg_error(format!("invalid principal '{}': {}", s, e)))?,
        None => Principal::new(),
    };

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    serve(principal, cli.height, reader, &mut stdout.lock())
}

/// Feed each request line through the handler, one response line per request.
///
/// The height increments by one per request, standing in for the host's
/// block counter.
pub fn serve<R: BufRead, W: Write>(
    principal: Principal,
    start_height: u64,
    reader: R,
    out: &mut W,
) -> CliResult<()> {
    let handler = RegistryHandler::new();
    Logger::info("SERVE_START", &[("principal", &principal.to_string())]);

    let mut height = start_height;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let ctx = CallContext::new(principal, height);
        let response = handler.handle(&line, &ctx);
        writeln!(out, "{}", response.to_json())?;
        height += 1;
    }

    Logger::info("SERVE_COMPLETE", &[("last_id", &handler.last_id().to_string())]);
    Ok(())
}
