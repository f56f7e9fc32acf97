//! Purpose: Run the whole reformatting pipeline over a pair of streams.
//! Exports: `run`.
//! Role: Read-all, parse, render, write-all; the binary wires stdin/stdout to this.
//! Invariants: Nothing is written to the output stream unless parsing succeeded.
//! Invariants: Output is the canonical rendering followed by exactly one newline.

use std::io::{Read, Write};

use serde_json::Value;
use tracing::debug;

use crate::core::error::{Error, ErrorKind};
use crate::core::format::canonical_json;
use crate::json::parse;

pub fn run(input: &mut impl Read, output: &mut impl Write) -> Result<(), Error> {
    let mut buf = Vec::new();
    input.read_to_end(&mut buf).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read standard input")
            .with_source(err)
    })?;
    debug!(bytes = buf.len(), "read input");

    let text = std::str::from_utf8(&buf).map_err(|err| {
        Error::new(ErrorKind::Parse)
            .with_message("input is not valid UTF-8")
            .with_hint("parse category: utf8; context: stdin")
            .with_source(err)
    })?;

    let value: Value = parse::from_str(text).map_err(|err| {
        let mut mapped = Error::new(ErrorKind::Parse)
            .with_message(format!("invalid JSON input: {err}"))
            .with_hint(parse::hint_for_error(&err, "stdin"));
        if err.line() > 0 {
            mapped = mapped.with_line(err.line()).with_column(err.column());
        }
        mapped.with_source(err)
    })?;

    let rendered = canonical_json(&value);
    debug!(bytes = rendered.len(), "rendered canonical form");

    output
        .write_all(rendered.as_bytes())
        .and_then(|()| output.write_all(b"\n"))
        .map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to write standard output")
                .with_source(err)
        })?;
    Ok(())
}
