//! Report: write command results or normalized entries to an output stream.

use logsift_core::Collection;
use logsift_query::Interpreter;
use std::io::{self, Write};

/// Run each command in order, optionally echoing it as `> command` first.
pub fn write_command_results<W, S>(
    out: &mut W,
    collection: &Collection,
    commands: &[S],
    echo: bool,
) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let interpreter = Interpreter::new(collection);
    for (i, command) in commands.iter().enumerate() {
        let command = command.as_ref();
        if echo {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "> {command}")?;
        }
        for line in interpreter.execute(command) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Write every entry re-encoded in the bracketed wire format.
pub fn write_normalized<W: Write>(out: &mut W, collection: &Collection) -> io::Result<()> {
    for entry in collection {
        writeln!(out, "{}", entry.to_bracketed_line())?;
    }
    Ok(())
}
