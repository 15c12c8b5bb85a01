use anyhow::{Context, Result};
use infix_calculator::interpreter::calculate;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Line that ends an interactive session.
const QUIT_LINE: &str = "0";

pub fn run_file(path: Option<&Path>, output: &mut impl Write) -> Result<()> {
    let file = match path.map(File::open) {
        Some(Ok(file)) => file,
        Some(Err(error)) => {
            debug!("Could not open {:?}: {}", path, error);
            writeln!(output, "Error: Path doesn't lead to any file")?;
            return Ok(());
        }
        None => {
            writeln!(output, "Error: Path doesn't lead to any file")?;
            return Ok(());
        }
    };
    run_batch(BufReader::new(file), output)
}

/// Evaluates each non-empty line, reporting results and failures alike.
pub fn run_batch(mut input: impl BufRead, output: &mut impl Write) -> Result<()> {
    let mut buffer = Vec::new();
    while let Some(line) = read_line(&mut input, &mut buffer)? {
        let expression = match line {
            Ok(expression) => expression,
            Err(lossy_line) => {
                warn!("{:?} is not valid UTF-8", lossy_line);
                writeln!(output, "\"{}\" - Error: Line is not valid UTF-8", lossy_line)?;
                continue;
            }
        };
        if expression.is_empty() {
            continue;
        }
        match calculate(&expression) {
            Ok(value) => writeln!(output, "{} = {}", expression, value)?,
            Err(error) => {
                warn!("{:?} could not be calculated: {}", expression, error);
                writeln!(output, "\"{}\" - Error: {}", expression, error)?
            }
        }
    }
    Ok(())
}

pub fn run_interactive(mut input: impl BufRead, output: &mut impl Write) -> Result<()> {
    let mut buffer = Vec::new();
    while let Some(line) = read_line(&mut input, &mut buffer)? {
        let expression = match line {
            Ok(expression) => expression,
            Err(_) => {
                writeln!(output, "Error: Line is not valid UTF-8")?;
                continue;
            }
        };
        if expression == QUIT_LINE {
            break;
        }
        if expression.is_empty() {
            continue;
        }
        match calculate(&expression) {
            Ok(value) => writeln!(output, "= {}", value)?,
            Err(error) => writeln!(output, "Error: {}", error)?,
        }
        output.flush()?;
    }
    Ok(())
}

/// Reads the next line without its line ending, or `None` at the end of input.
/// A line that is not UTF-8 comes back as `Err` holding a lossy rendering of it.
fn read_line(
    input: &mut impl BufRead,
    buffer: &mut Vec<u8>,
) -> Result<Option<Result<String, String>>> {
    buffer.clear();
    let read = input
        .read_until(b'\n', buffer)
        .context("Failed to read line")?;
    if read == 0 {
        return Ok(None);
    }
    if buffer.ends_with(b"\n") {
        buffer.pop();
        if buffer.ends_with(b"\r") {
            buffer.pop();
        }
    }
    let line = match std::str::from_utf8(&buffer[..]) {
        Ok(line) => Ok(line.to_string()),
        Err(_) => Err(String::from_utf8_lossy(&buffer[..]).into_owned()),
    };
    Ok(Some(line))
}
