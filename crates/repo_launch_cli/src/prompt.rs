//! Interactive prompts on the terminal.

use std::io::{self, BufRead, Write};

use crate::errors::Error;

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;

/// Prints `request` on stdout and reads one line from stdin.
///
/// The answer is returned without surrounding whitespace. End of input
/// yields an empty answer.
pub fn ask_user_for_value(request: &str) -> Result<String, Error> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    read_answer(request, &mut input, &mut output)
}

/// Writes `request` to `output` and reads one trimmed line from `input`.
pub fn read_answer<R, W>(request: &str, input: &mut R, output: &mut W) -> Result<String, Error>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", request).map_err(|_| Error::StdOutFlushFailed)?;
    output.flush().map_err(|_| Error::StdOutFlushFailed)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(Error::ReadInput)?;
    Ok(answer.trim().to_string())
}
