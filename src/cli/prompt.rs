use std::io::{self, BufRead, Write};

use crate::error::FeedFilterError;

/// Print `message` and read one trimmed line from `reader`.
pub fn prompt(reader: &mut impl BufRead, message: &str) -> Result<String, FeedFilterError> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Use `value` when given on the command line, otherwise ask on stdin.
pub fn value_or_prompt(value: Option<String>, message: &str) -> Result<String, FeedFilterError> {
    match value {
        Some(v) => Ok(v),
        None => {
            let stdin = io::stdin();
            let mut reader = stdin.lock();
            prompt(&mut reader, message)
        }
    }
}
