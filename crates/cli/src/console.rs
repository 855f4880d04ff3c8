//! Interactive prompts for batch settings.

use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

use tracing::warn;

use crate::error::CliError;

/// Attempts allowed per prompt before giving up.
pub const MAX_ATTEMPTS: usize = 5;

/// Asks for a value in `range`, re-asking on malformed or out-of-range
/// answers. `default` is shown in the prompt and taken on an empty line.
///
/// Fails with `CliError::Input` after [`MAX_ATTEMPTS`] bad answers or when
/// input ends.
pub fn prompt_in_range<T, R, W>(
    input: &mut R,
    output: &mut W,
    question: &str,
    range: RangeInclusive<T>,
    default: T,
) -> Result<T, CliError>
where
    T: FromStr + PartialOrd + Copy + std::fmt::Display,
    R: BufRead,
    W: Write,
{
    let io_err = |e: std::io::Error| CliError::Io(e.to_string());
    for attempt in 1..=MAX_ATTEMPTS {
        write!(
            output,
            "{question} [{}-{}] ({default}): ",
            range.start(),
            range.end()
        )
        .map_err(io_err)?;
        output.flush().map_err(io_err)?;

        let mut line = String::new();
        if input.read_line(&mut line).map_err(io_err)? == 0 {
            return Err(CliError::Input(format!("{question}: no input")));
        }
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<T>() {
            Ok(value) if range.contains(&value) => return Ok(value),
            _ => {
                warn!(attempt, answer, "rejected prompt answer");
                writeln!(
                    output,
                    "please enter a number between {} and {}",
                    range.start(),
                    range.end()
                )
                .map_err(io_err)?;
            }
        }
    }
    Err(CliError::Input(format!(
        "{question}: no valid answer after {MAX_ATTEMPTS} attempts"
    )))
}
