//! Blocking prompts for the slope and intercept.

use super::LinearEquation;
use std::io::{self, BufRead, Write};

pub const SLOPE_PROMPT: &str = "Enter the slope (m):";
pub const INTERCEPT_PROMPT: &str = "Enter the b (y-intercept):";

/// Parse a slope or intercept. Only finite numbers are accepted.
pub fn parse_finite(text: &str) -> Result<f64, String> {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("Not a valid number: {text:?}")),
    }
}

/// Ask for one finite number.
///
/// Returns `Ok(None)` when the user cancels: an empty answer, `cancel`, or
/// end of input. Anything else that is not a finite number asks again.
pub fn ask_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<Option<f64>> {
    loop {
        write!(output, "{question} ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(None);
        }

        let answer = line.trim();
        if answer.is_empty() || answer.eq_ignore_ascii_case("cancel") {
            return Ok(None);
        }
        match parse_finite(answer) {
            Ok(value) => return Ok(Some(value)),
            Err(message) => writeln!(output, "{message}")?,
        }
    }
}

/// Ask for slope, then intercept. Cancelling the first skips the second.
pub fn ask_equation<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<LinearEquation>> {
    let Some(slope) = ask_number(input, output, SLOPE_PROMPT)? else {
        return Ok(None);
    };
    let intercept = ask_number(input, output, INTERCEPT_PROMPT)?;
    Ok(LinearEquation::from_answers(Some(slope), intercept))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (Option<LinearEquation>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let equation = ask_equation(&mut input, &mut output).unwrap();
        (equation, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_finite() {
        assert_eq!(parse_finite(" -2.5 "), Ok(-2.5));
        assert_eq!(parse_finite("1e17"), Ok(1e17));
        assert_eq!(parse_finite("nan"), Err("Not a valid number: \"nan\"".to_string()));
        assert!(parse_finite("inf").is_err());
        assert!(parse_finite("-infinity").is_err());
        assert!(parse_finite("1e309").is_err());
        assert!(parse_finite("two").is_err());
    }

    #[test]
    fn test_both_answers() {
        let (equation, output) = run("2\n-1.5\n");
        assert_eq!(equation, Some(LinearEquation::new(2.0, -1.5)));
        assert!(output.contains(SLOPE_PROMPT));
        assert!(output.contains(INTERCEPT_PROMPT));
    }

    #[test]
    fn test_cancel_slope_skips_intercept() {
        let (equation, output) = run("\n3\n");
        assert_eq!(equation, None);
        assert!(!output.contains(INTERCEPT_PROMPT));
    }

    #[test]
    fn test_cancel_intercept() {
        let (equation, _) = run("2\ncancel\n");
        assert_eq!(equation, None);
    }

    #[test]
    fn test_end_of_input_cancels() {
        let (equation, _) = run("2\n");
        assert_eq!(equation, None);
    }

    #[test]
    fn test_invalid_answer_asks_again() {
        let (equation, output) = run("abc\ninf\n4\n0\n");
        assert_eq!(equation, Some(LinearEquation::new(4.0, 0.0)));
        assert_eq!(output.matches(SLOPE_PROMPT).count(), 3);
        assert!(output.contains("Not a valid number: \"abc\""));
    }
}
