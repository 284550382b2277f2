//! Interactive prompts for output options
//!
//! Invalid answers are re-prompted indefinitely. Running out of input is the
//! only way a prompt fails.

use std::io::{self, BufRead, Write};

/// Reads answers from `input`, writing prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask until the answer is a positive integer
    pub fn positive_int(&mut self, prompt: &str) -> io::Result<u32> {
        self.say(prompt)?;
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<u32>() {
                Ok(value) if value >= 1 => return Ok(value),
                _ => self.say("Invalid input. Please enter a positive integer: ")?,
            }
        }
    }

    /// Ask a y/n question, case-insensitive
    pub fn yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        self.say(&format!("{prompt} (y/n): "))?;
        loop {
            let line = self.read_line()?;
            match line.trim().to_ascii_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Invalid input. Please enter 'y' or 'n': ")?,
            }
        }
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Next line of input; bytes that are not UTF-8 become replacement
    /// characters and simply fail to parse
    fn read_line(&mut self) -> io::Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a valid answer was given",
            ));
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        raw_prompter(input.as_bytes())
    }

    fn raw_prompter(input: &[u8]) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.to_vec()), Vec::new())
    }

    #[test]
    fn test_positive_int_accepts_first_valid() {
        let mut p = prompter("42\n");
        assert_eq!(p.positive_int("Enter output width: ").unwrap(), 42);
        assert_eq!(String::from_utf8(p.output).unwrap(), "Enter output width: ");
    }

    #[test]
    fn test_positive_int_reprompts() {
        let mut p = prompter("abc\n0\n-3\n  7  \n");
        assert_eq!(p.positive_int("Enter output height: ").unwrap(), 7);

        let shown = String::from_utf8(p.output).unwrap();
        assert_eq!(
            shown.matches("Invalid input. Please enter a positive integer: ").count(),
            3
        );
    }

    #[test]
    fn test_positive_int_eof() {
        let mut p = prompter("nope\n");
        let err = p.positive_int("Enter output width: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_yes_no_case_insensitive() {
        let mut p = prompter("Y\n");
        assert!(p.yes_no("Fix aspect ratio").unwrap());

        let mut p = prompter("n\n");
        assert!(!p.yes_no("Fix aspect ratio").unwrap());
    }

    #[test]
    fn test_yes_no_reprompts() {
        let mut p = prompter("maybe\nyes\n\nN\n");
        assert!(!p.yes_no("Fix aspect ratio").unwrap());

        let shown = String::from_utf8(p.output).unwrap();
        assert!(shown.starts_with("Fix aspect ratio (y/n): "));
        assert_eq!(shown.matches("Please enter 'y' or 'n'").count(), 3);
    }

    #[test]
    fn test_positive_int_reprompts_on_invalid_utf8() {
        let mut p = raw_prompter(b"\xff\xfe\n42\n");
        assert_eq!(p.positive_int("Enter output width: ").unwrap(), 42);

        let shown = String::from_utf8(p.output).unwrap();
        assert!(shown.contains("Invalid input. Please enter a positive integer: "));
    }

    #[test]
    fn test_yes_no_reprompts_on_invalid_utf8() {
        let mut p = raw_prompter(b"\xc3\n y \n");
        assert!(p.yes_no("Fix aspect ratio").unwrap());

        let shown = String::from_utf8(p.output).unwrap();
        assert_eq!(shown.matches("Please enter 'y' or 'n'").count(), 1);
    }
}
