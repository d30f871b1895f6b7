//! Line-oriented prompts over any reader/writer pair.
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

pub const DIVIDER: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";

pub struct Prompter<R, W> {
    input: R,
    output: W,
    delay: Duration,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W, delay: Duration) -> Self {
        Self {
            input,
            output,
            delay,
        }
    }

    #[cfg(test)]
    pub(crate) const fn output(&self) -> &W {
        &self.output
    }

    /// Print text as-is.
    pub fn show(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print narration, one character at a time when a text delay is set.
    pub fn say(&mut self, text: &str) -> Result<()> {
        if self.delay.is_zero() {
            return self.show(text);
        }
        for ch in text.chars() {
            write!(self.output, "{ch}")?;
            self.output.flush()?;
            thread::sleep(self.delay);
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Read one trimmed line after printing `prompt`. End of input is an error.
    pub fn line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            bail!("input closed");
        }
        Ok(buf.trim().to_string())
    }

    /// Re-prompt until `parse` accepts the answer.
    pub fn choose<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> Result<T> {
        loop {
            let answer = self.line(prompt)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            self.show(retry)?;
        }
    }

    pub fn yes(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.line(prompt)?.eq_ignore_ascii_case("y"))
    }

    /// Menu digit in `1..=max`.
    pub fn menu(&mut self, prompt: &str, retry: &str, max: u8) -> Result<u8> {
        self.choose(prompt, retry, |answer| {
            answer
                .parse::<u8>()
                .ok()
                .filter(|choice| (1..=max).contains(choice))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Duration::ZERO,
        )
    }

    #[test]
    fn menu_reprompts_until_valid() {
        let mut p = prompter("0\nabc\n4\n2\n");
        let choice = p.menu(">>> ", "Please make a valid selection.", 3).unwrap();
        assert_eq!(choice, 2);
        let out = String::from_utf8(p.output).unwrap();
        assert_eq!(out.matches("Please make a valid selection.").count(), 3);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut p = prompter("");
        assert!(p.line("name: ").is_err());
    }

    #[test]
    fn yes_accepts_either_case() {
        let mut p = prompter("Y\nn\n");
        assert!(p.yes("? ").unwrap());
        assert!(!p.yes("? ").unwrap());
    }
}
