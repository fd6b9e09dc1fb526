//! Terminal interaction layer.
//!
//! Implements the review loop's [`StudyPrompt`] verbs over stdin/stdout
//! and provides the shared input helpers used by the menus. Input is read
//! line-wise; only the trailing line terminator is stripped, so answer
//! comparison upstream stays exact.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{MoveTo, MoveToPreviousLine},
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use flashdrill_core::{CardSet, StudyPrompt};

/// Pause before a missed-cards round starts.
const MISSED_ROUND_PAUSE: Duration = Duration::from_secs(2);

#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }

    /// Read one line from stdin, trailing `\n`/`\r\n` stripped. A closed
    /// stdin surfaces as `UnexpectedEof` so the session unwinds instead
    /// of spinning on empty reads.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn prompt_inline(&mut self, message: &str) -> io::Result<String> {
        print!("{message}");
        io::stdout().flush()?;
        self.read_line()
    }

    /// Ask until the user answers Y/y or N/n.
    pub fn ask_yes_no(&mut self, message: &str) -> io::Result<bool> {
        loop {
            let input = self.prompt_inline(&format!("{message} [Y/N] "))?;
            match input.as_str() {
                "Y" | "y" => return Ok(true),
                "N" | "n" => return Ok(false),
                _ => self.print_warning("Enter Y or N.")?,
            }
        }
    }

    /// Ask for an integer in `lower..upper`, re-prompting until valid.
    pub fn read_index(&mut self, message: &str, lower: usize, upper: usize) -> io::Result<usize> {
        loop {
            let input = self.prompt_inline(&format!("{message} [{lower} to {}] ", upper - 1))?;
            match input.trim().parse::<usize>() {
                Ok(value) if lower <= value && value < upper => return Ok(value),
                _ => self.print_warning(&format!(
                    "Enter valid input between {lower} and {}.",
                    upper - 1
                ))?,
            }
        }
    }

    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        println!("{text}");
        Ok(())
    }

    /// Red diagnostic, set off by blank lines.
    pub fn print_warning(&mut self, message: &str) -> io::Result<()> {
        execute!(
            io::stdout(),
            SetForegroundColor(Color::Red),
            Print(format!("\n{message}\n\n")),
            ResetColor
        )
    }
}

impl StudyPrompt for Terminal {
    fn begin_set(&mut self, set: &CardSet) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        println!("Studying \"{}\" ({} cards)\n", set.name, set.len());
        Ok(())
    }

    fn prompt_card(&mut self, prompt: &str) -> io::Result<String> {
        println!("\r{prompt}");
        self.read_line()
    }

    fn prompt_recovery(&mut self, answer: &str) -> io::Result<String> {
        self.prompt_inline(&format!("Type the correct answer: {answer} : "))
    }

    fn recovery_failed(&mut self) -> io::Result<()> {
        // Erase the failed retype so the correct-answer line stays in place.
        execute!(
            io::stdout(),
            MoveToPreviousLine(1),
            Clear(ClearType::CurrentLine)
        )
    }

    fn end_card(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }

    fn begin_missed_round(&mut self, missed: usize) -> io::Result<()> {
        println!("Wrong answers: {missed}");
        io::stdout().flush()?;
        thread::sleep(MISSED_ROUND_PAUSE);
        Ok(())
    }

    fn report_score(&mut self, score: u8) -> io::Result<()> {
        println!("Score: {score}%");
        Ok(())
    }

    fn confirm(&mut self, message: &str) -> io::Result<bool> {
        self.ask_yes_no(message)
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        self.print_warning(message)
    }
}
