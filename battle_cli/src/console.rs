//! Console - line-based terminal input and styled narration output

use battle_core::{NarrationLine, Tone};
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::{self, BufRead, Write};

/// Reads names and writes narration over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Console {
            input,
            output,
            color,
        }
    }

    /// Ask for the name of combatant `number` (1-based)
    ///
    /// Returns `None` once input is exhausted.
    pub fn prompt_name(&mut self, number: usize) -> io::Result<Option<String>> {
        self.print_line(&format!("Please enter a name for combatant #{}", number))?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    pub fn welcome(&mut self, title: &str) -> io::Result<()> {
        let rule = "=".repeat(title.chars().count() + 14);
        self.print_line(&rule)?;
        self.print_line(&format!("****** {} ******", title))?;
        self.print_line(&rule)
    }

    pub fn goodbye(&mut self, title: &str) -> io::Result<()> {
        let stars = "*".repeat(18);
        let rule = "=".repeat(title.chars().count() + 38);
        self.print_line(&"-".repeat(rule.len()))?;
        self.print_line("GAME OVER!!")?;
        self.print_line(&rule)?;
        self.print_line(&format!("{} {} {}", stars, title, stars))?;
        self.print_line(&rule)
    }

    /// Write one narration line, coloured by tone when enabled
    pub fn narrate(&mut self, line: &NarrationLine) -> io::Result<()> {
        if !self.color {
            return self.print_line(&line.text);
        }

        if line.tone == Tone::Announcement {
            queue!(self.output, SetAttribute(Attribute::Bold))?;
        }
        if let Some(color) = tone_color(line.tone) {
            queue!(self.output, SetForegroundColor(color))?;
        }
        queue!(
            self.output,
            Print(&line.text),
            ResetColor,
            SetAttribute(Attribute::Reset),
            Print("\n")
        )?;
        self.output.flush()
    }

    /// Consume the console, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }
}

fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Heading => Some(Color::Cyan),
        Tone::Introduction => None,
        Tone::Hit => Some(Color::Yellow),
        Tone::Special => Some(Color::Magenta),
        Tone::Dodge => Some(Color::Green),
        Tone::Skip => Some(Color::DarkGrey),
        Tone::Announcement => Some(Color::White),
    }
}
