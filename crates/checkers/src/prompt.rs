//! Line-oriented question and answer over any reader and writer.

use anyhow::Result;
use checkers_core::{BoardSize, Direction, Players, Position, Storage};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, instrument, trace};

/// Asks questions until the answer parses.
///
/// Every `ask_*` method returns `Ok(None)` once input is exhausted, so the
/// caller can end the session cleanly.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter reading answers from `input`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a line of output.
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Asks `question` until `parse` accepts the answer.
    ///
    /// Rejected answers print the parser's message and ask again.
    #[instrument(skip(self, parse))]
    pub fn ask<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Result<Option<T>> {
        loop {
            writeln!(self.output, "{}", question)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input exhausted");
                return Ok(None);
            }
            trace!(answer = line.trim(), "Read answer");

            match parse(line.trim()) {
                Ok(value) => return Ok(Some(value)),
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
    }

    /// Asks for a player's piece letter, refusing `taken`.
    pub fn ask_symbol(&mut self, label: &str, taken: Option<char>) -> Result<Option<char>> {
        let question = format!("{}, enter your piece: ", label);
        self.ask(&question, |answer| parse_symbol(answer, taken))
    }

    /// Asks which board storage to use.
    pub fn ask_storage(&mut self) -> Result<Option<Storage>> {
        self.ask(
            "Do you want a fast game (F/f) or a memory efficient game (M/m)?",
            |answer| {
                Storage::from_str(answer)
                    .map_err(|_| "Invalid input. Please enter F/f or M/m.".to_string())
            },
        )
    }

    /// Asks for the board side length.
    pub fn ask_size(&mut self) -> Result<Option<BoardSize>> {
        self.ask(
            "How big should the board be? It can be 8x8, 10x10, 12x12, 14x14, or 16x16. \
             Enter one number: ",
            parse_size,
        )
    }

    /// Asks which piece to move.
    pub fn ask_position(&mut self, symbol: char) -> Result<Option<Position>> {
        let question = format!(
            "Player {}, which piece do you wish to move? \
             Enter the row followed by a space followed by the column.",
            symbol
        );
        self.ask(&question, parse_position)
    }

    /// Asks for one of `options`.
    pub fn ask_direction(&mut self, options: &[Direction]) -> Result<Option<Direction>> {
        let listed: Vec<String> = options.iter().map(Direction::to_string).collect();
        let question = format!(
            "In which direction do you wish to move the piece?\nEnter one of these options: {}",
            listed.join(" ")
        );
        self.ask(&question, |answer| {
            Direction::from_str(answer)
                .ok()
                .filter(|dir| options.contains(dir))
                .ok_or_else(|| format!("Invalid input. Choose one of: {}", listed.join(" ")))
        })
    }

    /// Asks a yes/no question.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<Option<bool>> {
        self.ask(question, parse_yes_no)
    }
}

fn parse_symbol(answer: &str, taken: Option<char>) -> Result<char, String> {
    let mut chars = answer.chars();
    let (Some(symbol), None) = (chars.next(), chars.next()) else {
        return Err("Invalid input. Enter a single lowercase letter.".to_string());
    };
    Players::validate(symbol).map_err(|e| format!("Invalid input: {}.", e))?;
    if taken == Some(symbol) {
        return Err(format!(
            "Invalid input: '{}' is taken. Choose a unique letter.",
            symbol
        ));
    }
    Ok(symbol)
}

fn parse_size(answer: &str) -> Result<BoardSize, String> {
    answer
        .parse::<usize>()
        .map_err(|_| "Invalid input. Enter a single number.".to_string())
        .and_then(|dim| BoardSize::new(dim).map_err(|e| format!("Invalid input: {}.", e)))
}

fn parse_position(answer: &str) -> Result<Position, String> {
    let parts: Vec<&str> = answer.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err("Invalid input. Enter the row, a space, then the column.".to_string());
    };
    match (row.parse::<i32>(), col.parse::<i32>()) {
        (Ok(row), Ok(col)) => Ok(Position::new(row, col)),
        _ => Err("Invalid input. Row and column must be numbers.".to_string()),
    }
}

fn parse_yes_no(answer: &str) -> Result<bool, String> {
    match answer {
        "Y" | "y" => Ok(true),
        "N" | "n" => Ok(false),
        _ => Err("Invalid input. Please enter Y/y or N/n.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut p = prompter("ten\n9\n12\n");
        assert_eq!(p.ask_size().unwrap(), BoardSize::new(12).ok());

        let output = String::from_utf8(p.into_output()).unwrap();
        assert!(output.contains("Enter a single number"));
        assert!(output.contains("even number from 8 to 16"));
    }

    #[test]
    fn test_eof_yields_none() {
        let mut p = prompter("");
        assert_eq!(p.ask_storage().unwrap(), None);
    }

    #[test]
    fn test_symbol_rules() {
        assert_eq!(parse_symbol("q", None), Ok('q'));
        assert!(parse_symbol("Q", None).is_err());
        assert!(parse_symbol("qq", None).is_err());
        assert!(parse_symbol("x", Some('x')).is_err());
    }

    #[test]
    fn test_storage_aliases() {
        let mut p = prompter("fast\nM\n");
        assert_eq!(p.ask_storage().unwrap(), Some(Storage::Dense));
        assert_eq!(p.ask_storage().unwrap(), Some(Storage::Sparse));
    }

    #[test]
    fn test_position_parsing() {
        assert_eq!(parse_position("2 4"), Ok(Position::new(2, 4)));
        assert_eq!(parse_position("  5   1 "), Ok(Position::new(5, 1)));
        assert!(parse_position("2,4").is_err());
        assert!(parse_position("2").is_err());
        assert!(parse_position("a b").is_err());
    }

    #[test]
    fn test_direction_must_be_offered() {
        let mut p = prompter("NE\nsw\n");
        let chosen = p.ask_direction(&[Direction::SE, Direction::SW]).unwrap();
        assert_eq!(chosen, Some(Direction::SW));
    }

    #[test]
    fn test_yes_no() {
        let mut p = prompter("maybe\nn\n");
        assert_eq!(p.ask_yes_no("Again?").unwrap(), Some(false));
    }
}
