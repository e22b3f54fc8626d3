//! Parsing of the interactive tester's command lines.

use std::str::FromStr;

/// A command entered at the tester prompt.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    /// `q:` quits the tester.
    Quit,
    /// `v: <#>` shows the bit pattern of a value.
    Value(f32),
    /// `e: <#> + <#>` evaluates an addition in hardware and in software.
    Expression(f32, f32),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0}")]
    UnknownCommand(String),
    #[error("unknown operator {0}")]
    UnknownOperator(String),
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("missing operand")]
    MissingOperand,
}

impl Command {
    /// Parses a single line of input.
    ///
    /// The command token must be separated from its arguments by whitespace.
    /// Anything after `q:` is ignored.
    pub fn parse(line: &str) -> Result<Command, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        let (cmd, args) = match line.find(char::is_whitespace) {
            Some(pos) => (&line[..pos], line[pos..].trim()),
            None => (line, ""),
        };
        trace!("command={:?} args={:?}", cmd, args);

        match cmd {
            "q:" => Ok(Command::Quit),
            "v:" => parse_number(args).map(Command::Value),
            "e:" => parse_expression(args),
            _ => Err(ParseError::UnknownCommand(cmd.to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Command::parse(s)
    }
}

fn parse_number(s: &str) -> Result<f32, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::MissingOperand);
    }

    s.parse::<f32>().map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

/// Parses `<#> + <#>`. Whitespace around the `+` is optional.
fn parse_expression(s: &str) -> Result<Command, ParseError> {
    let (lhs, rest) = s.split_at(number_len(s));
    let lhs = parse_number(lhs)?;

    let rest = rest.trim_start();
    let mut chars = rest.chars();
    match chars.next() {
        Some('+') => {}
        Some(_) => {
            let op = rest.split_whitespace().next().unwrap_or(rest);
            return Err(ParseError::UnknownOperator(op.to_string()));
        }
        None => return Err(ParseError::MissingOperand),
    }

    let rhs = parse_number(chars.as_str())?;
    Ok(Command::Expression(lhs, rhs))
}

/// Returns the length of the leading number token in `s`.
///
/// The token ends at whitespace or at a `+`/`-` that is neither the leading
/// sign nor the sign of an exponent.
fn number_len(s: &str) -> usize {
    let mut prev = None;
    for (pos, c) in s.char_indices() {
        let is_sign = c == '+' || c == '-';
        let ends = c.is_whitespace()
            || (is_sign && pos != 0 && prev != Some('e') && prev != Some('E'));
        if ends {
            return pos;
        }
        prev = Some(c);
    }
    s.len()
}
