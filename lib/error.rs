use std::fmt;

#[derive(Debug, PartialEq)]
pub enum Error {
    Lex { character: char, position: usize },
    Syntax { message: String },
    MalformedExpression { message: String },
    UndefinedVariable { name: String },
    InvalidVariableName { line: usize, name: String },
    UnknownStatement { line: usize, text: String },
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Lex {
                character,
                position,
            } => write!(f, "unexpected character '{}' at position {}", character, position),
            Error::Syntax { message } => write!(f, "syntax error: {}", message),
            Error::MalformedExpression { message } => {
                write!(f, "malformed expression: {}", message)
            }
            Error::UndefinedVariable { name } => write!(f, "undefined variable: {}", name),
            Error::InvalidVariableName { line, name } => {
                write!(f, "line {}: invalid variable name: '{}'", line, name)
            }
            Error::UnknownStatement { line, text } => {
                write!(f, "line {}: unknown statement: '{}'", line, text)
            }
            Error::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for Error {}
