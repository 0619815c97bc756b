use crate::{
    error::Error,
    token::Token,
    vocabulary::{NUM_WORDS, OP_WORDS},
};

pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    char: Option<char>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let char = chars.first().copied();
        Self {
            chars,
            position: 0,
            char,
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        while self.char.is_some_and(|char| char.is_whitespace()) {
            self.read_char();
        }

        let token = match self.char {
            Some(char) => match char {
                '(' => Some(Token::Lparen),
                ')' => Some(Token::Rparen),
                '=' => Some(Token::Assign),
                _ if char.is_ascii_alphabetic() || char == '_' => {
                    let literal =
                        self.read_until(|char| !char.is_ascii_alphanumeric() && char != '_');
                    Some(Self::lookup_word(literal))
                }
                _ => {
                    return Err(Error::Lex {
                        character: char,
                        position: self.position,
                    })
                }
            },
            None => None,
        };

        self.read_char();

        Ok(token)
    }

    // number words and operator words match case-insensitively; anything
    // else is an identifier with its original casing
    fn lookup_word(literal: String) -> Token {
        let word = literal.to_lowercase();
        if let Some(&value) = NUM_WORDS.get(word.as_str()) {
            Token::Number(value)
        } else if let Some(&operator) = OP_WORDS.get(word.as_str()) {
            Token::Operator(operator)
        } else {
            Token::Ident(literal)
        }
    }

    fn read_char(&mut self) {
        self.position += 1;
        self.char = self.chars.get(self.position).copied();
    }

    fn read_until(&mut self, condition: impl Fn(char) -> bool) -> String {
        let mut literal = String::new();
        while let Some(char) = self.char {
            if condition(char) {
                self.position -= 1;
                break;
            }
            literal.push(char);
            self.read_char();
        }
        literal
    }
}
