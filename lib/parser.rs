use crate::{
    error::Error,
    lexer::Lexer,
    token::{Operator, Token},
};

#[derive(Debug, Clone, PartialOrd, PartialEq, Eq, Ord)]
enum Precedence {
    Sum,
    Product,
    Power,
}

impl Precedence {
    fn from_operator(operator: Operator) -> Self {
        match operator {
            Operator::Plus | Operator::Minus => Precedence::Sum,
            Operator::Asterisk | Operator::Slash => Precedence::Product,
            Operator::Power => Precedence::Power,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Associativity {
    Left,
    Right,
}

impl Associativity {
    fn from_operator(operator: Operator) -> Self {
        match operator {
            Operator::Power => Associativity::Right,
            _ => Associativity::Left,
        }
    }
}

pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Self { lexer }
    }

    /// Reorders the infix token stream into postfix (shunting-yard). The
    /// output contains only number, identifier and operator tokens.
    pub fn parse(&mut self) -> Result<Vec<Token>, Error> {
        let mut output: Vec<Token> = Vec::new();
        let mut stack: Vec<Token> = Vec::new();

        while let Some(token) = self.lexer.next_token()? {
            match token {
                Token::Number(_) | Token::Ident(_) => output.push(token),
                Token::Operator(operator) => {
                    while let Some(&Token::Operator(top)) = stack.last() {
                        if !Self::should_pop(operator, top) {
                            break;
                        }
                        output.push(Token::Operator(top));
                        stack.pop();
                    }
                    stack.push(token);
                }
                Token::Lparen => stack.push(token),
                Token::Rparen => loop {
                    match stack.pop() {
                        Some(Token::Lparen) => break,
                        Some(token @ Token::Operator(_)) => output.push(token),
                        _ => {
                            return Err(Error::Syntax {
                                message: "mismatched parentheses".to_string(),
                            })
                        }
                    }
                },
                Token::Assign => {
                    return Err(Error::Syntax {
                        message: format!("unexpected token in expression: {}", token),
                    })
                }
            }
        }

        while let Some(token) = stack.pop() {
            match token {
                Token::Operator(_) => output.push(token),
                _ => {
                    return Err(Error::Syntax {
                        message: "mismatched parentheses".to_string(),
                    })
                }
            }
        }

        Ok(output)
    }

    // left-associative operators yield to equal precedence on the stack,
    // right-associative ones only to strictly higher precedence
    fn should_pop(operator: Operator, top: Operator) -> bool {
        let precedence = Precedence::from_operator(operator);
        let top_precedence = Precedence::from_operator(top);
        match Associativity::from_operator(operator) {
            Associativity::Left => precedence <= top_precedence,
            Associativity::Right => precedence < top_precedence,
        }
    }
}
