use crate::{
    environment::Environment,
    error::Error,
    token::{Operator, Token},
    value::Value,
};

pub struct Evaluator<'a> {
    env: &'a Environment,
}

impl<'a> Evaluator<'a> {
    pub fn new(env: &'a Environment) -> Self {
        Self { env }
    }

    /// Runs a postfix token sequence on a value stack and reduces it to a
    /// single value.
    pub fn eval(&self, rpn: Vec<Token>) -> Result<Value, Error> {
        let mut stack: Vec<Value> = Vec::new();

        for token in rpn {
            match token {
                Token::Number(value) => stack.push(Value::Integer(value)),
                Token::Ident(name) => match self.env.get(&name) {
                    Some(value) => stack.push(value),
                    None => return Err(Error::UndefinedVariable { name }),
                },
                Token::Operator(operator) => {
                    let right = Self::pop(&mut stack)?;
                    let left = Self::pop(&mut stack)?;
                    stack.push(Self::apply(operator, left, right)?);
                }
                token => {
                    return Err(Error::MalformedExpression {
                        message: format!("unexpected token in postfix sequence: {}", token),
                    })
                }
            }
        }

        let value = Self::pop(&mut stack)?;
        if !stack.is_empty() {
            return Err(Error::MalformedExpression {
                message: "expression did not reduce to a single value".to_string(),
            });
        }
        Ok(value)
    }

    fn pop(stack: &mut Vec<Value>) -> Result<Value, Error> {
        stack.pop().ok_or(Error::MalformedExpression {
            message: "not enough values in expression".to_string(),
        })
    }

    fn apply(operator: Operator, left: Value, right: Value) -> Result<Value, Error> {
        let value = match (left, right) {
            (Value::Integer(left), Value::Integer(right)) => match operator {
                Operator::Plus => Value::Integer(left + right),
                Operator::Minus => Value::Integer(left - right),
                Operator::Asterisk => Value::Integer(left * right),
                Operator::Slash => {
                    if right == 0 {
                        return Err(Error::DivisionByZero);
                    }
                    // true division, never floor division
                    Value::Float(left as f64 / right as f64)
                }
                Operator::Power => {
                    if right < 0 {
                        Value::Float((left as f64).powi(right as i32))
                    } else {
                        Value::Integer(left.pow(right as u32))
                    }
                }
            },
            (left, right) => {
                let (left, right) = (left.as_f64(), right.as_f64());
                match operator {
                    Operator::Plus => Value::Float(left + right),
                    Operator::Minus => Value::Float(left - right),
                    Operator::Asterisk => Value::Float(left * right),
                    Operator::Slash => {
                        if right == 0.0 {
                            return Err(Error::DivisionByZero);
                        }
                        Value::Float(left / right)
                    }
                    Operator::Power => Value::Float(left.powf(right)),
                }
            }
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexer::Lexer, parser::Parser};

    #[test]
    fn integer_expressions() {
        let cases = vec![
            ("five", 5),
            ("two plus three times four", 14),
            ("two times three plus four", 10),
            ("( two plus three ) times four", 20),
            ("twenty minus five minus three", 12),
            ("two power three power two", 512),
            ("two power three plus four", 12),
            ("zero minus seven", -7),
            ("two times ( ten minus three )", 14),
        ];
        for (input, expected) in cases {
            let env = Environment::new();
            let evaluated = test_eval(input, &env).unwrap();
            assert_eq!(evaluated, Value::Integer(expected), "input: {}", input);
        }
    }

    #[test]
    fn division_is_true_division() {
        let cases = vec![
            ("one divided_by two", 0.5),
            ("four divided_by two", 2.0),
            ("one divided_by two plus one", 1.5),
            ("ten divided_by four", 2.5),
        ];
        for (input, expected) in cases {
            let env = Environment::new();
            let evaluated = test_eval(input, &env).unwrap();
            assert_eq!(evaluated, Value::Float(expected), "input: {}", input);
        }
    }

    #[test]
    fn negative_exponents_produce_floats() {
        let env = Environment::new();
        let evaluated = test_eval("two power ( zero minus one )", &env).unwrap();
        assert_eq!(evaluated, Value::Float(0.5));
    }

    #[test]
    fn division_by_zero() {
        let cases = vec![
            "one divided_by zero",
            "( one divided_by two ) divided_by zero",
        ];
        for input in cases {
            let env = Environment::new();
            match test_eval(input, &env) {
                Err(Error::DivisionByZero) => {}
                other => panic!(
                    "expected division by zero error for {:?}, found {:?}",
                    input, other
                ),
            }
        }
    }

    #[test]
    fn identifiers_read_the_environment() {
        let mut env = Environment::new();
        env.set("x", Value::Integer(5));
        env.set("half", Value::Float(0.5));

        let evaluated = test_eval("x times two", &env).unwrap();
        assert_eq!(evaluated, Value::Integer(10));

        let evaluated = test_eval("half plus half", &env).unwrap();
        assert_eq!(evaluated, Value::Float(1.0));
    }

    #[test]
    fn undefined_variable() {
        let env = Environment::new();
        match test_eval("y", &env) {
            Err(Error::UndefinedVariable { name }) => assert_eq!(name, "y"),
            other => panic!("expected undefined variable error, found {:?}", other),
        }
    }

    #[test]
    fn malformed_postfix_sequences() {
        let cases = vec![
            vec![],
            vec![Token::Number(1), Token::Number(2)],
            vec![Token::Operator(Operator::Plus)],
            vec![Token::Number(1), Token::Operator(Operator::Plus)],
            vec![Token::Lparen],
        ];
        for rpn in cases {
            let env = Environment::new();
            let evaluator = Evaluator::new(&env);
            match evaluator.eval(rpn.clone()) {
                Err(Error::MalformedExpression { .. }) => {}
                other => panic!(
                    "expected malformed expression error for {:?}, found {:?}",
                    rpn, other
                ),
            }
        }
    }

    fn test_eval(input: &str, env: &Environment) -> Result<Value, Error> {
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        let rpn = parser.parse()?;
        Evaluator::new(env).eval(rpn)
    }
}
