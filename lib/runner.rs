use crate::{
    environment::Environment, error::Error, evaluator::Evaluator, lexer::Lexer, parser::Parser,
    value::Value,
};

/// Receives one value per executed print statement, in program order.
pub trait Sink {
    fn emit(&mut self, value: Value);
}

pub struct StdoutSink;

impl Sink for StdoutSink {
    fn emit(&mut self, value: Value) {
        println!("{}", value);
    }
}

impl Sink for Vec<Value> {
    fn emit(&mut self, value: Value) {
        self.push(value);
    }
}

pub struct Runner<S: Sink> {
    sink: S,
}

impl Runner<StdoutSink> {
    pub fn new() -> Self {
        Self::with_sink(StdoutSink)
    }
}

impl Default for Runner<StdoutSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sink> Runner<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Executes a whole program against a fresh environment and returns the
    /// environment as it stood after the last line. The first error aborts
    /// the remaining lines.
    pub fn run(&mut self, program: &str) -> Result<Environment, Error> {
        let mut env = Environment::new();
        for (index, line) in program.lines().enumerate() {
            self.run_line(&mut env, index + 1, line)?;
        }
        Ok(env)
    }

    pub fn run_line(
        &mut self,
        env: &mut Environment,
        line_number: usize,
        raw: &str,
    ) -> Result<(), Error> {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        if let Some(rest) = strip_print_keyword(line) {
            let value = eval_expression(rest, env)?;
            self.sink.emit(value);
            return Ok(());
        }

        if let Some((left, right)) = line.split_once('=') {
            let name = left.trim();
            if !is_identifier(name) {
                return Err(Error::InvalidVariableName {
                    line: line_number,
                    name: name.to_string(),
                });
            }
            let value = eval_expression(right, env)?;
            env.set(name, value);
            return Ok(());
        }

        Err(Error::UnknownStatement {
            line: line_number,
            text: line.to_string(),
        })
    }
}

/// Evaluates a single expression against an environment, wiring the lexer,
/// parser and evaluator together.
pub fn eval_expression(input: &str, env: &Environment) -> Result<Value, Error> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    let rpn = parser.parse()?;
    Evaluator::new(env).eval(rpn)
}

// the keyword itself matches case-insensitively, but it must be followed by
// whitespace: "print" alone or "printx" is not a print statement
fn strip_print_keyword(line: &str) -> Option<&str> {
    let (keyword, rest) = line.split_at_checked(5)?;
    if !keyword.eq_ignore_ascii_case("print") {
        return None;
    }
    if !rest.starts_with(|char: char| char.is_whitespace()) {
        return None;
    }
    Some(rest)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(char) if char.is_ascii_alphabetic() || char == '_' => {}
        _ => return false,
    }
    chars.all(|char| char.is_ascii_alphanumeric() || char == '_')
}
