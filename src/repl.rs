use std::io::{self, Write};

use wordmath::{environment::Environment, runner::Runner};

pub fn start() {
    let mut runner = Runner::new();
    let mut env = Environment::new();
    let mut line_number = 0;

    loop {
        print!(">>");
        io::stdout().flush().unwrap();

        let mut input = String::new();

        let bytes = io::stdin()
            .read_line(&mut input)
            .expect("Failed to read line");
        if bytes == 0 {
            break;
        }

        line_number += 1;

        if let Err(err) = runner.run_line(&mut env, line_number, &input) {
            println!("{}", err);
        }
    }
}
