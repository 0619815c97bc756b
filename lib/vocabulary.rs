use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::token::Operator;

lazy_static! {
    pub static ref NUM_WORDS: HashMap<&'static str, i64> = HashMap::from([
        ("zero", 0),
        ("one", 1),
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
        ("eight", 8),
        ("nine", 9),
        ("ten", 10),
        ("eleven", 11),
        ("twelve", 12),
        ("thirteen", 13),
        ("fourteen", 14),
        ("fifteen", 15),
        ("sixteen", 16),
        ("seventeen", 17),
        ("eighteen", 18),
        ("nineteen", 19),
        ("twenty", 20),
    ]);
    pub static ref OP_WORDS: HashMap<&'static str, Operator> = HashMap::from([
        ("plus", Operator::Plus),
        ("minus", Operator::Minus),
        ("times", Operator::Asterisk),
        ("divided_by", Operator::Slash),
        ("power", Operator::Power),
    ]);
}
