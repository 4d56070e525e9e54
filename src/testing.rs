use crate::lexer::Lexer;
use crate::parser::Parser;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Parses `text`, panicking on any diagnostic. For success-path tests.
pub fn parse(text: &str) -> Parser {
    let mut parser = Parser::new(Lexer::new(text));
    if let Err(err) = parser.parse() {
        panic!("parse failed: {}", err);
    }
    parser
}
