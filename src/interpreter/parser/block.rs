use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses a block statement delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until a
/// closing `}` token is encountered.
///
/// Grammar: `block := "{" statement* "}"`
///
/// The result is returned as `Node::Block { statements, line }`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the opening brace.
/// - `depth`: Nesting depth of the statements inside the block.
///
/// # Errors
/// `UnexpectedEndOfInput` if the tokens run out before the closing brace.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens, depth)?),
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: "'}'",
                                                              line });
            },
        }
    }

    Ok(Node::Block { statements, line })
}
