use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_factor},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A `Node::Binary` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            left = Node::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_factor(tokens, depth)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let line = *line;
            tokens.next();
            let right = parse_factor(tokens, depth)?;
            left = Node::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Converts a token into a [`BinaryOperator`] if it is one.
///
/// # Example
/// ```
/// use whilst::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&Token::Semicolon), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
