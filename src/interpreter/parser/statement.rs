use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{descend, expect_token, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// The first token alone decides which kind of statement follows:
/// - `print` starts a print statement.
/// - an identifier starts an assignment; there are no bare expression
///   statements.
/// - `if` and `while` start control flow statements.
/// - `{` starts a block.
///
/// Grammar:
/// ```text
///     statement := "print" expression ";"
///                | IDENTIFIER "=" expression ";"
///                | "if" "(" expression ")" statement ("else" statement)?
///                | "while" "(" expression ")" statement
///                | "{" statement* "}"
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `depth`: Nesting depth of this statement; top-level statements are at 0.
///
/// # Returns
/// A parsed statement [`Node`].
///
/// # Errors
/// `UnexpectedToken` if the next token cannot start a statement, or any error
/// raised while parsing the statement's parts.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Print, line)) => {
            let line = *line;
            tokens.next();
            parse_print(tokens, line, depth)
        },
        Some((Token::Identifier(_), _)) => parse_assignment(tokens, depth),
        Some((Token::If, line)) => {
            let line = *line;
            tokens.next();
            parse_if(tokens, line, descend(depth, line)?)
        },
        Some((Token::While, line)) => {
            let line = *line;
            tokens.next();
            parse_while(tokens, line, descend(depth, line)?)
        },
        Some((Token::LBrace, line)) => {
            let line = *line;
            tokens.next();
            parse_block(tokens, line, descend(depth, line)?)
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { context: "statement",
                                                               token:   tok.to_string(),
                                                               line:    *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "a statement",
                                                       line:     0, }),
    }
}

/// Parses the rest of a print statement after the `print` keyword.
///
/// Grammar: `print := "print" expression ";"`
fn parse_print<'a, I>(tokens: &mut Peekable<I>, line: usize, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens, depth)?;
    expect_token(tokens, &Token::Semicolon, "';'")?;

    Ok(Node::Print { expr: Box::new(expr),
                     line })
}

/// Parses an assignment of the form `name = expression ;`.
///
/// # Errors
/// - `ExpectedToken` if `=` does not follow the name, or `;` does not follow
///   the expression.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (name, line) = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Equals, "'='")?;
    let expr = parse_expression(tokens, depth)?;
    expect_token(tokens, &Token::Semicolon, "';'")?;

    Ok(Node::Assignment { name,
                          expr: Box::new(expr),
                          line })
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if ( <condition> ) <statement>
///     else <statement>
/// ```
/// An `else` always belongs to the nearest preceding `if`. `else if` needs
/// no special handling because the else branch is itself a statement.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
/// - `depth`: Nesting depth of the condition and both branches.
///
/// # Returns
/// A `Node::If`; `else_branch` is `None` when no `else` follows.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let condition = parse_condition(tokens, depth)?;
    let then_branch = parse_statement(tokens, depth)?;

    let else_branch = match tokens.peek() {
        Some((Token::Else, _)) => {
            tokens.next();
            Some(Box::new(parse_statement(tokens, depth)?))
        },
        _ => None,
    };

    Ok(Node::If { condition: Box::new(condition),
                  then_branch: Box::new(then_branch),
                  else_branch,
                  line })
}

/// Parses a `while` statement after the `while` keyword.
///
/// Grammar: `while := "while" "(" expression ")" statement`
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let condition = parse_condition(tokens, depth)?;
    let body = parse_statement(tokens, depth)?;

    Ok(Node::While { condition: Box::new(condition),
                     body: Box::new(body),
                     line })
}

/// Parses the parenthesized condition of `if` and `while`.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect_token(tokens, &Token::LParen, "'('")?;
    let condition = parse_expression(tokens, depth)?;
    expect_token(tokens, &Token::RParen, "')'")?;
    Ok(condition)
}
