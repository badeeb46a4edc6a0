use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Keywords are exact tokens and therefore win over the identifier pattern
/// when both match the same text. A longer identifier match still wins, so
/// `ifx` and `printer` are identifiers.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens with a decimal point, such as `3.14` or `12.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens. A doubled quote inside the literal stands for
    /// one quote character.
    #[regex(r#""([^"]|"")*""#, parse_string)]
    Str(String),
    /// `print`
    #[token("print")]
    Print,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// Identifier tokens; variable names such as `x` or `total_1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,

    /// Line breaks. Never emitted; only advances the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(value) => write!(f, "number {value}"),
            Self::Integer(value) => write!(f, "number {value}"),
            Self::Str(value) => write!(f, "string {value:?}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Print => write!(f, "'print'"),
            Self::If => write!(f, "'if'"),
            Self::Else => write!(f, "'else'"),
            Self::While => write!(f, "'while'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::Semicolon => write!(f, "';'"),
            Self::Equals => write!(f, "'='"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::LessEqual => write!(f, "'<='"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::Comma => write!(f, "','"),
            Self::NewLine => write!(f, "newline"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Converts source text into a list of `(Token, line)` pairs.
///
/// Whitespace and line breaks produce no tokens. Tokenization stops at the
/// first piece of input that no rule accepts.
///
/// # Errors
/// Returns [`LexError::UnrecognizedInput`] with the offending text, its byte
/// offset and its line.
///
/// # Example
/// ```
/// use whilst::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1.5;").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x".to_string()), 1),
///                 (Token::Equals, 1),
///                 (Token::Real(1.5), 1),
///                 (Token::Semicolon, 1)]);
///
/// assert!(tokenize("$").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(LexError::UnrecognizedInput { text:     lexer.slice().to_string(),
                                                     position: lexer.span().start,
                                                     line:     lexer.extras.line, });
        }
    }

    log::trace!("tokenized {} tokens", tokens.len());
    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
///
/// A trailing point (`12.`) is accepted by `f64::from_str`. Literals beyond
/// the `f64` range would parse as infinity and are rejected instead.
fn parse_float(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok().filter(|value: &f64| value.is_finite())
}
/// Parses an integer literal from the current token slice.
///
/// Returns `None`, and thereby a lexing error, when the literal does not fit
/// into an `i64`.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Strips the surrounding quotes of a string literal and collapses doubled
/// quotes into one. Line breaks inside the literal still advance the line
/// counter.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();
    slice[1..slice.len() - 1].replace("\"\"", "\"")
}
