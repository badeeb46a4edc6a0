/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates statements and expressions,
/// performs arithmetic, manages the variable environment, and writes printed
/// values to the output channel. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates every AST node kind by structural recursion.
/// - Handles variables and control flow (`if`/`else`, `while`).
/// - Reports runtime errors such as unknown variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a list of tokens, each
/// corresponding to a meaningful language element such as a number, an
/// identifier, an operator or a keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for input no token rule accepts.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token list produced by the lexer with recursive
/// descent and one token of lookahead, and constructs the program's syntax
/// tree.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Validates the grammar, reporting errors with the expected and found
///   token.
/// - Encodes operator precedence and left associativity.
pub mod parser;
