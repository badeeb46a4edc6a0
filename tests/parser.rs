use whilst::{
    ast::{BinaryOperator, Node, UnaryOperator},
    error::{Error, ParseError},
    parse_source,
};

fn num(value: f64) -> Box<Node> {
    Box::new(Node::NumberLiteral { value, line: 1 })
}

fn ident(name: &str) -> Box<Node> {
    Box::new(Node::Identifier { name: name.to_string(),
                                line: 1, })
}

fn binary(op: BinaryOperator, left: Box<Node>, right: Box<Node>) -> Box<Node> {
    Box::new(Node::Binary { op,
                            left,
                            right,
                            line: 1 })
}

/// Parses a program and returns its top-level statements.
fn statements(src: &str) -> Vec<Node> {
    match parse_source(src) {
        Ok(Node::Program { statements }) => statements,
        Ok(other) => panic!("expected a program, got {other:?}"),
        Err(e) => panic!("failed to parse {src:?}: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match parse_source(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("expected a parse error for {src:?}, got {other:?}"),
    }
}

#[test]
fn print_and_block() {
    assert_eq!(statements("print 1+2; {print 3; print 4;}"),
               vec![Node::Print { expr: binary(BinaryOperator::Add, num(1.0), num(2.0)),
                                  line: 1, },
                    Node::Block { statements: vec![Node::Print { expr: num(3.0),
                                                                 line: 1, },
                                                   Node::Print { expr: num(4.0),
                                                                 line: 1, }],
                                  line:       1, }]);
}

#[test]
fn unary_negation_applies_to_factor() {
    let negated_two = Box::new(Node::Unary { op:   UnaryOperator::Negate,
                                             expr: num(2.0),
                                             line: 1, });

    assert_eq!(statements("print -2-2;"),
               vec![Node::Print { expr: binary(BinaryOperator::Sub, negated_two, num(2.0)),
                                  line: 1, }]);
}

#[test]
fn multiplication_nests_below_addition() {
    // 3 + (4 * (5 - 2))
    let expected = binary(BinaryOperator::Add,
                          num(3.0),
                          binary(BinaryOperator::Mul,
                                 num(4.0),
                                 binary(BinaryOperator::Sub, num(5.0), num(2.0))));

    assert_eq!(statements("print 3+4*(5-2);"),
               vec![Node::Print { expr: expected,
                                  line: 1, }]);
}

#[test]
fn operators_fold_to_the_left() {
    // (1 + 2) - 3
    let expected = binary(BinaryOperator::Sub,
                          binary(BinaryOperator::Add, num(1.0), num(2.0)),
                          num(3.0));
    assert_eq!(statements("x = 1+2-3;"),
               vec![Node::Assignment { name: "x".to_string(),
                                       expr: expected,
                                       line: 1, }]);

    // (8 / 4) * 2
    let expected = binary(BinaryOperator::Mul,
                          binary(BinaryOperator::Div, num(8.0), num(4.0)),
                          num(2.0));
    assert_eq!(statements("x = 8/4*2;"),
               vec![Node::Assignment { name: "x".to_string(),
                                       expr: expected,
                                       line: 1, }]);
}

#[test]
fn assignment_reads_identifiers() {
    assert_eq!(statements("y = x + 3;"),
               vec![Node::Assignment { name: "y".to_string(),
                                       expr: binary(BinaryOperator::Add, ident("x"), num(3.0)),
                                       line: 1, }]);
}

#[test]
fn if_without_else_has_no_else_branch() {
    assert_eq!(statements("if (1) j = 2;"),
               vec![Node::If { condition:   num(1.0),
                               then_branch: Box::new(Node::Assignment { name: "j".to_string(),
                                                                        expr: num(2.0),
                                                                        line: 1, }),
                               else_branch: None,
                               line:        1, }]);
}

#[test]
fn else_binds_to_nearest_if() {
    let parsed = statements("if (1) if (0) x = 1; else x = 2;");

    let [Node::If { else_branch: None,
                    then_branch,
                    .. }] = parsed.as_slice()
    else {
        panic!("outer if must not own the else: {parsed:?}");
    };
    assert!(matches!(&**then_branch, Node::If { else_branch: Some(_), .. }));
}

#[test]
fn while_statement() {
    assert_eq!(statements("while (k) k = k - 1;"),
               vec![Node::While { condition: ident("k"),
                                  body:      Box::new(Node::Assignment { name: "k".to_string(),
                                                                         expr: binary(BinaryOperator::Sub,
                                                                                      ident("k"),
                                                                                      num(1.0)),
                                                                         line: 1, }),
                                  line:      1, }]);
}

#[test]
fn nodes_record_their_lines() {
    let parsed = statements("x = 1;\nwhile (x)\n{\n  x = x - 1;\n}");

    assert_eq!(parsed[0].line(), 1);
    assert_eq!(parsed[1].line(), 2);
    let Node::While { body, .. } = &parsed[1] else {
        panic!("expected a while loop");
    };
    assert_eq!(body.line(), 3);
}

#[test]
fn parsing_is_deterministic() {
    let src = "x = 23; while (x) { if (x - 3) print x; else x = 1; x = x - 1; }";
    assert_eq!(parse_source(src).unwrap(), parse_source(src).unwrap());
}

#[test]
fn missing_semicolon() {
    assert_eq!(parse_error("print 1 2;"),
               ParseError::ExpectedToken { expected: "';'",
                                           found:    "number 2".to_string(),
                                           line:     1, });
    assert!(matches!(parse_error("x = 1"),
                     ParseError::UnexpectedEndOfInput { expected: "';'", .. }));
}

#[test]
fn missing_equals_after_identifier() {
    assert_eq!(parse_error("x 1;"),
               ParseError::ExpectedToken { expected: "'='",
                                           found:    "number 1".to_string(),
                                           line:     1, });
    assert!(matches!(parse_error("x == 1;"), ParseError::ExpectedToken { expected: "'='", .. }));
}

#[test]
fn unbalanced_parentheses() {
    assert!(matches!(parse_error("print (1 + 2;"),
                     ParseError::ExpectedToken { expected: "')'", .. }));
    assert!(matches!(parse_error("print 1 + 2);"),
                     ParseError::ExpectedToken { expected: "';'", .. }));
    assert!(matches!(parse_error("if 1) x = 1;"),
                     ParseError::ExpectedToken { expected: "'('", .. }));
    assert!(matches!(parse_error("while (1 x = 1;"),
                     ParseError::ExpectedToken { expected: "')'", .. }));
}

#[test]
fn unexpected_token_in_statement_position() {
    assert!(matches!(parse_error("3 + 4;"),
                     ParseError::UnexpectedToken { context: "statement", .. }));
    assert!(matches!(parse_error("else x = 1;"),
                     ParseError::UnexpectedToken { context: "statement", .. }));
    assert!(matches!(parse_error("}"), ParseError::UnexpectedToken { context: "statement", .. }));
}

#[test]
fn unexpected_token_in_factor_position() {
    assert!(matches!(parse_error("print ;"),
                     ParseError::UnexpectedToken { context: "factor", .. }));
    assert!(matches!(parse_error(r#"print "text";"#),
                     ParseError::UnexpectedToken { context: "factor", .. }));
    assert!(matches!(parse_error("x = 1 + * 2;"),
                     ParseError::UnexpectedToken { context: "factor", .. }));
}

#[test]
fn unclosed_block_reports_last_line() {
    assert_eq!(parse_error("{\n  x = 1;\n"),
               ParseError::UnexpectedEndOfInput { expected: "'}'",
                                                  line:     2, });
}

#[test]
fn huge_integer_literal_is_rejected() {
    assert_eq!(parse_error("x = 9007199254740993;"),
               ParseError::LiteralTooLarge { line: 1 });
    assert_eq!(statements("x = 9007199254740991;").len(), 1);
}

#[test]
fn error_messages_name_expected_and_found_tokens() {
    assert_eq!(parse_error("print 1 2;").to_string(),
               "Error on line 1: Expected ';' but found number 2.");
    assert_eq!(parse_error("print (1;").to_string(),
               "Error on line 1: Expected ')' but found ';'.");
}

#[test]
fn runaway_negation_is_rejected() {
    let src = format!("print {}1;", "-".repeat(200_000));
    assert_eq!(parse_error(&src), ParseError::NestingTooDeep { line: 1 });
}

#[test]
fn nesting_limit_applies_to_parentheses_and_statements() {
    let at_limit = format!("print {}1{};", "(".repeat(256), ")".repeat(256));
    assert_eq!(statements(&at_limit).len(), 1);

    let beyond = format!("print {}1{};", "(".repeat(257), ")".repeat(257));
    assert!(matches!(parse_error(&beyond), ParseError::NestingTooDeep { .. }));

    let ifs = format!("{}x = 1;", "if (1) ".repeat(300));
    assert!(matches!(parse_error(&ifs), ParseError::NestingTooDeep { .. }));

    let blocks = format!("{}\nx = 1;{}", "{".repeat(300), "}".repeat(300));
    assert_eq!(parse_error(&blocks), ParseError::NestingTooDeep { line: 1 });
    assert_eq!(parse_error(&blocks).to_string(), "Error on line 1: Nesting is too deep.");
}
