//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs including:
//! - Declarations and the init block
//! - Statements and nested blocks
//! - Expression shape and association
//! - Missing and unexpected tokens
//! - Nesting limits

use crate::{
    cst::cst::{CstNode, Rule},
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::tokenize, tokens::{Token, TokenKind}},
};

use super::parser::{parse, parse_rule, ParserOptions};

const WORLD: &str = "init { grid_size(4,4) place_agent(0,0) place_wumpus(3,3) place_gold(2,2) }";

fn tokens(source: &str) -> Vec<Token> {
    let (tokens, errors) = tokenize(source, Some("test.wump".to_string()));
    assert!(errors.is_empty(), "unexpected lexical errors: {:?}", errors);
    tokens
}

fn parse_source(source: &str) -> Result<CstNode, Error> {
    parse(tokens(source))
}

fn parse_as(source: &str, rule: Rule) -> Result<CstNode, Error> {
    parse_rule(tokens(source), rule, ParserOptions::default())
}

fn program(play: &str) -> String {
    format!("{} play {{ {} }}", WORLD, play)
}

/// Compact s-expression of a tree: leaves print their lexeme.
fn shape(node: &CstNode) -> String {
    match node {
        CstNode::Leaf(token) => token.value.clone(),
        CstNode::Branch { rule, children } => {
            let mut out = format!("({}", rule);
            for child in children {
                out.push(' ');
                out.push_str(&shape(child));
            }
            out.push(')');
            out
        }
    }
}

fn child_rules(node: &CstNode) -> Vec<&'static str> {
    node.children().iter().map(|child| child.rule_name()).collect()
}

#[test]
fn test_parse_minimal_program() {
    let source = "init { grid_size(4,4) place_agent(0,0) place_wumpus(3,3) place_gold(2,2) } play { move(north) grab() }";
    let tree = parse_source(source).unwrap();

    assert_eq!(tree.rule(), Some(Rule::Program));
    assert_eq!(child_rules(&tree), vec!["declarations", "init_block", "play_block"]);

    let declarations = &tree.children()[0];
    assert!(declarations.children().is_empty());

    let init_block = &tree.children()[1];
    assert_eq!(
        child_rules(init_block),
        vec!["INIT", "LBRACE", "grid_size", "mandatory_agent", "mandatory_wumpus", "mandatory_gold", "RBRACE"]
    );
    assert!(init_block.find(Rule::InitStatement).is_none());

    let play_block = &tree.children()[2];
    assert_eq!(child_rules(play_block), vec!["PLAY", "LBRACE", "statement", "statement", "RBRACE"]);
    assert_eq!(child_rules(&play_block.children()[2]), vec!["move_stmt"]);
    assert_eq!(child_rules(&play_block.children()[3]), vec!["grab_stmt"]);
}

#[test]
fn test_parse_placement_shape() {
    let tree = parse_as("grid_size(4, 5)", Rule::GridSize).unwrap();

    assert_eq!(shape(&tree), "(grid_size grid_size ( (location 4 , 5) ))");
}

#[test]
fn test_parse_optional_init_statements() {
    let source = "init { grid_size(4,4) place_agent(0,0) place_wumpus(3,3) place_gold(2,2) \
                  place_pit(1,1) clear_room(2,3) place_pit(0,3) } play { grab() }";
    let tree = parse_source(source).unwrap();
    let init_block = &tree.children()[1];

    let optional: Vec<String> = init_block
        .children()
        .iter()
        .filter(|child| child.rule() == Some(Rule::InitStatement))
        .map(shape)
        .collect();

    assert_eq!(
        optional,
        vec![
            "(init_statement place_pit ( (location 1 , 1) ))",
            "(init_statement clear_room ( (location 2 , 3) ))",
            "(init_statement place_pit ( (location 0 , 3) ))",
        ]
    );
}

#[test]
fn test_mandatory_placements_are_ordered() {
    let source = "init { grid_size(4,4) place_wumpus(3,3) place_agent(0,0) place_gold(2,2) } play { grab() }";
    let error = parse_source(source).unwrap_err();

    match error.kind() {
        ErrorImpl::Expectation { expected, found, .. } => {
            assert!(expected.contains(TokenKind::PlaceAgent));
            assert_eq!(*found, TokenKind::PlaceWumpus);
        }
        other => panic!("expected an expectation error, got {:?}", other),
    }
}

#[test]
fn test_parse_constant_declarations() {
    let source = format!("const int LIMIT = 10 const bool SAFE = false {} play {{ grab() }}", WORLD);
    let tree = parse_source(&source).unwrap();
    let declarations = &tree.children()[0];

    assert_eq!(declarations.children().len(), 2);
    assert_eq!(shape(&declarations.children()[0]), "(constant_declaration const int LIMIT = 10)");
    assert_eq!(shape(&declarations.children()[1]), "(constant_declaration const bool SAFE = false)");
}

#[test]
fn test_parse_function_declaration() {
    let source = "function int step(int dx, bool safe) { return dx + 1 }";
    let tree = parse_as(source, Rule::FunctionDeclaration).unwrap();

    assert_eq!(
        child_rules(&tree),
        vec!["FUNCTION", "return_type", "ID", "LPAREN", "formal_params", "COMMA", "formal_params", "RPAREN", "block"]
    );
    assert_eq!(shape(&tree.children()[4]), "(formal_params int dx)");
    assert!(tree.find(Rule::ReturnStmt).is_some());
}

#[test]
fn test_parse_function_without_parameters() {
    let tree = parse_as("function void look() { print_position() }", Rule::FunctionDeclaration).unwrap();

    assert_eq!(shape(&tree.children()[1]), "(return_type void)");
    assert_eq!(
        child_rules(&tree),
        vec!["FUNCTION", "return_type", "ID", "LPAREN", "RPAREN", "block"]
    );
}

#[test]
fn test_parse_declarations_then_program() {
    let source = format!(
        "function void scout() {{ move(north) print_position() }} const int N = 3 {} play {{ x = scout() }}",
        WORLD
    );
    let tree = parse_source(&source).unwrap();

    assert_eq!(
        child_rules(&tree.children()[0]),
        vec!["function_declaration", "constant_declaration"]
    );
}

#[test]
fn test_parse_var_declaration() {
    let tree = parse_as("int grid[4][4]", Rule::VarDeclaration).unwrap();
    assert_eq!(shape(&tree), "(var_declaration int grid [ 4 ] [ 4 ])");

    let scalar = parse_as("bool seen", Rule::VarDeclaration).unwrap();
    assert_eq!(shape(&scalar), "(var_declaration bool seen)");
}

#[test]
fn test_parse_expression_shape() {
    // `+` splits first and `*` binds inside the right operand: 1 + (2 * 3)
    let tree = parse_as("1 + 2 * 3", Rule::Expr).unwrap();

    assert_eq!(
        shape(&tree),
        "(expr (exprfac (exprbase 1)) + (expr (exprfac (exprbase 2) * (exprbase 3))))"
    );
}

#[test]
fn test_subtraction_associates_right() {
    // right recursion groups 1 - 2 - 3 as 1 - (2 - 3)
    let tree = parse_as("1 - 2 - 3", Rule::Expr).unwrap();

    assert_eq!(
        shape(&tree),
        "(expr (exprfac (exprbase 1)) - (expr (exprfac (exprbase 2)) - (expr (exprfac (exprbase 3)))))"
    );
}

#[test]
fn test_exprfac_takes_one_multiplication() {
    let error = parse_as("a * b * c", Rule::Expr).unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::Expectation {
            expected: TokenKind::EOF.into(),
            found: TokenKind::Multiply,
            lexeme: "*".to_string(),
            line: 1,
        }
    );
}

#[test]
fn test_parse_unary_and_grouping() {
    let tree = parse_as("-(x + 1) / 2", Rule::Expr).unwrap();

    assert_eq!(
        shape(&tree),
        "(expr (exprfac (exprbase - (exprbase ( (expr (exprfac (exprbase (var x))) + (expr (exprfac (exprbase 1)))) ))) / (exprbase 2)))"
    );
}

#[test]
fn test_parse_indexed_var() {
    let tree = parse_as("path[i + 1]", Rule::Var).unwrap();

    assert_eq!(
        shape(&tree),
        "(var path [ (expr (exprfac (exprbase (var i))) + (expr (exprfac (exprbase 1)))) ])"
    );
}

#[test]
fn test_parse_conditional_expression() {
    let tree = parse_as("sense_breeze() and x < 3 or true", Rule::ConditionalExpression).unwrap();

    assert_eq!(child_rules(&tree), vec!["term", "LOGIC", "term", "LOGIC", "term"]);
    assert_eq!(shape(&tree.children()[0]), "(term (element (sense sense_breeze ( ))))");
    assert_eq!(child_rules(&tree.children()[2]), vec!["element", "COMPARISON", "element"]);
}

#[test]
fn test_parse_assignment_forms() {
    let value = parse_as("x = 3", Rule::ActionAssignment).unwrap();
    assert_eq!(
        shape(&value),
        "(action_assignment (var x) = (element (expr (exprfac (exprbase 3)))))"
    );

    let sense = parse_as("danger = sense_stench()", Rule::ActionAssignment).unwrap();
    assert_eq!(
        shape(&sense),
        "(action_assignment (var danger) = (element (sense sense_stench ( ))))"
    );

    let call = parse_as("x = step(a, b)", Rule::ActionAssignment).unwrap();
    assert_eq!(shape(&call), "(action_assignment (var x) = step ( a , b ))");

    let no_args = parse_as("x = look()", Rule::ActionAssignment).unwrap();
    assert_eq!(shape(&no_args), "(action_assignment (var x) = look ( ))");
}

#[test]
fn test_assignment_from_identifier_matches_direct_parse() {
    let seeded = parse_as("x = y[2] * 4 + z", Rule::ActionAssignment).unwrap();
    let direct = parse_as("y[2] * 4 + z", Rule::Element).unwrap();

    assert_eq!(shape(&seeded.children()[2]), shape(&direct));
    assert_eq!(seeded.children()[2].depth(), direct.depth());
}

#[test]
fn test_parse_if_else() {
    let tree = parse_source(&program("if (sense_glitter()) { grab() } else { move(west) shoot(south) }")).unwrap();
    let if_stmt = tree.find(Rule::IfStmt).unwrap();

    assert_eq!(
        child_rules(if_stmt),
        vec!["IF", "LPAREN", "conditional_expression", "RPAREN", "block", "ELSE", "block"]
    );
    assert_eq!(child_rules(&if_stmt.children()[6]), vec!["LBRACE", "statement", "statement", "RBRACE"]);
}

#[test]
fn test_parse_while_loop() {
    let tree = parse_source(&program("while (x < 10) { x = x + 1 move(north) }")).unwrap();
    let while_stmt = tree.find(Rule::WhileStmt).unwrap();

    assert_eq!(
        child_rules(while_stmt),
        vec!["WHILE", "LPAREN", "conditional_expression", "RPAREN", "block"]
    );
}

#[test]
fn test_parse_nested_blocks() {
    let source = program("while (true) { if (x == 1) { if (y != 2) { grab() } } }");
    let tree = parse_source(&source).unwrap();

    let mut if_count = 0;
    tree.walk(|node, _| {
        if node.rule() == Some(Rule::IfStmt) {
            if_count += 1;
        }
    });
    assert_eq!(if_count, 2);
}

#[test]
fn test_empty_block_is_rejected() {
    let error = parse_source(&program("while (true) { }")).unwrap_err();

    match error.kind() {
        ErrorImpl::Expectation { expected, found, .. } => {
            assert!(expected.contains(TokenKind::Move));
            assert_eq!(*found, TokenKind::CloseCurly);
        }
        other => panic!("expected an expectation error, got {:?}", other),
    }
}

#[test]
fn test_empty_play_block_is_rejected() {
    let source = format!("{} play {{ }}", WORLD);
    assert!(parse_source(&source).is_err());
}

#[test]
fn test_missing_closing_brace() {
    let source = format!("{} play {{ move(north)", WORLD);
    let error = parse_source(&source).unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::MissingToken { expected: TokenKind::CloseCurly.into() }
    );
}

#[test]
fn test_missing_closing_paren() {
    let source = format!("{} play {{ grab(", WORLD);
    let error = parse_source(&source).unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::MissingToken { expected: TokenKind::CloseParen.into() }
    );
}

#[test]
fn test_missing_play_block() {
    let error = parse_source(WORLD).unwrap_err();

    assert_eq!(error.get_error_name(), "MissingToken");
}

#[test]
fn test_unexpected_token_reports_line() {
    let source = format!("{}\nplay {{\n  move(up)\n}}", WORLD);
    let error = parse_source(&source).unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::Expectation {
            expected: [TokenKind::North, TokenKind::South, TokenKind::East, TokenKind::West][..].into(),
            found: TokenKind::Identifier,
            lexeme: "up".to_string(),
            line: 3,
        }
    );
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 8);
}

#[test]
fn test_replaced_terminal() {
    let source = format!("{} play {{ move[north) }}", WORLD);
    let error = parse_source(&source).unwrap_err();

    match error.kind() {
        ErrorImpl::Expectation { expected, found, line, .. } => {
            assert_eq!(expected, &TokenKind::OpenParen.into());
            assert_eq!(*found, TokenKind::OpenBracket);
            assert_eq!(*line, 1);
        }
        other => panic!("expected an expectation error, got {:?}", other),
    }
}

#[test]
fn test_trailing_tokens_are_rejected() {
    let error = parse_source(&format!("{} grab()", program("grab()"))).unwrap_err();

    match error.kind() {
        ErrorImpl::Expectation { expected, found, .. } => {
            assert!(expected.contains(TokenKind::EOF));
            assert_eq!(*found, TokenKind::Grab);
        }
        other => panic!("expected an expectation error, got {:?}", other),
    }
}

#[test]
fn test_empty_program() {
    let error = parse_source("").unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::MissingToken { expected: TokenKind::Init.into() }
    );
}

#[test]
fn test_comments_never_become_leaves() {
    let source = format!("$this is a comment$ {} play {{ $step$ move(north) $done$ }}", WORLD);
    let tree = parse_source(&source).unwrap();

    assert!(tree.leaves().iter().all(|token| token.kind != TokenKind::Comment));
}

#[test]
fn test_leaves_match_input_tokens() {
    let source = format!(
        "const int N = 2 $note$ function bool far(int d) {{ return d - N }} {} play {{ x = far(y) grab() }}",
        WORLD
    );
    let input: Vec<Token> = tokens(&source)
        .into_iter()
        .filter(|token| token.kind != TokenKind::Comment)
        .collect();

    let tree = parse(input.clone()).unwrap();
    let leaves: Vec<Token> = tree.leaves().into_iter().cloned().collect();

    assert_eq!(leaves, input);
}

#[test]
fn test_reparse_of_leaves_is_identical() {
    let source = program("while (sense_breeze() or x >= 2) { x = x - 1 shoot(north) } print_position()");
    let tree = parse_source(&source).unwrap();

    let leaves: Vec<Token> = tree.leaves().into_iter().cloned().collect();
    let reparsed = parse(leaves).unwrap();

    assert_eq!(tree, reparsed);
}

#[test]
fn test_deep_expression_is_reported_not_overflowed() {
    let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let error = parse_as(&source, Rule::Expr).unwrap_err();

    assert!(matches!(error.kind(), ErrorImpl::TooDeeplyNested { limit: 256, .. }));
}

#[test]
fn test_deep_statements_are_reported() {
    let mut body = String::from("grab()");
    for _ in 0..120 {
        body = format!("if (true) {{ {} }}", body);
    }
    let error = parse_source(&program(&body)).unwrap_err();

    assert_eq!(error.get_error_name(), "TooDeeplyNested");
}

#[test]
fn test_configured_depth_limit() {
    let options = ParserOptions { max_depth: 4 };

    let error = parse_rule(tokens("x = 1"), Rule::ActionAssignment, options).unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::TooDeeplyNested { limit: 4, line: 1 });

    let shallow = parse_rule(tokens("north"), Rule::Direction, options);
    assert!(shallow.is_ok());
}

#[test]
fn test_moderate_nesting_is_accepted() {
    let source = format!("{}1{}", "(".repeat(40), ")".repeat(40));
    assert!(parse_as(&source, Rule::Expr).is_ok());
}
