use std::collections::HashMap;

use crate::{
    cst::cst::{CstNode, Rule},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{decl::*, expr::*, init::*, parser::Parser, stmt::*};

pub type RuleHandler = fn(&mut Parser) -> Result<CstNode, Error>;

// Lookup tables inside parser struct, so it's easier
pub type DeclLookup = HashMap<TokenKind, RuleHandler>;
pub type StmtLookup = HashMap<TokenKind, RuleHandler>;

pub const DATA_TYPES: [TokenKind; 2] = [TokenKind::Int, TokenKind::Bool];
pub const RETURN_TYPES: [TokenKind; 3] = [TokenKind::Int, TokenKind::Bool, TokenKind::Void];
pub const LITERALS: [TokenKind; 2] = [TokenKind::Integer, TokenKind::Boolean];
pub const DIRECTIONS: [TokenKind; 4] = [
    TokenKind::North,
    TokenKind::South,
    TokenKind::East,
    TokenKind::West,
];
pub const SENSES: [TokenKind; 3] = [
    TokenKind::SenseStench,
    TokenKind::SenseBreeze,
    TokenKind::SenseGlitter,
];
pub const INIT_STATEMENTS: [TokenKind; 2] = [TokenKind::PlacePit, TokenKind::ClearRoom];
pub const ADDITIVE: [TokenKind; 2] = [TokenKind::Plus, TokenKind::Minus];
pub const MULTIPLICATIVE: [TokenKind; 2] = [TokenKind::Multiply, TokenKind::Divide];

pub const EXPRBASE_FIRST: [TokenKind; 5] = [
    TokenKind::Identifier,
    TokenKind::Integer,
    TokenKind::Boolean,
    TokenKind::OpenParen,
    TokenKind::Minus,
];
pub const ELEMENT_FIRST: [TokenKind; 8] = [
    TokenKind::SenseStench,
    TokenKind::SenseBreeze,
    TokenKind::SenseGlitter,
    TokenKind::Identifier,
    TokenKind::Integer,
    TokenKind::Boolean,
    TokenKind::OpenParen,
    TokenKind::Minus,
];
pub const STATEMENT_FIRST: [TokenKind; 8] = [
    TokenKind::Move,
    TokenKind::Shoot,
    TokenKind::Grab,
    TokenKind::PrintPosition,
    TokenKind::If,
    TokenKind::While,
    TokenKind::Identifier,
    TokenKind::Return,
];

pub fn create_token_lookups(parser: &mut Parser) {
    // Declarations
    parser.decl(TokenKind::Const, parse_constant_declaration);
    parser.decl(TokenKind::Function, parse_function_declaration);

    // Agent actions
    parser.stmt(TokenKind::Move, parse_move_stmt);
    parser.stmt(TokenKind::Shoot, parse_shoot_stmt);
    parser.stmt(TokenKind::Grab, parse_grab_stmt);
    parser.stmt(TokenKind::PrintPosition, parse_print_pos_stmt);

    // Control flow
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);

    parser.stmt(TokenKind::Identifier, parse_action_assignment);
}

/// The parse function for each non-terminal, used to start a parse at any rule.
pub fn rule_handler(rule: Rule) -> RuleHandler {
    match rule {
        Rule::Program => parse_program,
        Rule::Declarations => parse_declarations,
        Rule::ConstantDeclaration => parse_constant_declaration,
        Rule::FunctionDeclaration => parse_function_declaration,
        Rule::ReturnType => parse_return_type,
        Rule::FormalParams => parse_formal_params,
        Rule::VarDeclaration => parse_var_declaration,
        Rule::InitBlock => parse_init_block,
        Rule::GridSize => parse_grid_size,
        Rule::MandatoryAgent => parse_mandatory_agent,
        Rule::MandatoryWumpus => parse_mandatory_wumpus,
        Rule::MandatoryGold => parse_mandatory_gold,
        Rule::InitStatement => parse_init_statement,
        Rule::Location => parse_location,
        Rule::PlayBlock => parse_play_block,
        Rule::Block => parse_block,
        Rule::Statement => parse_statement,
        Rule::MoveStmt => parse_move_stmt,
        Rule::ShootStmt => parse_shoot_stmt,
        Rule::GrabStmt => parse_grab_stmt,
        Rule::PrintPosStmt => parse_print_pos_stmt,
        Rule::Direction => parse_direction,
        Rule::IfStmt => parse_if_stmt,
        Rule::WhileStmt => parse_while_stmt,
        Rule::ReturnStmt => parse_return_stmt,
        Rule::ActionAssignment => parse_action_assignment,
        Rule::Var => parse_var,
        Rule::ConditionalExpression => parse_conditional_expression,
        Rule::Term => parse_term,
        Rule::Element => parse_element,
        Rule::Sense => parse_sense,
        Rule::Expr => parse_expr,
        Rule::Exprfac => parse_exprfac,
        Rule::Exprbase => parse_exprbase,
    }
}
