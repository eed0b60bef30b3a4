use crate::{
    cst::cst::{CstNode, Rule},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_conditional_expression, parse_element, parse_element_after_identifier, parse_expr, parse_var},
    lookups::{DIRECTIONS, STATEMENT_FIRST},
    parser::Parser,
};

pub fn parse_play_block(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::PlayBlock, |parser, children| {
        children.push(parser.expect(TokenKind::Play)?);
        parse_statement_list(parser, children)
    })
}

pub fn parse_block(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::Block, parse_statement_list)
}

/// `'{' statement {statement} '}'`; an empty body is rejected.
fn parse_statement_list(parser: &mut Parser, children: &mut Vec<CstNode>) -> Result<(), Error> {
    children.push(parser.expect(TokenKind::OpenCurly)?);
    children.push(parse_statement(parser)?);

    while parser.get_stmt_lookup().contains_key(&parser.current_token_kind()) {
        children.push(parse_statement(parser)?);
    }

    children.push(parser.expect(TokenKind::CloseCurly)?);
    Ok(())
}

pub fn parse_statement(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::Statement, |parser, children| {
        let handler = parser
            .get_stmt_lookup()
            .get(&parser.current_token_kind())
            .copied()
            .ok_or_else(|| parser.mismatch(&STATEMENT_FIRST))?;

        children.push(handler(parser)?);
        Ok(())
    })
}

pub fn parse_move_stmt(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::MoveStmt, |parser, children| {
        children.push(parser.expect(TokenKind::Move)?);
        children.push(parser.expect(TokenKind::OpenParen)?);
        children.push(parse_direction(parser)?);
        children.push(parser.expect(TokenKind::CloseParen)?);
        Ok(())
    })
}

pub fn parse_shoot_stmt(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::ShootStmt, |parser, children| {
        children.push(parser.expect(TokenKind::Shoot)?);
        children.push(parser.expect(TokenKind::OpenParen)?);
        children.push(parse_direction(parser)?);
        children.push(parser.expect(TokenKind::CloseParen)?);
        Ok(())
    })
}

pub fn parse_grab_stmt(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::GrabStmt, |parser, children| {
        children.push(parser.expect(TokenKind::Grab)?);
        children.push(parser.expect(TokenKind::OpenParen)?);
        children.push(parser.expect(TokenKind::CloseParen)?);
        Ok(())
    })
}

pub fn parse_print_pos_stmt(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::PrintPosStmt, |parser, children| {
        children.push(parser.expect(TokenKind::PrintPosition)?);
        children.push(parser.expect(TokenKind::OpenParen)?);
        children.push(parser.expect(TokenKind::CloseParen)?);
        Ok(())
    })
}

pub fn parse_direction(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::Direction, |parser, children| {
        children.push(parser.expect_one_of(&DIRECTIONS)?);
        Ok(())
    })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::IfStmt, |parser, children| {
        children.push(parser.expect(TokenKind::If)?);
        children.push(parser.expect(TokenKind::OpenParen)?);
        children.push(parse_conditional_expression(parser)?);
        children.push(parser.expect(TokenKind::CloseParen)?);
        children.push(parse_block(parser)?);

        if parser.current_token_kind() == TokenKind::Else {
            children.push(parser.leaf());
            children.push(parse_block(parser)?);
        }
        Ok(())
    })
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::WhileStmt, |parser, children| {
        children.push(parser.expect(TokenKind::While)?);
        children.push(parser.expect(TokenKind::OpenParen)?);
        children.push(parse_conditional_expression(parser)?);
        children.push(parser.expect(TokenKind::CloseParen)?);
        children.push(parse_block(parser)?);
        Ok(())
    })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::ReturnStmt, |parser, children| {
        children.push(parser.expect(TokenKind::Return)?);
        children.push(parse_expr(parser)?);
        Ok(())
    })
}

/// `var '=' (element | ID '(' [ID {',' ID}] ')')`
///
/// Both right-hand sides can start with an identifier. The identifier is
/// consumed first and the token after it decides: `(` makes a call whose
/// terminals sit directly under this node, anything else continues the
/// identifier as the `var` of an element.
pub fn parse_action_assignment(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::ActionAssignment, |parser, children| {
        children.push(parse_var(parser)?);
        children.push(parser.expect(TokenKind::Assignment)?);

        if parser.current_token_kind() != TokenKind::Identifier {
            children.push(parse_element(parser)?);
            return Ok(());
        }

        let identifier = parser.leaf();
        if parser.current_token_kind() != TokenKind::OpenParen {
            children.push(parse_element_after_identifier(parser, identifier)?);
            return Ok(());
        }

        children.push(identifier);
        children.push(parser.leaf());

        if parser.current_token_kind() == TokenKind::Identifier {
            children.push(parser.leaf());

            while parser.current_token_kind() == TokenKind::Comma {
                children.push(parser.leaf());
                children.push(parser.expect(TokenKind::Identifier)?);
            }
        }

        children.push(parser.expect(TokenKind::CloseParen)?);
        Ok(())
    })
}
