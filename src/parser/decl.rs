use crate::{
    cst::cst::{CstNode, Rule},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    init::parse_init_block,
    lookups::{DATA_TYPES, LITERALS, RETURN_TYPES},
    parser::Parser,
    stmt::{parse_block, parse_play_block},
};

pub fn parse_program(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::Program, |parser, children| {
        children.push(parse_declarations(parser)?);
        children.push(parse_init_block(parser)?);
        children.push(parse_play_block(parser)?);
        Ok(())
    })
}

/// Zero or more constant and function declarations, ending at the first
/// token neither can start with.
pub fn parse_declarations(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::Declarations, |parser, children| {
        while let Some(handler) = parser
            .get_decl_lookup()
            .get(&parser.current_token_kind())
            .copied()
        {
            children.push(handler(parser)?);
        }
        Ok(())
    })
}

pub fn parse_constant_declaration(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::ConstantDeclaration, |parser, children| {
        children.push(parser.expect(TokenKind::Const)?);
        children.push(parser.expect_one_of(&DATA_TYPES)?);
        children.push(parser.expect(TokenKind::Identifier)?);
        children.push(parser.expect(TokenKind::Assignment)?);
        children.push(parser.expect_one_of(&LITERALS)?);
        Ok(())
    })
}

pub fn parse_function_declaration(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::FunctionDeclaration, |parser, children| {
        children.push(parser.expect(TokenKind::Function)?);
        children.push(parse_return_type(parser)?);
        children.push(parser.expect(TokenKind::Identifier)?);
        children.push(parser.expect(TokenKind::OpenParen)?);

        if parser.at_one_of(&DATA_TYPES) {
            children.push(parse_formal_params(parser)?);

            while parser.current_token_kind() == TokenKind::Comma {
                children.push(parser.leaf());
                children.push(parse_formal_params(parser)?);
            }
        }

        children.push(parser.expect(TokenKind::CloseParen)?);
        children.push(parse_block(parser)?);
        Ok(())
    })
}

pub fn parse_return_type(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::ReturnType, |parser, children| {
        children.push(parser.expect_one_of(&RETURN_TYPES)?);
        Ok(())
    })
}

pub fn parse_formal_params(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::FormalParams, |parser, children| {
        children.push(parser.expect_one_of(&DATA_TYPES)?);
        children.push(parser.expect(TokenKind::Identifier)?);
        Ok(())
    })
}

/// `int grid[4][4]`. No production references this rule; it is reachable
/// as a start symbol through `parse_rule`.
pub fn parse_var_declaration(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::VarDeclaration, |parser, children| {
        children.push(parser.expect_one_of(&DATA_TYPES)?);
        children.push(parser.expect(TokenKind::Identifier)?);

        while parser.current_token_kind() == TokenKind::OpenBracket {
            children.push(parser.leaf());
            children.push(parser.expect(TokenKind::Integer)?);
            children.push(parser.expect(TokenKind::CloseBracket)?);
        }
        Ok(())
    })
}
