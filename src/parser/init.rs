use crate::{
    cst::cst::{CstNode, Rule},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{lookups::INIT_STATEMENTS, parser::Parser};

/// The world setup: grid size and the three mandatory placements, in that
/// order, followed by any number of pits and cleared rooms.
pub fn parse_init_block(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::InitBlock, |parser, children| {
        children.push(parser.expect(TokenKind::Init)?);
        children.push(parser.expect(TokenKind::OpenCurly)?);
        children.push(parse_grid_size(parser)?);
        children.push(parse_mandatory_agent(parser)?);
        children.push(parse_mandatory_wumpus(parser)?);
        children.push(parse_mandatory_gold(parser)?);

        while parser.at_one_of(&INIT_STATEMENTS) {
            children.push(parse_init_statement(parser)?);
        }

        children.push(parser.expect(TokenKind::CloseCurly)?);
        Ok(())
    })
}

fn parse_placement(parser: &mut Parser, rule: Rule, keywords: &[TokenKind]) -> Result<CstNode, Error> {
    parser.rule(rule, |parser, children| {
        children.push(parser.expect_one_of(keywords)?);
        children.push(parser.expect(TokenKind::OpenParen)?);
        children.push(parse_location(parser)?);
        children.push(parser.expect(TokenKind::CloseParen)?);
        Ok(())
    })
}

pub fn parse_grid_size(parser: &mut Parser) -> Result<CstNode, Error> {
    parse_placement(parser, Rule::GridSize, &[TokenKind::GridSize])
}

pub fn parse_mandatory_agent(parser: &mut Parser) -> Result<CstNode, Error> {
    parse_placement(parser, Rule::MandatoryAgent, &[TokenKind::PlaceAgent])
}

pub fn parse_mandatory_wumpus(parser: &mut Parser) -> Result<CstNode, Error> {
    parse_placement(parser, Rule::MandatoryWumpus, &[TokenKind::PlaceWumpus])
}

pub fn parse_mandatory_gold(parser: &mut Parser) -> Result<CstNode, Error> {
    parse_placement(parser, Rule::MandatoryGold, &[TokenKind::PlaceGold])
}

pub fn parse_init_statement(parser: &mut Parser) -> Result<CstNode, Error> {
    parse_placement(parser, Rule::InitStatement, &INIT_STATEMENTS)
}

pub fn parse_location(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::Location, |parser, children| {
        children.push(parser.expect(TokenKind::Integer)?);
        children.push(parser.expect(TokenKind::Comma)?);
        children.push(parser.expect(TokenKind::Integer)?);
        Ok(())
    })
}
