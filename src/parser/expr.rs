//! Conditions and arithmetic.
//!
//! `expr` is right-recursive, so `1 - 2 - 3` groups as `1 - (2 - 3)`, and
//! `exprfac` takes at most one `*` or `/`.

use crate::{
    cst::cst::{CstNode, Rule},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{ADDITIVE, ELEMENT_FIRST, EXPRBASE_FIRST, MULTIPLICATIVE, SENSES},
    parser::Parser,
};

pub fn parse_conditional_expression(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::ConditionalExpression, |parser, children| {
        children.push(parse_term(parser)?);

        while parser.current_token_kind() == TokenKind::Logic {
            children.push(parser.leaf());
            children.push(parse_term(parser)?);
        }
        Ok(())
    })
}

pub fn parse_term(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::Term, |parser, children| {
        children.push(parse_element(parser)?);

        while parser.current_token_kind() == TokenKind::Comparison {
            children.push(parser.leaf());
            children.push(parse_element(parser)?);
        }
        Ok(())
    })
}

pub fn parse_element(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::Element, |parser, children| {
        if parser.at_one_of(&SENSES) {
            children.push(parse_sense(parser)?);
        } else if parser.at_one_of(&EXPRBASE_FIRST) {
            children.push(parse_expr(parser)?);
        } else {
            return Err(parser.mismatch(&ELEMENT_FIRST));
        }
        Ok(())
    })
}

/// Finishes an `element` whose leading identifier was already consumed.
///
/// Builds the same `element > expr > exprfac > exprbase > var` chain a direct
/// parse of the identifier would have produced.
pub fn parse_element_after_identifier(parser: &mut Parser, identifier: CstNode) -> Result<CstNode, Error> {
    let var = parse_var_after_identifier(parser, identifier)?;
    let base = parser.rule(Rule::Exprbase, move |_, children| {
        children.push(var);
        Ok(())
    })?;

    parser.rule(Rule::Element, move |parser, children| {
        let factor = parser.rule(Rule::Exprfac, move |parser, children| {
            children.push(base);
            parse_exprfac_tail(parser, children)
        })?;

        children.push(parser.rule(Rule::Expr, move |parser, children| {
            children.push(factor);
            parse_expr_tail(parser, children)
        })?);
        Ok(())
    })
}

pub fn parse_sense(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::Sense, |parser, children| {
        children.push(parser.expect_one_of(&SENSES)?);
        children.push(parser.expect(TokenKind::OpenParen)?);
        children.push(parser.expect(TokenKind::CloseParen)?);
        Ok(())
    })
}

pub fn parse_expr(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::Expr, |parser, children| {
        children.push(parse_exprfac(parser)?);
        parse_expr_tail(parser, children)
    })
}

fn parse_expr_tail(parser: &mut Parser, children: &mut Vec<CstNode>) -> Result<(), Error> {
    if parser.at_one_of(&ADDITIVE) {
        children.push(parser.leaf());
        children.push(parse_expr(parser)?);
    }
    Ok(())
}

pub fn parse_exprfac(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::Exprfac, |parser, children| {
        children.push(parse_exprbase(parser)?);
        parse_exprfac_tail(parser, children)
    })
}

fn parse_exprfac_tail(parser: &mut Parser, children: &mut Vec<CstNode>) -> Result<(), Error> {
    if parser.at_one_of(&MULTIPLICATIVE) {
        children.push(parser.leaf());
        children.push(parse_exprbase(parser)?);
    }
    Ok(())
}

pub fn parse_exprbase(parser: &mut Parser) -> Result<CstNode, Error> {
    parser.rule(Rule::Exprbase, |parser, children| {
        match parser.current_token_kind() {
            TokenKind::Identifier => children.push(parse_var(parser)?),
            TokenKind::Integer | TokenKind::Boolean => children.push(parser.leaf()),
            TokenKind::OpenParen => {
                children.push(parser.leaf());
                children.push(parse_expr(parser)?);
                children.push(parser.expect(TokenKind::CloseParen)?);
            }
            TokenKind::Minus => {
                children.push(parser.leaf());
                children.push(parse_exprbase(parser)?);
            }
            _ => return Err(parser.mismatch(&EXPRBASE_FIRST)),
        }
        Ok(())
    })
}

pub fn parse_var(parser: &mut Parser) -> Result<CstNode, Error> {
    let identifier = parser.expect(TokenKind::Identifier)?;
    parse_var_after_identifier(parser, identifier)
}

fn parse_var_after_identifier(parser: &mut Parser, identifier: CstNode) -> Result<CstNode, Error> {
    parser.rule(Rule::Var, move |parser, children| {
        children.push(identifier);

        if parser.current_token_kind() == TokenKind::OpenBracket {
            children.push(parser.leaf());
            children.push(parse_expr(parser)?);
            children.push(parser.expect(TokenKind::CloseBracket)?);
        }
        Ok(())
    })
}
