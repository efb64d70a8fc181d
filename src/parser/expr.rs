use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::{
            BinaryExpr, CallExpr, IfExpr, NumberExpr, PrefixExpr, StringExpr, SymbolExpr,
            WhileExpr,
        },
        statements::{BlockStmt, ExpressionStmt},
    },
    errors::errors::ErrorImpl,
    lexer::{lexer::INDENT_WIDTH, tokens::TokenKind},
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(nud) => nud,
        None => {
            let token = parser.current_token();
            let error = ErrorImpl::NoPrefixParser {
                kind: token_kind,
                token: token.value.clone(),
            };
            let position = token.position;
            parser.push_error(error, position);
            return None;
        }
    };

    let mut left = nud(parser)?;

    // While the next token binds tighter than bp, keep extending lhs. A block
    // leaves the cursor on a line boundary, and nothing continues past one.
    while !parser.at_line_boundary()
        && parser.peek_token_kind() != TokenKind::Newline
        && bp < parser.peek_binding_power()
    {
        let led = match parser.get_led_lookup().get(&parser.peek_token_kind()).copied() {
            Some(led) => led,
            None => return Some(left),
        };

        parser.advance();
        left = led(parser, left)?;
    }

    Some(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token();
    let position = token.position;

    match token.kind {
        TokenKind::Number => match token.value.parse::<i64>() {
            Ok(value) => Some(Expr::Number(NumberExpr { value, position })),
            Err(_) => {
                let error = ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                };
                parser.push_error(error, position);
                None
            }
        },
        TokenKind::String => Some(Expr::String(StringExpr {
            value: token.value.clone(),
            position,
        })),
        _ => Some(Expr::Symbol(SymbolExpr {
            value: token.value.clone(),
            position,
        })),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr) -> Option<Expr> {
    let operator = parser.current_token().clone();
    let bp = parser.current_binding_power();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Some(Expr::Binary(BinaryExpr {
        position: operator.position,
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let operator = parser.current_token().clone();
    parser.advance();

    let right_expr = parse_expr(parser, BindingPower::Prefix)?;

    Some(Expr::Prefix(PrefixExpr {
        position: operator.position,
        operator,
        right_expr: Box::new(right_expr),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(expr)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr) -> Option<Expr> {
    let position = *left.get_position();
    let arguments = parse_call_arguments(parser)?;

    Some(Expr::Call(CallExpr {
        callee: Box::new(left),
        arguments,
        position,
    }))
}

fn parse_call_arguments(parser: &mut Parser) -> Option<Vec<Expr>> {
    let mut args = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Some(args);
    }

    parser.advance();
    args.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.advance();
        args.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(args)
}

/// Parses `if <cond>: <newline> <block>` and any `else`/`elif` that follows.
/// Also entered on an `elif` token, which reads exactly like an `if`.
pub fn parse_if_expr(parser: &mut Parser) -> Option<Expr> {
    let position = parser.get_position();
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Lowest)?;

    if !parser.expect_peek(TokenKind::Colon) {
        return None;
    }
    if !parser.expect_peek(TokenKind::Newline) {
        return None;
    }

    let then_body = parse_block_stmt(parser);

    // An else belongs to this if only when it lines up with it.
    let else_column = INDENT_WIDTH * parser.indent_level();
    let lined_up = parser.peek_token().position.column == else_column;

    let else_body = match parser.peek_token_kind() {
        TokenKind::Else if lined_up => {
            parser.advance();
            if parser.peek_token_kind() == TokenKind::Colon {
                parser.advance();
            }
            if !parser.expect_peek(TokenKind::Newline) {
                return None;
            }

            Some(parse_block_stmt(parser))
        }
        TokenKind::Elif if lined_up => {
            parser.advance();
            let elif_position = parser.get_position();
            let nested = parse_if_expr(parser)?;

            Some(BlockStmt {
                body: vec![Stmt::Expression(ExpressionStmt {
                    expression: nested,
                    position: elif_position,
                })],
                position: elif_position,
            })
        }
        _ => None,
    };

    Some(Expr::If(IfExpr {
        condition: Box::new(condition),
        then_body,
        else_body,
        position,
    }))
}

/// Parses `while <cond>: <newline> <block>`.
pub fn parse_while_expr(parser: &mut Parser) -> Option<Expr> {
    let position = parser.get_position();
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Lowest)?;

    if !parser.expect_peek(TokenKind::Colon) {
        return None;
    }
    if !parser.expect_peek(TokenKind::Newline) {
        return None;
    }

    let body = parse_block_stmt(parser);

    Some(Expr::While(WhileExpr {
        condition: Box::new(condition),
        body,
        position,
    }))
}
