use crate::{
    ast::{
        ast::Stmt,
        statements::{BlockStmt, ExpressionStmt, VarStmt},
    },
    errors::errors::ErrorImpl,
    lexer::{lexer::INDENT_WIDTH, tokens::TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses the statement starting at the current token. Blank lines and stray
/// indent markers produce no statement.
pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    match parser.current_token_kind() {
        TokenKind::Newline | TokenKind::Indent => None,
        TokenKind::Identifier if parser.peek_token_kind() == TokenKind::Assignment => {
            parse_var_stmt(parser)
        }
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_var_stmt(parser: &mut Parser) -> Option<Stmt> {
    let name_token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Assignment) {
        return None;
    }
    parser.advance();

    let assigned_value = parse_expr(parser, BindingPower::Lowest)?;

    Some(Stmt::Var(VarStmt {
        identifier: name_token.value,
        assigned_value,
        position: name_token.position,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let position = parser.get_position();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    Some(Stmt::Expression(ExpressionStmt {
        expression,
        position,
    }))
}

/// Parses an indented block. Entered with the cursor on the newline that
/// ends the block's header line.
///
/// The block owns every following statement whose first token starts at or
/// beyond `INDENT_WIDTH` columns per enclosing block. On return the cursor
/// rests on the token just before the first statement outside the block.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    parser.advance();
    skip_line_breaks(parser);

    parser.indent();
    let position = parser.get_position();
    let threshold = INDENT_WIDTH * parser.indent_level();

    if parser.at_end() || parser.current_token().position.column < threshold {
        parser.push_error(ErrorImpl::ExpectedIndentedBlock, position);
    }

    let mut body = Vec::new();
    while !parser.at_end() && parser.current_token().position.column >= threshold {
        if let Some(stmt) = parse_stmt(parser) {
            body.push(stmt);
        }
        parser.advance();
        skip_line_breaks(parser);
    }

    parser.dedent();
    parser.retreat();

    BlockStmt { body, position }
}

fn skip_line_breaks(parser: &mut Parser) {
    while matches!(
        parser.current_token_kind(),
        TokenKind::Newline | TokenKind::Indent
    ) {
        parser.advance();
    }
}
