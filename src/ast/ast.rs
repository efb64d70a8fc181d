use std::fmt::Display;

use crate::Position;

use super::{
    expressions::{
        BinaryExpr, CallExpr, IfExpr, NumberExpr, PrefixExpr, StringExpr, SymbolExpr, WhileExpr,
    },
    statements::{BlockStmt, ExpressionStmt, VarStmt},
};

/// Statement
///
/// Every node owns its children outright; the tree is never mutated once the
/// parser has built it.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Var(VarStmt),
    Expression(ExpressionStmt),
    Block(BlockStmt),
}

impl Stmt {
    /// Returns the position of the token the statement starts with.
    pub fn get_position(&self) -> &Position {
        match self {
            Stmt::Var(stmt) => &stmt.position,
            Stmt::Expression(stmt) => &stmt.position,
            Stmt::Block(stmt) => &stmt.position,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Var(stmt) => write!(f, "{}", stmt),
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
            Stmt::Block(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Symbol(SymbolExpr),
    Number(NumberExpr),
    String(StringExpr),
    Prefix(PrefixExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
    If(IfExpr),
    While(WhileExpr),
}

impl Expr {
    /// Returns the position of the token the expression starts with.
    pub fn get_position(&self) -> &Position {
        match self {
            Expr::Symbol(expr) => &expr.position,
            Expr::Number(expr) => &expr.position,
            Expr::String(expr) => &expr.position,
            Expr::Prefix(expr) => &expr.position,
            Expr::Binary(expr) => &expr.position,
            Expr::Call(expr) => &expr.position,
            Expr::If(expr) => &expr.position,
            Expr::While(expr) => &expr.position,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Symbol(expr) => write!(f, "{}", expr),
            Expr::Number(expr) => write!(f, "{}", expr),
            Expr::String(expr) => write!(f, "{}", expr),
            Expr::Prefix(expr) => write!(f, "{}", expr),
            Expr::Binary(expr) => write!(f, "{}", expr),
            Expr::Call(expr) => write!(f, "{}", expr),
            Expr::If(expr) => write!(f, "{}", expr),
            Expr::While(expr) => write!(f, "{}", expr),
        }
    }
}

/// Program
///
/// The root of the tree: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self.statements.iter().map(|stmt| stmt.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
