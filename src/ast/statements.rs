use std::{fmt::Display, slice::Iter};

use crate::Position;

use super::ast::{Expr, Stmt};

/// Block Statement
/// The indented body of a conditional or loop.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub position: Position,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body: Vec<String> = self.body.iter().map(|stmt| stmt.to_string()).collect();
        write!(f, "{}", body.join("; "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub position: Position,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Variable Statement
/// `name = value`, binding (or rebinding) a name.
#[derive(Debug, Clone, PartialEq)]
pub struct VarStmt {
    pub identifier: String,
    pub assigned_value: Expr,
    pub position: Position,
}

impl Display for VarStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.identifier, self.assigned_value)
    }
}
