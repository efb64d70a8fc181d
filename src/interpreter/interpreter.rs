//! Interpreter implementation.
//!
//! Statements yield values: a binding yields what it stored, a block yields
//! its last statement's value, a conditional yields the value of the branch
//! it took and a loop yields the value of its final iteration. Anything that
//! yields nothing yields `Value::None`.

use std::io::Write;

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::{BinaryExpr, CallExpr, IfExpr, PrefixExpr, SymbolExpr, WhileExpr},
        statements::BlockStmt,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position,
};

use super::{
    environment::Environment,
    value::{Builtin, Value},
};

pub struct Interpreter<'env, W: Write> {
    /// Bindings, owned by whoever runs the program
    environment: &'env mut Environment,
    /// Where `print` writes
    output: W,
}

impl<'env, W: Write> Interpreter<'env, W> {
    pub fn new(environment: &'env mut Environment, output: W) -> Self {
        Interpreter {
            environment,
            output,
        }
    }

    /// Gives back the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Evaluates every statement in order and yields the last value.
    pub fn evaluate_program(&mut self, program: &Program) -> Result<Value, Error> {
        let mut result = Value::None;
        for stmt in program.iter() {
            result = self.evaluate_stmt(stmt)?;
        }
        Ok(result)
    }

    pub fn evaluate_stmt(&mut self, stmt: &Stmt) -> Result<Value, Error> {
        match stmt {
            Stmt::Var(stmt) => {
                let value = self.evaluate_expr(&stmt.assigned_value)?;
                Ok(self.environment.store(&stmt.identifier, value))
            }
            Stmt::Expression(stmt) => self.evaluate_expr(&stmt.expression),
            Stmt::Block(block) => self.evaluate_block(block),
        }
    }

    pub fn evaluate_expr(&mut self, expr: &Expr) -> Result<Value, Error> {
        match expr {
            Expr::Number(number) => Ok(Value::Int(number.value)),
            Expr::String(string) => Ok(Value::Str(string.value.clone())),
            Expr::Symbol(symbol) => self.evaluate_symbol(symbol),
            Expr::Prefix(prefix) => self.evaluate_prefix(prefix),
            Expr::Binary(binary) => self.evaluate_binary(binary),
            Expr::Call(call) => self.evaluate_call(call),
            Expr::If(if_expr) => self.evaluate_if(if_expr),
            Expr::While(while_expr) => self.evaluate_while(while_expr),
        }
    }

    fn evaluate_block(&mut self, block: &BlockStmt) -> Result<Value, Error> {
        let mut result = Value::None;
        for stmt in block.iter() {
            result = self.evaluate_stmt(stmt)?;
        }
        Ok(result)
    }

    // Bindings shadow builtins.
    fn evaluate_symbol(&self, symbol: &SymbolExpr) -> Result<Value, Error> {
        if let Some(value) = self.environment.get(&symbol.value) {
            return Ok(value.clone());
        }

        match Builtin::from_name(&symbol.value) {
            Some(builtin) => Ok(Value::Builtin(builtin)),
            None => Err(Error::new(
                ErrorImpl::IdentifierNotFound {
                    name: symbol.value.clone(),
                },
                symbol.position,
            )),
        }
    }

    fn evaluate_prefix(&mut self, expr: &PrefixExpr) -> Result<Value, Error> {
        let right = self.evaluate_expr(&expr.right_expr)?;

        match (expr.operator.kind, right) {
            (TokenKind::Dash, Value::Int(value)) => value
                .checked_neg()
                .map(Value::Int)
                .ok_or_else(|| Error::new(ErrorImpl::IntegerOverflow, expr.position)),
            (TokenKind::Not, value) => Ok(Value::Bool(!value.is_truthy())),
            (_, value) => Err(Error::new(
                ErrorImpl::UnknownOperator {
                    operator: format!("{}{}", expr.operator.value, value.type_name()),
                },
                expr.position,
            )),
        }
    }

    fn evaluate_binary(&mut self, expr: &BinaryExpr) -> Result<Value, Error> {
        let kind = expr.operator.kind;

        match kind {
            TokenKind::And => {
                if !self.evaluate_expr(&expr.left)?.is_truthy() {
                    return Ok(Value::Bool(false));
                }
                let right = self.evaluate_expr(&expr.right)?;
                return Ok(Value::Bool(right.is_truthy()));
            }
            TokenKind::Or => {
                if self.evaluate_expr(&expr.left)?.is_truthy() {
                    return Ok(Value::Bool(true));
                }
                let right = self.evaluate_expr(&expr.right)?;
                return Ok(Value::Bool(right.is_truthy()));
            }
            _ => {}
        }

        if let Some(operator) = compound_operator(kind) {
            return self.evaluate_compound_assignment(expr, operator);
        }

        let left = self.evaluate_expr(&expr.left)?;
        let right = self.evaluate_expr(&expr.right)?;

        apply_operator(kind, &expr.operator.value, left, right, expr.position)
    }

    fn evaluate_compound_assignment(
        &mut self,
        expr: &BinaryExpr,
        operator: TokenKind,
    ) -> Result<Value, Error> {
        let symbol = match expr.left.as_ref() {
            Expr::Symbol(symbol) => symbol,
            target => {
                return Err(Error::new(
                    ErrorImpl::InvalidAssignmentTarget {
                        target: target.to_string(),
                    },
                    *target.get_position(),
                ))
            }
        };

        let current = match self.environment.get(&symbol.value) {
            Some(value) => value.clone(),
            None => {
                return Err(Error::new(
                    ErrorImpl::IdentifierNotFound {
                        name: symbol.value.clone(),
                    },
                    symbol.position,
                ))
            }
        };
        let right = self.evaluate_expr(&expr.right)?;

        let symbol_text = expr.operator.value.trim_end_matches('=');
        let value = apply_operator(operator, symbol_text, current, right, expr.position)?;

        Ok(self.environment.store(&symbol.value, value))
    }

    fn evaluate_call(&mut self, expr: &CallExpr) -> Result<Value, Error> {
        let builtin = match self.evaluate_expr(&expr.callee)? {
            Value::Builtin(builtin) => builtin,
            other => {
                return Err(Error::new(
                    ErrorImpl::NotAFunction {
                        value: other.type_name().to_string(),
                    },
                    expr.position,
                ))
            }
        };

        let mut arguments = Vec::with_capacity(expr.arguments.len());
        for argument in &expr.arguments {
            arguments.push(self.evaluate_expr(argument)?);
        }

        self.call_builtin(builtin, arguments, expr.position)
    }

    fn call_builtin(
        &mut self,
        builtin: Builtin,
        arguments: Vec<Value>,
        position: Position,
    ) -> Result<Value, Error> {
        match builtin {
            Builtin::Print => {
                let line: Vec<String> = arguments.iter().map(|value| value.to_string()).collect();
                writeln!(self.output, "{}", line.join(" ")).map_err(|error| {
                    Error::new(
                        ErrorImpl::OutputError {
                            message: error.to_string(),
                        },
                        position,
                    )
                })?;
                Ok(Value::None)
            }
            Builtin::Int => match single_argument(arguments, position)? {
                Value::Int(value) => Ok(Value::Int(value)),
                Value::Bool(value) => Ok(Value::Int(value as i64)),
                Value::Str(value) => match value.trim().parse::<i64>() {
                    Ok(parsed) => Ok(Value::Int(parsed)),
                    Err(_) => Err(Error::new(
                        ErrorImpl::ConversionError {
                            value,
                            target: String::from("int"),
                        },
                        position,
                    )),
                },
                other => Err(invalid_argument(builtin, &other, position)),
            },
            Builtin::Str => Ok(Value::Str(single_argument(arguments, position)?.to_string())),
            Builtin::Len => match single_argument(arguments, position)? {
                Value::Str(value) => Ok(Value::Int(value.chars().count() as i64)),
                other => Err(invalid_argument(builtin, &other, position)),
            },
        }
    }

    fn evaluate_if(&mut self, expr: &IfExpr) -> Result<Value, Error> {
        if self.evaluate_expr(&expr.condition)?.is_truthy() {
            self.evaluate_block(&expr.then_body)
        } else if let Some(else_body) = &expr.else_body {
            self.evaluate_block(else_body)
        } else {
            Ok(Value::None)
        }
    }

    fn evaluate_while(&mut self, expr: &WhileExpr) -> Result<Value, Error> {
        let mut result = Value::None;
        while self.evaluate_expr(&expr.condition)?.is_truthy() {
            result = self.evaluate_block(&expr.body)?;
        }
        Ok(result)
    }
}

/// Evaluates a program against `environment`, writing printed output to
/// `output`.
pub fn evaluate<W: Write>(
    program: &Program,
    environment: &mut Environment,
    output: W,
) -> Result<Value, Error> {
    Interpreter::new(environment, output).evaluate_program(program)
}

/// The arithmetic operator behind a compound assignment.
fn compound_operator(kind: TokenKind) -> Option<TokenKind> {
    match kind {
        TokenKind::PlusEquals => Some(TokenKind::Plus),
        TokenKind::MinusEquals => Some(TokenKind::Dash),
        TokenKind::StarEquals => Some(TokenKind::Star),
        TokenKind::SlashEquals => Some(TokenKind::Slash),
        TokenKind::PercentEquals => Some(TokenKind::Percent),
        TokenKind::CaretEquals => Some(TokenKind::Caret),
        _ => None,
    }
}

fn apply_operator(
    kind: TokenKind,
    symbol: &str,
    left: Value,
    right: Value,
    position: Position,
) -> Result<Value, Error> {
    let equality = matches!(kind, TokenKind::Equals | TokenKind::NotEquals);

    match (&left, &right) {
        (Value::Int(l), Value::Int(r)) => return integer_operation(kind, symbol, *l, *r, position),
        (Value::Str(_), Value::Str(_) | Value::Int(_)) | (Value::Int(_), Value::Str(_))
            if kind == TokenKind::Plus =>
        {
            return Ok(Value::Str(format!("{}{}", left, right)))
        }
        (Value::Str(l), Value::Str(r)) if equality => {
            return Ok(Value::Bool((l == r) == (kind == TokenKind::Equals)))
        }
        (Value::Bool(l), Value::Bool(r)) if equality => {
            return Ok(Value::Bool((l == r) == (kind == TokenKind::Equals)))
        }
        _ => {}
    }

    Err(unknown_operator(
        left.type_name(),
        symbol,
        right.type_name(),
        position,
    ))
}

fn integer_operation(
    kind: TokenKind,
    symbol: &str,
    left: i64,
    right: i64,
    position: Position,
) -> Result<Value, Error> {
    let result = match kind {
        TokenKind::Plus => left.checked_add(right),
        TokenKind::Dash => left.checked_sub(right),
        TokenKind::Star => left.checked_mul(right),
        TokenKind::Slash | TokenKind::Percent if right == 0 => {
            return Err(Error::new(ErrorImpl::DivisionByZero, position))
        }
        TokenKind::Slash => left.checked_div(right),
        TokenKind::Percent => left.checked_rem(right),
        TokenKind::Caret => {
            let exponent = u32::try_from(right).map_err(|_| {
                Error::new(
                    ErrorImpl::ConversionError {
                        value: right.to_string(),
                        target: String::from("exponent"),
                    },
                    position,
                )
            })?;
            left.checked_pow(exponent)
        }
        TokenKind::Equals => return Ok(Value::Bool(left == right)),
        TokenKind::NotEquals => return Ok(Value::Bool(left != right)),
        TokenKind::Less => return Ok(Value::Bool(left < right)),
        TokenKind::LessEquals => return Ok(Value::Bool(left <= right)),
        TokenKind::Greater => return Ok(Value::Bool(left > right)),
        TokenKind::GreaterEquals => return Ok(Value::Bool(left >= right)),
        _ => return Err(unknown_operator("int", symbol, "int", position)),
    };

    result
        .map(Value::Int)
        .ok_or_else(|| Error::new(ErrorImpl::IntegerOverflow, position))
}

fn single_argument(arguments: Vec<Value>, position: Position) -> Result<Value, Error> {
    match <[Value; 1]>::try_from(arguments) {
        Ok([argument]) => Ok(argument),
        Err(arguments) => Err(Error::new(
            ErrorImpl::UnexpectedArguments {
                expected: 1,
                received: arguments.len(),
            },
            position,
        )),
    }
}

fn invalid_argument(builtin: Builtin, value: &Value, position: Position) -> Error {
    Error::new(
        ErrorImpl::InvalidArgument {
            function: builtin.name().to_string(),
            found: value.type_name().to_string(),
        },
        position,
    )
}

fn unknown_operator(left: &str, symbol: &str, right: &str, position: Position) -> Error {
    Error::new(
        ErrorImpl::UnknownOperator {
            operator: format!("{} {} {}", left, symbol, right),
        },
        position,
    )
}
