/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree the parser produces
///
/// Submodules:
/// - ast: The statement and expression families and the program root
/// - expressions: Definitions for the expression node types
/// - statements: Definitions for the statement node types
pub mod ast;
pub mod expressions;
pub mod statements;
