/// AST (Abstract Syntax Tree) module
/// Contains the tree produced by the parser
///
/// Submodules:
/// - ast: Tables, records, lists, comments and their scalar values
pub mod ast;
