//! Expression tree for generated Valibot code, and its emission to text.

use super::utils::{escape_double_quoted, quote_single};

/// Trait for emitting TypeScript code from expression nodes.
pub trait Emit {
    /// Convert the node to its TypeScript source representation.
    fn emit(&self) -> String;
}

/// A fragment of generated TypeScript.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Function call: `v.pipe(a, b)`, `optionalTextResponse(a)`
    Call {
        /// Function name, possibly dotted.
        callee: String,
        /// Arguments in order.
        args: Vec<Expr>,
    },
    /// Reference to a prelude binding: `emailSchema`
    Ident(String),
    /// Code emitted verbatim: numbers, regex literals, arrow functions, object shapes
    Raw(String),
    /// Single-quoted string literal: `'Relation'`
    Str(String),
    /// Double-quoted validation message: `"Input must be exactly 15"`
    Message(String),
    /// Array literal: `['image/png', 'image/jpeg']`
    List(Vec<Expr>),
}

impl Expr {
    /// Build a call, dropping empty arguments.
    pub fn call(callee: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Call {
            callee: callee.into(),
            args: args.into_iter().filter(|a| !a.is_empty()).collect(),
        }
    }

    /// Build a `v.<name>(...)` call.
    pub fn v(name: &str, args: impl IntoIterator<Item = Expr>) -> Self {
        Self::call(format!("v.{name}"), args)
    }

    /// Empty fragments are dropped by every combinator.
    pub fn is_empty(&self) -> bool {
        match self {
            Expr::Ident(s) | Expr::Raw(s) => s.is_empty(),
            Expr::Call { callee, .. } => callee.is_empty(),
            Expr::Str(_) | Expr::Message(_) | Expr::List(_) => false,
        }
    }
}

fn join(items: &[Expr]) -> String {
    items
        .iter()
        .filter(|e| !e.is_empty())
        .map(|e| e.emit())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Emit for Expr {
    fn emit(&self) -> String {
        match self {
            Expr::Call { callee, args } => format!("{callee}({})", join(args)),
            Expr::Ident(name) | Expr::Raw(name) => name.clone(),
            Expr::Str(s) => quote_single(s),
            Expr::Message(s) => format!("\"{}\"", escape_double_quoted(s)),
            Expr::List(items) => format!("[{}]", join(items)),
        }
    }
}
