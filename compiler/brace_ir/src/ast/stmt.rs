//! Statement nodes.

use std::fmt;
use std::mem;
use std::rc::Rc;

use super::expr::Expr;
use super::operators::{AssignOp, StepOp};
use crate::TokenKind;

/// A declarable type annotation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeName {
    Int,
    Str,
    Void,
    Fnc,
}

impl TypeName {
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::IntType => Some(Self::Int),
            TokenKind::StrType => Some(Self::Str),
            TokenKind::VoidType => Some(Self::Void),
            TokenKind::FncType => Some(Self::Fnc),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Str => "str",
            Self::Void => "void",
            Self::Fnc => "fnc",
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `type name [= init]`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Declaration {
    pub ty: TypeName,
    pub name: String,
    pub init: Option<Expr>,
}

/// `{ statements... }`
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Block { statements }
    }
}

/// A typed function parameter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Param {
    pub ty: TypeName,
    pub name: String,
}

/// `function name(type a, type b) { ... }`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub body: Block,
}

/// Statement node.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Stmt {
    /// `expr;`
    Expression(Expr),
    /// `int x = 1;`
    Declaration(Declaration),
    /// `x += 1;`
    Assignment {
        name: String,
        op: AssignOp,
        value: Expr,
    },
    /// `x++;`
    Increment { name: String, op: StepOp },
    /// `print expr;` or `print;`
    Print(Option<Expr>),
    Block(Block),
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    /// `for (init; condition; step) body`, every clause optional
    For {
        init: Option<Box<Stmt>>,
        condition: Option<Expr>,
        step: Option<Box<Stmt>>,
        body: Box<Stmt>,
    },
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    /// Shared with the runtime function object so the definition outlives
    /// the tree it was parsed from.
    Function(Rc<FunctionDecl>),
    Return(Option<Expr>),
    Break,
    Continue,
}

impl Stmt {
    /// Move nested statements into `out`. A function body is only taken
    /// when this node holds the last reference to the declaration.
    fn detach_children(&mut self, out: &mut Vec<Stmt>) {
        match self {
            Stmt::Block(block) => out.append(&mut block.statements),
            Stmt::While { body, .. } => out.push(mem::replace(&mut **body, Stmt::Break)),
            Stmt::For {
                init, step, body, ..
            } => {
                out.extend(init.take().map(|s| *s));
                out.extend(step.take().map(|s| *s));
                out.push(mem::replace(&mut **body, Stmt::Break));
            }
            Stmt::If {
                then_branch,
                else_branch,
                ..
            } => {
                out.push(mem::replace(&mut **then_branch, Stmt::Break));
                out.extend(else_branch.take().map(|s| *s));
            }
            Stmt::Function(decl) => {
                if let Some(decl) = Rc::get_mut(decl) {
                    out.append(&mut decl.body.statements);
                }
            }
            Stmt::Expression(_)
            | Stmt::Declaration(_)
            | Stmt::Assignment { .. }
            | Stmt::Increment { .. }
            | Stmt::Print(_)
            | Stmt::Return(_)
            | Stmt::Break
            | Stmt::Continue => {}
        }
    }
}

impl Drop for Stmt {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut stmt) = pending.pop() {
            stmt.detach_children(&mut pending);
        }
    }
}

/// Root node: one per parsed source unit.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
