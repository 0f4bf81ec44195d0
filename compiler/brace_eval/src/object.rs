//! Runtime values.
//!
//! An [`Object`] is a tagged value whose variant is fixed by the
//! declaration that created it: assignment type-checks against the
//! current variant, so a binding never changes type.

use std::fmt;
use std::rc::Rc;

use brace_ir::{FunctionDecl, TypeName};

use crate::errors::{not_a_condition, not_an_integer, type_mismatch, EvalResult};

/// The runtime type of an [`Object`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ObjectType {
    Integer,
    String,
    Function,
    Void,
}

impl ObjectType {
    /// Source-level spelling: `int`, `str`, `fnc`, `void`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ObjectType::Integer => "int",
            ObjectType::String => "str",
            ObjectType::Function => "fnc",
            ObjectType::Void => "void",
        }
    }
}

impl From<TypeName> for ObjectType {
    fn from(ty: TypeName) -> Self {
        match ty {
            TypeName::Int => ObjectType::Integer,
            TypeName::Str => ObjectType::String,
            TypeName::Fnc => ObjectType::Function,
            TypeName::Void => ObjectType::Void,
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A runtime value.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Object {
    Integer(i64),
    String(String),
    /// `None` for a `fnc` declared without an initializer.
    Function(Option<Rc<FunctionDecl>>),
    #[default]
    Void,
}

impl Object {
    /// The value a declaration of type `ty` holds before any assignment.
    pub fn default_for(ty: ObjectType) -> Self {
        match ty {
            ObjectType::Integer => Object::Integer(0),
            ObjectType::String => Object::String(String::new()),
            ObjectType::Function => Object::Function(None),
            ObjectType::Void => Object::Void,
        }
    }

    #[inline]
    pub fn ty(&self) -> ObjectType {
        match self {
            Object::Integer(_) => ObjectType::Integer,
            Object::String(_) => ObjectType::String,
            Object::Function(_) => ObjectType::Function,
            Object::Void => ObjectType::Void,
        }
    }

    #[inline]
    pub fn bool(value: bool) -> Self {
        Object::Integer(i64::from(value))
    }

    pub fn function(decl: Rc<FunctionDecl>) -> Self {
        Object::Function(Some(decl))
    }

    /// Replace this value with `value`, which must have the same type.
    ///
    /// `name` is only used for the error message.
    pub fn assign(&mut self, name: &str, value: Object) -> EvalResult<()> {
        if self.ty() != value.ty() {
            return Err(type_mismatch(name, self.ty(), value.ty()));
        }
        *self = value;
        Ok(())
    }

    /// Truthiness for conditions and logical operators.
    pub fn is_truthy(&self) -> EvalResult<bool> {
        match self {
            Object::Integer(n) => Ok(*n != 0),
            Object::String(s) => Ok(!s.is_empty()),
            Object::Function(_) | Object::Void => Err(not_a_condition(self.ty())),
        }
    }

    pub fn as_integer(&self) -> EvalResult<i64> {
        match self {
            Object::Integer(n) => Ok(*n),
            _ => Err(not_an_integer(self.ty())),
        }
    }
}

impl From<i64> for Object {
    fn from(n: i64) -> Self {
        Object::Integer(n)
    }
}

impl From<&str> for Object {
    fn from(s: &str) -> Self {
        Object::String(s.to_string())
    }
}

impl From<String> for Object {
    fn from(s: String) -> Self {
        Object::String(s)
    }
}

/// The representation `print` writes.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(n) => write!(f, "{n}"),
            Object::String(s) => f.write_str(s),
            Object::Function(Some(decl)) => write!(f, "<function {}>", decl.name),
            Object::Function(None) => f.write_str("<function>"),
            Object::Void => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests;
