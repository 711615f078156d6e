//! Constructor spec files.
//!
//! A spec file lists, per protobuf message, the named constructors to
//! generate:
//!
//! ```text
//! package net.jubjubnest;
//!
//! ObjectId {
//!     /// Refers to an item stored in this system.
//!     internal(type_id: int32, item_id: int32) {
//!         type_id = type_id;
//!         item_id = ItemId.internal(item_id);
//!     }
//! }
//! ```
//!
//! The AST borrows from the source text, which the plugin keeps alive for
//! the whole invocation.

mod grammar;

use crate::domain::FullName;
use crate::error::SpecError;

/// A parsed spec file.
#[derive(Debug, Clone, PartialEq)]
pub struct File<'a> {
    pub package: &'a str,
    pub types: Vec<Type<'a>>,
}

/// Constructors of one message type, plus its nested types.
#[derive(Debug, Clone, PartialEq)]
pub struct Type<'a> {
    pub name: &'a str,
    pub constructors: Vec<Constructor<'a>>,
    pub nested_types: Vec<Type<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Constructor<'a> {
    pub documentation: Option<Documentation<'a>>,
    pub name: &'a str,
    pub params: Vec<Parameter<'a>>,
    pub initializers: Vec<Initializer<'a>>,
}

/// `///` comment lines, without the marker and the first space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Documentation<'a> {
    pub lines: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter<'a> {
    pub documentation: Option<Documentation<'a>>,
    pub name: &'a str,
    pub param_type: ParamType<'a>,
}

/// Parameter types, named after the protobuf scalar types.
///
/// Anything that isn't a scalar keyword is a message or enum reference,
/// resolved relative to the constructed type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType<'a> {
    Int32,
    Int64,
    UInt32,
    UInt64,
    Bool,
    Float,
    Double,
    String,
    Bytes,
    Custom(&'a str),
}

/// `field = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct Initializer<'a> {
    pub field: &'a str,
    pub value: Expr<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Call(Call<'a>),
    Enum(EnumValue<'a>),
    Bool(bool),
    Integer(i64),
    Float(f64),
    Str(String),
    Ref(&'a str),
}

/// A call to another constructor, e.g. `ItemId.internal(item_id)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Call<'a> {
    pub type_name: Option<&'a str>,
    pub func_name: &'a str,
    pub args: Vec<Expr<'a>>,
}

/// An enum value, e.g. `Color.COLOR_RED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue<'a> {
    pub enum_name: &'a str,
    pub value_name: &'a str,
}

/// Parse a spec file.
///
/// # Errors
///
/// Returns a `SpecError` with the line and column of the first token that
/// didn't fit the grammar.
pub fn parse_file(source: &str) -> Result<File<'_>, SpecError> {
    grammar::spec_grammar::file(source).map_err(|e| SpecError {
        line: e.location.line,
        column: e.location.column,
        expected: e.expected.to_string(),
    })
}

impl<'a> File<'a> {
    /// Find the spec for a fully qualified type name.
    pub fn find_type(&self, full_name: &FullName) -> Option<&Type<'a>> {
        let relative = full_name.strip_package(self.package)?;
        self.types
            .iter()
            .find_map(|t| t.get_nested_or_self(&relative))
    }

    /// Every type in the file with its fully qualified name, depth-first.
    pub fn iter_types(&self) -> Vec<(String, &Type<'a>)> {
        let mut out = Vec::new();
        for t in &self.types {
            let name = if self.package.is_empty() {
                t.name.to_string()
            } else {
                format!("{}.{}", self.package, t.name)
            };
            t.collect(name, &mut out);
        }
        out
    }
}

impl<'a> Type<'a> {
    /// Resolve a relative path that starts with this type's own name.
    pub fn get_nested_or_self(&self, name: &[&str]) -> Option<&Type<'a>> {
        let (first, remainder) = name.split_first()?;

        if *first != self.name {
            return None;
        }

        if remainder.is_empty() {
            return Some(self);
        }

        self.nested_types
            .iter()
            .find_map(|nt| nt.get_nested_or_self(remainder))
    }

    fn collect<'s>(&'s self, name: String, out: &mut Vec<(String, &'s Type<'a>)>) {
        let nested_names = self
            .nested_types
            .iter()
            .map(|nt| format!("{}.{}", name, nt.name))
            .collect::<Vec<_>>();
        out.push((name, self));
        for (nested, nested_name) in self.nested_types.iter().zip(nested_names) {
            nested.collect(nested_name, out);
        }
    }
}

impl<'a> ParamType<'a> {
    fn from_name(name: &'a str) -> Self {
        match name {
            "int32" | "sint32" | "sfixed32" => ParamType::Int32,
            "int64" | "sint64" | "sfixed64" => ParamType::Int64,
            "uint32" | "fixed32" => ParamType::UInt32,
            "uint64" | "fixed64" => ParamType::UInt64,
            "bool" => ParamType::Bool,
            "float" => ParamType::Float,
            "double" => ParamType::Double,
            "string" => ParamType::String,
            "bytes" => ParamType::Bytes,
            custom => ParamType::Custom(custom),
        }
    }
}

impl<'a> Expr<'a> {
    /// A dotted path without call parentheses: an enum value if it has a
    /// type part, a parameter reference otherwise.
    fn from_path(path: &'a str) -> Self {
        match path.rsplit_once('.') {
            Some((enum_name, value_name)) => Expr::Enum(EnumValue {
                enum_name,
                value_name,
            }),
            None => Expr::Ref(path),
        }
    }
}

impl<'a> Call<'a> {
    fn from_path(path: &'a str, args: Vec<Expr<'a>>) -> Self {
        match path.rsplit_once('.') {
            Some((type_name, func_name)) => Call {
                type_name: Some(type_name),
                func_name,
                args,
            },
            None => Call {
                type_name: None,
                func_name: path,
                args,
            },
        }
    }
}
