use std::fmt;

use serde::{Deserialize, Serialize};

use super::enumeration::Enum;
use super::message::Message;

/// Anything that can stand in a field or RPC type position.
///
/// Field and return-type constructors call [`TypeName::type_name`] once
/// and keep only the resulting text. Renaming a message after a field
/// has been built from it does not update the field.
pub trait TypeName {
    fn type_name(&self) -> String;
}

impl TypeName for str {
    fn type_name(&self) -> String {
        self.to_string()
    }
}

impl TypeName for String {
    fn type_name(&self) -> String {
        self.clone()
    }
}

impl TypeName for Message {
    fn type_name(&self) -> String {
        self.name.clone()
    }
}

impl TypeName for Enum {
    fn type_name(&self) -> String {
        self.name.clone()
    }
}

impl<T: TypeName + ?Sized> TypeName for &T {
    fn type_name(&self) -> String {
        (**self).type_name()
    }
}

/// The proto3 scalar value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
}

impl ScalarType {
    /// Every scalar type, in declaration order.
    pub const ALL: [ScalarType; 15] = [
        Self::Double,
        Self::Float,
        Self::Int32,
        Self::Int64,
        Self::Uint32,
        Self::Uint64,
        Self::Sint32,
        Self::Sint64,
        Self::Fixed32,
        Self::Fixed64,
        Self::Sfixed32,
        Self::Sfixed64,
        Self::Bool,
        Self::String,
        Self::Bytes,
    ];

    /// The keyword used in a `.proto` declaration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Float => "float",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Sint32 => "sint32",
            Self::Sint64 => "sint64",
            Self::Fixed32 => "fixed32",
            Self::Fixed64 => "fixed64",
            Self::Sfixed32 => "sfixed32",
            Self::Sfixed64 => "sfixed64",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Bytes => "bytes",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TypeName for ScalarType {
    fn type_name(&self) -> String {
        self.as_str().to_string()
    }
}
