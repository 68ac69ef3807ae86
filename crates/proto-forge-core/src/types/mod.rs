pub mod comment;
pub mod enumeration;
pub mod file;
pub mod message;
pub mod oneof;
pub mod service;
pub mod type_name;

pub use comment::Comment;
pub use enumeration::{Enum, EnumField, EnumValueOption};
pub use file::{File, Import, Package, ProtoOption, Syntax, Visibility};
pub use message::{FieldOption, Message, MessageField, NestedType};
pub use oneof::{OneOf, OneOfField};
pub use service::{ReturnType, Rpc, Service};
pub use type_name::{ScalarType, TypeName};
