//! # proto-forge-core
//!
//! In-memory model of a proto3 schema file.
//!
//! Nodes are plain owned values. A [`types::File`] owns its imports,
//! options, messages, enums and services; messages own their fields,
//! nested types and oneofs, and so on down the tree. Construction never
//! fails: every `add_*` operation accepts an optional child and treats
//! `None` as a no-op, returning the receiver so calls can be chained.
//!
//! The model is append-only and performs no semantic checks on its own.
//! Callers that want structural checks run [`validate::validate`]
//! explicitly before rendering.
//!
//! The model carries no synchronization. Mutating one tree from several
//! threads at once requires external locking; rendering a tree that is no
//! longer being mutated is safe from any number of threads.
//!
//! # Example
//!
//! ```
//! use proto_forge_core::types::{File, Message, MessageField, ScalarType};
//!
//! let mut person = Message::new("Person");
//! person
//!     .add_field(MessageField::new(ScalarType::String, "name", 1))
//!     .add_field(MessageField::repeated(ScalarType::String, "emails", 2));
//!
//! let mut file = File::new();
//! file.set_package("pkg");
//! file.add_message(person);
//!
//! assert_eq!(file.messages[0].fields.len(), 2);
//! assert!(proto_forge_core::validate::validate(&file).is_ok());
//! ```

pub mod error;
pub mod types;
pub mod validate;

pub use error::SchemaError;
