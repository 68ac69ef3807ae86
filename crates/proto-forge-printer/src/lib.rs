//! # proto-forge-printer
//!
//! Renders a [`proto_forge_core`] model as canonical `.proto` text.
//!
//! This crate provides:
//! - [`Node`], a borrowed view over any node of the model
//! - [`Printer`], a single-pass depth-first renderer writing to any `io::Write`
//! - [`IndentWriter`], the line-prefixing adapter used for nested blocks
//! - [`print`] and [`print_node`] for rendering straight into a `String`
//!
//! # Example
//!
//! ```
//! use proto_forge_core::types::{File, Message, MessageField, ScalarType};
//! use proto_forge_printer::print;
//!
//! let mut person = Message::new("Person");
//! person.add_field(MessageField::new(ScalarType::String, "name", 1));
//!
//! let mut file = File::new();
//! file.set_package("pkg");
//! file.add_message(person);
//!
//! assert_eq!(
//!     print(&file),
//!     "syntax = \"proto3\";\npackage pkg;\n\nmessage Person {\n  string name = 1;\n}\n"
//! );
//! ```

pub mod config;
pub mod indent;
pub mod node;
pub mod printer;

pub use config::{PrinterConfig, DEFAULT_INDENT};
pub use indent::IndentWriter;
pub use node::Node;
pub use printer::{fprint, print, print_node, Printer};
