use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::enumeration::Enum;
use super::oneof::OneOf;
use super::type_name::TypeName;

/// A `message` declaration with its fields, nested types and oneofs.
///
/// Each child category keeps its own insertion order. Rendering always
/// emits fields, then enums, then nested messages, then oneofs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub name: String,
    #[serde(default, skip_serializing_if = "Comment::is_empty")]
    pub comment: Comment,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<MessageField>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enums: Vec<Enum>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub oneofs: Vec<OneOf>,
}

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<Comment>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn add_field(&mut self, field: impl Into<Option<MessageField>>) -> &mut Self {
        if let Some(field) = field.into() {
            self.fields.push(field);
        }
        self
    }

    pub fn add_enum(&mut self, e: impl Into<Option<Enum>>) -> &mut Self {
        if let Some(e) = e.into() {
            self.enums.push(e);
        }
        self
    }

    pub fn add_message(&mut self, message: impl Into<Option<Message>>) -> &mut Self {
        if let Some(message) = message.into() {
            self.messages.push(message);
        }
        self
    }

    pub fn add_oneof(&mut self, oneof: impl Into<Option<OneOf>>) -> &mut Self {
        if let Some(oneof) = oneof.into() {
            self.oneofs.push(oneof);
        }
        self
    }

    /// Attaches a nested message or enum, whichever `nested` holds.
    pub fn add_type(&mut self, nested: impl Into<Option<NestedType>>) -> &mut Self {
        match nested.into() {
            Some(NestedType::Message(m)) => self.add_message(m),
            Some(NestedType::Enum(e)) => self.add_enum(e),
            None => self,
        }
    }

    /// Looks up a plain (non-oneof) field by name.
    pub fn field(&self, name: &str) -> Option<&MessageField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up a directly nested message by name.
    pub fn nested_message(&self, name: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.name == name)
    }
}

/// A type that can be declared inside a message body or at file level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "decl", rename_all = "lowercase")]
pub enum NestedType {
    Message(Message),
    Enum(Enum),
}

impl NestedType {
    pub fn name(&self) -> &str {
        match self {
            Self::Message(m) => &m.name,
            Self::Enum(e) => &e.name,
        }
    }
}

impl From<Message> for NestedType {
    fn from(m: Message) -> Self {
        Self::Message(m)
    }
}

impl From<Enum> for NestedType {
    fn from(e: Enum) -> Self {
        Self::Enum(e)
    }
}

/// A field inside a message body: `[repeated] Type name = index [opts];`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageField {
    #[serde(default)]
    pub repeated: bool,
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
    pub index: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(default, skip_serializing_if = "Comment::is_empty")]
    pub comment: Comment,
}

impl MessageField {
    /// Creates a singular field. The type name is resolved here, once.
    pub fn new(ty: impl TypeName, name: impl Into<String>, index: u32) -> Self {
        Self {
            repeated: false,
            type_name: ty.type_name(),
            name: name.into(),
            index,
            options: Vec::new(),
            comment: Comment::default(),
        }
    }

    /// Creates a `repeated` field.
    pub fn repeated(ty: impl TypeName, name: impl Into<String>, index: u32) -> Self {
        Self {
            repeated: true,
            ..Self::new(ty, name, index)
        }
    }

    pub fn with_comment(mut self, comment: impl Into<Comment>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn add_option(&mut self, option: impl Into<Option<FieldOption>>) -> &mut Self {
        if let Some(option) = option.into() {
            self.options.push(option);
        }
        self
    }
}

/// An entry of a field's bracketed option list, e.g. `deprecated = true`.
///
/// The value is raw text and is rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldOption {
    pub name: String,
    pub value: String,
}

impl FieldOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
