use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::file::ProtoOption;
use super::type_name::TypeName;

/// A `oneof` group inside a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneOf {
    pub name: String,
    #[serde(default, skip_serializing_if = "Comment::is_empty")]
    pub comment: Comment,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<OneOfField>,
}

impl OneOf {
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

    pub fn add_field(&mut self, field: impl Into<Option<OneOfField>>) -> &mut Self {
        if let Some(field) = field.into() {
            self.fields.push(field);
        }
        self
    }
}

/// A member of a oneof. Never `repeated`.
///
/// Its bracketed options use the generic [`ProtoOption`] shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneOfField {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
    pub index: u32,
    #[serde(default, skip_serializing_if = "Comment::is_empty")]
    pub comment: Comment,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ProtoOption>,
}

impl OneOfField {
    pub fn new(ty: impl TypeName, name: impl Into<String>, index: u32) -> Self {
        Self {
            type_name: ty.type_name(),
            name: name.into(),
            index,
            comment: Comment::default(),
            options: Vec::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<Comment>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn add_option(&mut self, option: impl Into<Option<ProtoOption>>) -> &mut Self {
        if let Some(option) = option.into() {
            self.options.push(option);
        }
        self
    }
}
