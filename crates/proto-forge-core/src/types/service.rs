use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::file::ProtoOption;
use super::type_name::TypeName;

/// A `service` declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default, skip_serializing_if = "Comment::is_empty")]
    pub comment: Comment,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ProtoOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rpcs: Vec<Rpc>,
}

impl Service {
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

    pub fn add_option(&mut self, option: impl Into<Option<ProtoOption>>) -> &mut Self {
        if let Some(option) = option.into() {
            self.options.push(option);
        }
        self
    }

    pub fn add_rpc(&mut self, rpc: impl Into<Option<Rpc>>) -> &mut Self {
        if let Some(rpc) = rpc.into() {
            self.rpcs.push(rpc);
        }
        self
    }

    pub fn rpc(&self, name: &str) -> Option<&Rpc> {
        self.rpcs.iter().find(|r| r.name == name)
    }
}

/// A single method of a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rpc {
    pub name: String,
    #[serde(default, skip_serializing_if = "Comment::is_empty")]
    pub comment: Comment,
    pub input: ReturnType,
    pub output: ReturnType,
}

impl Rpc {
    pub fn new(name: impl Into<String>, input: ReturnType, output: ReturnType) -> Self {
        Self {
            name: name.into(),
            comment: Comment::default(),
            input,
            output,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<Comment>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// Request or response type of an RPC, optionally streamed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReturnType {
    #[serde(rename = "name")]
    pub type_name: String,
    #[serde(default)]
    pub streamable: bool,
}

impl ReturnType {
    pub fn new(ty: impl TypeName, streamable: bool) -> Self {
        Self {
            type_name: ty.type_name(),
            streamable,
        }
    }

    /// A single, non-streamed value.
    pub fn unary(ty: impl TypeName) -> Self {
        Self::new(ty, false)
    }

    /// A `stream` of values.
    pub fn stream(ty: impl TypeName) -> Self {
        Self::new(ty, true)
    }
}
