use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::comment::Comment;
use super::enumeration::Enum;
use super::message::{Message, NestedType};
use super::service::Service;

/// The root of a schema: one `.proto` file.
///
/// Declarations are kept per category. Rendering groups them as
/// messages, then enums, then services, whatever order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    #[serde(default)]
    pub syntax: Syntax,
    #[serde(default, skip_serializing_if = "Package::is_empty")]
    pub package: Package,
    #[serde(default, skip_serializing_if = "Comment::is_empty")]
    pub comment: Comment,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<Import>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ProtoOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enums: Vec<Enum>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,
}

impl File {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comment(mut self, comment: impl Into<Comment>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Replaces the package. An empty package is not rendered.
    pub fn set_package(&mut self, package: impl Into<Package>) {
        self.package = package.into();
    }

    pub fn add_import(&mut self, import: impl Into<Option<Import>>) -> &mut Self {
        if let Some(import) = import.into() {
            self.imports.push(import);
        }
        self
    }

    pub fn add_option(&mut self, option: impl Into<Option<ProtoOption>>) -> &mut Self {
        if let Some(option) = option.into() {
            self.options.push(option);
        }
        self
    }

    pub fn add_message(&mut self, message: impl Into<Option<Message>>) -> &mut Self {
        if let Some(message) = message.into() {
            self.messages.push(message);
        }
        self
    }

    pub fn add_enum(&mut self, e: impl Into<Option<Enum>>) -> &mut Self {
        if let Some(e) = e.into() {
            self.enums.push(e);
        }
        self
    }

    pub fn add_service(&mut self, service: impl Into<Option<Service>>) -> &mut Self {
        if let Some(service) = service.into() {
            self.services.push(service);
        }
        self
    }

    /// Attaches a top-level message or enum, whichever `decl` holds.
    pub fn add_type(&mut self, decl: impl Into<Option<NestedType>>) -> &mut Self {
        match decl.into() {
            Some(NestedType::Message(m)) => self.add_message(m),
            Some(NestedType::Enum(e)) => self.add_enum(e),
            None => self,
        }
    }

    pub fn message(&self, name: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.name == name)
    }

    pub fn enum_(&self, name: &str) -> Option<&Enum> {
        self.enums.iter().find(|e| e.name == name)
    }

    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }
}

/// The syntax marker. Always `proto3`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Syntax;

impl Syntax {
    pub const PROTO3: &'static str = "proto3";

    pub fn as_str(&self) -> &'static str {
        Self::PROTO3
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Syntax {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Syntax {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s == Self::PROTO3 {
            Ok(Syntax)
        } else {
            Err(serde::de::Error::custom(format!(
                "unsupported syntax '{s}': only \"proto3\" is supported"
            )))
        }
    }
}

/// The dotted package name, e.g. `acme.users.v1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Package(String);

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Package {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Package {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Package {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Import modifier. `Unspecified` prints no keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Unspecified,
    Weak,
    Public,
}

impl Visibility {
    /// The keyword, or `""` when unspecified.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Weak => "weak",
            Self::Public => "public",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An `import` statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Import {
    pub path: String,
    #[serde(default)]
    pub visibility: Visibility,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            visibility: Visibility::Unspecified,
        }
    }

    pub fn public(path: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Public,
            ..Self::new(path)
        }
    }

    pub fn weak(path: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Weak,
            ..Self::new(path)
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// A name/value option. The value is opaque text, rendered verbatim.
///
/// Used at file level, in enum and service bodies, and inside the option
/// brackets of oneof fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProtoOption {
    pub name: String,
    pub value: String,
}

impl ProtoOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
