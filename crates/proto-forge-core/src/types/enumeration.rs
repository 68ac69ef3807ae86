use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::file::ProtoOption;

/// An `enum` declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ProtoOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EnumField>,
    #[serde(default, skip_serializing_if = "Comment::is_empty")]
    pub comment: Comment,
}

impl Enum {
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

    pub fn add_field(&mut self, field: impl Into<Option<EnumField>>) -> &mut Self {
        if let Some(field) = field.into() {
            self.fields.push(field);
        }
        self
    }

    pub fn add_option(&mut self, option: impl Into<Option<ProtoOption>>) -> &mut Self {
        if let Some(option) = option.into() {
            self.options.push(option);
        }
        self
    }

    /// The set of distinct value names currently declared.
    ///
    /// Duplicates collapse to one entry, so comparing the set's size with
    /// `fields.len()` tells whether any name is declared twice. Nothing in
    /// the model acts on this; see [`crate::validate`].
    pub fn identifiers(&self) -> HashSet<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// A single enum value: `NAME = index [opts];`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumField {
    pub name: String,
    pub index: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<EnumValueOption>,
    #[serde(default, skip_serializing_if = "Comment::is_empty")]
    pub comment: Comment,
}

impl EnumField {
    pub fn new(name: impl Into<String>, index: i32) -> Self {
        Self {
            name: name.into(),
            index,
            options: Vec::new(),
            comment: Comment::default(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<Comment>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn add_option(&mut self, option: impl Into<Option<EnumValueOption>>) -> &mut Self {
        if let Some(option) = option.into() {
            self.options.push(option);
        }
        self
    }
}

/// An entry of an enum value's bracketed option list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumValueOption {
    pub name: String,
    pub value: String,
}

impl EnumValueOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enum_with(names: &[&str]) -> Enum {
        let mut e = Enum::new("E");
        for (i, n) in names.iter().enumerate() {
            e.add_field(EnumField::new(*n, i as i32));
        }
        e
    }

    #[test]
    fn identifiers_of_empty_enum() {
        assert!(Enum::new("E").identifiers().is_empty());
    }

    #[test]
    fn identifiers_collapse_duplicates() {
        let e = enum_with(&["A", "B", "A"]);
        let ids = e.identifiers();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("A"));
        assert!(ids.contains("B"));
        assert_eq!(e.fields.len(), 3);
    }

    #[test]
    fn add_operations_chain() {
        let mut e = Enum::new("Corpus");
        e.add_option(ProtoOption::new("allow_alias", "true"))
            .add_field(EnumField::new("UNIVERSAL", 0))
            .add_field(EnumField::new("WEB", 1));
        assert_eq!(e.options.len(), 1);
        assert_eq!(e.fields.len(), 2);
        assert_eq!(e.fields[1].index, 1);
    }

    #[test]
    fn absent_children_are_ignored() {
        let mut e = Enum::new("Corpus");
        e.add_field(None::<EnumField>).add_option(None::<ProtoOption>);
        assert_eq!(e, Enum::new("Corpus"));

        let mut f = EnumField::new("WEB", 1);
        f.add_option(None::<EnumValueOption>);
        assert!(f.options.is_empty());
    }

    #[test]
    fn enum_field_options_and_comment() {
        let mut f = EnumField::new("LEGACY", 2).with_comment("Do not use.");
        f.add_option(EnumValueOption::new("deprecated", "true"));
        assert_eq!(f.options[0].name, "deprecated");
        assert_eq!(f.comment.lines(), &["Do not use."]);
    }

    #[test]
    fn negative_indexes_are_kept() {
        let f = EnumField::new("NEG", -1);
        assert_eq!(f.index, -1);
    }

    #[test]
    fn serde_roundtrip() {
        let mut e = Enum::new("Status").with_comment("Lifecycle.");
        let mut active = EnumField::new("ACTIVE", 1);
        active.add_option(EnumValueOption::new("deprecated", "false"));
        e.add_field(EnumField::new("UNKNOWN", 0)).add_field(active);
        let json = serde_json::to_string(&e).unwrap();
        let back: Enum = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
