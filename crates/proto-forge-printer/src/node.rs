use proto_forge_core::types::{
    Comment, Enum, EnumField, EnumValueOption, FieldOption, File, Import, Message, MessageField,
    OneOf, OneOfField, Package, ProtoOption, ReturnType, Rpc, Service, Syntax,
};

/// A borrowed reference to any node of the schema model.
///
/// The printer has exactly one rendering rule per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    File(&'a File),
    Syntax(&'a Syntax),
    Import(&'a Import),
    Package(&'a Package),
    Option(&'a ProtoOption),
    Message(&'a Message),
    MessageField(&'a MessageField),
    OneOf(&'a OneOf),
    OneOfField(&'a OneOfField),
    FieldOption(&'a FieldOption),
    Enum(&'a Enum),
    EnumField(&'a EnumField),
    EnumValueOption(&'a EnumValueOption),
    Service(&'a Service),
    Rpc(&'a Rpc),
    ReturnType(&'a ReturnType),
    Comment(&'a Comment),
}

impl Node<'_> {
    /// Short lowercase name of the node kind, used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Syntax(_) => "syntax",
            Self::Import(_) => "import",
            Self::Package(_) => "package",
            Self::Option(_) => "option",
            Self::Message(_) => "message",
            Self::MessageField(_) => "message_field",
            Self::OneOf(_) => "oneof",
            Self::OneOfField(_) => "oneof_field",
            Self::FieldOption(_) => "field_option",
            Self::Enum(_) => "enum",
            Self::EnumField(_) => "enum_field",
            Self::EnumValueOption(_) => "enum_value_option",
            Self::Service(_) => "service",
            Self::Rpc(_) => "rpc",
            Self::ReturnType(_) => "return_type",
            Self::Comment(_) => "comment",
        }
    }
}

macro_rules! node_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for Node<'a> {
                fn from(node: &'a $ty) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

node_from! {
    File => File,
    Syntax => Syntax,
    Import => Import,
    Package => Package,
    ProtoOption => Option,
    Message => Message,
    MessageField => MessageField,
    OneOf => OneOf,
    OneOfField => OneOfField,
    FieldOption => FieldOption,
    Enum => Enum,
    EnumField => EnumField,
    EnumValueOption => EnumValueOption,
    Service => Service,
    Rpc => Rpc,
    ReturnType => ReturnType,
    Comment => Comment,
}
