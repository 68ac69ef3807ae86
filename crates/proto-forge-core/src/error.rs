use std::fmt;

/// Structural problems reported by the opt-in validation pass.
///
/// The builder API never produces these; they only come out of
/// [`crate::validate::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    /// Two fields in one message share a name.
    DuplicateFieldName { message: String, name: String },
    /// Two fields in one message share a field number.
    DuplicateFieldIndex { message: String, index: u32 },
    /// Field number outside `1..=536870911`.
    InvalidFieldIndex {
        message: String,
        field: String,
        index: u32,
    },
    /// Field number inside the range reserved by the protobuf implementation.
    ReservedFieldIndex {
        message: String,
        field: String,
        index: u32,
    },
    /// Two values in one enum share a name.
    DuplicateEnumValue { enum_name: String, name: String },
    /// Enum declares no values.
    EmptyEnum(String),
    /// First value of a proto3 enum must be zero.
    FirstEnumValueNotZero {
        enum_name: String,
        value: String,
        index: i32,
    },
    /// Two declarations in one scope share a name.
    DuplicateDeclaration { scope: String, name: String },
    /// Two RPCs in one service share a name.
    DuplicateRpcName { service: String, name: String },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateFieldName { message, name } => {
                write!(f, "duplicate field name '{name}' in message '{message}'")
            }
            Self::DuplicateFieldIndex { message, index } => {
                write!(f, "duplicate field number {index} in message '{message}'")
            }
            Self::InvalidFieldIndex {
                message,
                field,
                index,
            } => {
                write!(
                    f,
                    "invalid field number {index} for '{message}.{field}': must be in 1..={}",
                    crate::validate::MAX_FIELD_INDEX
                )
            }
            Self::ReservedFieldIndex {
                message,
                field,
                index,
            } => {
                write!(
                    f,
                    "reserved field number {index} for '{message}.{field}': 19000..=19999 is reserved"
                )
            }
            Self::DuplicateEnumValue { enum_name, name } => {
                write!(f, "duplicate enum value '{name}' in enum '{enum_name}'")
            }
            Self::EmptyEnum(name) => write!(f, "enum '{name}' must declare at least one value"),
            Self::FirstEnumValueNotZero {
                enum_name,
                value,
                index,
            } => {
                write!(
                    f,
                    "first value '{value}' of enum '{enum_name}' is {index}: proto3 enums must start at 0"
                )
            }
            Self::DuplicateDeclaration { scope, name } => {
                write!(f, "duplicate declaration '{name}' in {scope}")
            }
            Self::DuplicateRpcName { service, name } => {
                write!(f, "duplicate rpc '{name}' in service '{service}'")
            }
        }
    }
}

impl std::error::Error for SchemaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let cases = vec![
            (
                SchemaError::DuplicateFieldName {
                    message: "Person".into(),
                    name: "id".into(),
                },
                "duplicate field name 'id' in message 'Person'",
            ),
            (
                SchemaError::DuplicateFieldIndex {
                    message: "Person".into(),
                    index: 3,
                },
                "duplicate field number 3",
            ),
            (
                SchemaError::InvalidFieldIndex {
                    message: "Person".into(),
                    field: "id".into(),
                    index: 0,
                },
                "invalid field number 0 for 'Person.id'",
            ),
            (
                SchemaError::ReservedFieldIndex {
                    message: "Person".into(),
                    field: "id".into(),
                    index: 19001,
                },
                "reserved field number 19001",
            ),
            (
                SchemaError::DuplicateEnumValue {
                    enum_name: "Color".into(),
                    name: "RED".into(),
                },
                "duplicate enum value 'RED'",
            ),
            (SchemaError::EmptyEnum("Color".into()), "enum 'Color' must"),
            (
                SchemaError::FirstEnumValueNotZero {
                    enum_name: "Color".into(),
                    value: "RED".into(),
                    index: 1,
                },
                "first value 'RED' of enum 'Color' is 1",
            ),
            (
                SchemaError::DuplicateDeclaration {
                    scope: "file".into(),
                    name: "Person".into(),
                },
                "duplicate declaration 'Person' in file",
            ),
            (
                SchemaError::DuplicateRpcName {
                    service: "Users".into(),
                    name: "Get".into(),
                },
                "duplicate rpc 'Get' in service 'Users'",
            ),
        ];

        for (error, expected_prefix) in cases {
            let msg = error.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error display for {error:?} = '{msg}', expected to start with '{expected_prefix}'"
            );
        }
    }

    #[test]
    fn error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(SchemaError::EmptyEnum("E".into()));
        assert!(err.to_string().contains("'E'"));
    }
}
