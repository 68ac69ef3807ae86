//! Opt-in structural checks over a built [`File`].
//!
//! Construction stays lenient: nothing here runs unless called. The pass
//! collects every problem it finds instead of stopping at the first one.

use std::collections::HashSet;

use crate::error::SchemaError;
use crate::types::{Enum, File, Message, Service};

/// Largest field number the wire format allows.
pub const MAX_FIELD_INDEX: u32 = 536_870_911;

/// Field numbers reserved by the protobuf implementation.
pub const RESERVED_FIELD_INDEXES: std::ops::RangeInclusive<u32> = 19_000..=19_999;

/// Checks `file` for duplicate names, duplicate or out-of-range field
/// numbers, and proto3 enum rules.
pub fn validate(file: &File) -> Result<(), Vec<SchemaError>> {
    let mut errors = Vec::new();

    let file_scope = if file.package.is_empty() {
        "file".to_string()
    } else {
        format!("package '{}'", file.package)
    };
    check_unique_declarations(
        &file_scope,
        file.messages
            .iter()
            .map(|m| m.name.as_str())
            .chain(file.enums.iter().map(|e| e.name.as_str()))
            .chain(file.services.iter().map(|s| s.name.as_str())),
        &mut errors,
    );

    for message in &file.messages {
        validate_message(message, None, &mut errors);
    }
    for e in &file.enums {
        validate_enum(e, &e.name, &mut errors);
    }
    for service in &file.services {
        validate_service(service, &mut errors);
    }

    tracing::debug!(problems = errors.len(), "validated proto file");

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn qualify(parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(p) => format!("{p}.{name}"),
        None => name.to_string(),
    }
}

fn check_unique_declarations<'a>(
    scope: &str,
    names: impl Iterator<Item = &'a str>,
    errors: &mut Vec<SchemaError>,
) {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            errors.push(SchemaError::DuplicateDeclaration {
                scope: scope.to_string(),
                name: name.to_string(),
            });
        }
    }
}

fn check_field_index(message: &str, field: &str, index: u32, errors: &mut Vec<SchemaError>) {
    if index == 0 || index > MAX_FIELD_INDEX {
        errors.push(SchemaError::InvalidFieldIndex {
            message: message.to_string(),
            field: field.to_string(),
            index,
        });
    } else if RESERVED_FIELD_INDEXES.contains(&index) {
        errors.push(SchemaError::ReservedFieldIndex {
            message: message.to_string(),
            field: field.to_string(),
            index,
        });
    }
}

fn validate_message(message: &Message, parent: Option<&str>, errors: &mut Vec<SchemaError>) {
    let path = qualify(parent, &message.name);

    // Oneof members share the message's field namespace.
    let fields = message
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.index))
        .chain(
            message
                .oneofs
                .iter()
                .flat_map(|o| o.fields.iter().map(|f| (f.name.as_str(), f.index))),
        );

    let mut names = HashSet::new();
    let mut indexes = HashSet::new();
    for (name, index) in fields {
        if !names.insert(name) {
            errors.push(SchemaError::DuplicateFieldName {
                message: path.clone(),
                name: name.to_string(),
            });
        }
        if !indexes.insert(index) {
            errors.push(SchemaError::DuplicateFieldIndex {
                message: path.clone(),
                index,
            });
        }
        check_field_index(&path, name, index, errors);
    }

    check_unique_declarations(
        &format!("message '{path}'"),
        message
            .messages
            .iter()
            .map(|m| m.name.as_str())
            .chain(message.enums.iter().map(|e| e.name.as_str()))
            .chain(message.oneofs.iter().map(|o| o.name.as_str())),
        errors,
    );

    for e in &message.enums {
        validate_enum(e, &qualify(Some(&path), &e.name), errors);
    }
    for nested in &message.messages {
        validate_message(nested, Some(&path), errors);
    }
}

fn validate_enum(e: &Enum, path: &str, errors: &mut Vec<SchemaError>) {
    let Some(first) = e.fields.first() else {
        errors.push(SchemaError::EmptyEnum(path.to_string()));
        return;
    };
    if first.index != 0 {
        errors.push(SchemaError::FirstEnumValueNotZero {
            enum_name: path.to_string(),
            value: first.name.clone(),
            index: first.index,
        });
    }

    if e.identifiers().len() == e.fields.len() {
        return;
    }
    let mut seen = HashSet::new();
    for field in &e.fields {
        if !seen.insert(field.name.as_str()) {
            errors.push(SchemaError::DuplicateEnumValue {
                enum_name: path.to_string(),
                name: field.name.clone(),
            });
        }
    }
}

fn validate_service(service: &Service, errors: &mut Vec<SchemaError>) {
    let mut seen = HashSet::new();
    for rpc in &service.rpcs {
        if !seen.insert(rpc.name.as_str()) {
            errors.push(SchemaError::DuplicateRpcName {
                service: service.name.clone(),
                name: rpc.name.clone(),
            });
        }
    }
}
