use proptest::prelude::*;
use proto_forge_core::types::{
    Enum, EnumField, EnumValueOption, FieldOption, File, Message, MessageField, ReturnType, Rpc,
    ScalarType, Service,
};
use proto_forge_printer::{print, print_node};

/// Strategy for generating identifier-like names.
fn ident() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,12}"
}

/// Strategy for generating raw option values, including quoted strings.
fn option_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("true".to_string()),
        "-?[0-9]{1,6}",
        "\"[a-z ./]{0,12}\"",
    ]
}

/// Wraps a single-field message in `depth` enclosing messages.
fn nested(depth: usize) -> Message {
    let mut current = Message::new(format!("L{depth}"));
    current.add_field(MessageField::new(ScalarType::Int32, "leaf", 1));
    for level in (0..depth).rev() {
        let mut parent = Message::new(format!("L{level}"));
        parent.add_message(current);
        current = parent;
    }
    current
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

proptest! {
    /// Field names, types and option text appear verbatim in the output line.
    #[test]
    fn field_text_passes_through(
        ty in ident(),
        name in ident(),
        index in 1u32..100_000,
        opt_name in ident(),
        opt_value in option_value(),
    ) {
        let mut f = MessageField::new(ty.as_str(), name.as_str(), index);
        f.add_option(FieldOption::new(opt_name.as_str(), opt_value.as_str()));
        let text = print_node(&f);
        let expected = format!("{ty} {name} = {index} [{opt_name} = {opt_value}];\n");
        prop_assert_eq!(text, expected);
    }

    /// Enum value names and value options are rendered unaltered.
    #[test]
    fn enum_text_passes_through(
        enum_name in ident(),
        value in ident(),
        index in -1000i32..1000,
        opt_value in option_value(),
    ) {
        let mut field = EnumField::new(value.as_str(), index);
        field.add_option(EnumValueOption::new("deprecated", opt_value.as_str()));
        let mut e = Enum::new(enum_name.as_str());
        e.add_field(field);
        let text = print_node(&e);
        let expected_open = format!("enum {enum_name} {{\n");
        let expected_line = format!("  {value} = {index} [deprecated = {opt_value}];\n");
        prop_assert!(text.starts_with(&expected_open));
        prop_assert!(text.contains(&expected_line));
    }

    /// Service and rpc names appear verbatim.
    #[test]
    fn service_text_passes_through(service in ident(), rpc in ident(), req in ident(), resp in ident()) {
        let mut s = Service::new(service.as_str());
        s.add_rpc(Rpc::new(rpc.as_str(), ReturnType::unary(req.as_str()), ReturnType::unary(resp.as_str())));
        let text = print_node(&s);
        let expected_open = format!("service {service} {{\n");
        let expected_line = format!("  rpc {rpc} ({req}) returns ({resp});\n");
        prop_assert!(text.starts_with(&expected_open));
        prop_assert!(text.contains(&expected_line));
    }

    /// Every line at nesting depth `d` starts with exactly `2 * d` spaces.
    #[test]
    fn indentation_is_two_per_level(depth in 0usize..8) {
        let text = print_node(&nested(depth));
        let lines: Vec<&str> = text.lines().collect();
        // depth + 1 opening lines, one leaf field, depth + 1 closing lines.
        prop_assert_eq!(lines.len(), 2 * depth + 3);
        for level in 0..=depth {
            prop_assert_eq!(leading_spaces(lines[level]), 2 * level);
            prop_assert_eq!(leading_spaces(lines[lines.len() - 1 - level]), 2 * level);
        }
        prop_assert_eq!(leading_spaces(lines[depth + 1]), 2 * (depth + 1));
        prop_assert_eq!(lines[depth + 1].trim_start(), "int32 leaf = 1;");
    }

    /// Messages always precede enums, which precede services, each in
    /// insertion order, however the additions were interleaved.
    #[test]
    fn declarations_grouped_in_order(kinds in prop::collection::vec(0u8..3, 0..12)) {
        let mut file = File::new();
        let mut expected = [Vec::new(), Vec::new(), Vec::new()];
        for (i, kind) in kinds.iter().enumerate() {
            match kind {
                0 => {
                    let header = format!("message M{i} {{");
                    file.add_message(Message::new(format!("M{i}")));
                    expected[0].push(header);
                }
                1 => {
                    let header = format!("enum E{i} {{");
                    file.add_enum(Enum::new(format!("E{i}")));
                    expected[1].push(header);
                }
                _ => {
                    let header = format!("service S{i} {{");
                    file.add_service(Service::new(format!("S{i}")));
                    expected[2].push(header);
                }
            }
        }
        let text = print(&file);
        let headers: Vec<&str> = text
            .lines()
            .filter(|l| l.ends_with('{'))
            .collect();
        let expected: Vec<String> = expected.concat();
        prop_assert_eq!(headers, expected);
    }
}
