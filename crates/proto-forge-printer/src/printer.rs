use std::io::{self, Write};

use proto_forge_core::types::{
    Comment, Enum, EnumField, EnumValueOption, FieldOption, File, Import, Message, MessageField,
    OneOf, OneOfField, Package, ProtoOption, ReturnType, Rpc, Service, Syntax, Visibility,
};

use crate::config::PrinterConfig;
use crate::indent::IndentWriter;
use crate::node::Node;

/// Render a file to canonical `.proto` text with the default configuration.
pub fn print(file: &File) -> String {
    print_node(file)
}

/// Render any single node to a string with the default configuration.
pub fn print_node<'a>(node: impl Into<Node<'a>>) -> String {
    Printer::new().render_to_string(node.into())
}

/// Render `node` into `w` with the default configuration.
///
/// `None` writes nothing.
pub fn fprint<'a>(w: &mut dyn Write, node: impl Into<Option<Node<'a>>>) -> io::Result<()> {
    Printer::new().fprint(w, node)
}

/// Single-pass, depth-first renderer.
///
/// Output is produced in one linear walk: no lookahead and no buffering
/// beyond what the sink itself does. The first write error aborts the walk
/// and is returned unchanged, leaving whatever was already written in the
/// sink.
#[derive(Debug, Clone, Default)]
pub struct Printer {
    config: PrinterConfig,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PrinterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Writes the canonical form of `node`, and of all its descendants, to `w`.
    ///
    /// `None` writes nothing and succeeds, so optional slots can be passed
    /// through the same entry point as present nodes.
    pub fn fprint<'a>(
        &self,
        w: &mut dyn Write,
        node: impl Into<Option<Node<'a>>>,
    ) -> io::Result<()> {
        match node.into() {
            Some(node) => self.render(w, node),
            None => Ok(()),
        }
    }

    fn render_to_string(&self, node: Node<'_>) -> String {
        let mut buf = Vec::new();
        self.render(&mut buf, node).expect("writing to a Vec<u8> never fails");
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn render(&self, w: &mut dyn Write, node: Node<'_>) -> io::Result<()> {
        match node {
            Node::File(f) => self.print_file(w, f),
            Node::Syntax(s) => self.print_syntax(w, s),
            Node::Import(i) => self.print_import(w, i),
            Node::Package(p) => self.print_package(w, p),
            Node::Option(o) => self.print_option(w, o),
            Node::Message(m) => self.print_message(w, m),
            Node::MessageField(f) => self.print_message_field(w, f),
            Node::OneOf(o) => self.print_oneof(w, o),
            Node::OneOfField(f) => self.print_oneof_field(w, f),
            Node::FieldOption(o) => self.print_field_option(w, o),
            Node::Enum(e) => self.print_enum(w, e),
            Node::EnumField(f) => self.print_enum_field(w, f),
            Node::EnumValueOption(o) => self.print_enum_value_option(w, o),
            Node::Service(s) => self.print_service(w, s),
            Node::Rpc(r) => self.print_rpc(w, r),
            Node::ReturnType(r) => self.print_return_type(w, r),
            Node::Comment(c) => self.print_comment(w, c),
        }
    }

    fn indented<'w>(&self, w: &'w mut dyn Write) -> IndentWriter<'w> {
        IndentWriter::new(w, self.config.indent)
    }

    fn print_file(&self, w: &mut dyn Write, file: &File) -> io::Result<()> {
        tracing::debug!(
            package = %file.package,
            imports = file.imports.len(),
            messages = file.messages.len(),
            enums = file.enums.len(),
            services = file.services.len(),
            "rendering proto file"
        );

        self.print_comment(w, &file.comment)?;
        self.print_syntax(w, &file.syntax)?;
        for import in &file.imports {
            self.print_import(w, import)?;
        }
        if !file.package.is_empty() {
            self.print_package(w, &file.package)?;
        }
        for option in &file.options {
            self.print_option(w, option)?;
        }
        for message in &file.messages {
            tracing::trace!(name = %message.name, "rendering message");
            writeln!(w)?;
            self.print_message(w, message)?;
        }
        for e in &file.enums {
            tracing::trace!(name = %e.name, "rendering enum");
            writeln!(w)?;
            self.print_enum(w, e)?;
        }
        for service in &file.services {
            tracing::trace!(name = %service.name, "rendering service");
            writeln!(w)?;
            self.print_service(w, service)?;
        }
        Ok(())
    }

    fn print_syntax(&self, w: &mut dyn Write, syntax: &Syntax) -> io::Result<()> {
        writeln!(w, "syntax = \"{syntax}\";")
    }

    fn print_import(&self, w: &mut dyn Write, import: &Import) -> io::Result<()> {
        match import.visibility {
            Visibility::Unspecified => writeln!(w, "import \"{}\";", import.path),
            visibility => writeln!(w, "import {visibility} \"{}\";", import.path),
        }
    }

    fn print_package(&self, w: &mut dyn Write, package: &Package) -> io::Result<()> {
        writeln!(w, "package {package};")
    }

    fn print_option(&self, w: &mut dyn Write, option: &ProtoOption) -> io::Result<()> {
        writeln!(w, "{} = {};", option.name, option.value)
    }

    fn print_message(&self, w: &mut dyn Write, message: &Message) -> io::Result<()> {
        self.print_comment(w, &message.comment)?;
        writeln!(w, "message {} {{", message.name)?;
        {
            let mut body = self.indented(w);
            for field in &message.fields {
                self.print_message_field(&mut body, field)?;
            }
            for e in &message.enums {
                self.print_enum(&mut body, e)?;
            }
            for nested in &message.messages {
                self.print_message(&mut body, nested)?;
            }
            for oneof in &message.oneofs {
                self.print_oneof(&mut body, oneof)?;
            }
        }
        writeln!(w, "}}")
    }

    fn print_message_field(&self, w: &mut dyn Write, field: &MessageField) -> io::Result<()> {
        self.print_comment(w, &field.comment)?;
        if field.repeated {
            write!(w, "repeated ")?;
        }
        write!(w, "{} {} = {}", field.type_name, field.name, field.index)?;
        write_option_list(
            w,
            field.options.iter().map(|o| (o.name.as_str(), o.value.as_str())),
        )?;
        writeln!(w, ";")
    }

    fn print_oneof(&self, w: &mut dyn Write, oneof: &OneOf) -> io::Result<()> {
        self.print_comment(w, &oneof.comment)?;
        writeln!(w, "oneof {} {{", oneof.name)?;
        {
            let mut body = self.indented(w);
            for field in &oneof.fields {
                self.print_oneof_field(&mut body, field)?;
            }
        }
        writeln!(w, "}}")
    }

    fn print_oneof_field(&self, w: &mut dyn Write, field: &OneOfField) -> io::Result<()> {
        self.print_comment(w, &field.comment)?;
        write!(w, "{} {} = {}", field.type_name, field.name, field.index)?;
        write_option_list(
            w,
            field.options.iter().map(|o| (o.name.as_str(), o.value.as_str())),
        )?;
        writeln!(w, ";")
    }

    fn print_field_option(&self, w: &mut dyn Write, option: &FieldOption) -> io::Result<()> {
        write!(w, "{} = {}", option.name, option.value)
    }

    fn print_enum(&self, w: &mut dyn Write, e: &Enum) -> io::Result<()> {
        self.print_comment(w, &e.comment)?;
        writeln!(w, "enum {} {{", e.name)?;
        {
            let mut body = self.indented(w);
            for option in &e.options {
                self.print_option(&mut body, option)?;
            }
            for field in &e.fields {
                self.print_enum_field(&mut body, field)?;
            }
        }
        writeln!(w, "}}")
    }

    fn print_enum_field(&self, w: &mut dyn Write, field: &EnumField) -> io::Result<()> {
        self.print_comment(w, &field.comment)?;
        write!(w, "{} = {}", field.name, field.index)?;
        write_option_list(
            w,
            field.options.iter().map(|o| (o.name.as_str(), o.value.as_str())),
        )?;
        writeln!(w, ";")
    }

    fn print_enum_value_option(
        &self,
        w: &mut dyn Write,
        option: &EnumValueOption,
    ) -> io::Result<()> {
        write!(w, "{} = {}", option.name, option.value)
    }

    fn print_service(&self, w: &mut dyn Write, service: &Service) -> io::Result<()> {
        self.print_comment(w, &service.comment)?;
        writeln!(w, "service {} {{", service.name)?;
        {
            let mut body = self.indented(w);
            for option in &service.options {
                self.print_option(&mut body, option)?;
            }
            for rpc in &service.rpcs {
                self.print_rpc(&mut body, rpc)?;
            }
        }
        writeln!(w, "}}")
    }

    fn print_rpc(&self, w: &mut dyn Write, rpc: &Rpc) -> io::Result<()> {
        self.print_comment(w, &rpc.comment)?;
        write!(w, "rpc {} ", rpc.name)?;
        self.print_return_type(w, &rpc.input)?;
        write!(w, " returns ")?;
        self.print_return_type(w, &rpc.output)?;
        writeln!(w, ";")
    }

    fn print_return_type(&self, w: &mut dyn Write, ty: &ReturnType) -> io::Result<()> {
        if ty.streamable {
            write!(w, "(stream {})", ty.type_name)
        } else {
            write!(w, "({})", ty.type_name)
        }
    }

    fn print_comment(&self, w: &mut dyn Write, comment: &Comment) -> io::Result<()> {
        for line in comment.lines() {
            writeln!(w, "// {line}")?;
        }
        Ok(())
    }
}

/// Writes ` [a = 1, b = 2]`, or nothing when there are no options.
fn write_option_list<'a>(
    w: &mut dyn Write,
    options: impl ExactSizeIterator<Item = (&'a str, &'a str)>,
) -> io::Result<()> {
    if options.len() == 0 {
        return Ok(());
    }
    write!(w, " [")?;
    for (i, (name, value)) in options.enumerate() {
        if i > 0 {
            write!(w, ", ")?;
        }
        write!(w, "{name} = {value}")?;
    }
    write!(w, "]")
}
