//! Context information joining protoc's descriptors with the parsed specs.
//!
//! The descriptors arrive in the `CodeGeneratorRequest`; the specs come from
//! the files named in the plugin parameter. Backends walk the generated files
//! through these contexts and resolve type references relative to the type
//! being constructed, the same way protoc resolves names in `.proto` files.

mod descriptor_ext;

use crate::domain::FullName;
use crate::error::{GeneratorError, GeneratorResult};
use crate::spec;
use descriptor_ext::FileDescriptorProtoExt;
use heck::ToSnakeCase;
use prost_types::compiler::CodeGeneratorRequest;
use prost_types::{DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, FileDescriptorProto};
use std::path::Path;

/// Holds context information for the whole plugin invocation.
#[derive(Clone, Copy)]
pub struct PluginContext<'a> {
    /// Code generator request passed in by protoc.
    pub request: &'a CodeGeneratorRequest,

    /// Parsed spec files.
    pub files: &'a [spec::File<'a>],
}

/// Holds context information for a single proto file.
#[derive(Clone, Copy)]
pub struct FileContext<'a> {
    /// Proto file descriptor.
    pub descriptor: &'a FileDescriptorProto,

    /// Parent plugin context.
    pub plugin_context: PluginContext<'a>,
}

/// Holds context information for a protobuf type.
#[derive(Clone)]
pub struct TypeContext<'a> {
    /// Fully qualified name of the type.
    pub full_name: FullName,

    /// Type descriptor.
    pub type_descriptor: TypeDescriptor<'a>,

    /// Constructor spec, if one exists for this type.
    pub type_spec: Option<&'a spec::Type<'a>>,

    /// File the type is declared in.
    pub file_context: FileContext<'a>,
}

/// Type descriptor that may represent either a protobuf enum or message.
#[derive(Clone, Copy, Debug)]
pub enum TypeDescriptor<'a> {
    Message(&'a DescriptorProto),
    Enum(&'a EnumDescriptorProto),
}

impl<'a> PluginContext<'a> {
    pub fn new(request: &'a CodeGeneratorRequest, files: &'a [spec::File<'a>]) -> Self {
        Self { request, files }
    }

    /// Proto files listed as generator output, in request order.
    ///
    /// # Errors
    ///
    /// `GeneratorError::UnknownFile` if protoc lists a file without sending
    /// its descriptor.
    pub fn iter_generated_files(&self) -> GeneratorResult<Vec<FileContext<'a>>> {
        self.request
            .file_to_generate
            .iter()
            .map(|name| {
                self.get_file_descriptor(name)
                    .map(|descriptor| FileContext {
                        descriptor,
                        plugin_context: *self,
                    })
                    .ok_or_else(|| GeneratorError::UnknownFile(name.clone()))
            })
            .collect()
    }

    /// Types with a spec across all generated files.
    pub fn iter_generated_types(
        &self,
    ) -> GeneratorResult<Vec<(TypeContext<'a>, &'a spec::Type<'a>)>> {
        let mut types = Vec::new();
        for file_context in self.iter_generated_files()? {
            types.extend(file_context.iter_generated_types()?);
        }
        Ok(types)
    }

    /// Every constructor that should be generated.
    ///
    /// This includes all the constructors the type of which is included in the .proto files.
    pub fn iter_generated_constructors(
        &self,
    ) -> GeneratorResult<Vec<(TypeContext<'a>, &'a spec::Constructor<'a>)>> {
        let mut constructors = Vec::new();
        for file_context in self.iter_generated_files()? {
            constructors.extend(file_context.iter_generated_constructors()?);
        }
        Ok(constructors)
    }

    /// Gets a message or enum by its fully qualified name.
    pub fn get_type(&self, full_name: &FullName) -> Option<TypeContext<'a>> {
        let (file_context, type_descriptor) = self.get_type_descriptor(full_name)?;

        Some(TypeContext {
            full_name: full_name.clone(),
            type_descriptor,
            type_spec: self.get_type_spec(full_name),
            file_context,
        })
    }

    /// Gets a type by a name written relative to `source`.
    ///
    /// Used to resolve type references in specs. Like protobuf references
    /// they may be relative to any of the enclosing scopes, innermost first.
    /// A leading dot makes the name absolute.
    ///
    /// For a dotted name only the first segment is searched for. The
    /// innermost scope defining it as a type or package is the one the rest
    /// of the name is looked up in, even if an outer scope would match the
    /// whole name.
    pub fn get_rel_type(&self, source: &FullName, type_name: &str) -> Option<TypeContext<'a>> {
        if type_name.starts_with('.') {
            return FullName::new(type_name)
                .ok()
                .and_then(|name| self.get_type(&name));
        }

        let first = type_name.split('.').next().unwrap_or(type_name);

        let mut scope = Some(source.clone());
        while let Some(current) = scope {
            let defines_first = current
                .child(first)
                .is_ok_and(|candidate| self.defines(&candidate));
            if defines_first {
                return current
                    .child(type_name)
                    .ok()
                    .and_then(|candidate| self.get_type(&candidate));
            }
            scope = current.parent();
        }

        FullName::new(type_name)
            .ok()
            .and_then(|name| self.get_type(&name))
    }

    /// Whether `name` is a type or a package (or a package prefix).
    fn defines(&self, name: &FullName) -> bool {
        if self.get_type_descriptor(name).is_some() {
            return true;
        }

        let prefix = format!("{}.", name);
        self.request
            .proto_file
            .iter()
            .any(|file| file.package() == name.as_str() || file.package().starts_with(&prefix))
    }

    /// Fully qualified names of spec types that match no type in the request.
    pub fn unmatched_specs(&self) -> Vec<String> {
        self.files
            .iter()
            .flat_map(|file| file.iter_types())
            .filter(|(name, _)| {
                FullName::new(name.as_str())
                    .ok()
                    .and_then(|full_name| self.get_type_descriptor(&full_name))
                    .is_none()
            })
            .map(|(name, _)| name)
            .collect()
    }

    /// Gets a type spec by its full name if one exists.
    fn get_type_spec(&self, full_name: &FullName) -> Option<&'a spec::Type<'a>> {
        let files = self.files;
        files.iter().find_map(|file| file.find_type(full_name))
    }

    /// Gets a type descriptor by its full name if one exists.
    fn get_type_descriptor(
        &self,
        full_name: &FullName,
    ) -> Option<(FileContext<'a>, TypeDescriptor<'a>)> {
        let request = self.request;
        request.proto_file.iter().find_map(|file| {
            let relative = full_name.strip_package(file.package())?;
            let found = file.find_type(&relative)?;
            Some((
                FileContext {
                    descriptor: file,
                    plugin_context: *self,
                },
                found,
            ))
        })
    }

    /// Finds a file descriptor given a name.
    fn get_file_descriptor(&self, file_name: &str) -> Option<&'a FileDescriptorProto> {
        let request = self.request;
        request.proto_file.iter().find(|f| f.name() == file_name)
    }
}

impl<'a> FileContext<'a> {
    /// All messages in this file with a spec, depth-first in declaration order.
    ///
    /// The spec is returned alongside the context so the caller doesn't need
    /// to unwrap `type_spec`.
    pub fn iter_generated_types(
        &self,
    ) -> GeneratorResult<Vec<(TypeContext<'a>, &'a spec::Type<'a>)>> {
        let descriptor = self.descriptor;
        let mut types = Vec::new();
        for message in &descriptor.message_type {
            let full_name = FullName::in_package(descriptor.package(), message.name())?;
            self.collect_types(full_name, message, &mut types)?;
        }
        Ok(types)
    }

    /// Constructors of all the types in this file, in generation order.
    pub fn iter_generated_constructors(
        &self,
    ) -> GeneratorResult<Vec<(TypeContext<'a>, &'a spec::Constructor<'a>)>> {
        Ok(self
            .iter_generated_types()?
            .into_iter()
            .flat_map(|(type_context, type_spec)| {
                type_spec
                    .constructors
                    .iter()
                    .map(move |ctor| (type_context.clone(), ctor))
            })
            .collect())
    }

    /// The proto package, empty when the file declares none.
    pub fn package(&self) -> &'a str {
        self.descriptor.package()
    }

    /// File name without directories and the `.proto` extension.
    pub fn file_stem(&self) -> &'a str {
        let name = self.descriptor.name();
        Path::new(name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(name)
    }

    fn collect_types(
        &self,
        full_name: FullName,
        message: &'a DescriptorProto,
        out: &mut Vec<(TypeContext<'a>, &'a spec::Type<'a>)>,
    ) -> GeneratorResult<()> {
        if let Some(type_spec) = self.plugin_context.get_type_spec(&full_name) {
            out.push((
                TypeContext {
                    full_name: full_name.clone(),
                    type_descriptor: TypeDescriptor::Message(message),
                    type_spec: Some(type_spec),
                    file_context: *self,
                },
                type_spec,
            ));
        }

        for nested in &message.nested_type {
            let nested_name = full_name.child(nested.name())?;
            self.collect_types(nested_name, nested, out)?;
        }

        Ok(())
    }
}

impl<'a> TypeContext<'a> {
    /// Gets the short name of the type.
    ///
    /// The type.full_name is an absolute name while the name returned by this
    /// function is just the individual name of the item, excluding the path.
    pub fn name(&self) -> &'a str {
        match self.type_descriptor {
            TypeDescriptor::Message(m) => m.name(),
            TypeDescriptor::Enum(e) => e.name(),
        }
    }

    /// Path of the type below its package, e.g. `["Shape", "Point"]`.
    pub fn relative_path(&self) -> Vec<&str> {
        self.full_name
            .strip_package(self.file_context.package())
            .unwrap_or_else(|| vec![self.full_name.short_name()])
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.type_descriptor, TypeDescriptor::Enum(_))
    }

    /// Looks up a message field by the name used in a spec.
    ///
    /// Exact proto names win; otherwise `itemId` and `item_id` are treated
    /// as the same field.
    pub fn field(&self, name: &str) -> Option<&'a FieldDescriptorProto> {
        let TypeDescriptor::Message(message) = self.type_descriptor else {
            return None;
        };

        message.field.iter().find(|f| f.name() == name).or_else(|| {
            let snake = name.to_snake_case();
            message
                .field
                .iter()
                .find(|f| f.name().to_snake_case() == snake)
        })
    }

    /// Like `field`, but a missing field is an error.
    pub fn require_field(&self, name: &str) -> GeneratorResult<&'a FieldDescriptorProto> {
        self.field(name).ok_or_else(|| GeneratorError::UnknownField {
            message: self.full_name.to_string(),
            field: name.to_string(),
        })
    }
}
