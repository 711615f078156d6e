use super::TypeDescriptor;
use prost_types::{DescriptorProto, FileDescriptorProto};

/// Name lookup on descriptor trees.
pub(crate) trait DescriptorProtoExt {
    /// Resolve a relative path that starts with this message's own name.
    fn get_nested_or_self<'a>(&'a self, name: &[&str]) -> Option<TypeDescriptor<'a>>;
}

impl DescriptorProtoExt for DescriptorProto {
    fn get_nested_or_self<'a>(&'a self, name: &[&str]) -> Option<TypeDescriptor<'a>> {
        let (first, remainder) = name.split_first()?;

        if *first != self.name() {
            return None;
        }

        if remainder.is_empty() {
            return Some(TypeDescriptor::Message(self));
        }

        if let [enum_name] = remainder {
            if let Some(e) = self.enum_type.iter().find(|e| e.name() == *enum_name) {
                return Some(TypeDescriptor::Enum(e));
            }
        }

        self.nested_type
            .iter()
            .find_map(|nt| nt.get_nested_or_self(remainder))
    }
}

pub(crate) trait FileDescriptorProtoExt {
    /// Find a message or enum by its path below the file's package.
    fn find_type<'a>(&'a self, name: &[&str]) -> Option<TypeDescriptor<'a>>;
}

impl FileDescriptorProtoExt for FileDescriptorProto {
    fn find_type<'a>(&'a self, name: &[&str]) -> Option<TypeDescriptor<'a>> {
        if let [enum_name] = name {
            if let Some(e) = self.enum_type.iter().find(|e| e.name() == *enum_name) {
                return Some(TypeDescriptor::Enum(e));
            }
        }

        self.message_type
            .iter()
            .find_map(|m| m.get_nested_or_self(name))
    }
}
