//! Descriptors for the fixture protos.
//!
//! These mirror what protoc sends for `tests/fixtures/test1.proto` and
//! `tests/fixtures/geometry.proto`.

#![allow(dead_code)]

use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, FileOptions, OneofDescriptorProto,
};

/// A singular proto3 field.
pub fn field(name: &str, number: i32, field_type: Type, type_name: Option<&str>) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(field_type as i32),
        type_name: type_name.map(str::to_string),
        ..Default::default()
    }
}

pub fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields,
        ..Default::default()
    }
}

/// test1.proto: `ObjectId` and `ItemId` in `net.jubjubnest`.
pub fn test1_file() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("test1.proto".to_string()),
        package: Some("net.jubjubnest".to_string()),
        message_type: vec![
            message(
                "ObjectId",
                vec![
                    field("type_id", 1, Type::Int32, None),
                    field("item_id", 2, Type::Message, Some(".net.jubjubnest.ItemId")),
                ],
            ),
            message(
                "ItemId",
                vec![
                    field("internal_id", 1, Type::Int32, None),
                    field("external_id", 2, Type::String, None),
                ],
            ),
        ],
        options: Some(FileOptions {
            java_package: Some("net.jubjubnest".to_string()),
            java_outer_classname: Some("Protos".to_string()),
            ..Default::default()
        }),
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}

/// test1.proto with extra `bytes blob = 3` and `int32 foo_2bar = 4` fields
/// on `ItemId`.
pub fn test1_file_with_blob() -> FileDescriptorProto {
    let mut file = test1_file();
    let item_id = &mut file.message_type[1];
    item_id.field.push(field("blob", 3, Type::Bytes, None));
    item_id.field.push(field("foo_2bar", 4, Type::Int32, None));
    file
}

/// geometry.proto, stored under `protos/`.
pub fn geometry_file() -> FileDescriptorProto {
    let point = message(
        "Point",
        vec![
            field("x", 1, Type::Double, None),
            field("y", 2, Type::Double, None),
        ],
    );

    let mut points = field("points", 7, Type::Message, Some(".geometry.Shape.Point"));
    points.label = Some(Label::Repeated as i32);

    let mut label = field("label", 8, Type::String, None);
    label.oneof_index = Some(0);
    label.proto3_optional = Some(true);

    let mut shape = message(
        "Shape",
        vec![
            field("name", 1, Type::String, None),
            field("color", 2, Type::Enum, Some(".geometry.Color")),
            field("scale", 3, Type::Float, None),
            field("area", 4, Type::Int64, None),
            field("visible", 5, Type::Bool, None),
            field("origin", 6, Type::Message, Some(".geometry.Shape.Point")),
            points,
            label,
        ],
    );
    shape.nested_type = vec![point];
    shape.oneof_decl = vec![OneofDescriptorProto {
        name: Some("_label".to_string()),
        ..Default::default()
    }];

    FileDescriptorProto {
        name: Some("protos/geometry.proto".to_string()),
        package: Some("geometry".to_string()),
        message_type: vec![shape],
        enum_type: vec![EnumDescriptorProto {
            name: Some("Color".to_string()),
            value: vec![
                EnumValueDescriptorProto {
                    name: Some("COLOR_UNSPECIFIED".to_string()),
                    number: Some(0),
                    ..Default::default()
                },
                EnumValueDescriptorProto {
                    name: Some("COLOR_RED".to_string()),
                    number: Some(1),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }],
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}
