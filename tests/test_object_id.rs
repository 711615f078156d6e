//! The generated `ObjectId::internal` constructor compiled against prost
//! structs for test1.proto.
//!
//! `fixtures/test1_constructors.rs` is the exact output of
//! protoc-gen-rust_constructors for `fixtures/test1.spec` (checked in
//! `test_rust_backend.rs`), so these tests exercise generated code.

mod jubjubnest {
    include!("fixtures/test1.rs");
    include!("fixtures/test1_constructors.rs");
}

use jubjubnest::{ItemId, ObjectId};
use prost::Message;

#[test]
fn test_internal_sets_type_and_item() {
    let id = ObjectId::internal(1, 2);

    assert_eq!(id.type_id, 1);
    assert_eq!(id.item_id.as_ref().map(|item| item.internal_id), Some(2));
}

#[test]
fn test_internal_leaves_other_fields_default() {
    let id = ObjectId::internal(1, 2);
    let item = id.item_id.unwrap();

    assert_eq!(item, ItemId::internal(2));
    assert!(item.external_id.is_empty());
}

#[test]
fn test_internal_accepts_zero_and_negative_values() {
    let zero = ObjectId::internal(0, 0);
    assert_eq!(zero.type_id, 0);
    assert_eq!(zero.item_id.unwrap().internal_id, 0);

    let negative = ObjectId::internal(-7, i32::MIN);
    assert_eq!(negative.type_id, -7);
    assert_eq!(negative.item_id.unwrap().internal_id, i32::MIN);

    let max = ObjectId::internal(i32::MAX, i32::MAX);
    assert_eq!(max.type_id, i32::MAX);
    assert_eq!(max.item_id.unwrap().internal_id, i32::MAX);
}

#[test]
fn test_reads_do_not_mutate() {
    let id = ObjectId::internal(3, 4);
    let copy = id.clone();

    for _ in 0..3 {
        assert_eq!(id.type_id, 3);
        assert_eq!(id.item_id.as_ref().unwrap().internal_id, 4);
    }
    assert_eq!(id, copy);
}

#[test]
fn test_external_constructor() {
    let item = ItemId::external("legacy-42".to_string());
    assert_eq!(item.internal_id, 0);
    assert_eq!(item.external_id, "legacy-42");
}

#[test]
fn test_constructed_message_survives_the_wire() {
    let id = ObjectId::internal(1, 2);
    let decoded = ObjectId::decode(id.encode_to_vec().as_slice()).unwrap();

    assert_eq!(decoded.type_id, 1);
    assert_eq!(decoded.item_id.unwrap().internal_id, 2);
}
