// @generated by protoc-gen-rust_constructors. Do not edit.

#[allow(clippy::redundant_field_names, clippy::needless_update)]
impl ObjectId {
    /// Refers to an item stored in this system.
    ///
    /// # Arguments
    ///
    /// * `type_id` - Kind of the referenced object.
    pub fn internal(type_id: i32, item_id: i32) -> Self {
        Self {
            type_id: type_id,
            item_id: Some(ItemId::internal(item_id)),
            ..Default::default()
        }
    }
}

#[allow(clippy::redundant_field_names, clippy::needless_update)]
impl ItemId {
    pub fn internal(id: i32) -> Self {
        Self {
            internal_id: id,
            ..Default::default()
        }
    }

    /// Refers to an item stored elsewhere.
    pub fn external(id: String) -> Self {
        Self {
            external_id: id,
            ..Default::default()
        }
    }
}
