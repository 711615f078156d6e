//! Domain value objects and types.
//!
//! Protobuf names show up in three shapes: absolute type references from
//! descriptors (`.net.jubjubnest.ItemId`), package-qualified names used in
//! insertion points (`net.jubjubnest.ItemId`) and relative names written in
//! spec files (`ItemId`). `FullName` normalizes the first two and resolves the
//! third.

pub mod errors;
pub mod full_name;

pub use errors::ValidationError;
pub use full_name::FullName;
