// prost output for test1.proto.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ObjectId {
    #[prost(int32, tag = "1")]
    pub type_id: i32,
    #[prost(message, optional, tag = "2")]
    pub item_id: ::core::option::Option<ItemId>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ItemId {
    #[prost(int32, tag = "1")]
    pub internal_id: i32,
    #[prost(string, tag = "2")]
    pub external_id: ::prost::alloc::string::String,
}
