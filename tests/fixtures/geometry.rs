// prost output for geometry.proto.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Shape {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(enumeration = "Color", tag = "2")]
    pub color: i32,
    #[prost(float, tag = "3")]
    pub scale: f32,
    #[prost(int64, tag = "4")]
    pub area: i64,
    #[prost(bool, tag = "5")]
    pub visible: bool,
    #[prost(message, optional, tag = "6")]
    pub origin: ::core::option::Option<shape::Point>,
    #[prost(message, repeated, tag = "7")]
    pub points: ::prost::alloc::vec::Vec<shape::Point>,
    #[prost(string, optional, tag = "8")]
    pub label: ::core::option::Option<::prost::alloc::string::String>,
}
/// Nested message and enum types in `Shape`.
pub mod shape {
    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct Point {
        #[prost(double, tag = "1")]
        pub x: f64,
        #[prost(double, tag = "2")]
        pub y: f64,
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Color {
    Unspecified = 0,
    Red = 1,
}
