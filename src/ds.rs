//! Data structures: values, host objects and property descriptors.

pub mod array_object;
pub mod error;
pub mod function_object;
pub mod object;
pub mod object_property;
pub mod operations;
pub mod string_object;
pub mod value;
