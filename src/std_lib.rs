//! Standard library built-in objects.
//!
//! Only `Object` lives here: the surface through which descriptor records
//! travel as plain objects.

pub mod object;

pub use object::install as install_object;
