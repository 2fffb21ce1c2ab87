//! The descriptor emulation layer.
//!
//! Property attributes, sealed/frozen/non-extensible markers and prototype
//! links are kept in side tables keyed by [`identity::ObjectIdentity`], next
//! to the host objects rather than inside them.

pub mod attribute_flags;
pub mod builtin_properties;
pub mod config;
pub mod descriptor_store;
pub mod identity;
pub mod prototype_links;
pub mod registry;

pub use config::HostConfig;
pub use registry::{with_default_registry, DescriptorMap, ObjectRegistry};
