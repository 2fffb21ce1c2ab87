//! # propshim - ES5 property descriptors for hosts that lack them
//!
//! An emulation layer that gives a host object model the ES5 object
//! reflection API: property descriptors, `defineProperty`/`defineProperties`,
//! `Object.create`, and the sealed/frozen/non-extensible states. Attributes
//! the host cannot store are kept in side tables keyed by object identity.
//!
//! ## Quick Start
//!
//! ```
//! use propshim::ds::object::new_object;
//! use propshim::ds::object_property::PropertyDescriptorSetter;
//! use propshim::ds::value::JsValue;
//! use propshim::shim::ObjectRegistry;
//!
//! let mut registry = ObjectRegistry::default();
//! let point = JsValue::Object(new_object());
//!
//! registry
//!     .define_property(&point, "x", PropertyDescriptorSetter::data(JsValue::int(1)))
//!     .unwrap();
//!
//! let desc = registry.get_descriptor(&point, "x").unwrap().unwrap();
//! assert!(!desc.is_writable());
//! assert!(!registry.delete_property(&point, "x").unwrap());
//! ```
//!
//! ### Through the `Object` surface
//!
//! ```
//! use propshim::ds::function_object::call_function;
//! use propshim::ds::object::new_object;
//! use propshim::ds::value::JsValue;
//! use propshim::shim::ObjectRegistry;
//! use propshim::std_lib::install_object;
//!
//! let mut registry = ObjectRegistry::default();
//! let object = JsValue::Object(install_object(&mut registry).unwrap());
//! let freeze = registry.get(&object, "freeze").unwrap();
//! let target = JsValue::Object(new_object());
//!
//! call_function(
//!     &mut registry,
//!     freeze.as_object().unwrap(),
//!     object.clone(),
//!     vec![target.clone()],
//! )
//! .unwrap();
//! assert!(registry.is_frozen(&target).unwrap());
//! ```
//!
//! ## Host capabilities
//!
//! [`shim::HostConfig`] describes what the host can do natively. Without
//! accessor hooks, getter/setter definitions fail with
//! [`ds::error::ShimError::UnsupportedFeature`]; without prototype hooks,
//! `create_with_prototype` records the link in a side table and
//! `prototype_of` reads it back.
//!
//! ## Architecture
//!
//! - **[`ds`]** - Values, host objects and descriptor records
//! - **[`shim`]** - Identity registry, side tables and the descriptor-aware
//!   operations of [`shim::ObjectRegistry`]
//! - **[`std_lib`]** - The `Object` built-in over a registry

#[macro_use]
extern crate lazy_static;

pub mod ds;
pub mod shim;
pub mod std_lib;
