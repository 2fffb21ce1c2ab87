//! Descriptor-aware object operations over identity-keyed side tables.
//!
//! [`ObjectRegistry`] bundles the identity registry, descriptor store,
//! attribute flags and prototype links, and exposes the property operations
//! that read and mutate them. Each registry is an independent world; pass it
//! by reference to whatever needs it. [`with_default_registry`] gives a
//! per-thread shared instance for callers that want the one-runtime model.
//!
//! ## Sealing, freezing and later definitions
//!
//! - Adding a property to a sealed or non-extensible object fails with
//!   [`ShimError::NotExtensible`].
//! - A sealed object keeps its property set: deletes return `false`.
//! - Freezing makes every data property non-writable; any later change of a
//!   frozen object's properties fails with [`ShimError::Redefinition`].
//!
//! ## Array length
//!
//! Shrinking `length` deletes elements from the top down and stops at the
//! first one that cannot be deleted, leaving `length` just above it. `put`
//! keeps that partial result and returns `false`; `define_property` refuses
//! the whole change with [`ShimError::Redefinition`].

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::ds::error::ShimError;
use crate::ds::function_object::{call_function, new_function_object};
use crate::ds::object::{new_object, JsObjectType, NativeAccessor, ObjectType};
use crate::ds::object_property::{PropertyDescriptor, PropertyDescriptorSetter};
use crate::ds::operations::test_and_comparison::same_object;
use crate::ds::operations::type_conversion::to_array_index;
use crate::ds::value::JsValue;
use crate::shim::attribute_flags::{AttributeFlag, AttributeFlags};
use crate::shim::builtin_properties::{
    accepts_builtin_value, array_length_value, binding_descriptor, builtin_descriptor,
    builtin_names, is_builtin, set_builtin_value,
};
use crate::shim::config::HostConfig;
use crate::shim::descriptor_store::DescriptorStore;
use crate::shim::identity::{IdentityRegistry, ObjectIdentity};
use crate::shim::prototype_links::PrototypeLinkStore;

/// Property name to partial descriptor, applied in order.
pub type DescriptorMap = Vec<(String, PropertyDescriptorSetter)>;

/// Outcome of checking a definition against the current state.
enum Definition {
    Unchanged,
    Install(PropertyDescriptor),
    BuiltinValue(JsValue),
}

fn require_object<'a>(value: &'a JsValue, op: &str) -> Result<&'a JsObjectType, ShimError> {
    match value {
        JsValue::Object(o) if value.classify().is_object() => Ok(o),
        _ => Err(ShimError::not_an_object(op)),
    }
}

pub struct ObjectRegistry {
    config: HostConfig,
    identities: IdentityRegistry,
    descriptors: DescriptorStore,
    flags: AttributeFlags,
    prototypes: PrototypeLinkStore,
}

impl ObjectRegistry {
    pub fn new(config: HostConfig) -> Self {
        ObjectRegistry {
            config,
            identities: IdentityRegistry::new(),
            descriptors: DescriptorStore::new(),
            flags: AttributeFlags::new(),
            prototypes: PrototypeLinkStore::new(),
        }
    }

    pub fn identity_of(&mut self, o: &JsObjectType) -> ObjectIdentity {
        self.identities.identity_of(o)
    }

    /// Number of identities handed out and not yet swept.
    pub fn tracked_objects(&self) -> usize {
        self.identities.len()
    }

    /// Drops the metadata of every object that no longer exists. Returns how
    /// many identities were reclaimed; their numbers are never handed out again.
    pub fn sweep(&mut self) -> usize {
        let dead = self.identities.sweep();
        for id in &dead {
            self.descriptors.forget(*id);
            self.flags.forget(*id);
            self.prototypes.forget(*id);
        }
        if !dead.is_empty() {
            log::debug!("swept {} dead identities", dead.len());
        }
        dead.len()
    }

    fn has_flag(&self, o: &JsObjectType, flag: AttributeFlag) -> bool {
        self.identities
            .lookup(o)
            .map_or(false, |id| self.flags.contains(flag, id))
    }

    fn is_extensible_object(&self, o: &JsObjectType) -> bool {
        !self.has_flag(o, AttributeFlag::NonExtensible)
    }

    fn prototype_link(&self, o: &JsObjectType) -> Option<JsObjectType> {
        let native = o
            .borrow()
            .as_js_object()
            .get_object_base()
            .prototype()
            .cloned();
        if native.is_some() {
            return native;
        }
        self.identities
            .lookup(o)
            .and_then(|id| self.prototypes.get(id))
            .flatten()
    }

    /// Own descriptor of `name`: built-ins first, then the store, then plain
    /// host bindings.
    fn own_descriptor(&self, o: &JsObjectType, name: &str) -> Option<PropertyDescriptor> {
        let obj = (**o).borrow();
        if let Some(mut desc) = builtin_descriptor(&obj, name) {
            if self.has_flag(o, AttributeFlag::Frozen) {
                desc.set_non_writable();
            }
            return Some(desc);
        }
        let js = obj.as_js_object();
        let stored = self
            .identities
            .lookup(o)
            .and_then(|id| self.descriptors.get(id, name));
        match stored {
            // The value lives on the host; a vanished binding means the
            // property is gone.
            Some(PropertyDescriptor::Data {
                writable,
                enumerable,
                configurable,
                ..
            }) => js.get_own_binding(name).map(|value| PropertyDescriptor::Data {
                value,
                writable: *writable,
                enumerable: *enumerable,
                configurable: *configurable,
            }),
            Some(accessor) => Some(accessor.clone()),
            None => js
                .get_own_binding(name)
                .map(|value| binding_descriptor(&obj, name, value)),
        }
    }

    fn check_setter(&self, name: &str, setter: &PropertyDescriptorSetter) -> Result<(), ShimError> {
        setter.validate(name)?;
        if setter.is_accessor_descriptor() && !self.config.native_accessors {
            return Err(ShimError::UnsupportedFeature(format!(
                "cannot install getter/setter for '{}', host has no accessor hooks",
                name
            )));
        }
        Ok(())
    }

    fn plan_definition(
        &self,
        o: &JsObjectType,
        name: &str,
        setter: &PropertyDescriptorSetter,
    ) -> Result<Definition, ShimError> {
        let current = match self.own_descriptor(o, name) {
            None => {
                if !self.is_extensible_object(o) {
                    return Err(ShimError::NotExtensible(name.to_string()));
                }
                return Ok(Definition::Install(setter.to_property_descriptor()));
            }
            Some(current) => current,
        };
        if setter.is_noop_against(&current) {
            return Ok(Definition::Unchanged);
        }
        if self.has_flag(o, AttributeFlag::Frozen) {
            return Err(ShimError::Redefinition(format!("{} (object is frozen)", name)));
        }
        setter.check_redefinition(name, &current)?;

        if is_builtin(&(**o).borrow(), name) {
            if setter.writable == Some(false) {
                return Err(ShimError::Redefinition(format!(
                    "{} (writability of a built-in is fixed)",
                    name
                )));
            }
            let value = match &setter.value {
                Some(v) if accepts_builtin_value(&(**o).borrow(), name, v) => v,
                Some(v) => {
                    return Err(ShimError::InvalidArgument(format!(
                        "{} is not a valid value for built-in '{}'",
                        v, name
                    )))
                }
                None => {
                    return Err(ShimError::Redefinition(format!(
                        "{} (attributes of a built-in are fixed)",
                        name
                    )))
                }
            };
            let new_length = array_length_value(&(**o).borrow(), name, value);
            if let Some(new_length) = new_length {
                if let (_, Some(index)) = self.truncation(o, new_length) {
                    return Err(ShimError::Redefinition(format!(
                        "{} (element {} cannot be deleted)",
                        name, index
                    )));
                }
            }
            return Ok(Definition::BuiltinValue(value.clone()));
        }
        Ok(Definition::Install(setter.merge_into(&current)))
    }

    fn commit(&mut self, o: &JsObjectType, name: &str, definition: Definition) {
        match definition {
            Definition::Unchanged => {}
            Definition::BuiltinValue(v) => {
                self.write_builtin(o, name, &v);
            }
            Definition::Install(desc) => self.install(o, name, desc),
        }
    }

    /// Own array indices at or above `length`, highest first, up to the first
    /// one that cannot be deleted. That one is returned separately.
    fn truncation(&self, o: &JsObjectType, length: u32) -> (Vec<String>, Option<u32>) {
        let mut indices: Vec<u32> = self
            .own_names(o)
            .iter()
            .filter_map(|n| to_array_index(n))
            .filter(|i| *i >= length)
            .collect();
        indices.sort_unstable_by(|a, b| b.cmp(a));
        let sealed = self.has_flag(o, AttributeFlag::Sealed);
        let mut removable = vec![];
        for index in indices {
            let name = index.to_string();
            let configurable = self
                .own_descriptor(o, &name)
                .map_or(true, |d| d.is_configurable());
            if sealed || !configurable {
                return (removable, Some(index));
            }
            removable.push(name);
        }
        (removable, None)
    }

    /// Writes a writable built-in. Returns `false` when the value is rejected
    /// or an array could not shrink all the way.
    fn write_builtin(&mut self, o: &JsObjectType, name: &str, value: &JsValue) -> bool {
        let new_length = array_length_value(&(**o).borrow(), name, value);
        let new_length = match new_length {
            Some(n) => n,
            None => return set_builtin_value(&mut (**o).borrow_mut(), name, value),
        };
        let (removed, blocked_at) = self.truncation(o, new_length);
        if let Some(id) = self.identities.lookup(o) {
            for n in &removed {
                self.descriptors.remove(id, n);
            }
        }
        let mut obj = (**o).borrow_mut();
        for n in &removed {
            let js = obj.as_js_object_mut();
            js.remove_own_binding(n);
            js.get_object_base_mut().remove_accessor(n);
        }
        let applied = blocked_at.map_or(new_length, |index| index + 1);
        if let ObjectType::Array(a) = &mut *obj {
            a.set_length(applied);
        }
        if let Some(index) = blocked_at {
            log::debug!("length stopped at {}, element {} cannot be deleted", applied, index);
        }
        blocked_at.is_none()
    }

    /// Writes `desc` to the store and mirrors it onto the host object.
    fn install(&mut self, o: &JsObjectType, name: &str, desc: PropertyDescriptor) {
        let id = self.identities.identity_of(o);
        {
            let mut obj = (**o).borrow_mut();
            let js = obj.as_js_object_mut();
            match &desc {
                PropertyDescriptor::Data { value, .. } => {
                    js.get_object_base_mut().remove_accessor(name);
                    js.set_own_binding(name, value.clone());
                }
                PropertyDescriptor::Accessor { get, set, .. } => {
                    js.remove_own_binding(name);
                    if self.config.native_accessors {
                        js.get_object_base_mut().install_accessor(
                            name,
                            NativeAccessor {
                                get: get.clone(),
                                set: set.clone(),
                            },
                        );
                    }
                    // An accessor element still counts towards the length.
                    let index = to_array_index(name);
                    if let (ObjectType::Array(a), Some(index)) = (&mut *obj, index) {
                        if index >= a.length() {
                            a.set_length(index + 1);
                        }
                    }
                }
            }
        }
        log::debug!("{}.{} := {:?}", id, name, desc);
        self.descriptors.set(id, name, desc);
    }

    /// Descriptor of own property `name`, or `None` if there is none.
    pub fn get_descriptor(
        &self,
        obj: &JsValue,
        name: &str,
    ) -> Result<Option<PropertyDescriptor>, ShimError> {
        let o = require_object(obj, "getOwnPropertyDescriptor")?;
        Ok(self.own_descriptor(o, name))
    }

    /// Stores a descriptor as given, with missing attributes defaulting to
    /// `false`. Unlike [`define_property`](Self::define_property) this does not
    /// consult existing attributes or extensibility.
    pub fn set_descriptor(
        &mut self,
        o: &JsObjectType,
        name: &str,
        setter: PropertyDescriptorSetter,
    ) -> Result<(), ShimError> {
        self.check_setter(name, &setter)?;
        self.install(o, name, setter.to_property_descriptor());
        Ok(())
    }

    /// `Object.defineProperty`. Returns the object.
    pub fn define_property(
        &mut self,
        obj: &JsValue,
        name: &str,
        setter: PropertyDescriptorSetter,
    ) -> Result<JsValue, ShimError> {
        let o = require_object(obj, "defineProperty")?;
        self.check_setter(name, &setter)?;
        let definition = self.plan_definition(o, name, &setter)?;
        self.commit(o, name, definition);
        Ok(obj.clone())
    }

    /// `Object.defineProperties`. Every entry is checked before any is
    /// applied, so a failure leaves the object untouched.
    pub fn define_properties(
        &mut self,
        obj: &JsValue,
        descriptors: DescriptorMap,
    ) -> Result<JsValue, ShimError> {
        let o = require_object(obj, "defineProperties")?;
        let mut seen = HashSet::new();
        let mut plan = Vec::with_capacity(descriptors.len());
        for (name, setter) in &descriptors {
            if !seen.insert(name.as_str()) {
                return Err(ShimError::InvalidArgument(format!(
                    "property '{}' appears twice in descriptor map",
                    name
                )));
            }
            self.check_setter(name, setter)?;
            plan.push(self.plan_definition(o, name, setter)?);
        }
        for ((name, _), definition) in descriptors.iter().zip(plan) {
            self.commit(o, name, definition);
        }
        Ok(obj.clone())
    }

    /// `delete obj[name]`. Declining is `Ok(false)`, not an error.
    pub fn delete_property(&mut self, obj: &JsValue, name: &str) -> Result<bool, ShimError> {
        let o = require_object(obj, "deleteProperty")?;
        if is_builtin(&(**o).borrow(), name) {
            return Ok(false);
        }
        let id = self.identities.lookup(o);
        match self.own_descriptor(o, name) {
            None => {
                if let Some(id) = id {
                    self.descriptors.remove(id, name);
                }
                Ok(true)
            }
            Some(desc) => {
                if !desc.is_configurable() || self.has_flag(o, AttributeFlag::Sealed) {
                    log::debug!("refused to delete non-configurable '{}'", name);
                    return Ok(false);
                }
                if let Some(id) = id {
                    self.descriptors.remove(id, name);
                }
                let mut obj = (**o).borrow_mut();
                let js = obj.as_js_object_mut();
                js.remove_own_binding(name);
                js.get_object_base_mut().remove_accessor(name);
                Ok(true)
            }
        }
    }

    /// `Object.getOwnPropertyNames`: built-ins, then host bindings in
    /// insertion order, then accessors, without duplicates.
    pub fn list_own_property_names(&self, obj: &JsValue) -> Result<Vec<String>, ShimError> {
        let o = require_object(obj, "getOwnPropertyNames")?;
        Ok(self.own_names(o))
    }

    fn own_names(&self, o: &JsObjectType) -> Vec<String> {
        let mut candidates = {
            let b = (**o).borrow();
            let js = b.as_js_object();
            let mut c = builtin_names(&b);
            c.extend(js.own_binding_names());
            if let Some(id) = self.identities.lookup(o) {
                c.extend(self.descriptors.names(id));
            }
            c.extend(js.get_object_base().accessor_names().map(String::from));
            c
        };
        let mut seen = HashSet::new();
        candidates.retain(|n| seen.insert(n.clone()));
        candidates.retain(|n| self.own_descriptor(o, n).is_some());
        candidates
    }

    /// `Object.keys`: own enumerable names.
    pub fn keys(&self, obj: &JsValue) -> Result<Vec<String>, ShimError> {
        let o = require_object(obj, "keys")?;
        let names = self.list_own_property_names(obj)?;
        Ok(names
            .into_iter()
            .filter(|n| {
                self.own_descriptor(o, n)
                    .map_or(false, |d| d.is_enumerable())
            })
            .collect())
    }

    pub fn get_own_property_descriptors(
        &self,
        obj: &JsValue,
    ) -> Result<Vec<(String, PropertyDescriptor)>, ShimError> {
        let o = require_object(obj, "getOwnPropertyDescriptors")?;
        Ok(self
            .list_own_property_names(obj)?
            .into_iter()
            .filter_map(|n| self.own_descriptor(o, &n).map(|d| (n, d)))
            .collect())
    }

    pub fn has_own_property(&self, obj: &JsValue, name: &str) -> Result<bool, ShimError> {
        let o = require_object(obj, "hasOwnProperty")?;
        Ok(self.own_descriptor(o, name).is_some())
    }

    /// `name in obj`.
    pub fn has_property(&self, obj: &JsValue, name: &str) -> Result<bool, ShimError> {
        let mut current = require_object(obj, "hasProperty")?.clone();
        loop {
            if self.own_descriptor(&current, name).is_some() {
                return Ok(true);
            }
            match self.prototype_link(&current) {
                Some(p) => current = p,
                None => return Ok(false),
            }
        }
    }

    /// `obj[name]`, following the prototype chain and calling getters with
    /// `obj` as receiver.
    pub fn get(&mut self, obj: &JsValue, name: &str) -> Result<JsValue, ShimError> {
        let mut current = require_object(obj, "get")?.clone();
        loop {
            match self.own_descriptor(&current, name) {
                Some(PropertyDescriptor::Data { value, .. }) => return Ok(value),
                Some(PropertyDescriptor::Accessor { get, .. }) => {
                    return match get {
                        Some(f) => call_function(self, &f, obj.clone(), vec![]),
                        None => Ok(JsValue::Undefined),
                    };
                }
                None => match self.prototype_link(&current) {
                    Some(p) => current = p,
                    None => return Ok(JsValue::Undefined),
                },
            }
        }
    }

    /// `obj[name] = value`. Returns `false` when the write is refused
    /// (non-writable, setter-less accessor, or a new name on a non-extensible
    /// object).
    pub fn put(&mut self, obj: &JsValue, name: &str, value: JsValue) -> Result<bool, ShimError> {
        let o = require_object(obj, "put")?.clone();
        let mut holder = o.clone();
        let found = loop {
            if let Some(d) = self.own_descriptor(&holder, name) {
                break Some(d);
            }
            match self.prototype_link(&holder) {
                Some(p) => holder = p,
                None => break None,
            }
        };
        match found {
            Some(PropertyDescriptor::Accessor { set: Some(f), .. }) => {
                call_function(self, &f, obj.clone(), vec![value])?;
                Ok(true)
            }
            Some(PropertyDescriptor::Accessor { set: None, .. }) => Ok(false),
            Some(PropertyDescriptor::Data { writable: false, .. }) => Ok(false),
            Some(_) if same_object(&holder, &o) => {
                if is_builtin(&o.borrow(), name) {
                    return Ok(self.write_builtin(&o, name, &value));
                }
                o.borrow_mut().as_js_object_mut().set_own_binding(name, value);
                Ok(true)
            }
            _ => {
                if !self.is_extensible_object(&o) {
                    return Ok(false);
                }
                o.borrow_mut()
                    .as_js_object_mut()
                    .set_own_binding(name, value);
                Ok(true)
            }
        }
    }

    /// `Object.create`. The prototype must be `null` or an object.
    pub fn create_with_prototype(
        &mut self,
        proto: &JsValue,
        descriptors: Option<DescriptorMap>,
    ) -> Result<JsObjectType, ShimError> {
        let prototype = match proto {
            JsValue::Null => None,
            JsValue::Object(p) if proto.classify().is_object() => Some(p.clone()),
            _ => {
                return Err(ShimError::InvalidArgument(format!(
                    "object prototype may only be an object or null: {}",
                    proto
                )))
            }
        };
        let o = new_object();
        if self.config.native_prototype_links {
            o.borrow_mut()
                .as_js_object_mut()
                .get_object_base_mut()
                .set_prototype(prototype);
        } else {
            let id = self.identities.identity_of(&o);
            self.prototypes.link(id, prototype);
        }
        if let Some(descriptors) = descriptors {
            self.define_properties(&JsValue::Object(o.clone()), descriptors)?;
        }
        log::debug!("created object with prototype {}", proto);
        Ok(o)
    }

    /// A new object with the same prototype as `obj`. With `inherit` its own
    /// properties are copied as descriptors, accessors included.
    pub fn clone_object(
        &mut self,
        obj: &JsValue,
        inherit: bool,
    ) -> Result<JsObjectType, ShimError> {
        let o = require_object(obj, "clone")?;
        let proto = match self.prototype_link(o) {
            Some(p) => JsValue::Object(p),
            None => JsValue::Null,
        };
        let descriptors = if inherit {
            let map: DescriptorMap = self
                .get_own_property_descriptors(obj)?
                .iter()
                .map(|(name, desc)| (name.clone(), PropertyDescriptorSetter::from(desc)))
                .collect();
            Some(map)
        } else {
            None
        };
        self.create_with_prototype(&proto, descriptors)
    }

    /// Makes `alias` another name for own property `property`. Returns the
    /// object.
    ///
    /// A partial alias copies the current descriptor, so the two names drift
    /// apart on later writes. A complete alias is an accessor that reads and
    /// writes through to `property`; it needs native accessors.
    pub fn alias(
        &mut self,
        obj: &JsValue,
        property: &str,
        alias: &str,
        complete: bool,
    ) -> Result<JsValue, ShimError> {
        let o = require_object(obj, "alias")?;
        if property == alias {
            return Err(ShimError::InvalidArgument(format!(
                "cannot alias '{}' to itself",
                property
            )));
        }
        let desc = self.own_descriptor(o, property).ok_or_else(|| {
            ShimError::InvalidArgument(format!("no own property '{}' to alias", property))
        })?;
        if !complete {
            return self.define_property(obj, alias, PropertyDescriptorSetter::from(&desc));
        }
        let target = Rc::downgrade(o);
        let source = property.to_string();
        let getter = new_function_object("get", 0, move |registry, _this, _args| {
            match target.upgrade() {
                Some(t) => registry.get(&JsValue::Object(t), &source),
                None => Ok(JsValue::Undefined),
            }
        });
        let target = Rc::downgrade(o);
        let source = property.to_string();
        let setter = new_function_object("set", 1, move |registry, _this, args| {
            if let Some(t) = target.upgrade() {
                let value = args.into_iter().next().unwrap_or(JsValue::Undefined);
                registry.put(&JsValue::Object(t), &source, value)?;
            }
            Ok(JsValue::Undefined)
        });
        let accessor = PropertyDescriptorSetter::accessor(Some(getter), Some(setter))
            .with_enumerable(desc.is_enumerable())
            .with_configurable(desc.is_configurable());
        self.define_property(obj, alias, accessor)
    }

    /// `Object.getPrototypeOf`. `None` stands for `null`.
    pub fn prototype_of(&self, obj: &JsValue) -> Result<Option<JsObjectType>, ShimError> {
        let o = require_object(obj, "getPrototypeOf")?;
        Ok(self.prototype_link(o))
    }

    fn mark(
        &mut self,
        obj: &JsValue,
        op: &str,
        flags: &[AttributeFlag],
    ) -> Result<ObjectIdentity, ShimError> {
        let o = require_object(obj, op)?;
        let id = self.identities.identity_of(o);
        let mut changed = false;
        for flag in flags {
            changed |= self.flags.insert(*flag, id);
        }
        if changed {
            log::debug!("{}: {:?} set on {}", op, flags, id);
        }
        Ok(id)
    }

    pub fn seal(&mut self, obj: &JsValue) -> Result<JsValue, ShimError> {
        self.mark(
            obj,
            "seal",
            &[AttributeFlag::Sealed, AttributeFlag::NonExtensible],
        )?;
        Ok(obj.clone())
    }

    /// Seals `obj` and makes all of its data properties non-writable.
    pub fn freeze(&mut self, obj: &JsValue) -> Result<JsValue, ShimError> {
        let o = require_object(obj, "freeze")?;
        let names = self.list_own_property_names(obj)?;
        let id = self.identities.identity_of(o);
        for name in names {
            if is_builtin(&(**o).borrow(), &name) {
                continue;
            }
            if let Some(mut desc) = self.own_descriptor(o, &name) {
                if desc.is_writable() {
                    desc.set_non_writable();
                    self.descriptors.set(id, &name, desc);
                }
            }
        }
        self.mark(
            obj,
            "freeze",
            &[
                AttributeFlag::Frozen,
                AttributeFlag::Sealed,
                AttributeFlag::NonExtensible,
            ],
        )?;
        Ok(obj.clone())
    }

    pub fn prevent_extensions(&mut self, obj: &JsValue) -> Result<JsValue, ShimError> {
        self.mark(obj, "preventExtensions", &[AttributeFlag::NonExtensible])?;
        Ok(obj.clone())
    }

    pub fn is_sealed(&self, obj: &JsValue) -> Result<bool, ShimError> {
        let o = require_object(obj, "isSealed")?;
        Ok(self.has_flag(o, AttributeFlag::Sealed))
    }

    pub fn is_frozen(&self, obj: &JsValue) -> Result<bool, ShimError> {
        let o = require_object(obj, "isFrozen")?;
        Ok(self.has_flag(o, AttributeFlag::Frozen))
    }

    pub fn is_extensible(&self, obj: &JsValue) -> Result<bool, ShimError> {
        let o = require_object(obj, "isExtensible")?;
        Ok(self.is_extensible_object(o))
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new(HostConfig::default())
    }
}

thread_local! {
    static DEFAULT_REGISTRY: RefCell<ObjectRegistry> = RefCell::new(ObjectRegistry::default());
}

/// Runs `f` against this thread's shared registry.
///
/// Native functions are handed the registry they run under. Reaching for the
/// default registry again from inside `f` fails with
/// [`ShimError::RegistryInUse`].
pub fn with_default_registry<R>(
    f: impl FnOnce(&mut ObjectRegistry) -> R,
) -> Result<R, ShimError> {
    DEFAULT_REGISTRY.with(|r| match r.try_borrow_mut() {
        Ok(mut registry) => Ok(f(&mut registry)),
        Err(_) => Err(ShimError::RegistryInUse),
    })
}
