//! Object built-in.
//!
//! Exposes the descriptor-aware operations of an [`ObjectRegistry`] as the
//! static methods of an `Object` function object. Descriptor records cross
//! this surface as plain objects.

use crate::ds::error::ShimError;
use crate::ds::function_object::new_function_object;
use crate::ds::object::{new_array_object, new_object, JsObjectType};
use crate::ds::object_property::{PropertyDescriptor, PropertyDescriptorSetter};
use crate::ds::operations::type_conversion::{to_boolean, to_property_key};
use crate::ds::value::JsValue;
use crate::shim::registry::{DescriptorMap, ObjectRegistry};

type NativeMethod = fn(&mut ObjectRegistry, JsValue, Vec<JsValue>) -> Result<JsValue, ShimError>;

const METHODS: [(&str, u32, NativeMethod); 15] = [
    ("defineProperty", 3, object_define_property),
    ("defineProperties", 2, object_define_properties),
    ("getOwnPropertyDescriptor", 2, object_get_own_property_descriptor),
    ("getOwnPropertyNames", 1, object_get_own_property_names),
    ("keys", 1, object_keys),
    ("create", 2, object_create),
    ("getPrototypeOf", 1, object_get_prototype_of),
    ("seal", 1, object_seal),
    ("isSealed", 1, object_is_sealed),
    ("freeze", 1, object_freeze),
    ("isFrozen", 1, object_is_frozen),
    ("preventExtensions", 1, object_prevent_extensions),
    ("isExtensible", 1, object_is_extensible),
    ("alias", 4, object_alias),
    ("clone", 2, object_clone),
];

/// Build the `Object` function with its static methods installed as
/// writable, configurable, non-enumerable properties.
///
/// When installing into the per-thread default registry, call this inside
/// [`with_default_registry`](crate::shim::with_default_registry). The natives
/// receive that registry as an argument and must not ask for it again.
pub fn install(registry: &mut ObjectRegistry) -> Result<JsObjectType, ShimError> {
    let object = new_function_object("Object", 1, object_constructor);
    for (name, arity, method) in METHODS.iter() {
        let f = new_function_object(name, *arity, *method);
        registry.set_descriptor(
            &object,
            name,
            PropertyDescriptorSetter::data(JsValue::Object(f))
                .with_writable(true)
                .with_enumerable(false)
                .with_configurable(true),
        )?;
    }
    log::debug!("installed Object with {} methods", METHODS.len());
    Ok(object)
}

fn arg(args: &[JsValue], idx: usize) -> JsValue {
    args.get(idx).cloned().unwrap_or(JsValue::Undefined)
}

fn string_array(names: Vec<String>) -> JsValue {
    JsValue::Object(new_array_object(
        names.into_iter().map(JsValue::String).collect(),
    ))
}

/// ToPropertyDescriptor: reads the six attribute names (own or inherited)
/// off a plain object. Booleans are taken by truthiness.
pub fn to_property_descriptor(
    registry: &mut ObjectRegistry,
    attributes: &JsValue,
) -> Result<PropertyDescriptorSetter, ShimError> {
    if !attributes.classify().is_object() {
        return Err(ShimError::InvalidArgument(format!(
            "property description must be an object: {}",
            attributes
        )));
    }
    let mut setter = PropertyDescriptorSetter::new();
    if registry.has_property(attributes, "enumerable")? {
        setter.enumerable = Some(to_boolean(&registry.get(attributes, "enumerable")?));
    }
    if registry.has_property(attributes, "configurable")? {
        setter.configurable = Some(to_boolean(&registry.get(attributes, "configurable")?));
    }
    if registry.has_property(attributes, "value")? {
        setter.value = Some(registry.get(attributes, "value")?);
    }
    if registry.has_property(attributes, "writable")? {
        setter.writable = Some(to_boolean(&registry.get(attributes, "writable")?));
    }
    if registry.has_property(attributes, "get")? {
        setter.get = Some(registry.get(attributes, "get")?);
    }
    if registry.has_property(attributes, "set")? {
        setter.set = Some(registry.get(attributes, "set")?);
    }
    Ok(setter)
}

/// FromPropertyDescriptor: `undefined` for an absent property, otherwise a
/// fresh plain object carrying the four attributes of its shape.
pub fn from_property_descriptor(
    registry: &mut ObjectRegistry,
    desc: Option<&PropertyDescriptor>,
) -> Result<JsValue, ShimError> {
    let desc = match desc {
        Some(d) => d,
        None => return Ok(JsValue::Undefined),
    };
    let record = JsValue::Object(new_object());
    let fields = match desc {
        PropertyDescriptor::Data {
            value, writable, ..
        } => vec![
            ("value", value.clone()),
            ("writable", JsValue::Boolean(*writable)),
        ],
        PropertyDescriptor::Accessor { get, set, .. } => vec![
            ("get", get.clone().map(JsValue::Object).unwrap_or(JsValue::Undefined)),
            ("set", set.clone().map(JsValue::Object).unwrap_or(JsValue::Undefined)),
        ],
    };
    for (name, value) in fields.into_iter().chain(vec![
        ("enumerable", JsValue::Boolean(desc.is_enumerable())),
        ("configurable", JsValue::Boolean(desc.is_configurable())),
    ]) {
        registry.define_property(&record, name, PropertyDescriptorSetter::open_data(value))?;
    }
    Ok(record)
}

/// Reads a `{name: attributes}` object into a descriptor map, in own
/// enumerable key order.
pub fn descriptor_map_from(
    registry: &mut ObjectRegistry,
    properties: &JsValue,
) -> Result<DescriptorMap, ShimError> {
    let mut map = vec![];
    for name in registry.keys(properties)? {
        let attributes = registry.get(properties, &name)?;
        let setter = to_property_descriptor(registry, &attributes)?;
        map.push((name, setter));
    }
    Ok(map)
}

/// Object(value): objects pass through, anything else yields a new object.
fn object_constructor(
    _registry: &mut ObjectRegistry,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, ShimError> {
    let value = arg(&args, 0);
    if value.classify().is_object() {
        Ok(value)
    } else {
        Ok(JsValue::Object(new_object()))
    }
}

fn object_define_property(
    registry: &mut ObjectRegistry,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, ShimError> {
    let o = arg(&args, 0);
    let name = to_property_key(&arg(&args, 1));
    let setter = to_property_descriptor(registry, &arg(&args, 2))?;
    registry.define_property(&o, &name, setter)
}

fn object_define_properties(
    registry: &mut ObjectRegistry,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, ShimError> {
    let o = arg(&args, 0);
    let map = descriptor_map_from(registry, &arg(&args, 1))?;
    registry.define_properties(&o, map)
}

fn object_get_own_property_descriptor(
    registry: &mut ObjectRegistry,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, ShimError> {
    let name = to_property_key(&arg(&args, 1));
    let desc = registry.get_descriptor(&arg(&args, 0), &name)?;
    from_property_descriptor(registry, desc.as_ref())
}

fn object_get_own_property_names(
    registry: &mut ObjectRegistry,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, ShimError> {
    Ok(string_array(registry.list_own_property_names(&arg(&args, 0))?))
}

fn object_keys(
    registry: &mut ObjectRegistry,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, ShimError> {
    Ok(string_array(registry.keys(&arg(&args, 0))?))
}

/// Object.create(proto, properties)
fn object_create(
    registry: &mut ObjectRegistry,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, ShimError> {
    let properties = arg(&args, 1);
    let map = if properties.is_undefined() {
        None
    } else {
        Some(descriptor_map_from(registry, &properties)?)
    };
    registry
        .create_with_prototype(&arg(&args, 0), map)
        .map(JsValue::Object)
}

fn object_get_prototype_of(
    registry: &mut ObjectRegistry,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, ShimError> {
    Ok(registry
        .prototype_of(&arg(&args, 0))?
        .map(JsValue::Object)
        .unwrap_or(JsValue::Null))
}

fn object_seal(
    registry: &mut ObjectRegistry,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, ShimError> {
    registry.seal(&arg(&args, 0))
}

fn object_is_sealed(
    registry: &mut ObjectRegistry,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, ShimError> {
    registry.is_sealed(&arg(&args, 0)).map(JsValue::Boolean)
}

fn object_freeze(
    registry: &mut ObjectRegistry,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, ShimError> {
    registry.freeze(&arg(&args, 0))
}

fn object_is_frozen(
    registry: &mut ObjectRegistry,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, ShimError> {
    registry.is_frozen(&arg(&args, 0)).map(JsValue::Boolean)
}

fn object_prevent_extensions(
    registry: &mut ObjectRegistry,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, ShimError> {
    registry.prevent_extensions(&arg(&args, 0))
}

fn object_is_extensible(
    registry: &mut ObjectRegistry,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, ShimError> {
    registry.is_extensible(&arg(&args, 0)).map(JsValue::Boolean)
}

/// Object.alias(object, property, alias, complete)
fn object_alias(
    registry: &mut ObjectRegistry,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, ShimError> {
    let property = to_property_key(&arg(&args, 1));
    let alias = to_property_key(&arg(&args, 2));
    registry.alias(&arg(&args, 0), &property, &alias, to_boolean(&arg(&args, 3)))
}

/// Object.clone(object, inherit). Descriptors are copied unless `inherit`
/// is given and falsy.
fn object_clone(
    registry: &mut ObjectRegistry,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, ShimError> {
    let inherit = arg(&args, 1);
    let inherit = inherit.is_undefined() || to_boolean(&inherit);
    registry
        .clone_object(&arg(&args, 0), inherit)
        .map(JsValue::Object)
}
