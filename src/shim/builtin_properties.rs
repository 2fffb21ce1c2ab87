//! Well-known properties of host built-ins.
//!
//! Introspection over a host built-in should report plausible attributes even
//! though nothing was ever stored for it. The names and attributes are fixed;
//! values are read from the object.
//!
//! Intrinsic entries always exist and synthesize their value from host state.
//! Binding entries only give default attributes to a host binding of that
//! name, such as a method the host has put on `Math`. A stored descriptor
//! still overrides them.

use std::collections::HashMap;

use crate::ds::object::{ObjectClass, ObjectType};
use crate::ds::object_property::PropertyDescriptor;
use crate::ds::operations::type_conversion::to_array_index;
use crate::ds::value::{JsNumberType, JsValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinKind {
    Number,
    Math,
    String,
    StringConstructor,
    RegExp,
    Array,
    Function,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backing {
    Intrinsic,
    Binding,
}

#[derive(Debug)]
pub struct BuiltinProperty {
    pub name: &'static str,
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
    pub backing: Backing,
}

const fn fixed(name: &'static str) -> BuiltinProperty {
    BuiltinProperty {
        name,
        writable: false,
        enumerable: false,
        configurable: false,
        backing: Backing::Intrinsic,
    }
}

const fn writable(name: &'static str) -> BuiltinProperty {
    BuiltinProperty {
        name,
        writable: true,
        enumerable: false,
        configurable: false,
        backing: Backing::Intrinsic,
    }
}

const fn fixed_binding(name: &'static str) -> BuiltinProperty {
    BuiltinProperty {
        name,
        writable: false,
        enumerable: false,
        configurable: false,
        backing: Backing::Binding,
    }
}

const fn method(name: &'static str) -> BuiltinProperty {
    BuiltinProperty {
        name,
        writable: true,
        enumerable: false,
        configurable: true,
        backing: Backing::Binding,
    }
}

const MATH_METHODS: [&str; 18] = [
    "abs", "acos", "asin", "atan", "atan2", "ceil", "cos", "exp", "floor", "log", "max", "min",
    "pow", "random", "round", "sin", "sqrt", "tan",
];

lazy_static! {
    static ref BUILTIN_PROPERTIES: HashMap<BuiltinKind, Vec<BuiltinProperty>> = {
        let mut m = HashMap::new();
        m.insert(
            BuiltinKind::Number,
            vec![
                fixed("MAX_VALUE"),
                fixed("MIN_VALUE"),
                fixed("NaN"),
                fixed("NEGATIVE_INFINITY"),
                fixed("POSITIVE_INFINITY"),
            ],
        );
        let mut math = vec![
            fixed("E"),
            fixed("LN10"),
            fixed("LN2"),
            fixed("LOG10E"),
            fixed("LOG2E"),
            fixed("PI"),
            fixed("SQRT1_2"),
            fixed("SQRT2"),
        ];
        math.extend(MATH_METHODS.iter().map(|name| method(*name)));
        m.insert(BuiltinKind::Math, math);
        m.insert(BuiltinKind::String, vec![fixed("length")]);
        m.insert(BuiltinKind::StringConstructor, vec![method("fromCharCode")]);
        m.insert(
            BuiltinKind::RegExp,
            vec![
                fixed("source"),
                fixed("global"),
                fixed("ignoreCase"),
                fixed("multiline"),
                writable("lastIndex"),
            ],
        );
        m.insert(BuiltinKind::Array, vec![writable("length")]);
        m.insert(
            BuiltinKind::Function,
            vec![
                fixed("length"),
                fixed("name"),
                fixed_binding("arguments"),
                fixed_binding("caller"),
                fixed_binding("prototype"),
            ],
        );
        m
    };
}

pub fn builtin_kind(o: &ObjectType) -> Option<BuiltinKind> {
    match o {
        ObjectType::Ordinary(o) => match o.class {
            ObjectClass::Object => None,
            ObjectClass::Math => Some(BuiltinKind::Math),
            ObjectClass::Number => Some(BuiltinKind::Number),
            ObjectClass::StringConstructor => Some(BuiltinKind::StringConstructor),
            ObjectClass::RegExp(_) => Some(BuiltinKind::RegExp),
        },
        ObjectType::Function(_) => Some(BuiltinKind::Function),
        ObjectType::Array(_) => Some(BuiltinKind::Array),
        ObjectType::String(_) => Some(BuiltinKind::String),
    }
}

pub fn builtin_properties(kind: BuiltinKind) -> &'static [BuiltinProperty] {
    BUILTIN_PROPERTIES
        .get(&kind)
        .map(|v| v.as_slice())
        .unwrap_or(&[])
}

fn string_index(o: &ObjectType, name: &str) -> Option<JsValue> {
    match o {
        ObjectType::String(s) => to_array_index(name)
            .and_then(|idx| s.code_unit_at(idx as usize))
            .map(JsValue::String),
        _ => None,
    }
}

/// Built-in attribute record for `name`, if `o` has one.
pub fn find_builtin(o: &ObjectType, name: &str) -> Option<&'static BuiltinProperty> {
    let kind = builtin_kind(o)?;
    builtin_properties(kind).iter().find(|p| p.name == name)
}

fn find_intrinsic(o: &ObjectType, name: &str) -> Option<&'static BuiltinProperty> {
    find_builtin(o, name).filter(|p| p.backing == Backing::Intrinsic)
}

/// Whether `name` is synthesized from host state rather than a binding.
pub fn is_builtin(o: &ObjectType, name: &str) -> bool {
    find_intrinsic(o, name).is_some() || string_index(o, name).is_some()
}

/// Every intrinsic name of `o`, string indices first.
pub fn builtin_names(o: &ObjectType) -> Vec<String> {
    let mut names = vec![];
    if let ObjectType::String(s) = o {
        names.extend((0..s.length()).map(|i| i.to_string()));
    }
    if let Some(kind) = builtin_kind(o) {
        names.extend(
            builtin_properties(kind)
                .iter()
                .filter(|p| p.backing == Backing::Intrinsic)
                .map(|p| p.name.to_string()),
        );
    }
    names
}

/// Descriptor of a host binding with no stored descriptor: the binding
/// entry's attributes when `o` has one for `name`, all-true otherwise.
pub fn binding_descriptor(o: &ObjectType, name: &str, value: JsValue) -> PropertyDescriptor {
    match find_builtin(o, name).filter(|p| p.backing == Backing::Binding) {
        Some(p) => PropertyDescriptor::Data {
            value,
            writable: p.writable,
            enumerable: p.enumerable,
            configurable: p.configurable,
        },
        None => PropertyDescriptor::plain(value),
    }
}

fn builtin_value(o: &ObjectType, name: &str) -> JsValue {
    match (o, name) {
        (ObjectType::Array(a), "length") => JsValue::int(a.length() as i64),
        (ObjectType::String(s), "length") => JsValue::int(s.length() as i64),
        (ObjectType::Function(f), "length") => JsValue::int(f.arity as i64),
        (ObjectType::Function(f), "name") => JsValue::String(f.name.to_string()),
        (ObjectType::Ordinary(ord), _) => match &ord.class {
            ObjectClass::RegExp(r) => match name {
                "source" => JsValue::String(r.source.to_string()),
                "global" => JsValue::Boolean(r.global),
                "ignoreCase" => JsValue::Boolean(r.ignore_case),
                "multiline" => JsValue::Boolean(r.multiline),
                "lastIndex" => JsValue::int(r.last_index),
                _ => JsValue::Undefined,
            },
            ObjectClass::Math => match name {
                "E" => JsValue::float(std::f64::consts::E),
                "LN10" => JsValue::float(std::f64::consts::LN_10),
                "LN2" => JsValue::float(std::f64::consts::LN_2),
                "LOG10E" => JsValue::float(std::f64::consts::LOG10_E),
                "LOG2E" => JsValue::float(std::f64::consts::LOG2_E),
                "PI" => JsValue::float(std::f64::consts::PI),
                "SQRT1_2" => JsValue::float(std::f64::consts::FRAC_1_SQRT_2),
                "SQRT2" => JsValue::float(std::f64::consts::SQRT_2),
                _ => JsValue::Undefined,
            },
            ObjectClass::Number => match name {
                "MAX_VALUE" => JsValue::float(f64::MAX),
                "MIN_VALUE" => JsValue::float(f64::from_bits(1)),
                "NaN" => JsValue::Number(JsNumberType::NaN),
                "NEGATIVE_INFINITY" => JsValue::Number(JsNumberType::NegativeInfinity),
                "POSITIVE_INFINITY" => JsValue::Number(JsNumberType::PositiveInfinity),
                _ => JsValue::Undefined,
            },
            ObjectClass::Object | ObjectClass::StringConstructor => JsValue::Undefined,
        },
        _ => JsValue::Undefined,
    }
}

/// Synthesized descriptor for a built-in property of `o`.
pub fn builtin_descriptor(o: &ObjectType, name: &str) -> Option<PropertyDescriptor> {
    if let Some(ch) = string_index(o, name) {
        return Some(PropertyDescriptor::Data {
            value: ch,
            writable: false,
            enumerable: true,
            configurable: false,
        });
    }
    let p = find_intrinsic(o, name)?;
    log::trace!("synthesized built-in {}.{}", o.class_name(), name);
    Some(PropertyDescriptor::Data {
        value: builtin_value(o, name),
        writable: p.writable,
        enumerable: p.enumerable,
        configurable: p.configurable,
    })
}

fn numeric(value: &JsValue) -> Option<f64> {
    match value {
        JsValue::Number(n) => Some(n.as_f64()),
        _ => None,
    }
}

/// Whether `value` may be stored into the writable built-in `name` of `o`.
pub fn accepts_builtin_value(o: &ObjectType, name: &str, value: &JsValue) -> bool {
    let n = match numeric(value) {
        Some(n) => n,
        None => return false,
    };
    match (o, name) {
        (ObjectType::Array(_), "length") => n >= 0.0 && n.fract() == 0.0 && n <= u32::MAX as f64,
        (ObjectType::Ordinary(ord), "lastIndex") => {
            matches!(ord.class, ObjectClass::RegExp(_)) && n.is_finite()
        }
        _ => false,
    }
}

/// New length for a write of `value` to an array's `length`, if valid.
pub fn array_length_value(o: &ObjectType, name: &str, value: &JsValue) -> Option<u32> {
    match o {
        ObjectType::Array(_) if name == "length" && accepts_builtin_value(o, name, value) => {
            numeric(value).map(|n| n as u32)
        }
        _ => None,
    }
}

/// Writes a writable built-in. Only `Array.length` and `RegExp.lastIndex` are
/// writable; anything else is ignored and reported as `false`. A shorter array
/// length drops elements without looking at their attributes.
pub fn set_builtin_value(o: &mut ObjectType, name: &str, value: &JsValue) -> bool {
    if !accepts_builtin_value(o, name, value) {
        return false;
    }
    let n = numeric(value).unwrap_or(0.0);
    match (o, name) {
        (ObjectType::Array(a), "length") => {
            a.set_length(n as u32);
            true
        }
        (ObjectType::Ordinary(ord), "lastIndex") => match &mut ord.class {
            ObjectClass::RegExp(r) => {
                r.last_index = n.trunc() as i64;
                true
            }
            _ => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ds::function_object::new_function_object;
    use crate::ds::object::{new_array_object, new_math_object, new_string_object};

    #[test]
    fn test_math_constants_are_fixed() {
        let math = new_math_object();
        let desc = builtin_descriptor(&math.borrow(), "PI").unwrap();
        assert_eq!(
            desc,
            PropertyDescriptor::Data {
                value: JsValue::float(std::f64::consts::PI),
                writable: false,
                enumerable: false,
                configurable: false,
            }
        );
        assert!(builtin_descriptor(&math.borrow(), "TAU").is_none());
    }

    #[test]
    fn test_array_length_tracks_elements() {
        let arr = new_array_object(vec![JsValue::int(1), JsValue::int(2)]);
        let desc = builtin_descriptor(&arr.borrow(), "length").unwrap();
        assert_eq!(desc.value(), Some(&JsValue::int(2)));
        assert!(desc.is_writable());
        assert!(set_builtin_value(&mut arr.borrow_mut(), "length", &JsValue::int(5)));
        let desc = builtin_descriptor(&arr.borrow(), "length").unwrap();
        assert_eq!(desc.value(), Some(&JsValue::int(5)));
        assert!(!set_builtin_value(&mut arr.borrow_mut(), "length", &JsValue::float(1.5)));
    }

    #[test]
    fn test_string_wrapper_names() {
        let s = new_string_object("ab");
        assert_eq!(builtin_names(&s.borrow()), vec!["0", "1", "length"]);
        let desc = builtin_descriptor(&s.borrow(), "1").unwrap();
        assert_eq!(desc.value(), Some(&JsValue::str("b")));
        assert!(desc.is_enumerable());
    }

    #[test]
    fn test_binding_entries_only_shape_existing_bindings() {
        let math = new_math_object();
        assert!(!is_builtin(&math.borrow(), "floor"));
        assert!(builtin_descriptor(&math.borrow(), "floor").is_none());
        assert!(!builtin_names(&math.borrow()).contains(&"floor".to_string()));

        let desc = binding_descriptor(&math.borrow(), "floor", JsValue::int(0));
        assert!(desc.is_writable());
        assert!(desc.is_configurable());
        assert!(!desc.is_enumerable());

        let plain = binding_descriptor(&math.borrow(), "mine", JsValue::int(0));
        assert!(plain.is_enumerable());
    }

    #[test]
    fn test_function_names_are_fixed() {
        let f = new_function_object("f", 2, |_, _, _| Ok(JsValue::Undefined));
        let name = builtin_descriptor(&f.borrow(), "name").unwrap();
        assert!(!name.is_configurable());
        assert!(!name.is_writable());
        let proto = binding_descriptor(&f.borrow(), "prototype", JsValue::Null);
        assert!(!proto.is_configurable());
        assert!(!proto.is_enumerable());
    }

    #[test]
    fn test_array_length_bounds() {
        let arr = new_array_object(vec![]);
        let max = JsValue::float(u32::MAX as f64);
        assert!(accepts_builtin_value(&arr.borrow(), "length", &max));
        assert!(!accepts_builtin_value(&arr.borrow(), "length", &JsValue::float(4294967296.0)));
        assert!(!accepts_builtin_value(&arr.borrow(), "length", &JsValue::int(-1)));
        assert!(!accepts_builtin_value(&arr.borrow(), "length", &JsValue::str("3")));
    }
}
