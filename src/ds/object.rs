//! Host objects.
//!
//! These model what the host runtime itself knows about an object: its own
//! bindings, any accessors installed through native hooks, and the native
//! prototype link. Property attributes are not kept here; they live in the
//! side tables of [`crate::shim::registry::ObjectRegistry`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::ds::array_object::ArrayObject;
use crate::ds::function_object::FunctionObject;
use crate::ds::string_object::StringObject;
use crate::ds::value::JsValue;

pub type JsObjectType = Rc<RefCell<ObjectType>>;

pub enum ObjectType {
    Ordinary(OrdinaryObject),
    Function(FunctionObject),
    Array(ArrayObject),
    String(StringObject),
}
impl ObjectType {
    pub fn is_callable(&self) -> bool {
        matches!(self, ObjectType::Function(_))
    }

    pub fn as_js_object(&self) -> &dyn JsObject {
        match self {
            ObjectType::Ordinary(o) => o,
            ObjectType::Function(o) => o,
            ObjectType::Array(o) => o,
            ObjectType::String(o) => o,
        }
    }

    pub fn as_js_object_mut(&mut self) -> &mut dyn JsObject {
        match self {
            ObjectType::Ordinary(o) => o,
            ObjectType::Function(o) => o,
            ObjectType::Array(o) => o,
            ObjectType::String(o) => o,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            ObjectType::Ordinary(o) => match o.class {
                ObjectClass::Object => "Object",
                ObjectClass::Math => "Math",
                ObjectClass::Number => "Number",
                ObjectClass::StringConstructor => "String",
                ObjectClass::RegExp(_) => "RegExp",
            },
            ObjectType::Function(_) => "Function",
            ObjectType::Array(_) => "Array",
            ObjectType::String(_) => "String",
        }
    }
}
impl fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[object {}]", self.class_name())
    }
}

/// Accessor pair installed on the host through its native getter/setter hooks.
#[derive(Clone)]
pub struct NativeAccessor {
    pub get: Option<JsObjectType>,
    pub set: Option<JsObjectType>,
}

pub struct ObjectBase {
    bindings: Vec<(String, JsValue)>,
    accessors: Vec<(String, NativeAccessor)>,
    prototype: Option<JsObjectType>,
}
impl ObjectBase {
    pub fn new() -> Self {
        ObjectBase {
            bindings: Vec::new(),
            accessors: Vec::new(),
            prototype: None,
        }
    }

    pub fn binding(&self, name: &str) -> Option<&JsValue> {
        self.bindings
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn set_binding(&mut self, name: &str, value: JsValue) {
        match self.bindings.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.bindings.push((name.to_string(), value)),
        }
    }

    pub fn remove_binding(&mut self, name: &str) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|(n, _)| n != name);
        before != self.bindings.len()
    }

    pub fn binding_names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(n, _)| n.as_str())
    }

    /// Replaces an existing pair in place, so names keep their first position.
    pub fn install_accessor(&mut self, name: &str, accessor: NativeAccessor) {
        match self.accessors.iter_mut().find(|(n, _)| n == name) {
            Some((_, a)) => *a = accessor,
            None => self.accessors.push((name.to_string(), accessor)),
        }
    }

    pub fn remove_accessor(&mut self, name: &str) -> bool {
        let before = self.accessors.len();
        self.accessors.retain(|(n, _)| n != name);
        before != self.accessors.len()
    }

    pub fn accessor_names(&self) -> impl Iterator<Item = &str> {
        self.accessors.iter().map(|(n, _)| n.as_str())
    }

    pub fn prototype(&self) -> Option<&JsObjectType> {
        self.prototype.as_ref()
    }

    pub fn set_prototype(&mut self, prototype: Option<JsObjectType>) {
        self.prototype = prototype;
    }
}
impl Default for ObjectBase {
    fn default() -> Self {
        Self::new()
    }
}

/// What the host can do with an object without consulting any side table.
pub trait JsObject {
    fn get_object_base(&self) -> &ObjectBase;

    fn get_object_base_mut(&mut self) -> &mut ObjectBase;

    fn get_own_binding(&self, name: &str) -> Option<JsValue> {
        self.get_object_base().binding(name).cloned()
    }

    fn set_own_binding(&mut self, name: &str, value: JsValue) {
        self.get_object_base_mut().set_binding(name, value)
    }

    fn remove_own_binding(&mut self, name: &str) -> bool {
        self.get_object_base_mut().remove_binding(name)
    }

    fn own_binding_names(&self) -> Vec<String> {
        self.get_object_base()
            .binding_names()
            .map(|n| n.to_string())
            .collect()
    }

    fn has_own_binding(&self, name: &str) -> bool {
        self.get_object_base().binding(name).is_some()
    }
}

pub struct RegExpData {
    pub source: String,
    pub global: bool,
    pub ignore_case: bool,
    pub multiline: bool,
    pub last_index: i64,
}

/// Tag for ordinary objects the host treats specially.
pub enum ObjectClass {
    Object,
    Math,
    Number,
    /// The `String` constructor, which carries `fromCharCode`.
    StringConstructor,
    RegExp(RegExpData),
}

pub struct OrdinaryObject {
    pub class: ObjectClass,
    base: ObjectBase,
}
impl OrdinaryObject {
    pub fn new(class: ObjectClass) -> Self {
        OrdinaryObject {
            class,
            base: ObjectBase::new(),
        }
    }
}
impl JsObject for OrdinaryObject {
    fn get_object_base(&self) -> &ObjectBase {
        &self.base
    }

    fn get_object_base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }
}

fn wrap(o: ObjectType) -> JsObjectType {
    Rc::new(RefCell::new(o))
}

/// A fresh empty object with no prototype link.
pub fn new_object() -> JsObjectType {
    wrap(ObjectType::Ordinary(OrdinaryObject::new(ObjectClass::Object)))
}

pub fn new_math_object() -> JsObjectType {
    wrap(ObjectType::Ordinary(OrdinaryObject::new(ObjectClass::Math)))
}

pub fn new_number_object() -> JsObjectType {
    wrap(ObjectType::Ordinary(OrdinaryObject::new(ObjectClass::Number)))
}

pub fn new_string_constructor_object() -> JsObjectType {
    wrap(ObjectType::Ordinary(OrdinaryObject::new(
        ObjectClass::StringConstructor,
    )))
}

/// A regular expression object. Only the flags `g`, `i` and `m` are recognised.
pub fn new_regexp_object(source: &str, flags: &str) -> JsObjectType {
    wrap(ObjectType::Ordinary(OrdinaryObject::new(ObjectClass::RegExp(
        RegExpData {
            source: source.to_string(),
            global: flags.contains('g'),
            ignore_case: flags.contains('i'),
            multiline: flags.contains('m'),
            last_index: 0,
        },
    ))))
}

pub fn new_array_object(elements: Vec<JsValue>) -> JsObjectType {
    wrap(ObjectType::Array(ArrayObject::new(elements)))
}

pub fn new_string_object(value: &str) -> JsObjectType {
    wrap(ObjectType::String(StringObject::new(value)))
}
