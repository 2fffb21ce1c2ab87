use std::cell::RefCell;
use std::rc::Rc;

use crate::ds::error::ShimError;
use crate::ds::object::{JsObject, JsObjectType, ObjectBase, ObjectType};
use crate::ds::value::JsValue;
use crate::shim::registry::ObjectRegistry;

/// Function signature for native functions.
/// Native functions receive the registry, `this` value, and arguments.
pub type NativeFn = Rc<dyn Fn(&mut ObjectRegistry, JsValue, Vec<JsValue>) -> Result<JsValue, ShimError>>;

pub struct FunctionObject {
    pub name: String,
    pub arity: u32,
    func: NativeFn,
    base: ObjectBase,
}
impl FunctionObject {
    pub fn new<F>(name: impl Into<String>, arity: u32, func: F) -> Self
    where
        F: Fn(&mut ObjectRegistry, JsValue, Vec<JsValue>) -> Result<JsValue, ShimError> + 'static,
    {
        FunctionObject {
            name: name.into(),
            arity,
            func: Rc::new(func),
            base: ObjectBase::new(),
        }
    }
}
impl JsObject for FunctionObject {
    fn get_object_base(&self) -> &ObjectBase {
        &self.base
    }

    fn get_object_base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }
}

pub fn new_function_object<F>(name: &str, arity: u32, func: F) -> JsObjectType
where
    F: Fn(&mut ObjectRegistry, JsValue, Vec<JsValue>) -> Result<JsValue, ShimError> + 'static,
{
    Rc::new(RefCell::new(ObjectType::Function(FunctionObject::new(
        name, arity, func,
    ))))
}

/// Invoke `f`. The borrow on `f` is released before the call so the callee may
/// freely touch the function object itself.
pub fn call_function(
    registry: &mut ObjectRegistry,
    f: &JsObjectType,
    this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, ShimError> {
    let func = match &*(**f).borrow() {
        ObjectType::Function(fo) => fo.func.clone(),
        o => {
            return Err(ShimError::InvalidArgument(format!(
                "{} is not a function",
                o.class_name()
            )))
        }
    };
    func(registry, this, args)
}
