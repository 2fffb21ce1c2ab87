use std::rc::Rc;

use crate::ds::object::JsObjectType;
use crate::ds::value::{JsNumberType, JsValue};

fn is_same_number(a: &JsNumberType, b: &JsNumberType) -> bool {
    match (a, b) {
        (JsNumberType::NaN, JsNumberType::NaN) => true,
        (JsNumberType::Integer(x), JsNumberType::Integer(y)) => x == y,
        _ => {
            let (x, y) = (a.as_f64(), b.as_f64());
            // +0 and -0 are different values here
            x == y && x.is_sign_negative() == y.is_sign_negative()
        }
    }
}

/// SameValue: like `===` except NaN equals NaN and +0 differs from -0.
pub fn same_value(a: &JsValue, b: &JsValue) -> bool {
    match (a, b) {
        (JsValue::Number(x), JsValue::Number(y)) => is_same_number(x, y),
        (JsValue::Object(x), JsValue::Object(y)) => same_object(x, y),
        _ => a == b,
    }
}

pub fn same_object(a: &JsObjectType, b: &JsObjectType) -> bool {
    Rc::ptr_eq(a, b)
}

pub fn same_object_opt(a: &Option<JsObjectType>, b: &Option<JsObjectType>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => same_object(x, y),
        _ => false,
    }
}
