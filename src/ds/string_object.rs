use crate::ds::object::{JsObject, ObjectBase};

/// String wrapper object. Index and `length` properties are reported by the
/// built-in property table, not stored as bindings.
pub struct StringObject {
    value: String,
    base: ObjectBase,
}
impl StringObject {
    pub fn new(value: &str) -> Self {
        StringObject {
            value: value.to_string(),
            base: ObjectBase::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Length in UTF-16 code units.
    pub fn length(&self) -> usize {
        self.value.encode_utf16().count()
    }

    pub fn code_unit_at(&self, idx: usize) -> Option<String> {
        self.value
            .encode_utf16()
            .nth(idx)
            .map(|u| String::from_utf16_lossy(&[u]))
    }
}
impl JsObject for StringObject {
    fn get_object_base(&self) -> &ObjectBase {
        &self.base
    }

    fn get_object_base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }
}
