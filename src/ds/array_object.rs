use std::collections::BTreeMap;

use crate::ds::object::{JsObject, ObjectBase};
use crate::ds::operations::type_conversion::to_array_index;
use crate::ds::value::JsValue;

/// Array with sparse storage. Only present elements take memory, so any
/// length below 2^32 is representable. A missing index is a hole.
pub struct ArrayObject {
    elements: BTreeMap<u32, JsValue>,
    length: u32,
    base: ObjectBase,
}
impl ArrayObject {
    pub fn new(elements: Vec<JsValue>) -> Self {
        let length = elements.len() as u32;
        ArrayObject {
            elements: (0..length).zip(elements).collect(),
            length,
            base: ObjectBase::new(),
        }
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// Drops every element at or above `length`, or grows with holes.
    pub fn set_length(&mut self, length: u32) {
        self.elements.split_off(&length);
        self.length = length;
    }
}
impl JsObject for ArrayObject {
    fn get_object_base(&self) -> &ObjectBase {
        &self.base
    }

    fn get_object_base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }

    fn get_own_binding(&self, name: &str) -> Option<JsValue> {
        match to_array_index(name) {
            Some(idx) => self.elements.get(&idx).cloned(),
            None => self.base.binding(name).cloned(),
        }
    }

    fn set_own_binding(&mut self, name: &str, value: JsValue) {
        match to_array_index(name) {
            Some(idx) => {
                if idx >= self.length {
                    self.length = idx + 1;
                }
                self.elements.insert(idx, value);
            }
            None => self.base.set_binding(name, value),
        }
    }

    fn remove_own_binding(&mut self, name: &str) -> bool {
        match to_array_index(name) {
            Some(idx) => self.elements.remove(&idx).is_some(),
            None => self.base.remove_binding(name),
        }
    }

    fn own_binding_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.elements.keys().map(|i| i.to_string()).collect();
        names.extend(self.base.binding_names().map(|n| n.to_string()));
        names
    }

    fn has_own_binding(&self, name: &str) -> bool {
        match to_array_index(name) {
            Some(idx) => self.elements.contains_key(&idx),
            None => self.base.binding(name).is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_bindings_grow_with_holes() {
        let mut a = ArrayObject::new(vec![JsValue::int(1)]);
        a.set_own_binding("3", JsValue::int(4));
        assert_eq!(a.length(), 4);
        assert_eq!(a.own_binding_names(), vec!["0", "3"]);
        assert_eq!(a.get_own_binding("1"), None);
    }

    #[test]
    fn test_removing_an_index_leaves_a_hole() {
        let mut a = ArrayObject::new(vec![JsValue::int(1), JsValue::int(2)]);
        assert!(a.remove_own_binding("0"));
        assert!(!a.remove_own_binding("0"));
        assert_eq!(a.length(), 2);
        assert!(!a.has_own_binding("0"));
    }

    #[test]
    fn test_non_index_names_are_plain_bindings() {
        let mut a = ArrayObject::new(vec![]);
        a.set_own_binding("01", JsValue::str("x"));
        assert_eq!(a.length(), 0);
        assert_eq!(a.get_own_binding("01"), Some(JsValue::str("x")));
    }

    #[test]
    fn test_huge_indices_stay_sparse() {
        let mut a = ArrayObject::new(vec![]);
        a.set_own_binding("4294967294", JsValue::int(1));
        assert_eq!(a.length(), u32::MAX);
        assert_eq!(a.own_binding_names(), vec!["4294967294"]);

        a.set_length(4_000_000_000);
        assert_eq!(a.length(), 4_000_000_000);
        assert!(a.own_binding_names().is_empty());
    }

    #[test]
    fn test_shrinking_drops_trailing_elements() {
        let mut a = ArrayObject::new(vec![JsValue::int(1), JsValue::int(2), JsValue::int(3)]);
        a.set_own_binding("10", JsValue::int(11));
        assert_eq!(a.length(), 11);
        a.set_length(2);
        assert_eq!(a.own_binding_names(), vec!["0", "1"]);
        assert_eq!(a.length(), 2);
    }
}
