//! Side table of property descriptors keyed by object identity.

use std::collections::HashMap;

use crate::ds::object_property::PropertyDescriptor;
use crate::shim::identity::ObjectIdentity;

/// Descriptors recorded for one object, in definition order.
#[derive(Default)]
struct PropertyTable {
    entries: Vec<(String, PropertyDescriptor)>,
}

impl PropertyTable {
    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }
}

/// Tables are created on the first definition for an identity and are only
/// dropped when the identity itself is swept.
#[derive(Default)]
pub struct DescriptorStore {
    tables: HashMap<ObjectIdentity, PropertyTable>,
}

impl DescriptorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ObjectIdentity, name: &str) -> Option<&PropertyDescriptor> {
        let table = self.tables.get(&id)?;
        table.position(name).map(|i| &table.entries[i].1)
    }

    pub fn set(&mut self, id: ObjectIdentity, name: &str, descriptor: PropertyDescriptor) {
        let table = self.tables.entry(id).or_default();
        match table.position(name) {
            Some(i) => table.entries[i].1 = descriptor,
            None => table.entries.push((name.to_string(), descriptor)),
        }
    }

    pub fn remove(&mut self, id: ObjectIdentity, name: &str) -> Option<PropertyDescriptor> {
        let table = self.tables.get_mut(&id)?;
        table.position(name).map(|i| table.entries.remove(i).1)
    }

    pub fn names(&self, id: ObjectIdentity) -> Vec<String> {
        self.tables
            .get(&id)
            .map(|t| t.entries.iter().map(|(n, _)| n.clone()).collect())
            .unwrap_or_default()
    }

    pub fn has_table(&self, id: ObjectIdentity) -> bool {
        self.tables.contains_key(&id)
    }

    pub(crate) fn forget(&mut self, id: ObjectIdentity) {
        self.tables.remove(&id);
    }
}
