//! Prototype links for hosts that cannot set them natively.

use std::collections::HashMap;

use crate::ds::object::JsObjectType;
use crate::shim::identity::ObjectIdentity;

/// `None` records an explicit null prototype.
#[derive(Default)]
pub struct PrototypeLinkStore {
    links: HashMap<ObjectIdentity, Option<JsObjectType>>,
}

impl PrototypeLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link(&mut self, id: ObjectIdentity, prototype: Option<JsObjectType>) {
        self.links.insert(id, prototype);
    }

    /// Outer `None`: no link recorded for `id`.
    pub fn get(&self, id: ObjectIdentity) -> Option<Option<JsObjectType>> {
        self.links.get(&id).cloned()
    }

    pub(crate) fn forget(&mut self, id: ObjectIdentity) {
        self.links.remove(&id);
    }
}
