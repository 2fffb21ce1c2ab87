//! Stable numeric identities for object references.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::ds::object::{JsObjectType, ObjectType};

/// Opaque handle for an object reference. Never reused within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectIdentity(pub u32);

impl fmt::Display for ObjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}", self.0)
    }
}

/// Assigns identities lazily, keyed by reference equality.
///
/// Only weak references are held. While an entry exists its allocation cannot
/// be reused, so two live objects never share an identity.
#[derive(Default)]
pub struct IdentityRegistry {
    seen: BTreeMap<ObjectIdentity, Weak<RefCell<ObjectType>>>,
    by_address: HashMap<usize, ObjectIdentity>,
    next: u32,
}

fn address_of(o: &JsObjectType) -> usize {
    Rc::as_ptr(o) as *const () as usize
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity of `o`, assigning the next one on first sight.
    pub fn identity_of(&mut self, o: &JsObjectType) -> ObjectIdentity {
        let address = address_of(o);
        if let Some(id) = self.by_address.get(&address) {
            return *id;
        }
        let id = ObjectIdentity(self.next);
        self.next += 1;
        self.seen.insert(id, Rc::downgrade(o));
        self.by_address.insert(address, id);
        log::trace!("assigned {} to {}", id, (**o).borrow().class_name());
        id
    }

    /// Identity of `o` if one was ever assigned.
    pub fn lookup(&self, o: &JsObjectType) -> Option<ObjectIdentity> {
        self.by_address.get(&address_of(o)).copied()
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Forgets every identity whose object has been dropped and returns them,
    /// oldest first.
    pub fn sweep(&mut self) -> Vec<ObjectIdentity> {
        let dead: Vec<ObjectIdentity> = self
            .seen
            .iter()
            .filter(|(_, w)| w.strong_count() == 0)
            .map(|(id, _)| *id)
            .collect();
        for id in &dead {
            if let Some(w) = self.seen.remove(id) {
                self.by_address.remove(&(w.as_ptr() as *const () as usize));
            }
        }
        dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ds::object::new_object;

    #[test]
    fn test_identity_is_stable() {
        let mut registry = IdentityRegistry::new();
        let o = new_object();
        let first = registry.identity_of(&o);
        let alias = o.clone();
        assert_eq!(registry.identity_of(&alias), first);
        assert_eq!(registry.lookup(&o), Some(first));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_objects_get_distinct_identities() {
        let mut registry = IdentityRegistry::new();
        let a = new_object();
        let b = new_object();
        assert_eq!(registry.identity_of(&a), ObjectIdentity(0));
        assert_eq!(registry.identity_of(&b), ObjectIdentity(1));
    }

    #[test]
    fn test_lookup_does_not_assign() {
        let registry = IdentityRegistry::new();
        assert_eq!(registry.lookup(&new_object()), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_sweep_forgets_dropped_objects_without_reusing_numbers() {
        let mut registry = IdentityRegistry::new();
        let kept = new_object();
        let dropped = new_object();
        registry.identity_of(&kept);
        let dead_id = registry.identity_of(&dropped);
        drop(dropped);

        assert_eq!(registry.sweep(), vec![dead_id]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup(&kept), Some(ObjectIdentity(0)));

        let fresh = new_object();
        assert_eq!(registry.identity_of(&fresh), ObjectIdentity(2));
    }
}
