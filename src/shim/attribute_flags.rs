//! Sealed / frozen / non-extensible markers.

use std::collections::HashSet;

use crate::shim::identity::ObjectIdentity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeFlag {
    Sealed,
    Frozen,
    NonExtensible,
}

/// Three independent identity sets. There is no way to clear a flag; an
/// identity only leaves a set when it is swept after its object died.
#[derive(Default)]
pub struct AttributeFlags {
    sealed: HashSet<ObjectIdentity>,
    frozen: HashSet<ObjectIdentity>,
    non_extensible: HashSet<ObjectIdentity>,
}

impl AttributeFlags {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_for(&self, flag: AttributeFlag) -> &HashSet<ObjectIdentity> {
        match flag {
            AttributeFlag::Sealed => &self.sealed,
            AttributeFlag::Frozen => &self.frozen,
            AttributeFlag::NonExtensible => &self.non_extensible,
        }
    }

    /// Returns `true` if the flag was not already set.
    pub fn insert(&mut self, flag: AttributeFlag, id: ObjectIdentity) -> bool {
        match flag {
            AttributeFlag::Sealed => self.sealed.insert(id),
            AttributeFlag::Frozen => self.frozen.insert(id),
            AttributeFlag::NonExtensible => self.non_extensible.insert(id),
        }
    }

    pub fn contains(&self, flag: AttributeFlag, id: ObjectIdentity) -> bool {
        self.set_for(flag).contains(&id)
    }

    pub(crate) fn forget(&mut self, id: ObjectIdentity) {
        self.sealed.remove(&id);
        self.frozen.remove(&id);
        self.non_extensible.remove(&id);
    }
}
