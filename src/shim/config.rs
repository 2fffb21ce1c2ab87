//! Host capabilities.
//!
//! The shim adapts to what the host runtime can do natively. A modern host
//! can install getters/setters and link prototypes itself; a legacy host can
//! do neither, so accessors are refused and prototype links are kept in a
//! side table instead.

/// Configuration for an [`ObjectRegistry`](super::registry::ObjectRegistry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// The host can install getter/setter pairs on its objects.
    pub native_accessors: bool,
    /// The host can assign an object's prototype link.
    pub native_prototype_links: bool,
}

impl HostConfig {
    /// Host with every native hook available.
    pub fn modern() -> Self {
        HostConfig {
            native_accessors: true,
            native_prototype_links: true,
        }
    }

    /// Host without accessor or prototype hooks.
    pub fn legacy() -> Self {
        HostConfig {
            native_accessors: false,
            native_prototype_links: false,
        }
    }

    pub fn with_native_accessors(mut self, enabled: bool) -> Self {
        self.native_accessors = enabled;
        self
    }

    pub fn with_native_prototype_links(mut self, enabled: bool) -> Self {
        self.native_prototype_links = enabled;
        self
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::modern()
    }
}
