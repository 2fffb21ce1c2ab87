use crate::ds::error::ShimError;
use crate::ds::object::JsObjectType;
use crate::ds::operations::test_and_comparison::{same_object_opt, same_value};
use crate::ds::value::JsValue;

/// A complete property record. The two shapes are mutually exclusive by
/// construction.
pub enum PropertyDescriptor {
    Data {
        value: JsValue,
        writable: bool,
        enumerable: bool,
        configurable: bool,
    },
    Accessor {
        get: Option<JsObjectType>,
        set: Option<JsObjectType>,
        enumerable: bool,
        configurable: bool,
    },
}
impl PropertyDescriptor {
    /// Attributes of a property created by plain assignment.
    pub fn plain(value: JsValue) -> Self {
        PropertyDescriptor::Data {
            value,
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    pub fn is_enumerable(&self) -> bool {
        match self {
            PropertyDescriptor::Data { enumerable, .. } => *enumerable,
            PropertyDescriptor::Accessor { enumerable, .. } => *enumerable,
        }
    }

    pub fn is_configurable(&self) -> bool {
        match self {
            PropertyDescriptor::Data { configurable, .. } => *configurable,
            PropertyDescriptor::Accessor { configurable, .. } => *configurable,
        }
    }

    /// Always false for accessors.
    pub fn is_writable(&self) -> bool {
        match self {
            PropertyDescriptor::Data { writable, .. } => *writable,
            PropertyDescriptor::Accessor { .. } => false,
        }
    }

    pub fn is_data_descriptor(&self) -> bool {
        matches!(self, PropertyDescriptor::Data { .. })
    }

    pub fn is_accessor_descriptor(&self) -> bool {
        matches!(self, PropertyDescriptor::Accessor { .. })
    }

    pub fn value(&self) -> Option<&JsValue> {
        match self {
            PropertyDescriptor::Data { value, .. } => Some(value),
            PropertyDescriptor::Accessor { .. } => None,
        }
    }

    pub(crate) fn set_non_writable(&mut self) {
        if let PropertyDescriptor::Data { writable, .. } = self {
            *writable = false;
        }
    }
}
impl Clone for PropertyDescriptor {
    fn clone(&self) -> Self {
        match self {
            PropertyDescriptor::Data {
                value,
                writable,
                enumerable,
                configurable,
            } => PropertyDescriptor::Data {
                value: value.clone(),
                writable: *writable,
                enumerable: *enumerable,
                configurable: *configurable,
            },
            PropertyDescriptor::Accessor {
                get,
                set,
                enumerable,
                configurable,
            } => PropertyDescriptor::Accessor {
                get: get.clone(),
                set: set.clone(),
                enumerable: *enumerable,
                configurable: *configurable,
            },
        }
    }
}
impl std::fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyDescriptor::Data {
                value,
                writable,
                enumerable,
                configurable,
            } => f
                .debug_struct("Data")
                .field("value", value)
                .field("writable", writable)
                .field("enumerable", enumerable)
                .field("configurable", configurable)
                .finish(),
            PropertyDescriptor::Accessor {
                get,
                set,
                enumerable,
                configurable,
            } => f
                .debug_struct("Accessor")
                .field("get", &get.is_some())
                .field("set", &set.is_some())
                .field("enumerable", enumerable)
                .field("configurable", configurable)
                .finish(),
        }
    }
}
impl PartialEq for PropertyDescriptor {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                PropertyDescriptor::Data {
                    value,
                    writable,
                    enumerable,
                    configurable,
                },
                PropertyDescriptor::Data {
                    value: other_value,
                    writable: other_writable,
                    enumerable: other_enumerable,
                    configurable: other_configurable,
                },
            ) => {
                same_value(value, other_value)
                    && writable == other_writable
                    && enumerable == other_enumerable
                    && configurable == other_configurable
            }
            (
                PropertyDescriptor::Accessor {
                    get,
                    set,
                    enumerable,
                    configurable,
                },
                PropertyDescriptor::Accessor {
                    get: other_get,
                    set: other_set,
                    enumerable: other_enumerable,
                    configurable: other_configurable,
                },
            ) => {
                same_object_opt(get, other_get)
                    && same_object_opt(set, other_set)
                    && enumerable == other_enumerable
                    && configurable == other_configurable
            }
            _ => false,
        }
    }
}

/// A partial descriptor as supplied by a caller. Absent fields are `None`.
///
/// `get`/`set` hold the raw values given; `Undefined` is an explicit request
/// for "no getter" / "no setter".
#[derive(Clone, Default)]
pub struct PropertyDescriptorSetter {
    pub value: Option<JsValue>,
    pub writable: Option<bool>,
    pub get: Option<JsValue>,
    pub set: Option<JsValue>,
    pub enumerable: Option<bool>,
    pub configurable: Option<bool>,
}
impl PropertyDescriptorSetter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(value: JsValue) -> Self {
        PropertyDescriptorSetter {
            value: Some(value),
            ..Self::default()
        }
    }

    /// `{value, writable: true, enumerable: true, configurable: true}`
    pub fn open_data(value: JsValue) -> Self {
        Self::data(value)
            .with_writable(true)
            .with_enumerable(true)
            .with_configurable(true)
    }

    pub fn accessor(get: Option<JsObjectType>, set: Option<JsObjectType>) -> Self {
        PropertyDescriptorSetter {
            get: Some(get.map(JsValue::Object).unwrap_or(JsValue::Undefined)),
            set: Some(set.map(JsValue::Object).unwrap_or(JsValue::Undefined)),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: JsValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_writable(mut self, writable: bool) -> Self {
        self.writable = Some(writable);
        self
    }

    pub fn with_get(mut self, get: JsValue) -> Self {
        self.get = Some(get);
        self
    }

    pub fn with_set(mut self, set: JsValue) -> Self {
        self.set = Some(set);
        self
    }

    pub fn with_enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = Some(enumerable);
        self
    }

    pub fn with_configurable(mut self, configurable: bool) -> Self {
        self.configurable = Some(configurable);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.is_generic_descriptor() && self.enumerable.is_none() && self.configurable.is_none()
    }

    pub fn is_accessor_descriptor(&self) -> bool {
        self.get.is_some() || self.set.is_some()
    }

    pub fn is_data_descriptor(&self) -> bool {
        self.value.is_some() || self.writable.is_some()
    }

    pub fn is_generic_descriptor(&self) -> bool {
        !self.is_accessor_descriptor() && !self.is_data_descriptor()
    }

    /// Shape checks that do not depend on the target object.
    pub fn validate(&self, name: &str) -> Result<(), ShimError> {
        if self.is_accessor_descriptor() && self.is_data_descriptor() {
            return Err(ShimError::ConflictingDescriptor(format!(
                "property '{}' mixes accessor (get/set) and data (value/writable) attributes",
                name
            )));
        }
        for (label, f) in [("getter", &self.get), ("setter", &self.set)].iter() {
            if let Some(v) = f {
                if !v.is_undefined() && !v.is_callable() {
                    return Err(ShimError::InvalidArgument(format!(
                        "{} for property '{}' must be a function or undefined, got {}",
                        label, name, v
                    )));
                }
            }
        }
        Ok(())
    }

    /// Descriptor for a property that does not exist yet. Missing attributes
    /// default to `false`.
    pub fn to_property_descriptor(&self) -> PropertyDescriptor {
        if self.is_accessor_descriptor() {
            PropertyDescriptor::Accessor {
                get: function_of(&self.get),
                set: function_of(&self.set),
                enumerable: self.enumerable.unwrap_or(false),
                configurable: self.configurable.unwrap_or(false),
            }
        } else {
            PropertyDescriptor::Data {
                value: self.value.clone().unwrap_or(JsValue::Undefined),
                writable: self.writable.unwrap_or(false),
                enumerable: self.enumerable.unwrap_or(false),
                configurable: self.configurable.unwrap_or(false),
            }
        }
    }

    /// Descriptor resulting from applying this setter over `current`.
    /// Missing attributes keep their current values; switching between data
    /// and accessor keeps only `enumerable` and `configurable`.
    pub fn merge_into(&self, current: &PropertyDescriptor) -> PropertyDescriptor {
        let enumerable = self.enumerable.unwrap_or_else(|| current.is_enumerable());
        let configurable = self
            .configurable
            .unwrap_or_else(|| current.is_configurable());
        match current {
            PropertyDescriptor::Data {
                value, writable, ..
            } if !self.is_accessor_descriptor() => PropertyDescriptor::Data {
                value: self.value.clone().unwrap_or_else(|| value.clone()),
                writable: self.writable.unwrap_or(*writable),
                enumerable,
                configurable,
            },
            PropertyDescriptor::Accessor { get, set, .. } if !self.is_data_descriptor() => {
                PropertyDescriptor::Accessor {
                    get: match &self.get {
                        Some(_) => function_of(&self.get),
                        None => get.clone(),
                    },
                    set: match &self.set {
                        Some(_) => function_of(&self.set),
                        None => set.clone(),
                    },
                    enumerable,
                    configurable,
                }
            }
            PropertyDescriptor::Data { .. } => PropertyDescriptor::Accessor {
                get: function_of(&self.get),
                set: function_of(&self.set),
                enumerable,
                configurable,
            },
            PropertyDescriptor::Accessor { .. } => PropertyDescriptor::Data {
                value: self.value.clone().unwrap_or(JsValue::Undefined),
                writable: self.writable.unwrap_or(false),
                enumerable,
                configurable,
            },
        }
    }

    /// True when every attribute present here already holds on `current`.
    pub fn is_noop_against(&self, current: &PropertyDescriptor) -> bool {
        if self.enumerable.map_or(false, |e| e != current.is_enumerable())
            || self
                .configurable
                .map_or(false, |c| c != current.is_configurable())
        {
            return false;
        }
        match current {
            PropertyDescriptor::Data {
                value, writable, ..
            } => {
                !self.is_accessor_descriptor()
                    && self.writable.map_or(true, |w| w == *writable)
                    && self.value.as_ref().map_or(true, |v| same_value(v, value))
            }
            PropertyDescriptor::Accessor { get, set, .. } => {
                !self.is_data_descriptor()
                    && self
                        .get
                        .as_ref()
                        .map_or(true, |_| same_object_opt(&function_of(&self.get), get))
                    && self
                        .set
                        .as_ref()
                        .map_or(true, |_| same_object_opt(&function_of(&self.set), set))
            }
        }
    }

    /// Rules for changing a property that already exists. Only
    /// non-configurable properties are restricted.
    pub fn check_redefinition(
        &self,
        name: &str,
        current: &PropertyDescriptor,
    ) -> Result<(), ShimError> {
        if current.is_configurable() || self.is_noop_against(current) {
            return Ok(());
        }
        let reject = |why: &str| Err(ShimError::Redefinition(format!("{} ({})", name, why)));
        if self.configurable == Some(true) {
            return reject("non-configurable property cannot become configurable");
        }
        if self
            .enumerable
            .map_or(false, |e| e != current.is_enumerable())
        {
            return reject("enumerable attribute of a non-configurable property is fixed");
        }
        if self.is_generic_descriptor() {
            return Ok(());
        }
        match current {
            PropertyDescriptor::Data {
                value, writable, ..
            } => {
                if self.is_accessor_descriptor() {
                    return reject("cannot turn a non-configurable data property into an accessor");
                }
                if !*writable {
                    if self.writable == Some(true) {
                        return reject("non-writable property cannot become writable");
                    }
                    if let Some(v) = &self.value {
                        if !same_value(v, value) {
                            return reject("value of a non-writable property is fixed");
                        }
                    }
                }
                Ok(())
            }
            PropertyDescriptor::Accessor { get, set, .. } => {
                if self.is_data_descriptor() {
                    return reject("cannot turn a non-configurable accessor into a data property");
                }
                if self.get.is_some() && !same_object_opt(&function_of(&self.get), get) {
                    return reject("getter of a non-configurable property is fixed");
                }
                if self.set.is_some() && !same_object_opt(&function_of(&self.set), set) {
                    return reject("setter of a non-configurable property is fixed");
                }
                Ok(())
            }
        }
    }
}
impl From<&PropertyDescriptor> for PropertyDescriptorSetter {
    fn from(desc: &PropertyDescriptor) -> Self {
        match desc {
            PropertyDescriptor::Data {
                value,
                writable,
                enumerable,
                configurable,
            } => PropertyDescriptorSetter::data(value.clone())
                .with_writable(*writable)
                .with_enumerable(*enumerable)
                .with_configurable(*configurable),
            PropertyDescriptor::Accessor {
                get,
                set,
                enumerable,
                configurable,
            } => PropertyDescriptorSetter::accessor(get.clone(), set.clone())
                .with_enumerable(*enumerable)
                .with_configurable(*configurable),
        }
    }
}

fn function_of(v: &Option<JsValue>) -> Option<JsObjectType> {
    match v {
        Some(JsValue::Object(o)) => Some(o.clone()),
        _ => None,
    }
}
