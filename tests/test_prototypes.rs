//! Tests for createWithPrototype and prototype-aware reads and writes.

extern crate propshim;

use propshim::ds::error::ShimError;
use propshim::ds::function_object::new_function_object;
use propshim::ds::object::new_object;
use propshim::ds::object_property::PropertyDescriptorSetter;
use propshim::ds::operations::test_and_comparison::same_object;
use propshim::ds::value::JsValue;
use propshim::shim::{HostConfig, ObjectRegistry};

fn registries() -> Vec<ObjectRegistry> {
    vec![
        ObjectRegistry::new(HostConfig::modern()),
        ObjectRegistry::new(HostConfig::legacy()),
    ]
}

fn prototype(registry: &mut ObjectRegistry) -> JsValue {
    let proto = JsValue::Object(new_object());
    registry.put(&proto, "greeting", JsValue::str("hello")).unwrap();
    registry
        .define_property(&proto, "version", PropertyDescriptorSetter::data(JsValue::int(1)))
        .unwrap();
    proto
}

// ============================================================================
// createWithPrototype
// ============================================================================

mod create_tests {
    use super::*;

    #[test]
    fn test_prototype_is_reported() {
        for mut registry in registries() {
            let proto = prototype(&mut registry);
            let child = registry.create_with_prototype(&proto, None).unwrap();
            let linked = registry
                .prototype_of(&JsValue::Object(child))
                .unwrap()
                .unwrap();
            assert!(same_object(&linked, proto.as_object().unwrap()));
        }
    }

    #[test]
    fn test_null_prototype() {
        for mut registry in registries() {
            let child = registry.create_with_prototype(&JsValue::Null, None).unwrap();
            let child = JsValue::Object(child);
            assert!(registry.prototype_of(&child).unwrap().is_none());
            assert_eq!(registry.get(&child, "anything").unwrap(), JsValue::Undefined);
        }
    }

    #[test]
    fn test_invalid_prototype() {
        let mut registry = ObjectRegistry::default();
        for proto in vec![JsValue::int(3), JsValue::Undefined, JsValue::str("p")] {
            let err = registry.create_with_prototype(&proto, None).unwrap_err();
            assert!(matches!(err, ShimError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_function_can_be_a_prototype() {
        let mut registry = ObjectRegistry::default();
        let f = JsValue::Object(new_function_object("F", 0, |_, _, _| Ok(JsValue::Undefined)));
        let child = JsValue::Object(registry.create_with_prototype(&f, None).unwrap());
        assert_eq!(registry.get(&child, "name").unwrap(), JsValue::str("F"));
    }

    #[test]
    fn test_initial_descriptors_are_applied() {
        let mut registry = ObjectRegistry::default();
        let child = registry
            .create_with_prototype(
                &JsValue::Null,
                Some(vec![
                    (
                        "x".to_string(),
                        PropertyDescriptorSetter::data(JsValue::int(1)).with_enumerable(true),
                    ),
                    ("y".to_string(), PropertyDescriptorSetter::data(JsValue::int(2))),
                ]),
            )
            .unwrap();
        let child = JsValue::Object(child);
        assert_eq!(registry.keys(&child).unwrap(), vec!["x"]);
        assert_eq!(registry.list_own_property_names(&child).unwrap(), vec!["x", "y"]);
        assert!(!registry.delete_property(&child, "y").unwrap());
    }

    #[test]
    fn test_bad_initial_descriptor_fails_creation() {
        let mut registry = ObjectRegistry::default();
        let err = registry
            .create_with_prototype(
                &JsValue::Null,
                Some(vec![(
                    "x".to_string(),
                    PropertyDescriptorSetter::data(JsValue::int(1)).with_get(JsValue::Undefined),
                )]),
            )
            .unwrap_err();
        assert!(matches!(err, ShimError::ConflictingDescriptor(_)));
    }

    #[test]
    fn test_legacy_links_live_in_side_table() {
        let mut registry = ObjectRegistry::new(HostConfig::legacy());
        let proto = prototype(&mut registry);
        let child = registry.create_with_prototype(&proto, None).unwrap();
        assert!((*child)
            .borrow()
            .as_js_object()
            .get_object_base()
            .prototype()
            .is_none());
        assert!(registry.prototype_of(&JsValue::Object(child)).unwrap().is_some());
    }

    #[test]
    fn test_plain_object_has_no_prototype() {
        let registry = ObjectRegistry::default();
        let o = JsValue::Object(new_object());
        assert!(registry.prototype_of(&o).unwrap().is_none());
        assert!(matches!(
            registry.prototype_of(&JsValue::int(1)),
            Err(ShimError::InvalidArgument(_))
        ));
    }
}

// ============================================================================
// clone
// ============================================================================

mod clone_tests {
    use super::*;

    #[test]
    fn test_clone_keeps_prototype_and_descriptors() {
        for mut registry in registries() {
            let proto = prototype(&mut registry);
            let original = JsValue::Object(registry.create_with_prototype(&proto, None).unwrap());
            registry.put(&original, "open", JsValue::int(1)).unwrap();
            registry
                .define_property(&original, "locked", PropertyDescriptorSetter::data(JsValue::int(2)))
                .unwrap();

            let copy = JsValue::Object(registry.clone_object(&original, true).unwrap());
            let linked = registry.prototype_of(&copy).unwrap().unwrap();
            assert!(same_object(&linked, proto.as_object().unwrap()));
            assert_eq!(
                registry.get_own_property_descriptors(&copy).unwrap(),
                registry.get_own_property_descriptors(&original).unwrap()
            );
            assert!(!registry.delete_property(&copy, "locked").unwrap());

            registry.put(&copy, "open", JsValue::int(9)).unwrap();
            assert_eq!(registry.get(&original, "open").unwrap(), JsValue::int(1));
        }
    }

    #[test]
    fn test_clone_without_inherit_is_empty() {
        let mut registry = ObjectRegistry::default();
        let proto = prototype(&mut registry);
        let original = JsValue::Object(registry.create_with_prototype(&proto, None).unwrap());
        registry.put(&original, "open", JsValue::int(1)).unwrap();

        let copy = JsValue::Object(registry.clone_object(&original, false).unwrap());
        assert!(registry.list_own_property_names(&copy).unwrap().is_empty());
        assert_eq!(registry.get(&copy, "greeting").unwrap(), JsValue::str("hello"));
    }

    #[test]
    fn test_clone_copies_accessors() {
        let mut registry = ObjectRegistry::default();
        let original = JsValue::Object(new_object());
        let getter = new_function_object("get", 0, |registry, this, _args| {
            registry.get(&this, "own")
        });
        registry
            .define_property(
                &original,
                "view",
                PropertyDescriptorSetter::accessor(Some(getter), None).with_enumerable(true),
            )
            .unwrap();
        let copy = JsValue::Object(registry.clone_object(&original, true).unwrap());
        assert!(registry.prototype_of(&copy).unwrap().is_none());
        registry.put(&copy, "own", JsValue::int(3)).unwrap();
        assert_eq!(registry.get(&copy, "view").unwrap(), JsValue::int(3));
        assert_eq!(registry.keys(&copy).unwrap(), vec!["own", "view"]);
    }
}

// ============================================================================
// Inherited reads and writes
// ============================================================================

mod inheritance_tests {
    use super::*;

    #[test]
    fn test_reads_follow_the_chain() {
        for mut registry in registries() {
            let proto = prototype(&mut registry);
            let middle = JsValue::Object(registry.create_with_prototype(&proto, None).unwrap());
            let child = JsValue::Object(registry.create_with_prototype(&middle, None).unwrap());

            assert_eq!(registry.get(&child, "greeting").unwrap(), JsValue::str("hello"));
            assert!(registry.has_property(&child, "greeting").unwrap());
            assert!(!registry.has_own_property(&child, "greeting").unwrap());
            assert!(registry.list_own_property_names(&child).unwrap().is_empty());
        }
    }

    #[test]
    fn test_write_shadows_inherited_writable() {
        for mut registry in registries() {
            let proto = prototype(&mut registry);
            let child = JsValue::Object(registry.create_with_prototype(&proto, None).unwrap());

            assert!(registry.put(&child, "greeting", JsValue::str("hi")).unwrap());
            assert_eq!(registry.get(&child, "greeting").unwrap(), JsValue::str("hi"));
            assert_eq!(registry.get(&proto, "greeting").unwrap(), JsValue::str("hello"));
        }
    }

    #[test]
    fn test_inherited_read_only_blocks_write() {
        for mut registry in registries() {
            let proto = prototype(&mut registry);
            let child = JsValue::Object(registry.create_with_prototype(&proto, None).unwrap());

            assert!(!registry.put(&child, "version", JsValue::int(2)).unwrap());
            assert!(!registry.has_own_property(&child, "version").unwrap());
            // defineProperty is not affected by the inherited attribute
            registry
                .define_property(&child, "version", PropertyDescriptorSetter::data(JsValue::int(2)))
                .unwrap();
            assert_eq!(registry.get(&child, "version").unwrap(), JsValue::int(2));
        }
    }

    #[test]
    fn test_inherited_getter_sees_the_receiver() {
        let mut registry = ObjectRegistry::default();
        let proto = JsValue::Object(new_object());
        let getter = new_function_object("get", 0, |registry, this, _args| {
            registry.get(&this, "own")
        });
        registry
            .define_property(&proto, "view", PropertyDescriptorSetter::accessor(Some(getter), None))
            .unwrap();
        let child = JsValue::Object(registry.create_with_prototype(&proto, None).unwrap());
        registry.put(&child, "own", JsValue::int(42)).unwrap();
        assert_eq!(registry.get(&child, "view").unwrap(), JsValue::int(42));
        assert_eq!(registry.get(&proto, "view").unwrap(), JsValue::Undefined);
    }
}
