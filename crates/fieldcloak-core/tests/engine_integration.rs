//! End-to-end integration tests for the field-transformation engine
//!
//! These tests exercise the full traversal over realistic entity
//! graphs: accessor-backed and public fields, embedded sub-objects,
//! missing accessor pairs, faulting accessors, proxied instances, and
//! transform failures.


use fieldcloak_core::{
    process, Error, FieldDescriptor, FieldProcessor, FieldTag, MetadataQuery, PersistHooks,
};
use test_support::{
    user_registry, LazyProxy, PoisonTransformer, SuffixTransformer, UnwrapProxy, User,
};

#[test]
fn test_accessor_backed_field_is_transformed() {
    let registry = user_registry();
    let transformer = SuffixTransformer::new();
    let mut user = User {
        ssn: Some("123-45-6789".to_string()),
        ..User::default()
    };

    process(&mut user, &registry, &transformer).expect("processing succeeds");

    assert_eq!(user.ssn.as_deref(), Some("123-45-6789::ENC"));
}

#[test]
fn test_second_pass_is_a_no_op_for_accessor_backed_fields() {
    let registry = user_registry();
    let transformer = SuffixTransformer::new();
    let mut user = User {
        ssn: Some("123-45-6789".to_string()),
        ..User::default()
    };

    process(&mut user, &registry, &transformer).expect("first pass");
    process(&mut user, &registry, &transformer).expect("second pass");

    // The marker gate blocks re-transformation.
    assert_eq!(user.ssn.as_deref(), Some("123-45-6789::ENC"));
}

#[test]
fn test_nested_sub_object_is_transformed_exactly_once() {
    let registry = user_registry();
    let transformer = SuffixTransformer::new();
    let mut user = User {
        profile: Some(test_support::Profile {
            bio: Some("likes gardening".to_string()),
        }),
        ..User::default()
    };

    process(&mut user, &registry, &transformer).expect("processing succeeds");

    assert_eq!(
        user.profile.as_ref().unwrap().bio.as_deref(),
        Some("likes gardening::ENC")
    );
}

#[test]
fn test_absent_nested_sub_object_is_skipped() {
    let registry = user_registry();
    let transformer = SuffixTransformer::new();
    let mut user = User::default();

    process(&mut user, &registry, &transformer).expect("processing succeeds");

    assert!(user.profile.is_none());
}

#[test]
fn test_field_without_accessor_pair_is_left_unmodified() {
    let registry = user_registry();
    let transformer = SuffixTransformer::new();
    let mut user = User {
        nickname: Some("shadow".to_string()),
        ..User::default()
    };

    process(&mut user, &registry, &transformer).expect("processing succeeds");

    assert_eq!(user.nickname.as_deref(), Some("shadow"));
}

#[test]
fn test_absent_value_is_left_unmodified() {
    let registry = user_registry();
    let transformer = SuffixTransformer::new();
    let mut user = User::default();

    process(&mut user, &registry, &transformer).expect("processing succeeds");

    assert!(user.ssn.is_none());
}

#[test]
fn test_empty_value_is_left_unmodified() {
    let registry = user_registry();
    let transformer = SuffixTransformer::new();
    let mut user = User {
        ssn: Some(String::new()),
        ..User::default()
    };

    process(&mut user, &registry, &transformer).expect("processing succeeds");

    assert_eq!(user.ssn.as_deref(), Some(""));
}

#[test]
fn test_public_field_is_transformed_unconditionally() {
    let registry = user_registry();
    let transformer = SuffixTransformer::new();
    let mut user = User {
        tag: "x".to_string(),
        ..User::default()
    };

    process(&mut user, &registry, &transformer).expect("first pass");
    assert_eq!(user.tag, "x::ENC");

    // Public fields are not gated: a second pass transforms again.
    process(&mut user, &registry, &transformer).expect("second pass");
    assert_eq!(user.tag, "x::ENC::ENC");
}

#[test]
fn test_accessor_fault_skips_field_and_continues() {
    let registry = user_registry();
    let transformer = SuffixTransformer::new();
    let mut user = User {
        ssn: Some("123-45-6789".to_string()),
        tag: "x".to_string(),
        ssn_faults: true,
        ..User::default()
    };

    process(&mut user, &registry, &transformer).expect("fault is recoverable");

    // The faulting field is untouched, the rest of the pass ran.
    assert_eq!(user.ssn.as_deref(), Some("123-45-6789"));
    assert_eq!(user.tag, "x::ENC");
}

#[test]
fn test_unregistered_type_is_fatal() {
    let registry = fieldcloak_core::SchemaRegistry::new();
    let transformer = SuffixTransformer::new();
    let mut user = User::default();

    let err = process(&mut user, &registry, &transformer).unwrap_err();
    assert!(matches!(err, Error::UnresolvableType { type_name } if type_name == "User"));
}

#[test]
fn test_transform_failure_propagates_and_keeps_prior_writes() {
    let registry = user_registry();
    // Schema order is ssn, nickname, tag: ssn transforms fine, then
    // the public tag poisons the pass.
    let transformer = PoisonTransformer::new("boom");
    let mut user = User {
        ssn: Some("123-45-6789".to_string()),
        tag: "boom".to_string(),
        ..User::default()
    };

    let err = process(&mut user, &registry, &transformer).unwrap_err();
    assert!(matches!(
        err,
        Error::Transform { entity_type, field, .. }
            if entity_type == "User" && field == "tag"
    ));

    // No rollback: the sibling written earlier in the pass stays.
    assert_eq!(user.ssn.as_deref(), Some("123-45-6789::ENC"));
    assert_eq!(user.tag, "boom");
}

#[test]
fn test_process_returns_the_same_instance() {
    let registry = user_registry();
    let transformer = SuffixTransformer::new();
    let mut user = User {
        ssn: Some("123-45-6789".to_string()),
        ..User::default()
    };
    let user_addr = &user as *const User as *const ();

    let returned = process(&mut user, &registry, &transformer).expect("processing succeeds");
    assert!(std::ptr::eq(returned as *const dyn fieldcloak_core::Entity as *const (), user_addr));
}

#[test]
fn test_proxy_is_resolved_through_identity_adapter() {
    let registry = user_registry();
    let transformer = SuffixTransformer::new();
    let identity = UnwrapProxy;
    let mut proxy = LazyProxy {
        inner: User {
            ssn: Some("123-45-6789".to_string()),
            ..User::default()
        },
    };

    FieldProcessor::new(&registry, &transformer)
        .with_identity(&identity)
        .process(&mut proxy)
        .expect("proxy resolves to its real type");

    assert_eq!(proxy.inner.ssn.as_deref(), Some("123-45-6789::ENC"));
}

#[test]
fn test_proxy_without_identity_adapter_fails_resolution() {
    let registry = user_registry();
    let transformer = SuffixTransformer::new();
    let mut proxy = LazyProxy {
        inner: User::default(),
    };

    let err = process(&mut proxy, &registry, &transformer).unwrap_err();
    assert!(matches!(err, Error::UnresolvableType { type_name } if type_name == "proxy:User"));
}

#[test]
fn test_custom_metadata_query_can_suppress_all_processing() {
    struct Untagged;
    impl MetadataQuery for Untagged {
        fn tag_of(&self, _descriptor: &FieldDescriptor) -> FieldTag {
            FieldTag::None
        }
    }

    let registry = user_registry();
    let transformer = SuffixTransformer::new();
    let query = Untagged;
    let mut user = User {
        ssn: Some("123-45-6789".to_string()),
        tag: "x".to_string(),
        ..User::default()
    };

    FieldProcessor::new(&registry, &transformer)
        .with_metadata(&query)
        .process(&mut user)
        .expect("processing succeeds");

    assert_eq!(user.ssn.as_deref(), Some("123-45-6789"));
    assert_eq!(user.tag, "x");
}

#[test]
fn test_both_lifecycle_hooks_in_one_operation_transform_once() {
    let registry = user_registry();
    let transformer = SuffixTransformer::new();
    let hooks = PersistHooks::new(&registry, &transformer);
    let mut user = User {
        ssn: Some("123-45-6789".to_string()),
        ..User::default()
    };

    // A create-then-flush can fire both hooks for one logical store.
    hooks.before_insert(&mut user).expect("insert hook");
    hooks.before_update(&mut user).expect("update hook");

    assert_eq!(user.ssn.as_deref(), Some("123-45-6789::ENC"));
}

#[test]
fn test_inherited_fields_are_processed_on_the_derived_type() {
    // Derived redeclares nothing; the transform tag declared on the
    // base type applies when processing a derived instance.
    let registry = fieldcloak_core::SchemaRegistry::new();
    registry
        .register_from_json(
            r#"[
                {
                    "name": "BaseUser",
                    "fields": [{"name": "ssn", "tag": "transform"}]
                },
                {
                    "name": "AdminUser",
                    "parent": "BaseUser",
                    "fields": [{"name": "nickname", "tag": "transform"}]
                }
            ]"#,
        )
        .expect("definitions are well-formed");

    #[derive(Debug)]
    struct AdminUser {
        ssn: Option<String>,
    }
    impl fieldcloak_core::Entity for AdminUser {
        fn declared_type(&self) -> &str {
            "AdminUser"
        }
        fn read_field(&self, field: &str) -> fieldcloak_core::ReadOutcome {
            match field {
                "ssn" => match &self.ssn {
                    Some(value) => fieldcloak_core::ReadOutcome::Value(value.clone()),
                    None => fieldcloak_core::ReadOutcome::Absent,
                },
                _ => fieldcloak_core::ReadOutcome::NotAccessible,
            }
        }
        fn write_field(&mut self, field: &str, value: String) -> fieldcloak_core::WriteOutcome {
            match field {
                "ssn" => {
                    self.ssn = Some(value);
                    fieldcloak_core::WriteOutcome::Written
                }
                _ => fieldcloak_core::WriteOutcome::NotAccessible,
            }
        }
        fn nested_field_mut(&mut self, _field: &str) -> Option<&mut dyn fieldcloak_core::Entity> {
            None
        }
    }

    let transformer = SuffixTransformer::new();
    let mut admin = AdminUser {
        ssn: Some("987-65-4321".to_string()),
    };
    process(&mut admin, &registry, &transformer).expect("processing succeeds");
    assert_eq!(admin.ssn.as_deref(), Some("987-65-4321::ENC"));
}
