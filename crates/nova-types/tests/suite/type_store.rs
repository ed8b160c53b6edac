use nova_types::{
    ClassKind, ClassType, Flags, JavaType, MethodType, Primitive, StoreError, TypeEnv, TypeStore,
    Variance,
};

use pretty_assertions::assert_eq;

#[test]
fn intern_class_id_is_idempotent() {
    let mut store = TypeStore::default();
    let first = store.intern_class_id("com.example.Foo");
    let second = store.intern_class_id("com.example.Foo");
    assert_eq!(first, second);
    assert!(store.node(first).is_none(), "reserved ids stay undefined until define_class");
}

#[test]
fn define_class_fills_reserved_slot() {
    let mut store = TypeStore::default();
    let id = store.intern_class_id("com.example.Foo");

    let t = store.type_variable("T", Variance::Invariant, vec![]);
    store
        .define_class(
            id,
            ClassType {
                type_parameters: vec![t],
                ..ClassType::new("com.example.Foo", ClassKind::Class)
            },
        )
        .expect("reserved class should accept its definition");
    let int = store.primitive(Primitive::Int);
    let void = store.primitive(Primitive::Void);
    let m = store.add_method(MethodType::new("m", id, void).with_parameters(vec![int]));

    assert_eq!(store.class_id("com.example.Foo"), Some(id));
    assert_eq!(store.type_parameters(id), &[t]);
    assert_eq!(store.methods(id), &[m]);
}

#[test]
fn self_referential_bound_shares_the_variable_node() {
    // `class EnumLike<E extends EnumLike<E>>`
    let mut store = TypeStore::with_minimal_jdk();
    let enum_like = store.intern_class_id("com.example.EnumLike");
    let e = store.reserve();
    let enum_like_of_e = store.parameterized(enum_like, vec![e]);
    store
        .define(
            e,
            JavaType::GenericTypeVariable(nova_types::GenericTypeVariable {
                name: "E".to_string(),
                variance: Variance::Covariant,
                bounds: vec![enum_like_of_e],
            }),
        )
        .unwrap();
    store
        .define_class(
            enum_like,
            ClassType {
                type_parameters: vec![e],
                ..ClassType::new("com.example.EnumLike", ClassKind::Class)
            },
        )
        .unwrap();

    let Some(JavaType::GenericTypeVariable(var)) = store.node(e) else {
        panic!("expected a type variable");
    };
    let Some(JavaType::Parameterized(bound)) = store.node(var.bounds[0]) else {
        panic!("expected a parameterized bound");
    };
    assert_eq!(bound.arguments, vec![e]);
}

#[test]
fn define_reports_mismatched_reservations() {
    let mut store = TypeStore::default();
    let id = store.intern_class_id("com.example.Foo");
    let err = store.define(id, JavaType::Unknown).unwrap_err();
    assert_eq!(
        err,
        StoreError::ClassNameMismatch {
            id,
            expected: "com.example.Foo".to_string(),
            found: "unknown".to_string(),
        }
    );
}

#[test]
fn class_kinds_without_supertype_extend_object() {
    let mut store = TypeStore::with_minimal_jdk();
    let object = store.object().unwrap();

    let plain = store.add_class(ClassType::new("com.example.Plain", ClassKind::Class));
    let record = store.add_class(ClassType::new("com.example.Point", ClassKind::Record));
    let iface = store.add_class(ClassType::new("com.example.Api", ClassKind::Interface));

    assert_eq!(store.supertype(plain), Some(object));
    assert_eq!(store.supertype(record), Some(object));
    assert_eq!(store.supertype(iface), None);
    assert_eq!(store.supertype(object), None);
}

#[test]
fn nested_types_report_the_package_of_their_owner() {
    let mut store = TypeStore::default();
    let outer = store.add_class(ClassType::new("com.example.Outer", ClassKind::Class));
    let inner = store.add_class(ClassType {
        owning_class: Some(outer),
        ..ClassType::new("com.example.Outer.Inner", ClassKind::Class)
    });
    let default_package = store.add_class(ClassType::new("Main", ClassKind::Class));

    assert_eq!(store.package_name(inner).as_deref(), Some("com.example"));
    assert_eq!(store.package_name(outer).as_deref(), Some("com.example"));
    assert_eq!(store.package_name(default_package).as_deref(), Some(""));
}

#[test]
fn parameterized_types_delegate_to_their_base() {
    let mut store = TypeStore::with_minimal_jdk();
    let list = store.class_id("java.util.List").unwrap();
    let string = store.class_id("java.lang.String").unwrap();
    let list_string = store.parameterized(list, vec![string]);

    assert_eq!(store.fully_qualified_name(list_string), Some("java.util.List"));
    assert_eq!(store.type_parameters(list_string), &[string]);
    assert_eq!(store.interfaces(list_string), store.interfaces(list));
    assert_eq!(store.methods(list_string), store.methods(list));
    assert_eq!(store.flags(list_string), store.flags(list));
    assert!(store.flags(list).contains(Flags::INTERFACE));
}

#[test]
fn snapshot_round_trips_through_json() {
    let store = TypeStore::with_minimal_jdk();
    let json = serde_json::to_string(&store).expect("store should serialize");
    let restored: TypeStore = serde_json::from_str(&json).expect("snapshot should deserialize");

    assert_eq!(restored.len(), store.len());
    let list = store.class_id("java.util.List").unwrap();
    assert_eq!(restored.class_id("java.util.List"), Some(list));
    assert_eq!(restored.node(list), store.node(list));
}

#[test]
fn snapshot_without_interned_prefix_is_rejected() {
    let err = serde_json::from_str::<TypeStore>(r#"{"nodes":[]}"#).unwrap_err();
    assert!(
        err.to_string().contains("missing interned nodes"),
        "unexpected error: {err}"
    );
}
