use std::cell::RefCell;

use nova_type_compat::{
    find_qualified_java_lang_type_name, is_assignable_to_name, is_assignable_to_pattern,
    is_assignable_to_predicate, is_of_class_type, is_of_type_with_name, NamePattern,
};
use nova_types::{ClassKind, ClassType, Primitive, TypeEnv, TypeId, Variance};
use pretty_assertions::assert_eq;

use super::support::{class, jdk, prim, user_class};

#[test]
fn by_name_walks_supertypes_and_interfaces() {
    let store = jdk();
    let array_list = class(&store, "java.util.ArrayList");

    for name in [
        "java.util.ArrayList",
        "java.util.AbstractList",
        "java.util.AbstractCollection",
        "java.util.List",
        "java.util.Collection",
        "java.lang.Iterable",
        "java.lang.Cloneable",
        "java.io.Serializable",
        "java.lang.Object",
    ] {
        assert!(is_assignable_to_name(&store, name, array_list), "{name}");
    }
    assert!(!is_assignable_to_name(&store, "java.lang.String", array_list));
}

#[test]
fn by_name_accepts_nested_class_binary_names() {
    let mut store = jdk();
    let inner = store.add_class(ClassType::new("com.example.Outer$Inner", ClassKind::Class));
    assert!(is_assignable_to_name(&store, "com.example.Outer.Inner", inner));
}

#[test]
fn by_name_matches_rendered_parameterization() {
    let mut store = jdk();
    let list = class(&store, "java.util.List");
    let string = class(&store, "java.lang.String");
    let list_string = store.parameterized(list, vec![string]);

    assert!(is_assignable_to_name(&store, "java.util.List<java.lang.String>", list_string));
    assert!(is_assignable_to_name(&store, "java.util.Collection", list_string));
}

#[test]
fn by_name_handles_primitives() {
    let store = jdk();
    let int = prim(&store, Primitive::Int);
    let string = prim(&store, Primitive::String);

    assert!(is_assignable_to_name(&store, "long", int));
    assert!(!is_assignable_to_name(&store, "short", int));
    assert!(is_assignable_to_name(&store, "java.lang.String", string));
    assert!(!is_assignable_to_name(&store, "java.lang.Integer", int));
}

#[test]
fn by_name_looks_through_bounds_variables_and_methods() {
    let mut store = jdk();
    let number = class(&store, "java.lang.Number");
    let t = store.type_variable("T", Variance::Covariant, vec![number]);
    let foo = user_class(&mut store, "com.example.Foo", None);
    let field = store.variable("value", Some(foo), t);

    assert!(is_assignable_to_name(&store, "java.io.Serializable", t));
    assert!(is_assignable_to_name(&store, "java.lang.Number", field));
}

#[test]
fn pattern_matches_whole_names_in_the_closure() {
    let store = jdk();
    let array_list = class(&store, "java.util.ArrayList");
    let int = prim(&store, Primitive::Int);

    let collections = NamePattern::new(r"java\.util\.(List|Set)").unwrap();
    let partial = NamePattern::new(r"java\.util").unwrap();
    let integral = NamePattern::new("int|long").unwrap();

    assert!(is_assignable_to_pattern(&store, &collections, array_list));
    assert!(!is_assignable_to_pattern(&store, &partial, array_list));
    assert!(is_assignable_to_pattern(&store, &integral, int));
}

#[test]
fn predicate_sees_every_type_in_the_closure_once() {
    let store = jdk();
    let string = class(&store, "java.lang.String");
    let seen = RefCell::new(Vec::<TypeId>::new());

    let found = is_assignable_to_predicate(&store, string, |id| {
        seen.borrow_mut().push(id);
        false
    });

    assert!(!found);
    let names: Vec<&str> = seen
        .borrow()
        .iter()
        .filter_map(|id| store.fully_qualified_name(*id))
        .collect();
    assert_eq!(
        names,
        vec![
            "java.lang.String",
            "java.lang.Object",
            "java.io.Serializable",
            "java.lang.Comparable",
            "java.lang.CharSequence",
        ]
    );
}

#[test]
fn predicate_short_circuits() {
    let store = jdk();
    let integer = class(&store, "java.lang.Integer");
    let number = class(&store, "java.lang.Number");
    let mut calls = 0;

    let found = is_assignable_to_predicate(&store, integer, |id| {
        calls += 1;
        id == number
    });

    assert!(found);
    assert_eq!(calls, 2);
}

#[test]
fn class_type_looks_through_arrays_variables_and_methods() {
    let mut store = jdk();
    let string = class(&store, "java.lang.String");
    let strings = store.array(string);
    let foo = user_class(&mut store, "com.example.Foo", None);
    let field = store.variable("names", Some(foo), strings);
    let int = prim(&store, Primitive::Int);

    assert!(is_of_class_type(&store, field, "java.lang.String"));
    assert!(!is_of_class_type(&store, field, "java.lang.Object"));
    assert!(is_of_class_type(&store, int, "int"));
    assert!(!is_of_class_type(&store, int, "long"));
    assert!(!is_of_class_type(&store, store.unknown(), "java.lang.Object"));
}

#[test]
fn type_with_name_optionally_matches_overrides() {
    let store = jdk();
    let array_list = class(&store, "java.util.ArrayList");
    let is_list = |name: &str| name == "java.util.List";
    let is_object = |name: &str| name == "java.lang.Object";

    assert!(!is_of_type_with_name(&store, Some(array_list), false, is_list));
    assert!(is_of_type_with_name(&store, Some(array_list), true, is_list));
    assert!(is_of_type_with_name(&store, Some(array_list), true, is_object));
    assert!(!is_of_type_with_name(&store, None, true, is_object));
    assert!(!is_of_type_with_name(&store, Some(store.unknown()), true, |_| true));
}

#[test]
fn java_lang_simple_names() {
    assert_eq!(
        find_qualified_java_lang_type_name("Integer").as_deref(),
        Some("java.lang.Integer")
    );
    assert_eq!(find_qualified_java_lang_type_name("ArrayList"), None);
}
