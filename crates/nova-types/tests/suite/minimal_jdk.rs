use nova_types::{ClassKind, JavaType, Primitive, TypeEnv, TypeStore};

use pretty_assertions::assert_eq;

#[test]
fn every_boxable_primitive_resolves_to_its_wrapper() {
    let env = TypeStore::with_minimal_jdk();

    for p in Primitive::ALL {
        let boxed = env.boxed(p);
        match p.boxed_class_name() {
            Some(name) => {
                let id = boxed.unwrap_or_else(|| panic!("{name} must exist in minimal JDK"));
                assert_eq!(env.fully_qualified_name(id), Some(name));
            }
            None => assert_eq!(boxed, None, "{p:?} should not box"),
        }
    }
}

#[test]
fn numeric_wrappers_extend_number() {
    let env = TypeStore::with_minimal_jdk();
    let number = env.class_id("java.lang.Number").unwrap();
    for name in ["java.lang.Integer", "java.lang.Long", "java.lang.Double"] {
        let id = env.class_id(name).unwrap();
        assert_eq!(env.supertype(id), Some(number), "{name}");
    }
}

#[test]
fn collection_interfaces_are_generic() {
    let env = TypeStore::with_minimal_jdk();
    for name in ["java.util.List", "java.util.Collection", "java.lang.Iterable"] {
        let id = env.class_id(name).unwrap();
        let Some(JavaType::Class(class)) = env.node(id) else {
            panic!("{name} should be a class node");
        };
        assert_eq!(class.kind, ClassKind::Interface, "{name}");
        assert_eq!(class.type_parameters.len(), 1, "{name}");
    }
}

#[test]
fn object_declares_to_string() {
    let env = TypeStore::with_minimal_jdk();
    let object = env.object().unwrap();
    let names: Vec<&str> = env
        .methods(object)
        .iter()
        .filter_map(|m| match env.node(*m) {
            Some(JavaType::Method(method)) => Some(method.name.as_str()),
            _ => None,
        })
        .collect();
    assert!(names.contains(&"toString"), "{names:?}");
    assert!(names.contains(&"equals"), "{names:?}");
}
