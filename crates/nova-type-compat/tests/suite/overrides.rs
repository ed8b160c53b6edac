use nova_type_compat::{find_declared_method, find_overridden_method, is_override};
use nova_types::{ClassKind, ClassType, Flags, JavaType, Primitive, TypeEnv, TypeId, TypeStore};
use pretty_assertions::assert_eq;

use super::support::{class, jdk, method, prim, user_class};

#[test]
fn to_string_overrides_object() {
    let mut store = jdk();
    let string = class(&store, "java.lang.String");
    let object = class(&store, "java.lang.Object");
    let foo = user_class(&mut store, "com.example.Foo", None);
    let to_string = method(&mut store, foo, "toString", string, vec![], Flags::PUBLIC);

    let object_to_string = store.methods(object)[0];
    assert_eq!(find_overridden_method(&store, to_string), Some(object_to_string));
    assert!(is_override(&store, to_string));
}

#[test]
fn new_methods_override_nothing() {
    let mut store = jdk();
    let int = prim(&store, Primitive::Int);
    let foo = user_class(&mut store, "com.example.Foo", None);
    let compute = method(&mut store, foo, "compute", int, vec![], Flags::PUBLIC);
    let to_string_with_arg = method(&mut store, foo, "toString", int, vec![int], Flags::PUBLIC);

    assert_eq!(find_overridden_method(&store, compute), None);
    assert!(!is_override(&store, to_string_with_arg));
}

#[test]
fn private_and_static_candidates_are_not_overridden() {
    let mut store = jdk();
    let int = prim(&store, Primitive::Int);
    let base = user_class(&mut store, "com.example.Base", None);
    method(&mut store, base, "helper", int, vec![], Flags::PRIVATE);
    method(&mut store, base, "factory", int, vec![], Flags::PUBLIC | Flags::STATIC);
    let derived = user_class(&mut store, "com.example.Derived", Some(base));
    let helper = method(&mut store, derived, "helper", int, vec![], Flags::PUBLIC);
    let factory = method(&mut store, derived, "factory", int, vec![], Flags::PUBLIC | Flags::STATIC);

    assert!(!is_override(&store, helper));
    assert!(!is_override(&store, factory));
}

#[test]
fn package_private_candidates_need_the_same_package() {
    let mut store = jdk();
    let int = prim(&store, Primitive::Int);
    let base = user_class(&mut store, "com.example.Base", None);
    let base_run = method(&mut store, base, "run", int, vec![], Flags::empty());

    let same_package = user_class(&mut store, "com.example.Same", Some(base));
    let other_package = user_class(&mut store, "org.other.Other", Some(base));
    let same_run = method(&mut store, same_package, "run", int, vec![], Flags::PUBLIC);
    let other_run = method(&mut store, other_package, "run", int, vec![], Flags::PUBLIC);

    assert_eq!(find_overridden_method(&store, same_run), Some(base_run));
    assert_eq!(find_overridden_method(&store, other_run), None);
}

/// An environment that cannot tell which package any type belongs to.
struct WithoutPackages(TypeStore);

impl TypeEnv for WithoutPackages {
    fn node(&self, id: TypeId) -> Option<&JavaType> {
        self.0.node(id)
    }

    fn class_id(&self, fully_qualified_name: &str) -> Option<TypeId> {
        self.0.class_id(fully_qualified_name)
    }

    fn unknown(&self) -> TypeId {
        self.0.unknown()
    }

    fn primitive(&self, primitive: Primitive) -> TypeId {
        self.0.primitive(primitive)
    }

    fn package_name(&self, _id: TypeId) -> Option<String> {
        None
    }
}

#[test]
fn unknown_packages_do_not_share_package_private_methods() {
    let mut store = jdk();
    let int = prim(&store, Primitive::Int);
    let base = user_class(&mut store, "com.example.Base", None);
    method(&mut store, base, "run", int, vec![], Flags::empty());
    let base_stop = method(&mut store, base, "stop", int, vec![], Flags::PUBLIC);
    let derived = user_class(&mut store, "com.example.Derived", Some(base));
    let run = method(&mut store, derived, "run", int, vec![], Flags::PUBLIC);
    let stop = method(&mut store, derived, "stop", int, vec![], Flags::PUBLIC);
    let env = WithoutPackages(store);

    assert_eq!(find_overridden_method(&env, run), None);
    assert_eq!(find_overridden_method(&env, stop), Some(base_stop));
}

#[test]
fn interface_methods_are_found_when_the_superclass_has_none() {
    let mut store = jdk();
    let int = prim(&store, Primitive::Int);
    let string = class(&store, "java.lang.String");
    let comparable = class(&store, "java.lang.Comparable");
    let comparable_string = store.parameterized(comparable, vec![string]);
    let name = store.add_class(ClassType {
        flags: Flags::PUBLIC,
        interfaces: vec![comparable_string],
        ..ClassType::new("com.example.Name", ClassKind::Class)
    });
    let compare_to = method(&mut store, name, "compareTo", int, vec![string], Flags::PUBLIC);

    let overridden = find_overridden_method(&store, compare_to);
    let expected = store.methods(comparable)[0];
    assert_eq!(overridden, Some(expected));
}

#[test]
fn declared_method_substitutes_class_type_arguments() {
    let mut store = jdk();
    let array_list = class(&store, "java.util.ArrayList");
    let string = class(&store, "java.lang.String");
    let int = prim(&store, Primitive::Int);
    let array_list_string = store.parameterized(array_list, vec![string]);

    let add = find_declared_method(&store, Some(array_list_string), "add", &[string]);
    assert_eq!(add, Some(store.methods(array_list)[0]));

    let size = find_declared_method(&store, Some(array_list_string), "size", &[]);
    assert_eq!(size, Some(store.methods(array_list)[2]));

    assert_eq!(find_declared_method(&store, Some(array_list_string), "add", &[int]), None);
    assert_eq!(find_declared_method(&store, None, "add", &[string]), None);
}

#[test]
fn declared_method_searches_supertypes() {
    let store = jdk();
    let array_list = class(&store, "java.util.ArrayList");
    let object = class(&store, "java.lang.Object");
    let abstract_collection = class(&store, "java.util.AbstractCollection");

    let to_string = find_declared_method(&store, Some(array_list), "toString", &[]);
    assert_eq!(to_string, Some(store.methods(abstract_collection)[0]));

    // toString, equals, hashCode, clone
    let hash_code = find_declared_method(&store, Some(array_list), "hashCode", &[]);
    assert_eq!(hash_code, Some(store.methods(object)[2]));
}

#[test]
fn generic_method_parameter_matches_through_subclass_arguments() {
    let mut store = jdk();
    let array_list = class(&store, "java.util.ArrayList");
    let string = class(&store, "java.lang.String");
    let boolean = prim(&store, Primitive::Boolean);
    let array_list_string = store.parameterized(array_list, vec![string]);
    let names = store.add_class(ClassType {
        flags: Flags::PUBLIC,
        supertype: Some(array_list_string),
        ..ClassType::new("com.example.Names", ClassKind::Class)
    });
    let add = method(&mut store, names, "add", boolean, vec![string], Flags::PUBLIC);

    assert_eq!(find_overridden_method(&store, add), Some(store.methods(array_list)[0]));
}
