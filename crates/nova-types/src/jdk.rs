use crate::{ClassKind, ClassType, Flags, MethodType, Primitive, TypeEnv, TypeId, TypeStore, Variance};

impl TypeStore {
    /// A store pre-populated with the handful of JDK types that boxing, string handling and the
    /// common collection interfaces need.
    pub fn with_minimal_jdk() -> Self {
        let mut store = TypeStore::new();
        MinimalJdk { store: &mut store }.populate();
        store
    }
}

struct MinimalJdk<'a> {
    store: &'a mut TypeStore,
}

const PUBLIC_CLASS: Flags = Flags::PUBLIC;
const PUBLIC_FINAL: Flags = Flags::PUBLIC.union(Flags::FINAL);
const PUBLIC_ABSTRACT: Flags = Flags::PUBLIC.union(Flags::ABSTRACT);
const PUBLIC_INTERFACE: Flags = Flags::PUBLIC
    .union(Flags::INTERFACE)
    .union(Flags::ABSTRACT);

impl MinimalJdk<'_> {
    fn class(
        &mut self,
        name: &str,
        kind: ClassKind,
        flags: Flags,
        supertype: Option<TypeId>,
        interfaces: Vec<TypeId>,
        type_parameters: Vec<TypeId>,
    ) -> TypeId {
        let id = self.store.intern_class_id(name);
        let class = ClassType {
            fully_qualified_name: name.to_string(),
            kind,
            flags,
            supertype,
            interfaces,
            type_parameters,
            ..ClassType::default()
        };
        self.store
            .define_class(id, class)
            .expect("minimal JDK defines each class once");
        id
    }

    fn interface(&mut self, name: &str, interfaces: Vec<TypeId>, type_parameters: Vec<TypeId>) -> TypeId {
        self.class(
            name,
            ClassKind::Interface,
            PUBLIC_INTERFACE,
            None,
            interfaces,
            type_parameters,
        )
    }

    fn method(&mut self, owner: TypeId, name: &str, ret: TypeId, params: Vec<TypeId>, flags: Flags) {
        self.store
            .add_method(MethodType::new(name, owner, ret).with_parameters(params).with_flags(flags));
    }

    fn type_param(&mut self, name: &str) -> TypeId {
        self.store.type_variable(name, Variance::Invariant, vec![])
    }

    fn populate(&mut self) {
        let boolean = self.store.primitive(Primitive::Boolean);
        let int = self.store.primitive(Primitive::Int);
        let string = self.store.intern_class_id("java.lang.String");

        let object = self.class("java.lang.Object", ClassKind::Class, PUBLIC_CLASS, None, vec![], vec![]);
        self.method(object, "toString", string, vec![], Flags::PUBLIC);
        self.method(object, "equals", boolean, vec![object], Flags::PUBLIC);
        self.method(object, "hashCode", int, vec![], Flags::PUBLIC | Flags::NATIVE);
        self.method(object, "clone", object, vec![], Flags::PROTECTED | Flags::NATIVE);

        let serializable = self.interface("java.io.Serializable", vec![], vec![]);
        let cloneable = self.interface("java.lang.Cloneable", vec![], vec![]);

        let comparable_t = self.type_param("T");
        let comparable = self.interface("java.lang.Comparable", vec![], vec![comparable_t]);
        self.method(comparable, "compareTo", int, vec![comparable_t], PUBLIC_ABSTRACT);

        let char_sequence = self.interface("java.lang.CharSequence", vec![], vec![]);
        self.method(char_sequence, "length", int, vec![], PUBLIC_ABSTRACT);

        let number = self.class(
            "java.lang.Number",
            ClassKind::Class,
            PUBLIC_ABSTRACT,
            Some(object),
            vec![serializable],
            vec![],
        );
        self.method(number, "intValue", int, vec![], PUBLIC_ABSTRACT);

        let comparable_string = self.store.parameterized(comparable, vec![string]);
        self.class(
            "java.lang.String",
            ClassKind::Class,
            PUBLIC_FINAL,
            Some(object),
            vec![serializable, comparable_string, char_sequence],
            vec![],
        );
        self.method(string, "length", int, vec![], Flags::PUBLIC);
        self.method(string, "toString", string, vec![], Flags::PUBLIC);

        for (name, numeric) in [
            ("java.lang.Byte", true),
            ("java.lang.Short", true),
            ("java.lang.Integer", true),
            ("java.lang.Long", true),
            ("java.lang.Float", true),
            ("java.lang.Double", true),
            ("java.lang.Character", false),
            ("java.lang.Boolean", false),
        ] {
            let id = self.store.intern_class_id(name);
            let comparable_self = self.store.parameterized(comparable, vec![id]);
            let (supertype, interfaces) = if numeric {
                (number, vec![comparable_self])
            } else {
                (object, vec![serializable, comparable_self])
            };
            self.class(
                name,
                ClassKind::Class,
                PUBLIC_FINAL,
                Some(supertype),
                interfaces,
                vec![],
            );
        }
        self.class("java.lang.Void", ClassKind::Class, PUBLIC_FINAL, Some(object), vec![], vec![]);

        let iterable_t = self.type_param("T");
        let iterable = self.interface("java.lang.Iterable", vec![], vec![iterable_t]);

        let collection_e = self.type_param("E");
        let iterable_of_e = self.store.parameterized(iterable, vec![collection_e]);
        let collection = self.interface("java.util.Collection", vec![iterable_of_e], vec![collection_e]);
        self.method(collection, "add", boolean, vec![collection_e], PUBLIC_ABSTRACT);
        self.method(collection, "size", int, vec![], PUBLIC_ABSTRACT);

        let list_e = self.type_param("E");
        let collection_of_e = self.store.parameterized(collection, vec![list_e]);
        let list = self.interface("java.util.List", vec![collection_of_e], vec![list_e]);
        self.method(list, "get", list_e, vec![int], PUBLIC_ABSTRACT);

        let abstract_collection_e = self.type_param("E");
        let collection_of_e = self.store.parameterized(collection, vec![abstract_collection_e]);
        let abstract_collection = self.class(
            "java.util.AbstractCollection",
            ClassKind::Class,
            PUBLIC_ABSTRACT,
            Some(object),
            vec![collection_of_e],
            vec![abstract_collection_e],
        );
        self.method(abstract_collection, "toString", string, vec![], Flags::PUBLIC);

        let abstract_list_e = self.type_param("E");
        let abstract_collection_of_e = self.store.parameterized(abstract_collection, vec![abstract_list_e]);
        let list_of_e = self.store.parameterized(list, vec![abstract_list_e]);
        let abstract_list = self.class(
            "java.util.AbstractList",
            ClassKind::Class,
            PUBLIC_ABSTRACT,
            Some(abstract_collection_of_e),
            vec![list_of_e],
            vec![abstract_list_e],
        );

        let array_list_e = self.type_param("E");
        let abstract_list_of_e = self.store.parameterized(abstract_list, vec![array_list_e]);
        let list_of_e = self.store.parameterized(list, vec![array_list_e]);
        let array_list = self.class(
            "java.util.ArrayList",
            ClassKind::Class,
            PUBLIC_CLASS,
            Some(abstract_list_of_e),
            vec![list_of_e, cloneable, serializable],
            vec![array_list_e],
        );
        self.method(array_list, "add", boolean, vec![array_list_e], Flags::PUBLIC);
        self.method(array_list, "get", array_list_e, vec![int], Flags::PUBLIC);
        self.method(array_list, "size", int, vec![], Flags::PUBLIC);

        let comparator_t = self.type_param("T");
        let comparator = self.interface("java.util.Comparator", vec![], vec![comparator_t]);
        self.method(comparator, "compare", int, vec![comparator_t, comparator_t], PUBLIC_ABSTRACT);

        let throwable = self.class(
            "java.lang.Throwable",
            ClassKind::Class,
            PUBLIC_CLASS,
            Some(object),
            vec![serializable],
            vec![],
        );
        self.method(throwable, "getMessage", string, vec![], Flags::PUBLIC);
        let exception = self.class(
            "java.lang.Exception",
            ClassKind::Class,
            PUBLIC_CLASS,
            Some(throwable),
            vec![],
            vec![],
        );
        self.class(
            "java.lang.RuntimeException",
            ClassKind::Class,
            PUBLIC_CLASS,
            Some(exception),
            vec![],
            vec![],
        );
    }
}
