use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    ArrayType, ClassType, GenericTypeVariable, IntersectionType, JavaType, MethodType,
    ParameterizedType, Primitive, TypeEnv, TypeId, Variance, VariableType,
};

const UNKNOWN_SLOT: usize = 0;
const FIRST_PRIMITIVE_SLOT: usize = 1;
const INTERNED_SLOTS: usize = FIRST_PRIMITIVE_SLOT + Primitive::ALL.len();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("type id {0:?} does not belong to this store")]
    UnknownId(TypeId),
    #[error("type id {0:?} is already defined")]
    AlreadyDefined(TypeId),
    #[error("type id {id:?} was reserved for `{expected}` but defined as a {found}")]
    ClassNameMismatch {
        id: TypeId,
        expected: String,
        found: String,
    },
    #[error("corrupt type store snapshot: {0}")]
    CorruptSnapshot(&'static str),
}

/// Arena owning every node of a type graph.
///
/// `Unknown` and the primitive nodes are interned: [`TypeStore::add`] hands back the shared id
/// instead of allocating a copy, so identity comparisons work for them as they do for classes.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "TypeStoreSnapshot", into = "TypeStoreSnapshot")]
pub struct TypeStore {
    nodes: Vec<Option<JavaType>>,
    /// `$`-normalized fully qualified name -> class id.
    classes: HashMap<String, TypeId>,
    /// Ids handed out by `intern_class_id` that are still waiting for their definition.
    reserved_names: HashMap<TypeId, String>,
}

#[derive(Serialize, Deserialize)]
struct TypeStoreSnapshot {
    nodes: Vec<Option<JavaType>>,
}

impl TryFrom<TypeStoreSnapshot> for TypeStore {
    type Error = StoreError;

    fn try_from(snapshot: TypeStoreSnapshot) -> Result<Self, Self::Error> {
        let nodes = snapshot.nodes;
        if nodes.len() < INTERNED_SLOTS {
            return Err(StoreError::CorruptSnapshot("missing interned nodes"));
        }
        if nodes[UNKNOWN_SLOT] != Some(JavaType::Unknown) {
            return Err(StoreError::CorruptSnapshot("slot 0 must be Unknown"));
        }
        for p in Primitive::ALL {
            if nodes[FIRST_PRIMITIVE_SLOT + p.index()] != Some(JavaType::Primitive(p)) {
                return Err(StoreError::CorruptSnapshot("primitive slots out of order"));
            }
        }

        let mut store = TypeStore {
            nodes,
            classes: HashMap::new(),
            reserved_names: HashMap::new(),
        };
        for idx in INTERNED_SLOTS..store.nodes.len() {
            let id = TypeId::from_raw(idx as u32);
            if let Some(JavaType::Class(class)) = &store.nodes[idx] {
                let key = normalize(&class.fully_qualified_name);
                store.classes.entry(key).or_insert(id);
            }
        }
        Ok(store)
    }
}

impl From<TypeStore> for TypeStoreSnapshot {
    fn from(store: TypeStore) -> Self {
        TypeStoreSnapshot { nodes: store.nodes }
    }
}

impl Default for TypeStore {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(fqn: &str) -> String {
    fqn.replace('$', ".")
}

impl TypeStore {
    /// An empty store holding only the interned `Unknown` and primitive nodes.
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(INTERNED_SLOTS);
        nodes.push(Some(JavaType::Unknown));
        nodes.extend(Primitive::ALL.into_iter().map(|p| Some(JavaType::Primitive(p))));
        Self {
            nodes,
            classes: HashMap::new(),
            reserved_names: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == INTERNED_SLOTS
    }

    fn next_id(&self) -> TypeId {
        let idx: u32 = self
            .nodes
            .len()
            .try_into()
            .expect("type store exceeded u32::MAX nodes");
        TypeId::from_raw(idx)
    }

    /// Add a node. Primitives and `Unknown` resolve to their interned ids; classes are entered
    /// into the name index unless a class with the same name is already registered.
    pub fn add(&mut self, ty: JavaType) -> TypeId {
        match ty {
            JavaType::Unknown => return self.unknown(),
            JavaType::Primitive(p) => return self.primitive(p),
            _ => {}
        }

        let id = self.next_id();
        if let JavaType::Class(class) = &ty {
            self.classes
                .entry(normalize(&class.fully_qualified_name))
                .or_insert(id);
        }
        self.nodes.push(Some(ty));
        id
    }

    /// Reserve an id to be defined later. Needed for self-referential structures such as
    /// `T extends Comparable<T>`.
    pub fn reserve(&mut self) -> TypeId {
        let id = self.next_id();
        self.nodes.push(None);
        id
    }

    pub fn define(&mut self, id: TypeId, ty: JavaType) -> Result<(), StoreError> {
        let slot = self
            .nodes
            .get(id.index())
            .ok_or(StoreError::UnknownId(id))?;
        if slot.is_some() {
            return Err(StoreError::AlreadyDefined(id));
        }

        if let Some(expected) = self.reserved_names.get(&id) {
            let matches = match &ty {
                JavaType::Class(class) => normalize(&class.fully_qualified_name) == *expected,
                _ => false,
            };
            if !matches {
                let found = match &ty {
                    JavaType::Class(class) => class.fully_qualified_name.clone(),
                    other => other.kind_name().to_string(),
                };
                return Err(StoreError::ClassNameMismatch {
                    id,
                    expected: expected.clone(),
                    found,
                });
            }
        }

        if let JavaType::Class(class) = &ty {
            self.classes
                .entry(normalize(&class.fully_qualified_name))
                .or_insert(id);
        }
        self.reserved_names.remove(&id);
        self.nodes[id.index()] = Some(ty);
        Ok(())
    }

    /// Id registered for `fully_qualified_name`, reserving a fresh one if the class is not
    /// known yet. Idempotent.
    pub fn intern_class_id(&mut self, fully_qualified_name: &str) -> TypeId {
        let key = normalize(fully_qualified_name);
        if let Some(id) = self.classes.get(&key) {
            return *id;
        }
        let id = self.reserve();
        self.classes.insert(key.clone(), id);
        self.reserved_names.insert(id, key);
        id
    }

    pub fn define_class(&mut self, id: TypeId, class: ClassType) -> Result<(), StoreError> {
        self.define(id, JavaType::Class(class))
    }

    pub fn add_class(&mut self, class: ClassType) -> TypeId {
        self.add(JavaType::Class(class))
    }

    /// Add a method and, if its declaring type is an already defined class, list it among that
    /// class's methods.
    pub fn add_method(&mut self, method: MethodType) -> TypeId {
        let declaring = method.declaring_type;
        let id = self.add(JavaType::Method(method));
        if let Some(Some(JavaType::Class(class))) = self.nodes.get_mut(declaring.index()) {
            class.methods.push(id);
        }
        id
    }

    pub fn parameterized(&mut self, base: TypeId, arguments: Vec<TypeId>) -> TypeId {
        self.add(JavaType::Parameterized(ParameterizedType { base, arguments }))
    }

    pub fn array(&mut self, element: TypeId) -> TypeId {
        self.add(JavaType::Array(ArrayType { element }))
    }

    pub fn type_variable(
        &mut self,
        name: impl Into<String>,
        variance: Variance,
        bounds: Vec<TypeId>,
    ) -> TypeId {
        self.add(JavaType::GenericTypeVariable(GenericTypeVariable {
            name: name.into(),
            variance,
            bounds,
        }))
    }

    /// `? extends bound` (covariant) or `? super bound` (contravariant).
    pub fn wildcard(&mut self, variance: Variance, bound: TypeId) -> TypeId {
        self.type_variable(GenericTypeVariable::WILDCARD_NAME, variance, vec![bound])
    }

    pub fn unbounded_wildcard(&mut self) -> TypeId {
        self.type_variable(GenericTypeVariable::WILDCARD_NAME, Variance::Invariant, vec![])
    }

    pub fn intersection(&mut self, bounds: Vec<TypeId>) -> TypeId {
        self.add(JavaType::Intersection(IntersectionType { bounds }))
    }

    pub fn variable(&mut self, name: impl Into<String>, owner: Option<TypeId>, ty: TypeId) -> TypeId {
        self.add(JavaType::Variable(VariableType {
            name: name.into(),
            owner,
            ty,
            flags: Default::default(),
        }))
    }

    /// Class id for `fully_qualified_name`, if registered.
    pub fn lookup_class(&self, fully_qualified_name: &str) -> Option<TypeId> {
        self.classes.get(&normalize(fully_qualified_name)).copied()
    }
}

impl TypeEnv for TypeStore {
    fn node(&self, id: TypeId) -> Option<&JavaType> {
        self.nodes.get(id.index())?.as_ref()
    }

    fn class_id(&self, fully_qualified_name: &str) -> Option<TypeId> {
        self.lookup_class(fully_qualified_name)
    }

    fn unknown(&self) -> TypeId {
        TypeId::from_raw(UNKNOWN_SLOT as u32)
    }

    fn primitive(&self, primitive: Primitive) -> TypeId {
        TypeId::from_raw((FIRST_PRIMITIVE_SLOT + primitive.index()) as u32)
    }
}
