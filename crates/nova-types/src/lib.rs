//! Java type model shared by Nova's type-compatibility queries.
//!
//! Types form a graph, not a tree: a class points at its methods, methods point back at their
//! declaring class, and a type variable may appear inside its own bound
//! (`T extends Comparable<T>`). Nodes therefore live in an arena ([`TypeStore`]) and refer to
//! each other by [`TypeId`]. Two references denote the same node iff their ids are equal.
//!
//! Consumers read the graph through [`TypeEnv`]; nothing in this crate mutates a node once it
//! has been defined.

#![forbid(unsafe_code)]

mod env;
mod flags;
mod jdk;
mod primitive;
mod store;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use env::TypeEnv;
pub use flags::Flags;
pub use primitive::Primitive;
pub use store::{StoreError, TypeStore};

/// Identity of a node in a [`TypeStore`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(u32);

impl TypeId {
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn to_raw(self) -> u32 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variance {
    #[default]
    Invariant,
    Covariant,
    Contravariant,
}

/// A non-generic nominal type, or the generic declaration of a parameterized one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassType {
    pub fully_qualified_name: String,
    pub kind: ClassKind,
    pub flags: Flags,
    /// Declared superclass. Class-kind types without one still extend `java.lang.Object`; see
    /// [`TypeEnv::supertype`].
    pub supertype: Option<TypeId>,
    pub interfaces: Vec<TypeId>,
    /// Declared type parameters (generic type variables).
    pub type_parameters: Vec<TypeId>,
    pub methods: Vec<TypeId>,
    pub members: Vec<TypeId>,
    pub owning_class: Option<TypeId>,
}

impl ClassType {
    pub fn new(fully_qualified_name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            fully_qualified_name: fully_qualified_name.into(),
            kind,
            ..Self::default()
        }
    }
}

/// A generic class applied to type arguments, e.g. `List<String>`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterizedType {
    pub base: TypeId,
    pub arguments: Vec<TypeId>,
}

/// A constant annotation element value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Constant {
    Bool(bool),
    Char(char),
    Int(i64),
    Float(f64),
    String(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SingleValue {
    Constant(Constant),
    Reference(TypeId),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ArrayValues {
    Constants(Vec<Constant>),
    References(Vec<TypeId>),
}

/// One `element = value` pair of an annotation instance. `element` is the annotation method.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ElementValue {
    Single { element: TypeId, value: SingleValue },
    Array { element: TypeId, values: ArrayValues },
}

impl ElementValue {
    pub fn element(&self) -> TypeId {
        match self {
            ElementValue::Single { element, .. } | ElementValue::Array { element, .. } => *element,
        }
    }
}

/// An annotation instance: the annotation class plus the element values it was written with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnotationType {
    pub ty: TypeId,
    pub values: Vec<ElementValue>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrayType {
    pub element: TypeId,
}

/// A named type variable (`T extends Comparable<T>`) or, when the name is `?`, a wildcard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenericTypeVariable {
    pub name: String,
    pub variance: Variance,
    pub bounds: Vec<TypeId>,
}

impl GenericTypeVariable {
    pub const WILDCARD_NAME: &'static str = "?";

    pub fn is_wildcard(&self) -> bool {
        self.name == Self::WILDCARD_NAME
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntersectionType {
    pub bounds: Vec<TypeId>,
}

/// A field, local or parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableType {
    pub name: String,
    pub owner: Option<TypeId>,
    pub ty: TypeId,
    pub flags: Flags,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodType {
    pub name: String,
    pub declaring_type: TypeId,
    pub return_type: TypeId,
    pub parameter_names: Vec<String>,
    pub parameter_types: Vec<TypeId>,
    pub thrown_exceptions: Vec<TypeId>,
    pub flags: Flags,
}

impl MethodType {
    pub fn new(name: impl Into<String>, declaring_type: TypeId, return_type: TypeId) -> Self {
        Self {
            name: name.into(),
            declaring_type,
            return_type,
            parameter_names: Vec::new(),
            parameter_types: Vec::new(),
            thrown_exceptions: Vec::new(),
            flags: Flags::empty(),
        }
    }

    pub fn with_parameters(mut self, parameter_types: Vec<TypeId>) -> Self {
        self.parameter_names = (0..parameter_types.len())
            .map(|idx| format!("arg{idx}"))
            .collect();
        self.parameter_types = parameter_types;
        self
    }

    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MultiCatchType {
    pub throwable_types: Vec<TypeId>,
}

/// A node of the type graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum JavaType {
    Primitive(Primitive),
    /// A type the frontend could not resolve.
    Unknown,
    Class(ClassType),
    Parameterized(ParameterizedType),
    Annotation(AnnotationType),
    Array(ArrayType),
    GenericTypeVariable(GenericTypeVariable),
    Intersection(IntersectionType),
    Variable(VariableType),
    Method(MethodType),
    MultiCatch(MultiCatchType),
}

impl JavaType {
    /// Class, parameterized and annotation types: the nominal types with a fully qualified name.
    pub fn is_fully_qualified(&self) -> bool {
        matches!(
            self,
            JavaType::Class(_) | JavaType::Parameterized(_) | JavaType::Annotation(_)
        )
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, JavaType::GenericTypeVariable(var) if var.is_wildcard())
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            JavaType::Primitive(_) => "primitive",
            JavaType::Unknown => "unknown",
            JavaType::Class(_) => "class",
            JavaType::Parameterized(_) => "parameterized",
            JavaType::Annotation(_) => "annotation",
            JavaType::Array(_) => "array",
            JavaType::GenericTypeVariable(_) => "generic type variable",
            JavaType::Intersection(_) => "intersection",
            JavaType::Variable(_) => "variable",
            JavaType::Method(_) => "method",
            JavaType::MultiCatch(_) => "multi-catch",
        }
    }
}
