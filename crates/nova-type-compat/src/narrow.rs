//! Checked views of a type node.

use nova_types::{
    AnnotationType, ArrayType, ClassType, GenericTypeVariable, JavaType, ParameterizedType,
    Primitive, TypeEnv, TypeId,
};

/// A node that carries a fully qualified class name.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FullyQualified<'a> {
    Class(&'a ClassType),
    Parameterized(&'a ParameterizedType),
    Annotation(&'a AnnotationType),
}

pub fn as_class(env: &dyn TypeEnv, id: TypeId) -> Option<&ClassType> {
    match env.node(id)? {
        JavaType::Class(class) => Some(class),
        _ => None,
    }
}

pub fn as_parameterized(env: &dyn TypeEnv, id: TypeId) -> Option<&ParameterizedType> {
    match env.node(id)? {
        JavaType::Parameterized(parameterized) => Some(parameterized),
        _ => None,
    }
}

pub fn as_array(env: &dyn TypeEnv, id: TypeId) -> Option<&ArrayType> {
    match env.node(id)? {
        JavaType::Array(array) => Some(array),
        _ => None,
    }
}

pub fn as_generic(env: &dyn TypeEnv, id: TypeId) -> Option<&GenericTypeVariable> {
    match env.node(id)? {
        JavaType::GenericTypeVariable(variable) => Some(variable),
        _ => None,
    }
}

pub fn as_primitive(env: &dyn TypeEnv, id: TypeId) -> Option<Primitive> {
    match env.node(id)? {
        JavaType::Primitive(primitive) => Some(*primitive),
        _ => None,
    }
}

pub fn as_fully_qualified(env: &dyn TypeEnv, id: TypeId) -> Option<FullyQualified<'_>> {
    match env.node(id)? {
        JavaType::Class(class) => Some(FullyQualified::Class(class)),
        JavaType::Parameterized(parameterized) => Some(FullyQualified::Parameterized(parameterized)),
        JavaType::Annotation(annotation) => Some(FullyQualified::Annotation(annotation)),
        _ => None,
    }
}

/// `java.lang.Object`, as a class or parameterization.
pub fn is_object(env: &dyn TypeEnv, id: TypeId) -> bool {
    matches!(env.node(id), Some(JavaType::Class(_) | JavaType::Parameterized(_)))
        && env.fully_qualified_name(id) == Some("java.lang.Object")
}

/// The `String` pseudo-primitive or the `java.lang.String` class.
pub fn is_string(env: &dyn TypeEnv, id: TypeId) -> bool {
    match env.node(id) {
        Some(JavaType::Primitive(Primitive::String)) => true,
        Some(JavaType::Class(class)) => class.fully_qualified_name == "java.lang.String",
        _ => false,
    }
}

pub fn is_wildcard(env: &dyn TypeEnv, id: TypeId) -> bool {
    env.node(id).is_some_and(JavaType::is_wildcard)
}
