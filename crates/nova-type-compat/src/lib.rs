//! Java type compatibility over a [`nova_types::TypeEnv`].
//!
//! This crate answers the questions a Java-aware refactoring or search tool keeps asking:
//! - is `a` the same type as `b` ([`is_of_type`])?
//! - may a value of type `b` be stored in a slot of type `a` ([`is_assignable_to`])?
//! - does a type extend a class with a given name, pattern or property?
//! - which supertype method does a method override ([`find_overridden_method`])?
//!
//! Every predicate is total: types that reference undefined nodes, or graphs too deep to
//! decide within the configured [`CompatConfig`] limits, answer `false` (or `None`). Use a
//! [`TypeCompat`] handle to read how often that happened via [`TypeCompat::stats`], or to
//! get the underlying [`Indeterminate`] from the `try_` methods.
//!
//! Relation checks that re-enter themselves through a recursive type
//! (`T extends Comparable<T>`) assume the relation holds.

#![forbid(unsafe_code)]

mod assign;
mod config;
mod context;
mod equality;
mod error;
mod guard;
mod mode;
mod names;
mod narrow;
mod overrides;
mod render;
mod walk;
mod well_formed;

use nova_types::{TypeEnv, TypeId};

pub use config::{CompatConfig, ConfigError};
pub use context::{CompatStats, TypeCompat};
pub use error::{CompatResult, Indeterminate};
pub use mode::TypeVariableMode;
pub use names::{
    find_qualified_java_lang_type_name, fully_qualified_names_are_equal, to_fully_qualified_name,
};
pub use narrow::{
    as_array, as_class, as_fully_qualified, as_generic, as_parameterized, as_primitive, is_object,
    is_string, is_wildcard, FullyQualified,
};
pub use render::{to_generic_type_string, to_string};
pub use walk::NamePattern;
pub use well_formed::is_well_formed_type;

/// Structural equality in [`TypeVariableMode::Bound`].
pub fn is_of_type(env: &dyn TypeEnv, target: TypeId, source: TypeId) -> bool {
    TypeCompat::new(env).is_of_type(target, source)
}

pub fn is_of_type_with_mode(
    env: &dyn TypeEnv,
    target: TypeId,
    source: TypeId,
    mode: TypeVariableMode,
) -> bool {
    TypeCompat::new(env).is_of_type_with_mode(target, source, mode)
}

/// Whether a value of type `source` may be assigned to `target`.
pub fn is_assignable_to(env: &dyn TypeEnv, target: TypeId, source: TypeId) -> bool {
    TypeCompat::new(env).is_assignable_to(target, source)
}

pub fn is_assignable_to_with_mode(
    env: &dyn TypeEnv,
    target: TypeId,
    source: TypeId,
    mode: TypeVariableMode,
) -> bool {
    TypeCompat::new(env).is_assignable_to_with_mode(target, source, mode)
}

pub fn is_assignable_to_name(env: &dyn TypeEnv, fully_qualified_name: &str, source: TypeId) -> bool {
    TypeCompat::new(env).is_assignable_to_name(fully_qualified_name, source)
}

pub fn is_assignable_to_pattern(env: &dyn TypeEnv, pattern: &NamePattern, source: TypeId) -> bool {
    TypeCompat::new(env).is_assignable_to_pattern(pattern, source)
}

pub fn is_assignable_to_predicate(
    env: &dyn TypeEnv,
    source: TypeId,
    predicate: impl FnMut(TypeId) -> bool,
) -> bool {
    TypeCompat::new(env).is_assignable_to_predicate(source, predicate)
}

/// Whether `ty` names the class `fully_qualified_name`, looking through variables, method
/// return types and array elements. Supertypes are not considered.
pub fn is_of_class_type(env: &dyn TypeEnv, ty: TypeId, fully_qualified_name: &str) -> bool {
    TypeCompat::new(env).is_of_class_type(ty, fully_qualified_name)
}

/// Whether `matcher` accepts the name of `ty`; with `match_override`, also the names of its
/// supertypes and `java.lang.Object`.
pub fn is_of_type_with_name(
    env: &dyn TypeEnv,
    ty: Option<TypeId>,
    match_override: bool,
    matcher: impl Fn(&str) -> bool,
) -> bool {
    TypeCompat::new(env).is_of_type_with_name(ty, match_override, matcher)
}

pub fn find_overridden_method(env: &dyn TypeEnv, method: TypeId) -> Option<TypeId> {
    TypeCompat::new(env).find_overridden_method(method)
}

pub fn find_declared_method(
    env: &dyn TypeEnv,
    class: Option<TypeId>,
    name: &str,
    arguments: &[TypeId],
) -> Option<TypeId> {
    TypeCompat::new(env).find_declared_method(class, name, arguments)
}

pub fn is_override(env: &dyn TypeEnv, method: TypeId) -> bool {
    TypeCompat::new(env).is_override(method)
}
