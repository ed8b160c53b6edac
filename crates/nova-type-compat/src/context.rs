use std::sync::atomic::{AtomicUsize, Ordering};

use nova_types::{JavaType, TypeEnv, TypeId};

use crate::error::{CompatResult, Indeterminate};
use crate::guard::{RecursionGuard, RecursionResult};
use crate::walk::NamePattern;
use crate::{CompatConfig, TypeVariableMode};

pub(crate) const LOG_TARGET: &str = "nova.type_compat";

/// Counters shared by every query issued through one [`TypeCompat`].
#[derive(Debug, Default)]
pub struct CompatStats {
    indeterminate: AtomicUsize,
    cycles: AtomicUsize,
}

impl CompatStats {
    /// Queries whose answer was folded to `false` because it could not be decided.
    pub fn indeterminate(&self) -> usize {
        self.indeterminate.load(Ordering::Relaxed)
    }

    /// Relation checks that re-entered themselves and were assumed to hold.
    pub fn cycles(&self) -> usize {
        self.cycles.load(Ordering::Relaxed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Relation {
    OfType,
    AssignableTo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct RelationKey {
    relation: Relation,
    target: TypeId,
    source: TypeId,
    mode: TypeVariableMode,
}

impl RelationKey {
    pub(crate) fn new(
        relation: Relation,
        target: TypeId,
        source: TypeId,
        mode: TypeVariableMode,
    ) -> Self {
        Self {
            relation,
            target,
            source,
            mode,
        }
    }
}

/// Compatibility queries against one type environment.
///
/// Every query gets a fresh recursion guard; only the [`CompatStats`] counters are shared.
pub struct TypeCompat<'env> {
    env: &'env dyn TypeEnv,
    config: CompatConfig,
    stats: CompatStats,
}

impl<'env> TypeCompat<'env> {
    pub fn new(env: &'env dyn TypeEnv) -> Self {
        Self::with_config(env, CompatConfig::default())
    }

    pub fn with_config(env: &'env dyn TypeEnv, config: CompatConfig) -> Self {
        Self {
            env,
            config,
            stats: CompatStats::default(),
        }
    }

    pub fn env(&self) -> &'env dyn TypeEnv {
        self.env
    }

    pub fn config(&self) -> &CompatConfig {
        &self.config
    }

    pub fn stats(&self) -> &CompatStats {
        &self.stats
    }

    pub fn is_of_type(&self, target: TypeId, source: TypeId) -> bool {
        self.is_of_type_with_mode(target, source, TypeVariableMode::Bound)
    }

    pub fn is_of_type_with_mode(
        &self,
        target: TypeId,
        source: TypeId,
        mode: TypeVariableMode,
    ) -> bool {
        self.fold("is_of_type", |cx| cx.of_type(target, source, mode))
    }

    /// Like [`TypeCompat::is_of_type_with_mode`], but reports undecidable comparisons.
    pub fn try_is_of_type(
        &self,
        target: TypeId,
        source: TypeId,
        mode: TypeVariableMode,
    ) -> CompatResult<bool> {
        self.session().of_type(target, source, mode)
    }

    pub fn is_assignable_to(&self, target: TypeId, source: TypeId) -> bool {
        self.is_assignable_to_with_mode(target, source, TypeVariableMode::Bound)
    }

    pub fn is_assignable_to_with_mode(
        &self,
        target: TypeId,
        source: TypeId,
        mode: TypeVariableMode,
    ) -> bool {
        self.fold("is_assignable_to", |cx| cx.assignable_to(target, source, mode))
    }

    /// Like [`TypeCompat::is_assignable_to_with_mode`], but reports undecidable comparisons.
    pub fn try_is_assignable_to(
        &self,
        target: TypeId,
        source: TypeId,
        mode: TypeVariableMode,
    ) -> CompatResult<bool> {
        self.session().assignable_to(target, source, mode)
    }

    /// Whether `source` is, extends or implements the class named `fully_qualified_name`.
    pub fn is_assignable_to_name(&self, fully_qualified_name: &str, source: TypeId) -> bool {
        self.fold("is_assignable_to_name", |cx| {
            cx.assignable_to_name(fully_qualified_name, source)
        })
    }

    /// Whether any type in the supertype closure of `source` has a name fully matching `pattern`.
    pub fn is_assignable_to_pattern(&self, pattern: &NamePattern, source: TypeId) -> bool {
        self.fold("is_assignable_to_pattern", |cx| {
            cx.assignable_to_pattern(pattern, source)
        })
    }

    /// Whether `predicate` holds for `source` or any type in its supertype closure.
    pub fn is_assignable_to_predicate(
        &self,
        source: TypeId,
        mut predicate: impl FnMut(TypeId) -> bool,
    ) -> bool {
        self.fold("is_assignable_to_predicate", |cx| {
            cx.assignable_to_predicate(source, &mut predicate)
        })
    }

    pub fn is_of_class_type(&self, ty: TypeId, fully_qualified_name: &str) -> bool {
        self.fold("is_of_class_type", |cx| {
            cx.of_class_type(ty, fully_qualified_name)
        })
    }

    pub fn is_of_type_with_name(
        &self,
        ty: Option<TypeId>,
        match_override: bool,
        matcher: impl Fn(&str) -> bool,
    ) -> bool {
        self.fold("is_of_type_with_name", |cx| {
            cx.of_type_with_name(ty, match_override, &matcher)
        })
    }

    /// The supertype method that `method` overrides, if any.
    pub fn find_overridden_method(&self, method: TypeId) -> Option<TypeId> {
        self.fold("find_overridden_method", |cx| {
            cx.overridden_method(method)
        })
    }

    /// The first method named `name` with parameter types `arguments` found on `class` or its
    /// supertypes.
    pub fn find_declared_method(
        &self,
        class: Option<TypeId>,
        name: &str,
        arguments: &[TypeId],
    ) -> Option<TypeId> {
        self.fold("find_declared_method", |cx| match class {
            Some(class) => cx.declared_method(class, name, arguments),
            None => Ok(None),
        })
    }

    pub fn is_override(&self, method: TypeId) -> bool {
        self.find_overridden_method(method).is_some()
    }

    fn session(&self) -> Session<'_, 'env> {
        Session {
            env: self.env,
            guard: RecursionGuard::new(self.config.max_depth, self.config.max_iterations),
            stats: &self.stats,
        }
    }

    fn fold<T: Default>(
        &self,
        op: &'static str,
        query: impl FnOnce(&mut Session<'_, 'env>) -> CompatResult<T>,
    ) -> T {
        let mut session = self.session();
        match query(&mut session) {
            Ok(answer) => answer,
            Err(err) => {
                self.stats.indeterminate.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(target: LOG_TARGET, op, error = %err, "indeterminate result folded to default");
                T::default()
            }
        }
    }
}

/// Per-query state: the environment plus the recursion guard for relation checks.
pub(crate) struct Session<'a, 'env> {
    pub(crate) env: &'env dyn TypeEnv,
    guard: RecursionGuard<RelationKey>,
    stats: &'a CompatStats,
}

impl<'a, 'env> Session<'a, 'env> {
    pub(crate) fn node(&self, id: TypeId) -> CompatResult<&'env JavaType> {
        let env = self.env;
        env.node(id).ok_or(Indeterminate::DanglingType(id))
    }

    pub(crate) fn fully_qualified_name(&self, id: TypeId) -> CompatResult<&'env str> {
        let env = self.env;
        env.fully_qualified_name(id)
            .ok_or(Indeterminate::NotFullyQualified(id))
    }

    /// Runs `check` unless the same relation is already being evaluated further up the stack,
    /// in which case it is assumed to hold.
    pub(crate) fn guarded(
        &mut self,
        key: RelationKey,
        check: impl FnOnce(&mut Self) -> CompatResult<bool>,
    ) -> CompatResult<bool> {
        match self.guard.enter(key) {
            RecursionResult::Entered => {
                let result = check(self);
                self.guard.leave(key);
                result
            }
            RecursionResult::Cycle => {
                self.stats.cycles.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(
                    target: LOG_TARGET,
                    relation = ?key.relation,
                    target_type = ?key.target,
                    source_type = ?key.source,
                    "relation re-entered; assuming it holds"
                );
                Ok(true)
            }
            RecursionResult::DepthExceeded => Err(Indeterminate::DepthExceeded {
                limit: self.guard.max_depth(),
            }),
            RecursionResult::IterationExceeded => Err(Indeterminate::IterationsExceeded {
                limit: self.guard.max_iterations(),
            }),
        }
    }
}
