//! Method lookup through the supertype hierarchy and override detection.

use std::collections::{HashMap, HashSet};

use nova_types::{Flags, JavaType, TypeId};

use crate::context::Session;
use crate::error::CompatResult;
use crate::TypeVariableMode;

impl Session<'_, '_> {
    pub(crate) fn overridden_method(&mut self, method: TypeId) -> CompatResult<Option<TypeId>> {
        let JavaType::Method(method) = self.node(method)? else {
            return Ok(None);
        };
        let env = self.env;
        let declaring = method.declaring_type;

        let mut candidate = match env.supertype(declaring) {
            Some(supertype) => {
                self.declared_method(supertype, &method.name, &method.parameter_types)?
            }
            None => None,
        };
        if candidate.is_none() {
            for interface in env.interfaces(declaring) {
                candidate = self.declared_method(*interface, &method.name, &method.parameter_types)?;
                if candidate.is_some() {
                    break;
                }
            }
        }

        let Some(candidate) = candidate else {
            return Ok(None);
        };
        let JavaType::Method(found) = self.node(candidate)? else {
            return Ok(None);
        };
        if found.flags.intersects(Flags::PRIVATE | Flags::STATIC) {
            return Ok(None);
        }
        let visible = found.flags.contains(Flags::PUBLIC)
            || matches!(
                (env.package_name(found.declaring_type), env.package_name(declaring)),
                (Some(a), Some(b)) if a == b
            );
        Ok(visible.then_some(candidate))
    }

    pub(crate) fn declared_method(
        &mut self,
        class: TypeId,
        name: &str,
        arguments: &[TypeId],
    ) -> CompatResult<Option<TypeId>> {
        let mut visited = HashSet::new();
        self.declared_method_walk(class, name, arguments, &mut visited)
    }

    fn declared_method_walk(
        &mut self,
        class: TypeId,
        name: &str,
        arguments: &[TypeId],
        visited: &mut HashSet<TypeId>,
    ) -> CompatResult<Option<TypeId>> {
        if !visited.insert(class) {
            return Ok(None);
        }
        self.node(class)?;

        let env = self.env;
        for method in env.methods(class) {
            if self.method_has_signature(class, *method, name, arguments)? {
                return Ok(Some(*method));
            }
        }
        if let Some(supertype) = env.supertype(class) {
            if let Some(found) = self.declared_method_walk(supertype, name, arguments, visited)? {
                return Ok(Some(found));
            }
        }
        for interface in env.interfaces(class) {
            if let Some(found) = self.declared_method_walk(*interface, name, arguments, visited)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    /// Whether `method`, as seen through `class`, is named `name` and takes `arguments`.
    ///
    /// Type parameters of the method's declaring class are substituted by the type arguments
    /// `class` supplies, so `List<String>.add(E)` has signature `add(String)`.
    fn method_has_signature(
        &mut self,
        class: TypeId,
        method: TypeId,
        name: &str,
        arguments: &[TypeId],
    ) -> CompatResult<bool> {
        let JavaType::Method(method) = self.node(method)? else {
            return Ok(false);
        };
        if method.name != name || method.parameter_types.len() != arguments.len() {
            return Ok(false);
        }

        let env = self.env;
        let declared_parameters = env.type_parameters(method.declaring_type);
        let class_arguments = env.type_parameters(class);
        if declared_parameters.len() != class_arguments.len() {
            return Ok(false);
        }
        let substitution: HashMap<TypeId, TypeId> = declared_parameters
            .iter()
            .copied()
            .zip(class_arguments.iter().copied())
            .collect();

        for (declared, actual) in method.parameter_types.iter().zip(arguments) {
            if !self.of_type(*declared, *actual, TypeVariableMode::Bound)?
                && substitution.get(declared) != Some(actual)
            {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
