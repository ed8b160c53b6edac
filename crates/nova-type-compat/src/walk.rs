//! Supertype-closure walks: by name, by pattern, by predicate.

use std::collections::HashSet;

use nova_types::{JavaType, Primitive, TypeId};
use regex::Regex;

use crate::context::Session;
use crate::error::CompatResult;
use crate::names::fully_qualified_names_are_equal;
use crate::render;
use crate::TypeVariableMode;

const OBJECT: &str = "java.lang.Object";

/// A regular expression that must match a whole type name.
#[derive(Clone, Debug)]
pub struct NamePattern {
    source: String,
    regex: Regex,
}

impl NamePattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

impl Session<'_, '_> {
    pub(crate) fn assignable_to_name(&mut self, name: &str, source: TypeId) -> CompatResult<bool> {
        let mut visited = HashSet::new();
        self.name_walk(name, source, &mut visited)
    }

    fn name_walk(
        &mut self,
        name: &str,
        source: TypeId,
        visited: &mut HashSet<TypeId>,
    ) -> CompatResult<bool> {
        let from = self.node(source)?;
        if let JavaType::Primitive(_) = from {
            let target = match Primitive::from_keyword(name) {
                Some(target) => target,
                None if name == "java.lang.String" => Primitive::String,
                None => return Ok(false),
            };
            let target = self.env.primitive(target);
            return self.assignable_to(target, source, TypeVariableMode::Bound);
        }
        if !visited.insert(source) {
            return Ok(false);
        }

        match from {
            JavaType::Class(_) | JavaType::Parameterized(_) | JavaType::Annotation(_) => {
                if matches!(from, JavaType::Parameterized(_))
                    && render::to_string(self.env, source) == name
                {
                    return Ok(true);
                }
                if fully_qualified_names_are_equal(name, self.fully_qualified_name(source)?) {
                    return Ok(true);
                }
                let env = self.env;
                if let Some(supertype) = env.supertype(source) {
                    if self.name_walk(name, supertype, visited)? {
                        return Ok(true);
                    }
                }
                for interface in env.interfaces(source) {
                    if self.name_walk(name, *interface, visited)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            JavaType::GenericTypeVariable(var) => self.any_name_walk(name, &var.bounds, visited),
            JavaType::Intersection(intersection) => {
                self.any_name_walk(name, &intersection.bounds, visited)
            }
            JavaType::Variable(variable) => self.name_walk(name, variable.ty, visited),
            JavaType::Method(method) => self.name_walk(name, method.return_type, visited),
            _ => Ok(false),
        }
    }

    fn any_name_walk(
        &mut self,
        name: &str,
        sources: &[TypeId],
        visited: &mut HashSet<TypeId>,
    ) -> CompatResult<bool> {
        for source in sources {
            if self.name_walk(name, *source, visited)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub(crate) fn assignable_to_pattern(
        &mut self,
        pattern: &NamePattern,
        source: TypeId,
    ) -> CompatResult<bool> {
        let env = self.env;
        let mut matches_name = |id: TypeId| match env.node(id) {
            Some(JavaType::Primitive(primitive)) => pattern.matches(primitive.keyword()),
            Some(ty) if ty.is_fully_qualified() => env
                .fully_qualified_name(id)
                .is_some_and(|name| pattern.matches(name)),
            _ => false,
        };
        self.assignable_to_predicate(source, &mut matches_name)
    }

    pub(crate) fn assignable_to_predicate(
        &mut self,
        source: TypeId,
        predicate: &mut dyn FnMut(TypeId) -> bool,
    ) -> CompatResult<bool> {
        let mut visited = HashSet::new();
        self.predicate_walk(source, predicate, &mut visited)
    }

    fn predicate_walk(
        &mut self,
        source: TypeId,
        predicate: &mut dyn FnMut(TypeId) -> bool,
        visited: &mut HashSet<TypeId>,
    ) -> CompatResult<bool> {
        let from = self.node(source)?;
        if let JavaType::Primitive(_) = from {
            return Ok(predicate(source));
        }
        if !visited.insert(source) {
            return Ok(false);
        }

        let env = self.env;
        let next: &[TypeId] = match from {
            JavaType::Class(_) | JavaType::Parameterized(_) | JavaType::Annotation(_) => {
                if predicate(source) {
                    return Ok(true);
                }
                if let Some(supertype) = env.supertype(source) {
                    if self.predicate_walk(supertype, predicate, visited)? {
                        return Ok(true);
                    }
                }
                env.interfaces(source)
            }
            JavaType::GenericTypeVariable(var) => &var.bounds,
            JavaType::Intersection(intersection) => &intersection.bounds,
            JavaType::Variable(variable) => std::slice::from_ref(&variable.ty),
            JavaType::Method(method) => std::slice::from_ref(&method.return_type),
            _ => return Ok(false),
        };
        for id in next {
            if self.predicate_walk(*id, predicate, visited)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub(crate) fn of_class_type(&mut self, ty: TypeId, fully_qualified_name: &str) -> CompatResult<bool> {
        let mut current = ty;
        let mut visited = HashSet::new();
        loop {
            if !visited.insert(current) {
                return Ok(false);
            }
            current = match self.node(current)? {
                JavaType::Class(_) | JavaType::Parameterized(_) | JavaType::Annotation(_) => {
                    return Ok(fully_qualified_names_are_equal(
                        self.fully_qualified_name(current)?,
                        fully_qualified_name,
                    ));
                }
                JavaType::Primitive(primitive) => {
                    return Ok(Primitive::from_keyword(fully_qualified_name) == Some(*primitive));
                }
                JavaType::Variable(variable) => variable.ty,
                JavaType::Method(method) => method.return_type,
                JavaType::Array(array) => array.element,
                _ => return Ok(false),
            };
        }
    }

    pub(crate) fn of_type_with_name(
        &mut self,
        ty: Option<TypeId>,
        match_override: bool,
        matcher: &dyn Fn(&str) -> bool,
    ) -> CompatResult<bool> {
        let Some(ty) = ty else {
            return Ok(false);
        };
        let mut visited = HashSet::new();
        self.named_walk(ty, match_override, matcher, &mut visited)
    }

    fn named_walk(
        &mut self,
        ty: TypeId,
        match_override: bool,
        matcher: &dyn Fn(&str) -> bool,
        visited: &mut HashSet<TypeId>,
    ) -> CompatResult<bool> {
        if !self.node(ty)?.is_fully_qualified() || !visited.insert(ty) {
            return Ok(false);
        }
        let name = self.fully_qualified_name(ty)?;
        if matcher(name) {
            return Ok(true);
        }
        if !match_override {
            return Ok(false);
        }
        if name != OBJECT && matcher(OBJECT) {
            return Ok(true);
        }

        let env = self.env;
        if let Some(supertype) = env.supertype(ty) {
            if self.named_walk(supertype, match_override, matcher, visited)? {
                return Ok(true);
            }
        }
        for interface in env.interfaces(ty) {
            if self.named_walk(*interface, match_override, matcher, visited)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
