//! Java assignability (`is_assignable_to`).

use nova_types::{
    ArrayType, JavaType, ParameterizedType, Primitive, TypeId, Variance,
};

use crate::context::{Relation, RelationKey, Session};
use crate::equality::is_inferable;
use crate::error::CompatResult;
use crate::TypeVariableMode;

/// Primitive widening: may a value of primitive `source` be stored in a `target`?
///
/// Identity is handled by the caller.
pub(crate) fn primitive_widens(target: Primitive, source: Primitive) -> bool {
    use Primitive::*;

    match source {
        Void | None | Null | String => false,
        Boolean => target == Boolean,
        _ => match target {
            Byte | Char => source == target,
            Short => matches!(source, Byte | Short),
            Int => matches!(source, Byte | Char | Short | Int),
            Long => matches!(source, Byte | Char | Short | Int | Long),
            Float => source != Double,
            Double => true,
            _ => false,
        },
    }
}

impl Session<'_, '_> {
    pub(crate) fn assignable_to(
        &mut self,
        target: TypeId,
        source: TypeId,
        mode: TypeVariableMode,
    ) -> CompatResult<bool> {
        let to = self.node(target)?;
        let from = self.node(source)?;
        if matches!(to, JavaType::Unknown) || matches!(from, JavaType::Unknown) || to.is_wildcard()
        {
            return Ok(false);
        }
        if matches!(from, JavaType::Primitive(Primitive::Null)) {
            return Ok(!matches!(to, JavaType::Primitive(_)));
        }
        if target == source || is_inferable(to, from, mode) {
            return Ok(true);
        }

        let key = RelationKey::new(Relation::AssignableTo, target, source, mode);
        self.guarded(key, |cx| cx.assignable_by_target(target, to, source, from, mode))
    }

    fn assignable_by_target(
        &mut self,
        target: TypeId,
        to: &JavaType,
        source: TypeId,
        from: &JavaType,
        mode: TypeVariableMode,
    ) -> CompatResult<bool> {
        match to {
            JavaType::Parameterized(parameterized) => {
                self.assignable_to_parameterized(parameterized, source, from, mode)
            }
            // Bounds of an inferred variable are not checked.
            JavaType::GenericTypeVariable(_) => Ok(mode == TypeVariableMode::Infer),
            JavaType::Class(_) | JavaType::Annotation(_) => {
                self.assignable_to_class(target, source, from, mode)
            }
            JavaType::Array(array) => self.assignable_to_array(array, from, mode),
            JavaType::Primitive(primitive) => self.assignable_to_primitive(*primitive, source, from),
            JavaType::Variable(variable) => self.assignable_to(variable.ty, source, mode),
            JavaType::Method(method) => self.assignable_to(method.return_type, source, mode),
            JavaType::Unknown | JavaType::Intersection(_) | JavaType::MultiCatch(_) => Ok(false),
        }
    }

    fn assignable_to_parameterized(
        &mut self,
        to: &ParameterizedType,
        source: TypeId,
        from: &JavaType,
        mode: TypeVariableMode,
    ) -> CompatResult<bool> {
        let JavaType::Parameterized(from) = from else {
            // A raw or non-generic source only fits `Foo<?, ?>`.
            for argument in &to.arguments {
                match self.node(*argument)? {
                    JavaType::GenericTypeVariable(var) if var.is_wildcard() && var.bounds.is_empty() => {}
                    _ => return Ok(false),
                }
            }
            return self.assignable_to(to.base, source, mode);
        };

        if to.arguments.len() != from.arguments.len()
            || !self.assignable_to(to.base, from.base, mode)?
        {
            return Ok(false);
        }
        for (to_argument, from_argument) in to.arguments.iter().zip(&from.arguments) {
            if !self.type_argument_assignable(*to_argument, *from_argument, mode)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn type_argument_assignable(
        &mut self,
        to_argument: TypeId,
        from_argument: TypeId,
        mode: TypeVariableMode,
    ) -> CompatResult<bool> {
        let to_var = match self.node(to_argument)? {
            JavaType::GenericTypeVariable(var) if var.is_wildcard() => var,
            _ => return self.of_type(to_argument, from_argument, mode),
        };
        let Some(&bound) = to_var.bounds.first() else {
            return Ok(true);
        };

        let mut source = from_argument;
        if let JavaType::GenericTypeVariable(from_var) = self.node(from_argument)? {
            if from_var.is_wildcard() {
                match from_var.bounds.first() {
                    Some(&from_bound) if from_var.variance == to_var.variance => {
                        source = from_bound
                    }
                    _ => return Ok(false),
                }
            }
        }

        match to_var.variance {
            Variance::Covariant => self.assignable_to(bound, source, mode),
            Variance::Contravariant => self.assignable_to(source, bound, mode.reverse()),
            Variance::Invariant => Ok(false),
        }
    }

    fn assignable_to_class(
        &mut self,
        target: TypeId,
        source: TypeId,
        from: &JavaType,
        mode: TypeVariableMode,
    ) -> CompatResult<bool> {
        match from {
            JavaType::Primitive(primitive) => match self.env.boxed(*primitive) {
                Some(boxed) => self.assignable_to(target, boxed, mode),
                None => Ok(false),
            },
            JavaType::Intersection(intersection) => {
                for bound in &intersection.bounds {
                    if self.assignable_to(target, *bound, mode)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            JavaType::GenericTypeVariable(_) => Ok(false),
            _ => {
                let name = self.fully_qualified_name(target)?;
                self.assignable_to_name(name, source)
            }
        }
    }

    fn assignable_to_array(
        &mut self,
        to: &ArrayType,
        from: &JavaType,
        mode: TypeVariableMode,
    ) -> CompatResult<bool> {
        let JavaType::Array(from) = from else {
            return Ok(false);
        };
        if let JavaType::Primitive(_) = self.node(to.element)? {
            // `int[]` never accepts `short[]`.
            return self.of_type(to.element, from.element, TypeVariableMode::Bound);
        }
        self.assignable_to(to.element, from.element, mode)
    }

    fn assignable_to_primitive(
        &mut self,
        to: Primitive,
        source: TypeId,
        from: &JavaType,
    ) -> CompatResult<bool> {
        match from {
            JavaType::Primitive(from) => Ok(primitive_widens(to, *from)),
            _ if from.is_fully_qualified() => {
                let name = self.fully_qualified_name(source)?;
                Ok(Primitive::from_class_name(name)
                    .is_some_and(|unboxed| primitive_widens(to, unboxed)))
            }
            _ => Ok(false),
        }
    }
}
