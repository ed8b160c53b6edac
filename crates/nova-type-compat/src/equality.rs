//! Structural type equality (`is_of_type`).

use nova_types::{
    AnnotationType, ArrayValues, ElementValue, GenericTypeVariable, JavaType, MethodType,
    ParameterizedType, Primitive, SingleValue, TypeId, VariableType,
};

use crate::context::{Relation, RelationKey, Session};
use crate::error::CompatResult;
use crate::names::fully_qualified_names_are_equal;
use crate::TypeVariableMode;

/// Whether an unbound type variable on one side swallows the comparison.
pub(crate) fn is_inferable(target: &JavaType, source: &JavaType, mode: TypeVariableMode) -> bool {
    match mode {
        TypeVariableMode::Infer => is_named_type_variable(target),
        TypeVariableMode::Reverse => is_named_type_variable(source),
        TypeVariableMode::Bound => false,
    }
}

fn is_named_type_variable(ty: &JavaType) -> bool {
    matches!(ty, JavaType::GenericTypeVariable(var) if !var.is_wildcard())
}

fn is_string_node(ty: &JavaType) -> bool {
    match ty {
        JavaType::Primitive(Primitive::String) => true,
        JavaType::Class(class) => class.fully_qualified_name == "java.lang.String",
        _ => false,
    }
}

impl Session<'_, '_> {
    pub(crate) fn of_type(
        &mut self,
        target: TypeId,
        source: TypeId,
        mode: TypeVariableMode,
    ) -> CompatResult<bool> {
        let to = self.node(target)?;
        let from = self.node(source)?;
        if matches!(to, JavaType::Unknown) || matches!(from, JavaType::Unknown) {
            return Ok(false);
        }
        if target == source || is_inferable(to, from, mode) {
            return Ok(true);
        }
        if is_string_node(to) && is_string_node(from) {
            return Ok(true);
        }

        let key = RelationKey::new(Relation::OfType, target, source, mode);
        self.guarded(key, |cx| cx.structurally_equal(target, to, source, from, mode))
    }

    fn optional_of_type(
        &mut self,
        target: Option<TypeId>,
        source: Option<TypeId>,
        mode: TypeVariableMode,
    ) -> CompatResult<bool> {
        match (target, source) {
            (None, None) => Ok(true),
            (Some(target), Some(source)) => self.of_type(target, source, mode),
            _ => Ok(false),
        }
    }

    fn all_of_type(
        &mut self,
        targets: &[TypeId],
        sources: &[TypeId],
        mode: TypeVariableMode,
    ) -> CompatResult<bool> {
        if targets.len() != sources.len() {
            return Ok(false);
        }
        for (target, source) in targets.iter().zip(sources) {
            if !self.of_type(*target, *source, mode)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn structurally_equal(
        &mut self,
        target: TypeId,
        to: &JavaType,
        source: TypeId,
        from: &JavaType,
        mode: TypeVariableMode,
    ) -> CompatResult<bool> {
        match (to, from) {
            (JavaType::Primitive(a), JavaType::Primitive(b)) => Ok(a == b),
            (JavaType::Array(a), JavaType::Array(b)) => self.of_type(a.element, b.element, mode),
            (JavaType::GenericTypeVariable(a), JavaType::GenericTypeVariable(b)) => {
                self.type_variables_equal(a, b, mode)
            }
            (JavaType::Method(a), JavaType::Method(b)) => self.methods_equal(a, b, mode),
            (JavaType::Variable(a), JavaType::Variable(b)) => self.variables_equal(a, b, mode),
            _ if to.is_fully_qualified() && from.is_fully_qualified() => {
                let same_name = fully_qualified_names_are_equal(
                    self.fully_qualified_name(target)?,
                    self.fully_qualified_name(source)?,
                );
                if !same_name {
                    return Ok(to == from);
                }
                match (to, from) {
                    (JavaType::Class(_), JavaType::Class(_)) => Ok(true),
                    (JavaType::Parameterized(a), JavaType::Parameterized(b)) => {
                        self.parameterizations_equal(a, b, mode)
                    }
                    (JavaType::Annotation(a), JavaType::Annotation(b)) => {
                        self.annotations_equal(a, b)
                    }
                    _ => Ok(to == from),
                }
            }
            _ => Ok(to == from),
        }
    }

    fn parameterizations_equal(
        &mut self,
        a: &ParameterizedType,
        b: &ParameterizedType,
        mode: TypeVariableMode,
    ) -> CompatResult<bool> {
        self.all_of_type(&a.arguments, &b.arguments, mode)
    }

    fn type_variables_equal(
        &mut self,
        a: &GenericTypeVariable,
        b: &GenericTypeVariable,
        mode: TypeVariableMode,
    ) -> CompatResult<bool> {
        if a.name != b.name || a.variance != b.variance {
            return Ok(false);
        }
        self.all_of_type(&a.bounds, &b.bounds, mode)
    }

    fn methods_equal(
        &mut self,
        a: &MethodType,
        b: &MethodType,
        mode: TypeVariableMode,
    ) -> CompatResult<bool> {
        if a.name != b.name
            || a.flags.bits() != b.flags.bits()
            || a.thrown_exceptions.len() != b.thrown_exceptions.len()
            || a.parameter_types.len() != b.parameter_types.len()
        {
            return Ok(false);
        }
        Ok(self.of_type(a.declaring_type, b.declaring_type, mode)?
            && self.of_type(a.return_type, b.return_type, mode)?
            && self.all_of_type(&a.parameter_types, &b.parameter_types, mode)?
            && self.all_of_type(&a.thrown_exceptions, &b.thrown_exceptions, mode)?)
    }

    fn variables_equal(
        &mut self,
        a: &VariableType,
        b: &VariableType,
        mode: TypeVariableMode,
    ) -> CompatResult<bool> {
        Ok(self.of_type(a.ty, b.ty, mode)? && self.optional_of_type(a.owner, b.owner, mode)?)
    }

    fn annotations_equal(&mut self, a: &AnnotationType, b: &AnnotationType) -> CompatResult<bool> {
        if !self.of_type(a.ty, b.ty, TypeVariableMode::Bound)? || a.values.len() != b.values.len()
        {
            return Ok(false);
        }
        for (left, right) in a.values.iter().zip(&b.values) {
            if !self.element_values_equal(left, right)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn element_values_equal(&mut self, a: &ElementValue, b: &ElementValue) -> CompatResult<bool> {
        if !self.of_type(a.element(), b.element(), TypeVariableMode::Bound)? {
            return Ok(false);
        }
        match (a, b) {
            (ElementValue::Single { value: left, .. }, ElementValue::Single { value: right, .. }) => {
                match (left, right) {
                    (SingleValue::Constant(left), SingleValue::Constant(right)) => Ok(left == right),
                    (SingleValue::Reference(left), SingleValue::Reference(right)) => {
                        self.of_type(*left, *right, TypeVariableMode::Bound)
                    }
                    _ => Ok(false),
                }
            }
            (ElementValue::Single { value, .. }, ElementValue::Array { values, .. })
            | (ElementValue::Array { values, .. }, ElementValue::Single { value, .. }) => {
                self.single_matches_array(value, values)
            }
            (ElementValue::Array { values: left, .. }, ElementValue::Array { values: right, .. }) => {
                match (left, right) {
                    (ArrayValues::Constants(left), ArrayValues::Constants(right)) => {
                        Ok(left == right)
                    }
                    (ArrayValues::References(left), ArrayValues::References(right)) => {
                        self.all_of_type(left, right, TypeVariableMode::Bound)
                    }
                    _ => Ok(false),
                }
            }
        }
    }

    /// A single value equals a one-element array holding the same value.
    fn single_matches_array(
        &mut self,
        value: &SingleValue,
        values: &ArrayValues,
    ) -> CompatResult<bool> {
        match (value, values) {
            (SingleValue::Reference(single), ArrayValues::References(array)) if array.len() == 1 => {
                self.of_type(*single, array[0], TypeVariableMode::Bound)
            }
            (SingleValue::Constant(single), ArrayValues::Constants(array)) if array.len() == 1 => {
                Ok(array[0] == *single)
            }
            _ => Ok(false),
        }
    }
}
