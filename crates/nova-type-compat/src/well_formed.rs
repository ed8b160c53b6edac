use std::collections::HashSet;

use nova_types::{JavaType, TypeEnv, TypeId};

/// Whether `ty` and everything it references is defined and known.
///
/// Self-referential graphs are well formed as long as every node on the cycle is.
pub fn is_well_formed_type(env: &dyn TypeEnv, ty: Option<TypeId>) -> bool {
    let mut seen = HashSet::new();
    ty.is_some_and(|ty| well_formed(env, ty, &mut seen))
}

fn well_formed(env: &dyn TypeEnv, id: TypeId, seen: &mut HashSet<TypeId>) -> bool {
    let Some(node) = env.node(id) else {
        return false;
    };
    if matches!(node, JavaType::Unknown) {
        return false;
    }
    if !seen.insert(id) {
        return true;
    }

    match node {
        JavaType::Parameterized(parameterized) => {
            well_formed(env, parameterized.base, seen)
                && all_well_formed(env, &parameterized.arguments, seen)
        }
        JavaType::Array(array) => well_formed(env, array.element, seen),
        JavaType::GenericTypeVariable(var) => all_well_formed(env, &var.bounds, seen),
        JavaType::Variable(variable) => {
            well_formed(env, variable.ty, seen)
                && variable.owner.is_some_and(|owner| well_formed(env, owner, seen))
        }
        JavaType::MultiCatch(multi_catch) => {
            all_well_formed(env, &multi_catch.throwable_types, seen)
        }
        JavaType::Method(method) => {
            well_formed(env, method.return_type, seen)
                && well_formed(env, method.declaring_type, seen)
                && all_well_formed(env, &method.parameter_types, seen)
        }
        _ => true,
    }
}

fn all_well_formed(env: &dyn TypeEnv, ids: &[TypeId], seen: &mut HashSet<TypeId>) -> bool {
    ids.iter().all(|id| well_formed(env, *id, seen))
}
