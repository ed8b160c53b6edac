//! Source-like rendering of type nodes.

use std::fmt::Write as _;

use nova_types::{JavaType, TypeEnv, TypeId, Variance};

/// Nodes nested deeper than this render as `...`.
const MAX_RENDER_DEPTH: usize = 32;

/// `java.util.List<? extends java.lang.Number>`, `int[]`, `T`, ...
pub fn to_string(env: &dyn TypeEnv, ty: TypeId) -> String {
    let mut out = String::new();
    write_type(env, ty, &mut out, 0);
    out
}

/// Like [`to_string`], but a type variable or wildcard also shows all of its upper bounds:
/// `T extends A & B`, `? extends A & B`.
pub fn to_generic_type_string(env: &dyn TypeEnv, ty: TypeId) -> String {
    let mut out = String::new();
    match env.node(ty) {
        Some(JavaType::GenericTypeVariable(var))
            if var.variance == Variance::Covariant && !var.bounds.is_empty() =>
        {
            out.push_str(&var.name);
            out.push_str(" extends ");
            write_joined(env, &var.bounds, " & ", &mut out, 1);
        }
        _ => write_type(env, ty, &mut out, 0),
    }
    out
}

fn write_joined(env: &dyn TypeEnv, ids: &[TypeId], separator: &str, out: &mut String, depth: usize) {
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        write_type(env, *id, out, depth);
    }
}

fn write_type(env: &dyn TypeEnv, ty: TypeId, out: &mut String, depth: usize) {
    if depth > MAX_RENDER_DEPTH {
        out.push_str("...");
        return;
    }
    let Some(node) = env.node(ty) else {
        let _ = write!(out, "<dangling #{}>", ty.to_raw());
        return;
    };
    let depth = depth + 1;

    match node {
        JavaType::Primitive(primitive) => out.push_str(primitive.keyword()),
        JavaType::Unknown => out.push_str("Unknown"),
        JavaType::Class(class) => out.push_str(&class.fully_qualified_name),
        JavaType::Parameterized(parameterized) => {
            write_type(env, parameterized.base, out, depth);
            out.push('<');
            write_joined(env, &parameterized.arguments, ", ", out, depth);
            out.push('>');
        }
        JavaType::Annotation(annotation) => {
            out.push('@');
            write_type(env, annotation.ty, out, depth);
        }
        JavaType::Array(array) => {
            write_type(env, array.element, out, depth);
            out.push_str("[]");
        }
        JavaType::GenericTypeVariable(var) => {
            if !var.is_wildcard() {
                out.push_str(&var.name);
                return;
            }
            out.push('?');
            let [bound] = var.bounds.as_slice() else {
                return;
            };
            match var.variance {
                Variance::Covariant => out.push_str(" extends "),
                Variance::Contravariant => out.push_str(" super "),
                Variance::Invariant => return,
            }
            write_type(env, *bound, out, depth);
        }
        JavaType::Intersection(intersection) => {
            write_joined(env, &intersection.bounds, " & ", out, depth)
        }
        JavaType::MultiCatch(multi_catch) => {
            write_joined(env, &multi_catch.throwable_types, " | ", out, depth)
        }
        JavaType::Method(method) => {
            write_type(env, method.declaring_type, out, depth);
            let _ = write!(out, "{{name={},return=", method.name);
            write_type(env, method.return_type, out, depth);
            out.push_str(",parameters=[");
            write_joined(env, &method.parameter_types, ", ", out, depth);
            out.push_str("]}");
        }
        JavaType::Variable(variable) => {
            if let Some(owner) = variable.owner {
                write_type(env, owner, out, depth);
            }
            let _ = write!(out, "{{name={},type=", variable.name);
            write_type(env, variable.ty, out, depth);
            out.push('}');
        }
    }
}
