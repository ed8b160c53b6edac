use crate::{ClassKind, ClassType, Flags, JavaType, Primitive, TypeId};

pub(crate) const OBJECT: &str = "java.lang.Object";

// Bounds the owning-class walk so a malformed owner cycle cannot hang `package_name`.
const MAX_NESTING: usize = 64;

/// Read-only view of a type graph.
///
/// Implementors only need to provide node lookup and the name index; the structural accessors
/// used by type-compatibility queries are derived from those. Environments are shared across
/// threads, so implementors must be `Send + Sync`.
pub trait TypeEnv: Send + Sync {
    /// The node behind `id`, or `None` if the id is dangling or was reserved but never defined.
    fn node(&self, id: TypeId) -> Option<&JavaType>;

    /// Look up a class by fully qualified name (`Outer$Inner` and `Outer.Inner` are equivalent).
    fn class_id(&self, fully_qualified_name: &str) -> Option<TypeId>;

    /// The interned `Unknown` node.
    fn unknown(&self) -> TypeId;

    /// The interned node for `primitive`.
    fn primitive(&self, primitive: Primitive) -> TypeId;

    /// `java.lang.Object`, if the environment defines it.
    fn object(&self) -> Option<TypeId> {
        self.class_id(OBJECT)
    }

    /// The class node a primitive boxes to. `void`, `null` and the "none" marker do not box.
    fn boxed(&self, primitive: Primitive) -> Option<TypeId> {
        primitive
            .boxed_class_name()
            .and_then(|name| self.class_id(name))
    }

    /// The class declaration behind a class, parameterized or annotation type.
    fn class_type(&self, id: TypeId) -> Option<&ClassType> {
        match self.node(id)? {
            JavaType::Class(class) => Some(class),
            JavaType::Parameterized(p) => match self.node(p.base)? {
                JavaType::Class(class) => Some(class),
                _ => None,
            },
            JavaType::Annotation(a) => match self.node(a.ty)? {
                JavaType::Class(class) => Some(class),
                _ => None,
            },
            _ => None,
        }
    }

    fn fully_qualified_name(&self, id: TypeId) -> Option<&str> {
        self.class_type(id)
            .map(|class| class.fully_qualified_name.as_str())
    }

    /// Direct superclass. Classes, enums and records without a declared superclass extend
    /// `java.lang.Object`; interfaces and `Object` itself have none.
    fn supertype(&self, id: TypeId) -> Option<TypeId> {
        let class = self.class_type(id)?;
        if let Some(supertype) = class.supertype {
            return Some(supertype);
        }
        match class.kind {
            ClassKind::Interface | ClassKind::Annotation => None,
            ClassKind::Class | ClassKind::Enum | ClassKind::Record => {
                if class.fully_qualified_name == OBJECT {
                    None
                } else {
                    self.object()
                }
            }
        }
    }

    fn interfaces(&self, id: TypeId) -> &[TypeId] {
        self.class_type(id)
            .map(|class| class.interfaces.as_slice())
            .unwrap_or(&[])
    }

    fn methods(&self, id: TypeId) -> &[TypeId] {
        self.class_type(id)
            .map(|class| class.methods.as_slice())
            .unwrap_or(&[])
    }

    /// Declared type parameters of a class, or the type arguments of a parameterized type.
    fn type_parameters(&self, id: TypeId) -> &[TypeId] {
        match self.node(id) {
            Some(JavaType::Parameterized(p)) => &p.arguments,
            Some(JavaType::Class(class)) => &class.type_parameters,
            _ => self
                .class_type(id)
                .map(|class| class.type_parameters.as_slice())
                .unwrap_or(&[]),
        }
    }

    /// Package of a nominal type. Nested types report the package of their outermost class.
    fn package_name(&self, id: TypeId) -> Option<String> {
        let mut class = self.class_type(id)?;
        let mut hops = 0;
        while let Some(owner) = class.owning_class {
            match self.class_type(owner) {
                Some(outer) if hops < MAX_NESTING => {
                    class = outer;
                    hops += 1;
                }
                _ => break,
            }
        }
        let fqn = &class.fully_qualified_name;
        Some(match fqn.rfind('.') {
            Some(end) => fqn[..end].to_string(),
            None => String::new(),
        })
    }

    /// Modifiers of a class, method or variable node.
    fn flags(&self, id: TypeId) -> Flags {
        match self.node(id) {
            Some(JavaType::Method(m)) => m.flags,
            Some(JavaType::Variable(v)) => v.flags,
            _ => self
                .class_type(id)
                .map(|class| class.flags)
                .unwrap_or_default(),
        }
    }
}
