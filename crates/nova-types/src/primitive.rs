use serde::{Deserialize, Serialize};

/// Java primitive keywords, plus the pseudo-primitives the attribution frontend uses for
/// `String` literals, `void`, missing types and the `null` literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Void,
    String,
    None,
    Null,
}

impl Primitive {
    pub const ALL: [Primitive; 12] = [
        Primitive::Boolean,
        Primitive::Byte,
        Primitive::Char,
        Primitive::Double,
        Primitive::Float,
        Primitive::Int,
        Primitive::Long,
        Primitive::Short,
        Primitive::Void,
        Primitive::String,
        Primitive::None,
        Primitive::Null,
    ];

    pub const fn keyword(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Double => "double",
            Primitive::Float => "float",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Short => "short",
            Primitive::Void => "void",
            Primitive::String => "String",
            Primitive::None => "",
            Primitive::Null => "null",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Primitive> {
        Primitive::ALL.into_iter().find(|p| p.keyword() == keyword)
    }

    /// Maps a boxed wrapper class (or `java.lang.String`) back to its primitive.
    pub fn from_class_name(fqn: &str) -> Option<Primitive> {
        Some(match fqn {
            "java.lang.Boolean" => Primitive::Boolean,
            "java.lang.Byte" => Primitive::Byte,
            "java.lang.Character" => Primitive::Char,
            "java.lang.Double" => Primitive::Double,
            "java.lang.Float" => Primitive::Float,
            "java.lang.Integer" => Primitive::Int,
            "java.lang.Long" => Primitive::Long,
            "java.lang.Short" => Primitive::Short,
            "java.lang.Void" => Primitive::Void,
            "java.lang.String" => Primitive::String,
            _ => return None,
        })
    }

    /// The class a value of this primitive boxes to.
    ///
    /// `void`, the "no type" marker and `null` have no boxed form.
    pub const fn boxed_class_name(self) -> Option<&'static str> {
        match self {
            Primitive::Boolean => Some("java.lang.Boolean"),
            Primitive::Byte => Some("java.lang.Byte"),
            Primitive::Char => Some("java.lang.Character"),
            Primitive::Double => Some("java.lang.Double"),
            Primitive::Float => Some("java.lang.Float"),
            Primitive::Int => Some("java.lang.Integer"),
            Primitive::Long => Some("java.lang.Long"),
            Primitive::Short => Some("java.lang.Short"),
            Primitive::String => Some("java.lang.String"),
            Primitive::Void | Primitive::None | Primitive::Null => None,
        }
    }

    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Primitive::Byte
                | Primitive::Char
                | Primitive::Double
                | Primitive::Float
                | Primitive::Int
                | Primitive::Long
                | Primitive::Short
        )
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}
