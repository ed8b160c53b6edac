use serde::{Deserialize, Serialize};

/// How unbound generic type variables are treated while comparing two types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeVariableMode {
    /// Type variables on both sides are already bound; no inference.
    #[default]
    Bound,
    /// A type variable on the target side is unbound and accepts the source.
    Infer,
    /// A type variable on the source side is unbound. Used when a contravariant position flips
    /// the direction of a comparison made in `Infer` mode.
    Reverse,
}

impl TypeVariableMode {
    pub const fn reverse(self) -> Self {
        match self {
            TypeVariableMode::Infer => TypeVariableMode::Reverse,
            TypeVariableMode::Reverse => TypeVariableMode::Infer,
            TypeVariableMode::Bound => TypeVariableMode::Bound,
        }
    }
}
