use nova_types::TypeId;
use thiserror::Error;

pub type CompatResult<T> = Result<T, Indeterminate>;

/// Why a compatibility question could not be answered.
///
/// The public predicates fold every `Indeterminate` into `false`; the `try_` entry points on
/// [`crate::TypeCompat`] surface it instead.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Indeterminate {
    #[error("type {0:?} is not defined in the environment")]
    DanglingType(TypeId),
    #[error("type {0:?} has no fully qualified name")]
    NotFullyQualified(TypeId),
    #[error("recursion depth limit of {limit} exceeded")]
    DepthExceeded { limit: u32 },
    #[error("iteration budget of {limit} exhausted")]
    IterationsExceeded { limit: u32 },
}
