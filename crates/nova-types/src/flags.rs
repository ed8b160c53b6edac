use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Declaration modifiers, using the JVM access-flag bit positions.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Flags: u64 {
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        const SYNCHRONIZED = 1 << 5;
        const VOLATILE = 1 << 6;
        const TRANSIENT = 1 << 7;
        const NATIVE = 1 << 8;
        const INTERFACE = 1 << 9;
        const ABSTRACT = 1 << 10;
        const STRICTFP = 1 << 11;
        // Not an access flag; interface methods with a body.
        const DEFAULT = 1 << 43;
    }
}

impl Flags {
    /// Neither public, protected nor private.
    pub fn is_package_private(self) -> bool {
        !self.intersects(Flags::PUBLIC | Flags::PROTECTED | Flags::PRIVATE)
    }
}
