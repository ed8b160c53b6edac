//! Fully qualified name helpers.

use std::borrow::Cow;

/// `java.lang` types that source code commonly refers to by simple name.
const COMMON_JAVA_LANG_TYPES: &[&str] = &[
    "Appendable",
    "AutoCloseable",
    "Boolean",
    "Byte",
    "Character",
    "CharSequence",
    "Class",
    "ClassLoader",
    "Cloneable",
    "Comparable",
    "Double",
    "Enum",
    "Error",
    "Exception",
    "Float",
    "FunctionalInterface",
    "Integer",
    "Iterable",
    "Long",
    "Math",
    "Number",
    "Object",
    "Readable",
    "Record",
    "Runnable",
    "Short",
    "String",
    "StringBuffer",
    "StringBuilder",
    "System",
    "Thread",
    "Throwable",
    "Void",
];

/// Replace binary-name nested class separators (`Outer$Inner`) with source separators.
pub fn to_fully_qualified_name(fqn: &str) -> Cow<'_, str> {
    if fqn.contains('$') {
        Cow::Owned(fqn.replace('$', "."))
    } else {
        Cow::Borrowed(fqn)
    }
}

/// Name equality that treats `$` and `.` as the same separator.
pub fn fully_qualified_names_are_equal(a: &str, b: &str) -> bool {
    a == b || (a.len() == b.len() && to_fully_qualified_name(a) == to_fully_qualified_name(b))
}

/// `java.lang.<name>` if `name` is one of the commonly used `java.lang` simple names.
pub fn find_qualified_java_lang_type_name(name: &str) -> Option<String> {
    COMMON_JAVA_LANG_TYPES
        .contains(&name)
        .then(|| format!("java.lang.{name}"))
}
