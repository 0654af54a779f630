//! Python version knowledge backing the version rules.

use crate::rules::matches_pattern;

/// A `(major, minor)` Python version.
pub type PyVersion = (u32, u32);

/// Typing constructs and the version that introduced them.
pub const TYPING_FEATURES: &[(&str, PyVersion)] = &[
    ("Protocol", (3, 8)),
    ("Literal", (3, 8)),
    ("TypedDict", (3, 8)),
    ("Final", (3, 8)),
    ("Annotated", (3, 9)),
    ("ParamSpec", (3, 10)),
    ("TypeAlias", (3, 10)),
    ("TypeGuard", (3, 10)),
    ("Concatenate", (3, 10)),
    ("Self", (3, 11)),
    ("Never", (3, 11)),
    ("LiteralString", (3, 11)),
    ("TypeVarTuple", (3, 11)),
    ("Unpack", (3, 11)),
    ("Required", (3, 11)),
    ("NotRequired", (3, 11)),
    ("override", (3, 12)),
    ("TypeIs", (3, 13)),
    ("ReadOnly", (3, 13)),
];

/// Syntax forms detectable in signatures, with the introducing version.
pub const SYNTAX_PATTERNS: &[(&str, PyVersion, &str)] = &[
    (r"\b(dict|list|tuple|set|frozenset|type)\[", (3, 9), "builtin generics"),
    (r"[\w\]]\s*\|\s*[\w\[]", (3, 10), "union syntax X | Y"),
    (r"\[\s*\*", (3, 11), "unpacked type variable tuple"),
];

/// Detect every versioned typing feature a signature uses.
pub fn detect_type_features(signature: &str) -> Vec<(&'static str, PyVersion)> {
    let mut found = Vec::new();
    for (name, version) in TYPING_FEATURES {
        if matches_pattern(&format!(r"\b{name}\b"), signature) {
            found.push((*name, *version));
        }
    }
    for (pattern, version, label) in SYNTAX_PATTERNS {
        if matches_pattern(pattern, signature) {
            found.push((*label, *version));
        }
    }
    found
}

/// Parse a version string like `3.10` or `3.10.2` to `(major, minor)`.
pub fn parse_version(s: &str) -> Option<PyVersion> {
    let mut parts = s.trim().split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next().map_or(Some(0), |m| m.parse().ok())?;
    Some((major, minor))
}

/// Extract the minimum version from a `python_requires` constraint.
///
/// Only `>=` and `~=` constraints carry a usable floor; other operators
/// are ignored.
pub fn parse_requires(requires: &str) -> Option<PyVersion> {
    for clause in requires.split(',') {
        let clause = clause.trim();
        if let Some(rest) = clause.strip_prefix(">=").or_else(|| clause.strip_prefix("~=")) {
            return parse_version(rest);
        }
    }
    None
}
