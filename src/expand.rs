//! `$VAR` / `${VAR}` environment-variable expansion.
//!
//! Unresolvable references are left as literal text rather than replaced with
//! an empty string: a config value like `$NotAVariable` must survive the
//! pipeline unchanged so the consuming service sees what the user wrote.
//!
//! The core function takes an injected lookup so tests can pass synthetic
//! variables instead of mutating process environment.

use std::sync::LazyLock;

use regex::Regex;

// ${VAR} in group 1, bare $VAR in group 2.
static VAR_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
        .expect("variable-reference pattern is valid")
});

/// Expand variable references in `input` using `lookup`. References that
/// `lookup` cannot resolve stay literal.
pub fn expand_with<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    VAR_REFERENCE
        .replace_all(input, |caps: &regex::Captures<'_>| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            lookup(name).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Expand variable references against the process environment.
pub fn expand(input: &str) -> String {
    expand_with(input, |name| std::env::var(name).ok())
}
