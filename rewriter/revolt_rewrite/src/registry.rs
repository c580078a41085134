//! Name-keyed catalog of conversion rules.
//!
//! The catalog is fixed at compile time: one rule per legacy function
//! name. Lookup is the registry's only operation; an unknown name is not
//! an error, it means "not our concern".

use crate::convert::{Converter, MacroName, ThrowsPolarity};
use rustc_hash::FxHashMap;

/// The full rule catalog.
const RULES: &[(&str, Converter)] = &[
    ("assert", Converter::MacroWrap(MacroName::Expect)),
    ("assertTrue", Converter::MacroWrap(MacroName::Expect)),
    ("assertFalse", Converter::NegatedMacroWrap),
    ("assertEqual", Converter::Infix { op: "==" }),
    ("assertNotEqual", Converter::Infix { op: "!=" }),
    ("assertIdentical", Converter::Infix { op: "===" }),
    ("assertNotIdentical", Converter::Infix { op: "!==" }),
    ("assertGreaterThan", Converter::Infix { op: ">" }),
    ("assertGreaterThanOrEqual", Converter::Infix { op: ">=" }),
    ("assertLessThan", Converter::Infix { op: "<" }),
    ("assertLessThanOrEqual", Converter::Infix { op: "<=" }),
    ("assertNil", Converter::NilComparison { op: "==" }),
    ("assertNotNil", Converter::NilComparison { op: "!=" }),
    ("unwrap", Converter::MacroWrap(MacroName::Require)),
    (
        "assertThrowsError",
        Converter::ErrorAssertion(ThrowsPolarity::AnyError),
    ),
    (
        "assertNoThrow",
        Converter::ErrorAssertion(ThrowsPolarity::NoError),
    ),
    ("fail", Converter::FailureRecord),
];

/// Immutable registry resolving a callee name to its conversion rule.
#[derive(Debug)]
pub struct Registry {
    rules: FxHashMap<&'static str, Converter>,
}

impl Registry {
    /// Build the registry from the fixed catalog.
    pub fn new() -> Self {
        let mut rules =
            FxHashMap::with_capacity_and_hasher(RULES.len(), Default::default());
        for &(name, converter) in RULES {
            let previous = rules.insert(name, converter);
            debug_assert!(previous.is_none(), "duplicate conversion rule `{name}`");
        }
        Registry { rules }
    }

    /// Resolve a callee name. `None` means "leave the call unchanged".
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Converter> {
        self.rules.get(name)
    }

    /// All legacy names the registry can convert, for dry-run reporting.
    /// Unordered.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_one_rule_per_name() {
        let registry = Registry::new();
        assert_eq!(registry.len(), RULES.len());
    }

    #[test]
    fn known_names_resolve() {
        let registry = Registry::new();
        assert!(registry.lookup("assertTrue").is_some());
        assert!(registry.lookup("assertLessThanOrEqual").is_some());
        assert!(registry.lookup("fail").is_some());
    }

    #[test]
    fn unknown_names_are_absent() {
        let registry = Registry::new();
        assert_eq!(registry.lookup("print"), None);
        assert_eq!(registry.lookup("expect"), None);
        assert_eq!(registry.lookup(""), None);
    }

    #[test]
    fn rule_names_enumerates_the_catalog() {
        let registry = Registry::new();
        let mut names: Vec<_> = registry.rule_names().collect();
        names.sort_unstable();
        assert_eq!(names.len(), RULES.len());
        assert!(names.contains(&"assertThrowsError"));
    }
}
