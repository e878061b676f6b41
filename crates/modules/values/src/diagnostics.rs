//! Advisory unit-mismatch diagnostics.
//!
//! These warnings never affect classification results or control flow; they
//! exist to catch `opacity: 10px` style authoring mistakes during
//! development.

use once_cell::sync::Lazy;
use regex::Regex;

/// Properties that are expected to carry bare numbers rather than lengths.
const UNITLESS_PROPERTIES: &[&str] = &[
    "aspectRatio",
    "elevation",
    "flexGrow",
    "flexShrink",
    "opacity",
    "shadowOpacity",
    "zIndex",
];

#[allow(clippy::expect_used, reason = "static pattern, checked by tests")]
static NUMBER_ONLY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[+-]?(?:\d*\.\d*|[1-9]\d*)(?:e[+-]?\d+)?$")
        .expect("number-only pattern compiles")
});

/// Configuration for advisory diagnostics, threaded explicitly through the
/// pipeline rather than read from an implicit global.
#[derive(Clone, Debug)]
pub struct Diagnostics {
    enabled: bool,
    unitless_properties: Vec<String>,
}

impl Default for Diagnostics {
    /// Enabled in debug builds, silent in release builds.
    fn default() -> Self {
        Self::enabled(cfg!(debug_assertions))
    }
}

impl Diagnostics {
    pub fn enabled(enabled: bool) -> Self {
        Self {
            enabled,
            unitless_properties: UNITLESS_PROPERTIES
                .iter()
                .map(|name| (*name).to_owned())
                .collect(),
        }
    }

    /// Replace the unit-exempt property set.
    #[must_use]
    pub fn with_unitless_properties(
        mut self,
        properties: impl IntoIterator<Item = String>,
    ) -> Self {
        self.unitless_properties = properties.into_iter().collect();
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Warn when a property that should carry units receives a bare number,
    /// or a unit-exempt property receives anything but a bare number or `0`.
    pub fn check_units(&self, property: &str, value: &str) {
        if !self.enabled {
            return;
        }
        let needs_unit = !self
            .unitless_properties
            .iter()
            .any(|unitless| unitless == property);
        let is_bare_number = NUMBER_ONLY_RE.is_match(value);
        if needs_unit && is_bare_number {
            log::warn!("expected style \"{property}: {value}\" to contain units");
        }
        if !needs_unit && value != "0" && !is_bare_number {
            log::warn!("expected style \"{property}: {value}\" to be unitless");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gate_follows_build_profile() {
        assert_eq!(Diagnostics::default().is_enabled(), cfg!(debug_assertions));
    }

    #[test]
    fn unit_exempt_set_is_replaceable() {
        let diagnostics = Diagnostics::enabled(true)
            .with_unitless_properties(["lineClamp".to_owned()]);
        assert!(diagnostics.is_enabled());
        // Only observable through logging; this exercises the lookup paths.
        diagnostics.check_units("lineClamp", "3");
        diagnostics.check_units("width", "10px");
    }
}
