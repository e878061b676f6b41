//! Classified style values — the output value model of the CSS-to-style transform.
//! Spec: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

pub mod classify;
pub mod diagnostics;
pub mod value;

pub use classify::classify;
pub use diagnostics::Diagnostics;
pub use value::{Dimension, LengthUnit, StyleMap, Value};
