//! Textual rendering of elements
//!
//! Each element kind has a fixed notation, and composites render through
//! their own `Composite::render`.
//!
//! # Format Examples
//!
//! - Decimal: `42`
//! - Real: `5.710000` (always six fractional digits)
//! - String: `'hello'` (bytes decoded lossily as UTF-8)
//! - List: `#L[ 1 2 ]`
//! - Tree: `#T[ (1 :: 'a') ]`
//! - HashTab: `#H[ {'k' :: 2} ]`
//! - Container: `#A[ (0 :: 555) (1 :: 666) ]` (nested containers print in array mode)
//! - BigInt: `-123456789012345678901234567890`
//!
//! Whole containers render as `#S[ v1 v2 ]` in stack mode and
//! `#A[ (i :: v) ]` in array mode.

use crate::composite::Composite;
use crate::value::Value;
use std::fmt::Write;

/// Placeholder for an absent slot inside the active stack region
pub(crate) const ABSENT: &str = "_";

pub(crate) fn render_value(value: &Value, out: &mut String) {
    match value {
        Value::Decimal(n) => render_decimal(*n, out),
        Value::Real(r) => render_real(*r, out),
        Value::String(s) => render_bytes(s, out),
        Value::List(list) => list.render(out),
        Value::Tree(tree) => tree.render(out),
        Value::HashTab(table) => table.render(out),
        Value::Container(container) => container.render(out),
        Value::BigInt(big) => big.render(out),
    }
}

// Writing into a String cannot fail, so the fmt results below are discarded.

pub(crate) fn render_decimal(n: i32, out: &mut String) {
    let _ = write!(out, "{}", n);
}

pub(crate) fn render_real(r: f64, out: &mut String) {
    let _ = write!(out, "{:.6}", r);
}

pub(crate) fn render_bytes(bytes: &[u8], out: &mut String) {
    out.push('\'');
    out.push_str(&String::from_utf8_lossy(bytes));
    out.push('\'');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(value: &Value) -> String {
        let mut out = String::new();
        render_value(value, &mut out);
        out
    }

    #[test]
    fn test_scalars() {
        assert_eq!(rendered(&Value::Decimal(-17)), "-17");
        assert_eq!(rendered(&Value::Real(5.71)), "5.710000");
        assert_eq!(rendered(&Value::Real(1.23)), "1.230000");
        assert_eq!(rendered(&Value::from("world")), "'world'");
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        assert_eq!(rendered(&Value::string(vec![b'a', 0xff])), "'a\u{fffd}'");
    }
}
