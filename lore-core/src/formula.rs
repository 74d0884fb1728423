//! Roll-formula composition and numeric input coercion.
//!
//! A final roll formula is assembled in two steps over a pure-dice base pool:
//!
//! 1. a non-zero user modifier is appended with an explicit sign
//!    (`3d6khx + 2`);
//! 2. a non-zero morale value wraps the previous result in parentheses and
//!    is appended with an explicit sign (`(3d6khx + 2) - 1`).
//!
//! The parentheses are load-bearing: morale applies to the *whole* prior
//! expression, including the kept/exploded dice and the flat modifier, and
//! dice evaluators resolve `a + b - c` left to right without grouping.

/// Append a flat modifier to a base dice expression with an explicit sign.
///
/// A zero modifier returns the base unchanged.
#[must_use]
pub fn apply_flat_modifier(base: &str, modifier: i32) -> String {
    if modifier == 0 {
        return base.to_string();
    }
    let sign = if modifier >= 0 { '+' } else { '-' };
    format!("{base} {sign} {}", modifier.abs())
}

/// Wrap `expr` and append a morale adjustment with an explicit sign.
///
/// Zero morale returns the expression unchanged.
#[must_use]
pub fn apply_morale(expr: &str, morale: i32) -> String {
    if morale == 0 {
        return expr.to_string();
    }
    let sign = if morale >= 0 { '+' } else { '-' };
    format!("({expr}) {sign} {}", morale.abs())
}

/// Compose the final evaluable formula from a base pool, a flat modifier,
/// and a morale adjustment.
#[must_use]
pub fn compose_final(base: &str, flat_modifier: i32, morale: i32) -> String {
    apply_morale(&apply_flat_modifier(base, flat_modifier), morale)
}

/// Check a roll total against a target number.
///
/// Returns `None` when `target_number` is zero — no check was requested.
/// Otherwise the roll succeeds when the total meets or exceeds the target.
#[must_use]
pub fn target_number_check(total: i64, target_number: u32) -> Option<bool> {
    if target_number == 0 {
        return None;
    }
    Some(total >= i64::from(target_number))
}

/// Parse a user-entered modifier field.
///
/// Decimal input is truncated toward zero; anything non-numeric coerces to 0.
#[must_use]
pub fn parse_modifier(input: &str) -> i32 {
    let trimmed = input.trim();
    if let Ok(n) = trimmed.parse::<i32>() {
        return n;
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => f.trunc() as i32,
        _ => 0,
    }
}

/// Parse a user-entered target number field.
///
/// A target number cannot be negative; negative and non-numeric input both
/// coerce to 0, meaning "no check".
#[must_use]
pub fn parse_target_number(input: &str) -> u32 {
    let n = i64::from(parse_modifier(input));
    u32::try_from(n.max(0)).unwrap_or(0)
}

/// Chat-flavor suffix describing a non-zero morale adjustment, e.g.
/// `" (Morale +2)"`. Empty when morale is zero.
#[must_use]
pub fn morale_flavor(morale: i32) -> String {
    if morale == 0 {
        return String::new();
    }
    let sign = if morale >= 0 { "+" } else { "" };
    format!(" (Morale {sign}{morale})")
}
