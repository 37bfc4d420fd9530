//! Element-wise operations on 3-component vectors
//!
//! Cone responses are scaled channel by channel, so the adaptation engine
//! needs component-wise arithmetic rather than dot products.

/// Component-wise sum a + b
#[inline]
pub const fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Component-wise product a ⊙ b
#[inline]
pub const fn mul(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] * b[0], a[1] * b[1], a[2] * b[2]]
}

/// Component-wise quotient a ⊘ b
///
/// Division by a zero component follows IEEE 754 and yields inf or NaN.
#[inline]
pub const fn div(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] / b[0], a[1] / b[1], a[2] / b[2]]
}
