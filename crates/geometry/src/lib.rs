//! Geometry helpers.
//!
//! Pure, stateless arithmetic. Inputs are not validated: negative lengths
//! simply flow through the formulas.

use std::f64::consts::PI;

/// Fixed greeting.
pub fn say_hello() -> &'static str {
    "Hello"
}

/// Area of a `width` x `height` rectangle.
pub fn area(width: f64, height: f64) -> f64 {
    width * height
}

/// Perimeter of a `width` x `height` rectangle.
pub fn perimeter(width: f64, height: f64) -> f64 {
    2.0 * (width + height)
}

/// Area of a circle.
pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}
