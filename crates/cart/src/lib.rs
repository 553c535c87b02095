//! Shopping cart domain module.
//!
//! An in-memory cart of priced line items. Each [`Cart`] is an explicit value
//! owned by its caller; there is no process-wide cart.

pub mod cart;
pub mod item;

pub use cart::Cart;
pub use item::Item;
