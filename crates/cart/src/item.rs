use serde::{Deserialize, Serialize};

use shopkit_core::{DomainError, DomainResult};

/// One product line in a cart.
///
/// Fields are private so every `Item` in existence satisfies the invariants
/// checked in [`Item::with_quantity`]: finite non-negative price, positive
/// quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemFields")]
pub struct Item {
    name: String,
    price: f64,
    quantity: u32,
}

impl Item {
    /// Item factory: a line of `name` at unit `price`, quantity 1.
    pub fn new(name: impl Into<String>, price: f64) -> DomainResult<Self> {
        Self::with_quantity(name, price, 1)
    }

    pub fn with_quantity(
        name: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> DomainResult<Self> {
        if !price.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if price < 0.0 {
            return Err(DomainError::validation("price must be non-negative"));
        }
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        Ok(Self {
            name: name.into(),
            // -0.0 passes the sign check; store it as plain zero.
            price: if price == 0.0 { 0.0 } else { price },
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Carried for callers; cart operations count entries, not quantities.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} x{} @ {}", self.name, self.quantity, self.price)
    }
}

/// Wire shape of an item; validated on the way in.
#[derive(Deserialize)]
struct ItemFields {
    name: String,
    price: f64,
    #[serde(default = "default_quantity")]
    quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl TryFrom<ItemFields> for Item {
    type Error = DomainError;

    fn try_from(fields: ItemFields) -> Result<Self, Self::Error> {
        Item::with_quantity(fields.name, fields.price, fields.quantity)
    }
}
