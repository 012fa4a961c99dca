//! Expense item model

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::ids::ItemId;

/// Reasons an item is refused before it is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyName,
    InvalidPrice,
}

impl std::fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Please enter an item name"),
            Self::InvalidPrice => write!(f, "Please enter a valid price"),
        }
    }
}

impl std::error::Error for ItemValidationError {}

/// One recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: Amount,
}

impl Item {
    /// Build a validated item. The name is stored trimmed.
    pub fn new(name: &str, price: Amount) -> Result<Self, ItemValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        if !price.is_positive() {
            return Err(ItemValidationError::InvalidPrice);
        }

        Ok(Self {
            id: ItemId::new(),
            name: name.to_string(),
            price,
        })
    }

    /// Build an item from raw form text; unreadable prices are invalid
    pub fn from_input(name: &str, price: &str) -> Result<Self, ItemValidationError> {
        // Name is reported before price, whatever the price text holds
        if name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        let price = Amount::parse(price).map_err(|_| ItemValidationError::InvalidPrice)?;
        Self::new(name, price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_trims_name() {
        let item = Item::new("  Bread ", Amount::new(100.0)).unwrap();
        assert_eq!(item.name, "Bread");
        assert_eq!(item.price.value(), 100.0);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            Item::new("", Amount::new(10.0)),
            Err(ItemValidationError::EmptyName)
        );
        assert_eq!(
            Item::new("   ", Amount::new(10.0)),
            Err(ItemValidationError::EmptyName)
        );
    }

    #[test]
    fn test_non_positive_price_rejected() {
        assert_eq!(
            Item::new("Tea", Amount::zero()),
            Err(ItemValidationError::InvalidPrice)
        );
        assert_eq!(
            Item::new("Tea", Amount::new(-5.0)),
            Err(ItemValidationError::InvalidPrice)
        );
        assert_eq!(
            Item::new("Tea", Amount::new(f64::NAN)),
            Err(ItemValidationError::InvalidPrice)
        );
    }

    #[test]
    fn test_from_input() {
        let item = Item::from_input("Milk", "49.5").unwrap();
        assert_eq!(item.price.value(), 49.5);

        assert_eq!(
            Item::from_input("Milk", "fifty"),
            Err(ItemValidationError::InvalidPrice)
        );
        assert_eq!(
            Item::from_input("Milk", ""),
            Err(ItemValidationError::InvalidPrice)
        );
        assert_eq!(
            Item::from_input(" ", "fifty"),
            Err(ItemValidationError::EmptyName)
        );
    }

    #[test]
    fn test_items_get_distinct_ids() {
        let a = Item::new("A", Amount::new(1.0)).unwrap();
        let b = Item::new("A", Amount::new(1.0)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serialized_fields() {
        let item = Item::new("Bread", Amount::new(100.0)).unwrap();
        let json = serde_json::to_value(&item).unwrap();

        let keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["id", "name", "price"]);
        assert_eq!(json["price"], 100.0);
    }
}
