use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One catalog item, as stored in the `products` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Assigned by the store on insert (`SERIAL`), never reused.
    pub id: i32,
    pub name: String,
    /// `DECIMAL(10,2)` in the store; serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: i32,
}

impl Product {
    /// Checks the field invariants of a product row.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "name".to_string(),
                "must not be empty".to_string(),
            ));
        }
        if self.price.is_sign_negative() {
            return Err(CoreError::InvalidInput(
                "price".to_string(),
                format!("must be non-negative, got {}", self.price),
            ));
        }
        if self.stock < 0 {
            return Err(CoreError::InvalidInput(
                "stock".to_string(),
                format!("must be non-negative, got {}", self.stock),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn laptop() -> Product {
        Product {
            id: 1,
            name: "Laptop".to_string(),
            price: dec!(999.99),
            stock: 50,
        }
    }

    #[test]
    fn price_is_serialized_as_a_number() {
        let json = serde_json::to_value(laptop()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "name": "Laptop", "price": 999.99, "stock": 50 })
        );
    }

    #[test]
    fn validate_accepts_a_well_formed_product() {
        assert!(laptop().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_fields() {
        let mut p = laptop();
        p.name = "  ".to_string();
        assert!(matches!(p.validate(), Err(CoreError::InvalidInput(f, _)) if f == "name"));

        let mut p = laptop();
        p.price = dec!(-0.01);
        assert!(matches!(p.validate(), Err(CoreError::InvalidInput(f, _)) if f == "price"));

        let mut p = laptop();
        p.stock = -1;
        assert!(matches!(p.validate(), Err(CoreError::InvalidInput(f, _)) if f == "stock"));
    }
}
