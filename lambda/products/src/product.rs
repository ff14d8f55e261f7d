use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Magnitude bounds of a DynamoDB number (`1E-130` to `9.9999999999999999999999999999999999999E+125`).
const MAX_STORED_MAGNITUDE: f64 = 1e126;
const MIN_STORED_MAGNITUDE: f64 = 1e-130;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub code: String,
    pub price: f64,
    pub model: String,
}

/// Client payload for create and update.
///
/// Carries only the mutable fields. An `id` sent by the client is an unknown
/// field here and is dropped during deserialization. A price the table
/// cannot hold fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub code: String,
    #[serde(deserialize_with = "storable_price")]
    pub price: f64,
    pub model: String,
}

impl Product {
    /// Builds a new product from a draft with a freshly generated v4 id.
    pub fn create(draft: ProductDraft) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), draft)
    }

    pub fn with_id(id: impl Into<String>, draft: ProductDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            code: draft.code,
            price: draft.price,
            model: draft.model,
        }
    }
}

fn storable_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let price = f64::deserialize(deserializer)?;
    let magnitude = price.abs();
    if magnitude >= MAX_STORED_MAGNITUDE || (magnitude != 0.0 && magnitude < MIN_STORED_MAGNITUDE) {
        return Err(serde::de::Error::custom(format!(
            "price {price} is outside the storable number range"
        )));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_ignores_client_supplied_id() {
        let draft: ProductDraft = serde_json::from_str(
            r#"{"id":"mine","title":"Galaxy","code":"GX1","price":199.9,"model":"S"}"#,
        )
        .unwrap();

        let product = Product::create(draft);
        assert_ne!(product.id, "mine");
        assert!(Uuid::parse_str(&product.id).is_ok());
        assert_eq!(product.title, "Galaxy");
        assert_eq!(product.price, 199.9);
    }

    #[test]
    fn draft_requires_every_field() {
        let result = serde_json::from_str::<ProductDraft>(r#"{"title":"Galaxy","code":"GX1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn price_outside_table_number_range_is_rejected() {
        for price in ["1e200", "-1e126", "1e-200"] {
            let body = format!(r#"{{"title":"t","code":"c","price":{price},"model":"m"}}"#);
            let err = serde_json::from_str::<ProductDraft>(&body).unwrap_err();
            assert!(err.to_string().contains("storable number range"), "{price}: {err}");
        }

        for price in ["0", "-3.5", "9.99e125", "1e-130"] {
            let body = format!(r#"{{"title":"t","code":"c","price":{price},"model":"m"}}"#);
            assert!(serde_json::from_str::<ProductDraft>(&body).is_ok(), "{price}");
        }
    }

    #[test]
    fn serializes_all_fields() {
        let product = Product {
            id: "p-1".to_string(),
            title: "Galaxy".to_string(),
            code: "GX1".to_string(),
            price: 10.5,
            model: "S".to_string(),
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "p-1",
                "title": "Galaxy",
                "code": "GX1",
                "price": 10.5,
                "model": "S"
            })
        );
    }
}
