//! Product Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use medovik_app::domain::products::records::{ProductRecord, WeightPrice};

/// A price tier. `price` may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct WeightPriceBody {
    /// Packaging label, e.g. `250гр`
    pub weight: String,

    #[serde(deserialize_with = "loose_price")]
    pub price: f64,
}

impl From<WeightPriceBody> for WeightPrice {
    fn from(body: WeightPriceBody) -> Self {
        WeightPrice {
            weight: body.weight,
            price: body.price,
        }
    }
}

impl From<WeightPrice> for WeightPriceBody {
    fn from(tier: WeightPrice) -> Self {
        WeightPriceBody {
            weight: tier.weight,
            price: tier.price,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LoosePrice {
    Number(f64),
    Text(String),
}

fn loose_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let price = match LoosePrice::deserialize(deserializer)? {
        LoosePrice::Number(price) => price,
        LoosePrice::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|error| D::Error::custom(format!("invalid price {text:?}: {error}")))?,
    };

    if !price.is_finite() {
        return Err(D::Error::custom("price must be a finite number"));
    }

    Ok(price)
}

pub(crate) fn into_weight_prices(tiers: Vec<WeightPriceBody>) -> Vec<WeightPrice> {
    tiers.into_iter().map(Into::into).collect()
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub image: String,
    pub base_price: f64,
    pub weight_prices: Vec<WeightPriceBody>,

    /// ISO-8601 UTC creation time
    pub created_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_string(),
            name: product.name,
            description: product.description,
            category_id: product.category_id.into_string(),
            image: product.image,
            base_price: product.base_price,
            weight_prices: product.weight_prices.into_iter().map(Into::into).collect(),
            created_at: product.created_at.to_string(),
        }
    }
}
