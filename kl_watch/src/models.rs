use serde::Serialize;

/// A single product scraped from a search results page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub name: String,
    pub sku: String,
    /// `None` when the listing carries no parseable price
    pub price: Option<f64>,
}

impl Product {
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price: Option<f64>) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            price,
        }
    }
}

/// Price movement of one product between the stored snapshot and this run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceChange {
    pub name: String,
    pub sku: String,
    pub previous_price: Option<f64>,
    pub current_price: Option<f64>,
    /// `previous_price - current_price`, so a drop is positive.
    /// Only present when both prices are known.
    pub difference: Option<f64>,
}

impl PriceChange {
    pub fn new(product: &Product, previous_price: Option<f64>) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone(),
            previous_price,
            current_price: product.price,
            difference: price_difference(previous_price, product.price),
        }
    }
}

/// Difference rounded to whole cents, since stored prices only keep two decimals.
pub fn price_difference(previous: Option<f64>, current: Option<f64>) -> Option<f64> {
    match (previous, current) {
        (Some(prev), Some(cur)) => Some(((prev - cur) * 100.0).round() / 100.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_drop_is_positive() {
        assert_eq!(price_difference(Some(10.0), Some(5.0)), Some(5.0));
    }

    #[test]
    fn price_rise_is_negative() {
        assert_eq!(price_difference(Some(10.0), Some(20.0)), Some(-10.0));
    }

    #[test]
    fn difference_absent_when_either_side_missing() {
        assert_eq!(price_difference(None, Some(5.0)), None);
        assert_eq!(price_difference(Some(5.0), None), None);
        assert_eq!(price_difference(None, None), None);
    }

    #[test]
    fn difference_rounds_to_cents() {
        assert_eq!(price_difference(Some(9.99), Some(7.49)), Some(2.5));
    }

    #[test]
    fn unchanged_price_has_zero_difference() {
        assert_eq!(price_difference(Some(42.0), Some(42.0)), Some(0.0));
    }

    #[test]
    fn product_serializes_missing_price_as_null() {
        let product = Product::new("1441557", "Octomore 10.3", None);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Octomore 10.3", "sku": "1441557", "price": null})
        );
    }

    #[test]
    fn price_change_carries_product_fields() {
        let product = Product::new("1", "Laphroaig 10", Some(5.0));
        let change = PriceChange::new(&product, Some(10.0));
        assert_eq!(change.sku, "1");
        assert_eq!(change.name, "Laphroaig 10");
        assert_eq!(change.previous_price, Some(10.0));
        assert_eq!(change.current_price, Some(5.0));
        assert_eq!(change.difference, Some(5.0));
    }
}
