//! Catalog filter state for the `GET /cars` listing.
//!
//! DESIGN
//! ======
//! Filters live apart from fetched results so the filter bar can edit them
//! freely and the catalog page decides when a new query actually runs.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

/// User-selected catalog filters; `None` fields are omitted from the query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarFilters {
    /// Manufacturer name, exactly as listed by `GET /brands`.
    pub brand: Option<String>,
    /// Maximum hourly price bucket (e.g. `"40"`).
    pub rental_price: Option<String>,
    /// Inclusive lower mileage bound.
    pub min_mileage: Option<u32>,
    /// Inclusive upper mileage bound.
    pub max_mileage: Option<u32>,
}

impl CarFilters {
    /// Whether no filter is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Render the active filters as rental-API query pairs (camelCase wire
    /// names), ready for URL assembly.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(brand) = &self.brand {
            pairs.push(("brand", brand.clone()));
        }
        if let Some(price) = &self.rental_price {
            pairs.push(("rentalPrice", price.clone()));
        }
        if let Some(min) = self.min_mileage {
            pairs.push(("minMileage", min.to_string()));
        }
        if let Some(max) = self.max_mileage {
            pairs.push(("maxMileage", max.to_string()));
        }
        pairs
    }
}
