//! Rental API DTOs shared by pages, components, and the favorites store.
//!
//! DESIGN
//! ======
//! These types mirror the remote rental API's camelCase JSON so serde
//! round-trips stay lossless and listing/favorites code can share one car
//! model.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A rental car as returned by the remote API.
///
/// The favorites store only interprets `id`; the full record is kept so
/// favorited cars render without a re-fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Unique car identifier issued by the rental API.
    pub id: String,
    /// Model year.
    pub year: u16,
    /// Manufacturer name (e.g. `"Tesla"`).
    pub make: String,
    /// Model name (e.g. `"Model 3"`).
    pub model: String,
    /// Body/category label (wire name `type`).
    #[serde(rename = "type")]
    pub car_type: String,
    /// Photo URL.
    pub img: String,
    /// Short marketing description.
    pub description: String,
    /// Fuel consumption as formatted by the API (liters per 100 km).
    pub fuel_consumption: String,
    /// Engine displacement as formatted by the API.
    pub engine_size: String,
    /// Included accessories.
    #[serde(default)]
    pub accessories: Vec<String>,
    /// Included functionalities.
    #[serde(default)]
    pub functionalities: Vec<String>,
    /// Hourly rental price, already formatted (e.g. `"$40"`).
    pub rental_price: String,
    /// Company offering the rental.
    pub rental_company: String,
    /// Street address of the rental office.
    pub address: String,
    /// Rental conditions blob, formatting owned by the API.
    pub rental_conditions: String,
    /// Current odometer reading in kilometers.
    pub mileage: u32,
}

/// One page of the `GET /cars` listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarsPage {
    /// Cars on this page, in API order.
    pub cars: Vec<Car>,
    /// Total cars matching the active filters.
    pub total_cars: u32,
    /// 1-based page number this response covers.
    pub page: u32,
    /// Total pages matching the active filters.
    pub total_pages: u32,
}
