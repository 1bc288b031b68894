use super::*;

#[test]
fn default_filters_are_empty() {
    let filters = CarFilters::default();
    assert!(filters.is_empty());
    assert!(filters.to_query_pairs().is_empty());
}

#[test]
fn any_set_field_makes_filters_non_empty() {
    let filters = CarFilters {
        min_mileage: Some(0),
        ..CarFilters::default()
    };
    assert!(!filters.is_empty());
}

#[test]
fn brand_only_renders_single_pair() {
    let filters = CarFilters {
        brand: Some("Buick".to_owned()),
        ..CarFilters::default()
    };
    assert_eq!(
        filters.to_query_pairs(),
        vec![("brand", "Buick".to_owned())]
    );
}

#[test]
fn full_filters_render_in_wire_order() {
    let filters = CarFilters {
        brand: Some("Buick".to_owned()),
        rental_price: Some("40".to_owned()),
        min_mileage: Some(2500),
        max_mileage: Some(7500),
    };
    assert_eq!(
        filters.to_query_pairs(),
        vec![
            ("brand", "Buick".to_owned()),
            ("rentalPrice", "40".to_owned()),
            ("minMileage", "2500".to_owned()),
            ("maxMileage", "7500".to_owned()),
        ]
    );
}

#[test]
fn partial_filters_skip_unset_fields() {
    let filters = CarFilters {
        rental_price: Some("30".to_owned()),
        max_mileage: Some(10000),
        ..CarFilters::default()
    };
    assert_eq!(
        filters.to_query_pairs(),
        vec![
            ("rentalPrice", "30".to_owned()),
            ("maxMileage", "10000".to_owned()),
        ]
    );
}
