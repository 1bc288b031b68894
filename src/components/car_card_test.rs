use super::*;

#[test]
fn format_mileage_groups_thousands() {
    assert_eq!(format_mileage(5250), "5 250 km");
    assert_eq!(format_mileage(100), "100 km");
    assert_eq!(format_mileage(1000), "1 000 km");
    assert_eq!(format_mileage(1234567), "1 234 567 km");
}

#[test]
fn location_parts_drops_street_segment() {
    assert_eq!(
        location_parts("123 Example Street, Kyiv, Ukraine"),
        ["Kyiv", "Ukraine"]
    );
}

#[test]
fn location_parts_handles_unstructured_address() {
    assert!(location_parts("Kyiv").is_empty());
}
