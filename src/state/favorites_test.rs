use super::*;

fn car(id: &str) -> Car {
    Car {
        id: id.to_owned(),
        year: 2023,
        make: "Tesla".to_owned(),
        model: "Model 3".to_owned(),
        car_type: "Sedan".to_owned(),
        img: String::new(),
        description: String::new(),
        fuel_consumption: "7.2".to_owned(),
        engine_size: "2.0L".to_owned(),
        accessories: Vec::new(),
        functionalities: Vec::new(),
        rental_price: "$50".to_owned(),
        rental_company: "Luxury Car Rentals".to_owned(),
        address: "123 Example Street, Kyiv, Ukraine".to_owned(),
        rental_conditions: String::new(),
        mileage: 1000,
    }
}

fn ids(state: &FavoritesState) -> Vec<String> {
    state.favorites.iter().map(|c| c.id.clone()).collect()
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_adds_then_removes() {
    let mut state = FavoritesState::default();
    state.toggle(car("1"));
    assert!(state.is_favorite("1"));
    assert_eq!(state.count(), 1);
    state.toggle(car("1"));
    assert!(!state.is_favorite("1"));
    assert_eq!(state.count(), 0);
}

#[test]
fn toggle_twice_restores_prior_collection() {
    let mut state = FavoritesState::default();
    state.toggle(car("1"));
    state.toggle(car("2"));
    let before = state.favorites.clone();
    state.toggle(car("3"));
    state.toggle(car("3"));
    assert_eq!(state.favorites, before);
}

#[test]
fn toggle_never_duplicates_ids() {
    let mut state = FavoritesState::default();
    for id in ["1", "2", "1", "3", "2", "1"] {
        state.toggle(car(id));
    }
    let mut seen = ids(&state);
    assert_eq!(seen, ["3", "1"]);
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), state.count());
}

#[test]
fn toggle_preserves_insertion_order() {
    let mut state = FavoritesState::default();
    state.toggle(car("1"));
    state.toggle(car("2"));
    state.toggle(car("3"));
    state.toggle(car("2"));
    assert_eq!(ids(&state), ["1", "3"]);
    state.toggle(car("2"));
    assert_eq!(ids(&state), ["1", "3", "2"]);
}

#[test]
fn toggle_ignores_empty_id() {
    let mut state = FavoritesState::default();
    state.toggle(car(""));
    assert_eq!(state.count(), 0);
    assert!(!state.dirty);
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn default_state_is_unhydrated_and_empty() {
    let state = FavoritesState::default();
    assert!(!state.hydrated);
    assert!(!state.is_favorite("1"));
    assert_eq!(state.count(), 0);
}

#[test]
fn seed_replaces_collection_when_untouched() {
    let mut state = FavoritesState::default();
    state.seed(vec![car("1"), car("2")]);
    assert!(state.hydrated);
    assert_eq!(ids(&state), ["1", "2"]);
}

#[test]
fn seed_keeps_pre_hydration_mutations() {
    let mut state = FavoritesState::default();
    state.toggle(car("9"));
    state.seed(vec![car("1"), car("2")]);
    assert!(state.hydrated);
    assert_eq!(ids(&state), ["9"]);
}

#[test]
fn seed_runs_at_most_once() {
    let mut state = FavoritesState::default();
    state.seed(vec![car("1")]);
    state.seed(vec![car("2"), car("3")]);
    assert_eq!(ids(&state), ["1"]);
}

#[test]
fn toggle_after_seed_edits_seeded_collection() {
    let mut state = FavoritesState::default();
    state.seed(vec![car("1"), car("2")]);
    state.toggle(car("1"));
    assert_eq!(ids(&state), ["2"]);
}

#[test]
fn favoriting_scenario_from_empty_store() {
    let mut state = FavoritesState::default();
    state.seed(Vec::new());
    state.toggle(car("1"));
    assert!(state.is_favorite("1"));
    assert_eq!(state.count(), 1);
    state.toggle(car("1"));
    assert!(!state.is_favorite("1"));
    assert_eq!(state.count(), 0);
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_round_trip_preserves_ids_and_order() {
    let cars = vec![car("1"), car("2")];
    let raw = serde_json::to_string(&envelope_for(&cars)).unwrap();
    assert_eq!(decode_envelope(&raw), cars);
}

#[test]
fn envelope_uses_persisted_wire_layout() {
    let raw = serde_json::to_string(&envelope_for(&[car("1")])).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], 0);
    assert_eq!(value["state"]["favorites"][0]["id"], "1");
}

#[test]
fn decode_envelope_tolerates_corrupt_payload() {
    assert!(decode_envelope("not json at all").is_empty());
    assert!(decode_envelope("{\"state\":42}").is_empty());
    assert!(decode_envelope("").is_empty());
}

#[test]
fn decode_envelope_rejects_unknown_version() {
    let mut value = serde_json::to_value(envelope_for(&[car("1")])).unwrap();
    value["version"] = serde_json::json!(99);
    assert!(decode_envelope(&value.to_string()).is_empty());
}

#[test]
fn decode_envelope_defaults_missing_favorites() {
    assert!(decode_envelope(r#"{"state":{},"version":0}"#).is_empty());
}
