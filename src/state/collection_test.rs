use super::*;

fn sneaker(id: i64, name: &str) -> Sneaker {
    Sneaker {
        id,
        name: name.to_owned(),
        colorway: "Default".to_owned(),
        brand: "Brand".to_owned(),
        price: Some(100.0),
        image: None,
        link: None,
        description: Some("catalog text".to_owned()),
        note: None,
    }
}

// =============================================================
// Defaults and loading
// =============================================================

#[test]
fn collection_state_default_is_empty() {
    let state = CollectionState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.load_generation, 0);
}

#[test]
fn begin_load_bumps_generation_and_sets_loading() {
    let mut state = CollectionState::default();
    let first = state.begin_load();
    assert_eq!(first, 1);
    assert!(state.loading);
    let second = state.begin_load();
    assert_eq!(second, 2);
    assert!(state.is_current_load(second));
    assert!(!state.is_current_load(first));
}

#[test]
fn replace_swaps_entire_list_preserving_order() {
    let mut state = CollectionState::default();
    state.replace(vec![sneaker(9, "stale")]);
    state.replace(vec![sneaker(3, "c"), sneaker(1, "a"), sneaker(2, "b")]);
    let ids: Vec<i64> = state.items.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn fail_load_keeps_previous_items() {
    let mut state = CollectionState::default();
    state.replace(vec![sneaker(1, "Air Max")]);
    state.begin_load();
    state.fail_load("sneaker list request failed: 502".to_owned());
    assert_eq!(state.items.len(), 1);
    assert!(!state.loading);
    assert_eq!(
        state.error.as_deref(),
        Some("sneaker list request failed: 502")
    );
}

// =============================================================
// Note merge
// =============================================================

#[test]
fn apply_note_update_touches_only_the_note() {
    let mut state = CollectionState::default();
    state.replace(vec![sneaker(7, "Dunk Low"), sneaker(8, "Jordan 1")]);
    let before = state.items[0].clone();

    assert!(state.apply_note_update(7, "new note"));

    let updated = state.find(7).unwrap();
    assert_eq!(updated.note.as_deref(), Some("new note"));
    assert_eq!(updated.name, before.name);
    assert_eq!(updated.colorway, before.colorway);
    assert_eq!(updated.brand, before.brand);
    assert_eq!(updated.price, before.price);
    assert_eq!(updated.description, before.description);
    assert_eq!(state.find(8).unwrap().note, None);
}

#[test]
fn apply_note_update_misses_unknown_id() {
    let mut state = CollectionState::default();
    state.replace(vec![sneaker(1, "Air Max")]);
    assert!(!state.apply_note_update(99, "ghost"));
    assert_eq!(state.find(1).unwrap().note, None);
}

// =============================================================
// Delete
// =============================================================

#[test]
fn remove_drops_exactly_the_matching_item() {
    let mut state = CollectionState::default();
    state.replace(vec![sneaker(1, "a"), sneaker(2, "b"), sneaker(3, "c")]);
    assert!(state.remove(2));
    let ids: Vec<i64> = state.items.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn remove_last_item_leaves_empty_list() {
    let mut state = CollectionState::default();
    state.replace(vec![sneaker(1, "Air Max")]);
    assert!(state.remove(1));
    assert!(state.items.is_empty());
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let mut state = CollectionState::default();
    state.replace(vec![sneaker(1, "Air Max")]);
    assert!(!state.remove(99));
    assert_eq!(state.items.len(), 1);
}
