use super::*;

fn sneaker(id: i64, description: Option<&str>, note: Option<&str>) -> Sneaker {
    Sneaker {
        id,
        name: "Dunk Low".to_owned(),
        colorway: "Panda".to_owned(),
        brand: "Nike".to_owned(),
        price: None,
        image: None,
        link: None,
        description: description.map(str::to_owned),
        note: note.map(str::to_owned),
    }
}

#[test]
fn editor_starts_closed() {
    let state = EditorState::default();
    assert!(!state.is_open());
    assert!(state.errors.is_empty());
    assert!(!state.submit_pending);
}

#[test]
fn open_for_seeds_draft_from_existing_note() {
    let mut state = EditorState::default();
    state.open_for(&sneaker(7, Some("catalog text"), Some("my note")));
    assert_eq!(state.target_id, Some(7));
    assert_eq!(state.draft_note, "my note");
}

#[test]
fn open_for_falls_back_to_description() {
    let mut state = EditorState::default();
    state.open_for(&sneaker(7, Some("old note"), None));
    assert_eq!(state.draft_note, "old note");
}

#[test]
fn open_for_seeds_empty_draft_when_nothing_to_show() {
    let mut state = EditorState::default();
    state.open_for(&sneaker(7, None, None));
    assert_eq!(state.draft_note, "");
}

#[test]
fn reopen_resets_errors_and_pending() {
    let mut state = EditorState::default();
    state.open_for(&sneaker(7, None, None));
    assert!(!state.validate());
    state.submit_pending = true;

    state.open_for(&sneaker(8, None, Some("other")));
    assert_eq!(state.target_id, Some(8));
    assert!(state.errors.is_empty());
    assert!(!state.submit_pending);
}

#[test]
fn close_clears_everything() {
    let mut state = EditorState::default();
    state.open_for(&sneaker(7, None, Some("my note")));
    state.close();
    assert!(!state.is_open());
    assert_eq!(state.draft_note, "");
    assert!(state.errors.is_empty());
}

#[test]
fn validate_rejects_empty_note() {
    let mut state = EditorState::default();
    state.open_for(&sneaker(7, Some("old note"), None));
    state.draft_note.clear();
    assert!(!state.validate());
    assert_eq!(
        state.errors.description.as_deref(),
        Some(NOTE_REQUIRED_MESSAGE)
    );
}

#[test]
fn validate_accepts_untrimmed_content() {
    let mut state = EditorState::default();
    state.open_for(&sneaker(7, None, None));
    state.draft_note = "  spaced note ".to_owned();
    assert!(state.validate());
    assert!(state.errors.is_empty());
}

#[test]
fn validate_clears_stale_error_after_edit() {
    let mut state = EditorState::default();
    state.open_for(&sneaker(7, None, None));
    assert!(!state.validate());
    state.draft_note = "now filled".to_owned();
    assert!(state.validate());
    assert!(state.errors.is_empty());
}
