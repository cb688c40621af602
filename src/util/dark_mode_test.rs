use super::*;

#[test]
fn read_preference_defaults_to_light_outside_the_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_the_flag() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
