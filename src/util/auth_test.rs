use super::*;

#[test]
fn token_key_matches_session_provider_contract() {
    assert_eq!(ACCESS_TOKEN_KEY, "accessToken");
}

#[test]
fn access_token_is_none_outside_the_browser() {
    assert_eq!(access_token(), None);
}
