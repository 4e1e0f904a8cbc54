use crate::test_utils::lazy_pool;
use salon_api::ApiState;

#[tokio::test]
async fn test_state_accepts_day_long_tokens() {
    let state = ApiState::new(lazy_pool(), 24).unwrap();

    assert_eq!(state.token_ttl, chrono::Duration::hours(24));
}

#[tokio::test]
async fn test_state_rejects_unrepresentable_token_lifetime() {
    assert!(ApiState::new(lazy_pool(), i64::MAX).is_err());
    assert!(ApiState::new(lazy_pool(), 0).is_err());
}
