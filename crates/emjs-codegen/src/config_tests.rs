use crate::config::Config;

#[test]
fn default_matches_the_f2_through_f9_runtime() {
    let config = Config::default();
    assert_eq!(config.fresh_prefix, "_v");
    assert_eq!(config.min_curry_arity, 2);
    assert_eq!(config.max_curry_arity, 9);
}
