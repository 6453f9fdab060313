//! Tests for the abtest tracing setup.

use abtest_core::constants::DEFAULT_LOG_FILTER;
use abtest_core::tracing::setup::build_filter;

#[test]
fn test_unset_abtest_log_uses_default() {
    assert_eq!(build_filter(None).to_string(), DEFAULT_LOG_FILTER);
}

#[test]
fn test_blank_abtest_log_uses_default() {
    assert_eq!(build_filter(Some("   ")).to_string(), DEFAULT_LOG_FILTER);
}

#[test]
fn test_invalid_abtest_log_falls_back() {
    let filter = build_filter(Some("this_is_garbage=not_a_level"));
    assert_eq!(filter.to_string(), DEFAULT_LOG_FILTER);
}

#[test]
fn test_per_crate_directive_is_kept() {
    let filter = build_filter(Some("abtest_analysis=debug"));
    assert_eq!(filter.to_string(), "abtest_analysis=debug");
}

