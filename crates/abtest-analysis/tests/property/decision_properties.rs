use abtest_analysis::{analyze, classify, evaluate, GroupSample, TestConfiguration, Verdict};
use proptest::prelude::*;

/// A valid sample with up to `max_visitors` visitors.
fn sample_up_to(max_visitors: u64) -> impl Strategy<Value = GroupSample> {
    (1u64..=max_visitors).prop_flat_map(|visitors| {
        (0..=visitors).prop_map(move |conversions| GroupSample::new(visitors, conversions))
    })
}

fn sample() -> impl Strategy<Value = GroupSample> {
    sample_up_to(100_000)
}

fn confidence() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.80), Just(0.90), Just(0.95), Just(0.99), Just(0.999)]
}

proptest! {
    #[test]
    fn deterministic(a in sample(), b in sample(), c in confidence()) {
        let first = evaluate(a, b, c);
        let second = evaluate(a, b, c);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn swapping_groups_mirrors_verdict(a in sample(), b in sample(), c in confidence()) {
        let forward = evaluate(a, b, c).unwrap();
        let backward = evaluate(b, a, c).unwrap();
        prop_assert_eq!(backward, forward.mirrored());
    }

    #[test]
    fn higher_confidence_never_creates_a_decision(
        a in sample(),
        b in sample(),
        (low, high) in (0usize..5, 0usize..5).prop_filter("distinct", |(x, y)| x != y)
    ) {
        let levels = [0.80, 0.90, 0.95, 0.99, 0.999];
        let (low, high) = if low < high { (low, high) } else { (high, low) };
        let narrow = evaluate(a, b, levels[low]).unwrap();
        let wide = evaluate(a, b, levels[high]).unwrap();
        if wide.is_decisive() {
            prop_assert_eq!(narrow, wide);
        }
        if narrow == Verdict::Indeterminate {
            prop_assert_eq!(wide, Verdict::Indeterminate);
        }
    }

    #[test]
    fn equal_rates_are_indeterminate(
        a in sample_up_to(10_000),
        k in 1u64..=50,
        c in confidence()
    ) {
        let scaled = GroupSample::new(a.visitors * k, a.conversions * k);
        prop_assert_eq!(evaluate(a, scaled, c).unwrap(), Verdict::Indeterminate);
        prop_assert_eq!(evaluate(a, a, c).unwrap(), Verdict::Indeterminate);
    }

    #[test]
    fn verdict_agrees_with_report(a in sample(), b in sample(), c in confidence()) {
        let config = TestConfiguration::new(c).unwrap();
        let report = analyze(a, b, &config).unwrap();
        prop_assert!(report.standard_error >= 0.0);
        prop_assert!(report.margin_of_error >= 0.0);
        prop_assert_eq!(report.verdict, classify(report.difference, report.margin_of_error));
        prop_assert_eq!(report.verdict, evaluate(a, b, c).unwrap());
    }

    #[test]
    fn difference_on_the_margin_is_indeterminate(m in 0.0f64..1.0) {
        prop_assert_eq!(classify(m, m), Verdict::Indeterminate);
        prop_assert_eq!(classify(-m, m), Verdict::Indeterminate);
    }

    #[test]
    fn conversions_above_visitors_always_fail(
        visitors in 1u64..10_000,
        excess in 1u64..1_000,
        other in sample(),
        c in confidence()
    ) {
        let bad = GroupSample::new(visitors, visitors + excess);
        prop_assert!(evaluate(bad, other, c).is_err());
        prop_assert!(evaluate(other, bad, c).is_err());
    }

    #[test]
    fn out_of_range_confidence_always_fails(
        a in sample(),
        b in sample(),
        c in prop_oneof![-10.0f64..=0.0, 1.0f64..10.0]
    ) {
        prop_assert!(evaluate(a, b, c).is_err());
    }
}
