//! Property-based tests for the quadrature rules and the comparator.

use proptest::prelude::*;

use crate::accuracy::errorreport::{
    ErrorReport,
    RelativeError
};
use crate::comparison::comparator::Comparator;
use crate::exact::exactvalue::ExactValue;
use crate::quadrature::quadraturemethod::QuadratureMethod;
use crate::quadrature::romberg::romberg;
use crate::quadrature::simpson::{
    simpson13,
    simpson38
};
use crate::quadrature::trapezoidal::trapezoidal;

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

// Interval [a, a + width] with a moderate magnitude
fn interval() -> impl Strategy<Value = (f64, f64)> {
    (-20.0f64..20.0, 0.01f64..20.0).prop_map(|(a, width)| (a, a + width))
}

fn partitions() -> impl Strategy<Value = usize> {
    1usize..200
}

proptest! {
    #[test]
    fn constant_integrand_gives_interval_width((a, b) in interval(), n in partitions()) {
        let one = |_x: f64| 1.0;
        prop_assert!(close(trapezoidal(&one, a, b, n).unwrap().value(), b - a));
        prop_assert!(close(simpson13(&one, a, b, n).unwrap().value(), b - a));
        prop_assert!(close(simpson38(&one, a, b, n).unwrap().value(), b - a));
    }

    #[test]
    fn trapezoidal_is_exact_for_lines((a, b) in interval(), n in partitions()) {
        let result = trapezoidal(&|x: f64| x, a, b, n).unwrap();
        prop_assert!(close(result.value(), (b * b - a * a) / 2.0));
    }

    #[test]
    fn simpson13_is_exact_for_cubics((a, b) in interval(), n in partitions()) {
        let square = simpson13(&|x: f64| x * x, a, b, n).unwrap();
        prop_assert!(close(square.value(), (b.powi(3) - a.powi(3)) / 3.0));
        let cube = simpson13(&|x: f64| x * x * x, a, b, n).unwrap();
        prop_assert!(close(cube.value(), (b.powi(4) - a.powi(4)) / 4.0));
    }

    #[test]
    fn simpson13_odd_counts_match_the_next_even_count((a, b) in interval(), half in 0usize..100) {
        let n = 2 * half + 1;
        let f = |x: f64| x.sin() + x * x;
        let adjusted = simpson13(&f, a, b, n).unwrap();
        let direct = simpson13(&f, a, b, n + 1).unwrap();
        prop_assert_eq!(adjusted.value(), direct.value());
        prop_assert_eq!(adjusted.adjusted_partition_count(), Some(n + 1));
    }

    #[test]
    fn simpson38_rounds_up_to_a_multiple_of_three((a, b) in interval(), n in partitions()) {
        let f = |x: f64| x.cos();
        let expected = n.div_ceil(3) * 3;
        let adjusted = simpson38(&f, a, b, n).unwrap();
        let direct = simpson38(&f, a, b, expected).unwrap();
        prop_assert_eq!(adjusted.value(), direct.value());
        prop_assert_eq!(adjusted.partition_count(), expected);
        prop_assert_eq!(adjusted.adjusted_partition_count(), if n % 3 == 0 { None } else { Some(expected) });
    }

    #[test]
    fn romberg_first_column_is_trapezoidal((a, b) in interval(), levels in 1usize..8) {
        let f = |x: f64| (x / 3.0).exp();
        let result = romberg(&f, a, b, levels).unwrap();
        for (k, value) in result.table().first_column().into_iter().enumerate() {
            prop_assert_eq!(value, trapezoidal(&f, a, b, 1 << k).unwrap().value());
        }
    }

    #[test]
    fn zero_reference_never_leaks_nan(approximation in -1e6f64..1e6) {
        let report = ErrorReport::compute(0.0, approximation);
        prop_assert_eq!(report.relative_error_percent(), RelativeError::Undefined);
        prop_assert!(close(report.absolute_error(), approximation.abs()));
    }

    #[test]
    fn comparator_picks_the_smallest_error((a, b) in interval(), n in partitions(), exact in -100.0f64..100.0) {
        let f = |x: f64| x.sin();
        let exact = ExactValue::manual(exact);
        let comparator = Comparator::new(&QuadratureMethod::ALL).with_romberg_levels(4);
        let comparison = comparator.compare(&f, a, b, n, Some(&exact)).unwrap();
        let best = comparison.best().unwrap();
        let best_error = best.error().unwrap().absolute_error();
        let best_index = comparison.entries().iter().position(|entry| entry.method() == best.method()).unwrap();
        for (index, entry) in comparison.entries().iter().enumerate() {
            let error = entry.error().unwrap().absolute_error();
            prop_assert!(best_error <= error);
            if index < best_index {
                prop_assert!(best_error < error);
            }
        }
    }
}
