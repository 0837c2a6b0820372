use log::debug;
use serde::Serialize;

use crate::accuracy::errorreport::ErrorReport;
use crate::exact::exactvalue::ExactValue;
use crate::quadrature::quadratureerror::QuadratureError;
use crate::quadrature::quadraturemethod::QuadratureMethod;
use crate::quadrature::romberg::DEFAULT_ROMBERG_LEVELS;

use super::comparisonentry::{
    ComparisonEntry,
    ReferenceDivergence
};

/// Entries of one comparison run, in method enumeration order.
///
/// With a reference value, `ranking` lists entry indices by ascending
/// absolute error (stable, so ties keep enumeration order) and `best` is
/// its head. Without one, neither is available and each entry carries a
/// [`ReferenceDivergence`] instead.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    entries: Vec<ComparisonEntry>,
    exact: Option<ExactValue>,
    ranking: Vec<usize>,
    best: Option<usize>
}

impl Comparison {
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    pub fn exact(&self) -> Option<&ExactValue> {
        self.exact.as_ref()
    }

    pub fn ranking(&self) -> &[usize] {
        &self.ranking
    }

    pub fn ranked_entries(&self) -> Vec<&ComparisonEntry> {
        self.ranking.iter().map(|&index| &self.entries[index]).collect()
    }

    pub fn best(&self) -> Option<&ComparisonEntry> {
        self.best.map(|index| &self.entries[index])
    }

    pub fn entry(&self, method: QuadratureMethod) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|entry| entry.method() == method)
    }
}

/// Runs several rules over the same inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparator {
    methods: Vec<QuadratureMethod>,
    reference_method: QuadratureMethod,
    romberg_levels: usize
}

impl Comparator {
    /// Duplicates are dropped and the selection is put in enumeration
    /// order.
    pub fn new(methods: &[QuadratureMethod]) -> Comparator {
        let mut methods = methods.to_vec();
        methods.sort();
        methods.dedup();
        Comparator { methods, reference_method: QuadratureMethod::Simpson13, romberg_levels: DEFAULT_ROMBERG_LEVELS }
    }

    pub fn with_reference_method(mut self, reference_method: QuadratureMethod) -> Comparator {
        self.reference_method = reference_method;
        self
    }

    pub fn with_romberg_levels(mut self, romberg_levels: usize) -> Comparator {
        self.romberg_levels = romberg_levels;
        self
    }

    pub fn methods(&self) -> &[QuadratureMethod] {
        &self.methods
    }

    pub fn reference_method(&self) -> QuadratureMethod {
        self.reference_method
    }

    pub fn compare<F>(&self,
                      f: &F,
                      a: f64,
                      b: f64,
                      n: usize,
                      exact: Option<&ExactValue>) -> Result<Comparison, QuadratureError>
        where F: Fn(f64) -> f64 + ?Sized {
        let mut outcomes = Vec::with_capacity(self.methods.len());
        for method in &self.methods {
            outcomes.push(method.apply(f, a, b, n, self.romberg_levels)?);
        }

        let comparison = match exact {
            Some(exact) => {
                let entries: Vec<ComparisonEntry> = outcomes.into_iter()
                    .map(|outcome| {
                        let method = outcome.method();
                        let (result, table) = outcome.into_parts();
                        let error = ErrorReport::against(exact, result.value());
                        ComparisonEntry::new(method, result, table, Some(error), None)
                    })
                    .collect();
                let ranking = rank_by_absolute_error(&entries);
                let best = ranking.first()
                    .copied()
                    .filter(|&index| entries[index].error().is_some_and(|error| !error.absolute_error().is_nan()));
                Comparison { entries, exact: Some(*exact), ranking, best }
            },
            None => {
                let reference_value = match outcomes.iter().find(|outcome| outcome.method() == self.reference_method) {
                    Some(outcome) => outcome.result().value(),
                    None => self.reference_method.apply(f, a, b, n, self.romberg_levels)?.result().value()
                };
                let entries = outcomes.into_iter()
                    .map(|outcome| {
                        let method = outcome.method();
                        let (result, table) = outcome.into_parts();
                        let divergence = ReferenceDivergence::new(self.reference_method, reference_value, result.value());
                        ComparisonEntry::new(method, result, table, None, Some(divergence))
                    })
                    .collect();
                Comparison { entries, exact: None, ranking: Vec::new(), best: None }
            }
        };

        if let Some(best) = comparison.best() {
            debug!("best method on [{}, {}] with n = {}: {}", a, b, n, best.method());
        }
        Ok(comparison)
    }
}

impl Default for Comparator {
    fn default() -> Comparator {
        Comparator::new(&QuadratureMethod::DEFAULT_COMPARISON)
    }
}

/// Stable sort on absolute error; NaN errors sort last.
fn rank_by_absolute_error(entries: &[ComparisonEntry]) -> Vec<usize> {
    let key = |index: &usize| entries[*index].error().map_or(f64::NAN, |error| error.absolute_error());
    let mut ranking: Vec<usize> = (0..entries.len()).collect();
    ranking.sort_by(|lhs, rhs| key(lhs).total_cmp(&key(rhs)));
    ranking
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::exact::exactvalue::ExactValueSource;
    use crate::exact::knownintegral::KnownIntegral;

    use super::*;

    fn closed_form(value: f64) -> ExactValue {
        ExactValue::new(value, ExactValueSource::ClosedForm { integrand: KnownIntegral::Square })
    }

    #[test]
    fn selects_the_smallest_absolute_error() {
        let square = |x: f64| x * x;
        let exact = closed_form(1.0 / 3.0);
        let comparison = Comparator::default().compare(&square, 0.0, 1.0, 4, Some(&exact)).unwrap();
        assert_eq!(comparison.entries().len(), 3);
        let best = comparison.best().unwrap();
        let smallest = comparison.entries().iter()
            .map(|entry| entry.error().unwrap().absolute_error())
            .fold(f64::INFINITY, f64::min);
        assert_eq!(best.error().unwrap().absolute_error(), smallest);
    }

    #[test]
    fn selection_is_put_in_enumeration_order() {
        let comparator = Comparator::new(&[QuadratureMethod::Romberg, QuadratureMethod::Simpson38, QuadratureMethod::Simpson13, QuadratureMethod::Simpson38]);
        assert_eq!(comparator.methods(), &[QuadratureMethod::Simpson13, QuadratureMethod::Simpson38, QuadratureMethod::Romberg]);
    }

    #[test]
    fn constant_integrand_ties_everywhere() {
        let exact = closed_form(2.0);
        let comparator = Comparator::new(&[QuadratureMethod::RiemannLeft, QuadratureMethod::Trapezoidal, QuadratureMethod::RiemannRight]);
        let comparison = comparator.compare(&|_x: f64| 1.0, 1.0, 3.0, 4, Some(&exact)).unwrap();
        assert_eq!(comparison.ranking(), &[0, 1, 2]);
        assert_eq!(comparison.best().unwrap().method(), QuadratureMethod::Trapezoidal);
    }

    #[test]
    fn entries_adjust_partitions_independently() {
        let exact = closed_form(1.0 / 3.0);
        let comparison = Comparator::default().compare(&|x: f64| x * x, 0.0, 1.0, 5, Some(&exact)).unwrap();
        assert_eq!(comparison.entry(QuadratureMethod::Trapezoidal).unwrap().adjusted_partition_count(), None);
        assert_eq!(comparison.entry(QuadratureMethod::Simpson13).unwrap().adjusted_partition_count(), Some(6));
        assert_eq!(comparison.entry(QuadratureMethod::Simpson38).unwrap().adjusted_partition_count(), Some(6));
    }

    #[test]
    fn without_exact_value_reports_divergence_only() {
        let f = |x: f64| x.exp();
        let comparison = Comparator::default().compare(&f, 0.0, 1.0, 4, None).unwrap();
        assert!(comparison.best().is_none());
        assert!(comparison.ranking().is_empty());
        let reference = comparison.entry(QuadratureMethod::Simpson13).unwrap();
        assert_eq!(reference.divergence().unwrap().difference(), 0.0);
        let trapezoid = comparison.entry(QuadratureMethod::Trapezoidal).unwrap();
        assert!(trapezoid.error().is_none());
        assert_relative_eq!(trapezoid.divergence().unwrap().difference(), trapezoid.value() - reference.value());
    }

    #[test]
    fn reference_rule_runs_even_when_not_selected() {
        let comparator = Comparator::new(&[QuadratureMethod::RiemannLeft]);
        let comparison = comparator.compare(&|x: f64| x, 0.0, 1.0, 2, None).unwrap();
        let divergence = comparison.entries()[0].divergence().unwrap();
        assert_eq!(divergence.reference(), QuadratureMethod::Simpson13);
        assert_relative_eq!(divergence.reference_value(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(divergence.difference(), -0.25, epsilon = 1e-12);
    }

    #[test]
    fn romberg_entries_keep_their_table() {
        let exact = closed_form(1.0 / 3.0);
        let comparator = Comparator::new(&[QuadratureMethod::Romberg]).with_romberg_levels(3);
        let comparison = comparator.compare(&|x: f64| x * x, 0.0, 1.0, 4, Some(&exact)).unwrap();
        assert_eq!(comparison.entries()[0].romberg_table().map(|table| table.levels()), Some(3));
    }

    #[test]
    fn nan_errors_never_win() {
        let exact = closed_form(1.0);
        let comparator = Comparator::new(&[QuadratureMethod::Trapezoidal]);
        let comparison = comparator.compare(&|_x: f64| f64::NAN, 0.0, 1.0, 2, Some(&exact)).unwrap();
        assert!(comparison.best().is_none());
    }
}
