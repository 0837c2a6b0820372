use serde::Serialize;

/// Closed enumeration of integrands with a tabulated antiderivative.
/// Matching is literal on the normalized expression text; nothing here
/// attempts symbolic recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KnownIntegral {
    Constant,
    Identity,
    Square,
    Cube,
    Quartic,
    SquaredBinomial,
    Sine,
    Cosine,
    Exponential,
    Reciprocal,
    ArctangentKernel,
    SquareRoot,
    NaturalLog
}

impl KnownIntegral {
    pub const ALL: [KnownIntegral; 13] = [
        KnownIntegral::Constant,
        KnownIntegral::Identity,
        KnownIntegral::Square,
        KnownIntegral::Cube,
        KnownIntegral::Quartic,
        KnownIntegral::SquaredBinomial,
        KnownIntegral::Sine,
        KnownIntegral::Cosine,
        KnownIntegral::Exponential,
        KnownIntegral::Reciprocal,
        KnownIntegral::ArctangentKernel,
        KnownIntegral::SquareRoot,
        KnownIntegral::NaturalLog
    ];

    /// Normalized spellings that select this entry.
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            KnownIntegral::Constant => &["1"],
            KnownIntegral::Identity => &["x"],
            KnownIntegral::Square => &["x^2"],
            KnownIntegral::Cube => &["x^3"],
            KnownIntegral::Quartic => &["x^4"],
            KnownIntegral::SquaredBinomial => &["x^2+2*x+1"],
            KnownIntegral::Sine => &["sin(x)"],
            KnownIntegral::Cosine => &["cos(x)"],
            KnownIntegral::Exponential => &["e^x", "exp(x)"],
            KnownIntegral::Reciprocal => &["1/x"],
            KnownIntegral::ArctangentKernel => &["1/(1+x^2)"],
            KnownIntegral::SquareRoot => &["sqrt(x)"],
            KnownIntegral::NaturalLog => &["ln(x)", "log(x)"]
        }
    }

    /// Strips all whitespace and lowercases.
    pub fn normalize(expression: &str) -> String {
        expression.chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    }

    pub fn lookup(expression: &str) -> Option<KnownIntegral> {
        let normalized = KnownIntegral::normalize(expression);
        KnownIntegral::ALL.into_iter()
            .find(|known| known.keys().contains(&normalized.as_str()))
    }

    pub fn antiderivative(&self, x: f64) -> f64 {
        match self {
            KnownIntegral::Constant => x,
            KnownIntegral::Identity => x.powi(2) / 2.0,
            KnownIntegral::Square => x.powi(3) / 3.0,
            KnownIntegral::Cube => x.powi(4) / 4.0,
            KnownIntegral::Quartic => x.powi(5) / 5.0,
            KnownIntegral::SquaredBinomial => x.powi(3) / 3.0 + x.powi(2) + x,
            KnownIntegral::Sine => -x.cos(),
            KnownIntegral::Cosine => x.sin(),
            KnownIntegral::Exponential => x.exp(),
            KnownIntegral::Reciprocal => x.abs().ln(),
            KnownIntegral::ArctangentKernel => x.atan(),
            KnownIntegral::SquareRoot => (2.0 / 3.0) * x.powf(1.5),
            KnownIntegral::NaturalLog => x * x.ln() - x
        }
    }

    /// Whether the antiderivative is valid over all of `[a, b]`.
    pub fn applies_on(&self, a: f64, b: f64) -> bool {
        match self {
            KnownIntegral::Reciprocal => a > 0.0 || b < 0.0,
            KnownIntegral::SquareRoot => a >= 0.0,
            KnownIntegral::NaturalLog => a > 0.0,
            _ => true
        }
    }

    /// `F(b) - F(a)`, or `None` when the antiderivative does not hold on
    /// the interval.
    pub fn definite(&self, a: f64, b: f64) -> Option<f64> {
        if self.applies_on(a, b) {
            Some(self.antiderivative(b) - self.antiderivative(a))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn lookup_normalizes_whitespace_and_case() {
        assert_eq!(KnownIntegral::lookup(" X ^ 2 "), Some(KnownIntegral::Square));
        assert_eq!(KnownIntegral::lookup("SIN( x )"), Some(KnownIntegral::Sine));
        assert_eq!(KnownIntegral::lookup("exp(x)"), Some(KnownIntegral::Exponential));
        assert_eq!(KnownIntegral::lookup("E^X"), Some(KnownIntegral::Exponential));
    }

    #[test]
    fn lookup_never_matches_partially() {
        assert_eq!(KnownIntegral::lookup("x*sin(x)"), None);
        assert_eq!(KnownIntegral::lookup("x^2+1"), None);
        assert_eq!(KnownIntegral::lookup("x**2"), None);
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = KnownIntegral::ALL.iter().flat_map(|known| known.keys().iter().copied()).collect();
        let count = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), count);
    }

    #[test]
    fn definite_integrals_of_table_entries() {
        let pi = std::f64::consts::PI;
        assert_relative_eq!(KnownIntegral::Square.definite(0.0, 1.0).unwrap(), 1.0 / 3.0);
        assert_relative_eq!(KnownIntegral::Sine.definite(0.0, pi).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(KnownIntegral::ArctangentKernel.definite(0.0, 1.0).unwrap(), pi / 4.0, epsilon = 1e-12);
        assert_relative_eq!(KnownIntegral::SquaredBinomial.definite(0.0, 1.0).unwrap(), 7.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(KnownIntegral::Reciprocal.definite(-2.0, -1.0).unwrap(), -(2f64.ln()), epsilon = 1e-12);
        assert_relative_eq!(KnownIntegral::NaturalLog.definite(1.0, std::f64::consts::E).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn antiderivatives_outside_their_domain_do_not_apply() {
        assert_eq!(KnownIntegral::Reciprocal.definite(-1.0, 1.0), None);
        assert_eq!(KnownIntegral::SquareRoot.definite(-1.0, 1.0), None);
        assert_eq!(KnownIntegral::NaturalLog.definite(0.0, 1.0), None);
        assert!(KnownIntegral::SquareRoot.definite(0.0, 4.0).is_some());
    }
}
