use log::debug;

use crate::configuration::Configuration;
use crate::evaluator::expression::{
    EvalexprCompiler,
    ExpressionCompiler
};
use crate::quadrature::quadraturemethod::QuadratureMethod;

use super::integrationerror::IntegrationError;
use super::report::{
    ComparisonReport,
    IntegrationOutcome,
    IntegrationReport
};
use super::request::IntegrationRequest;

/// Request-to-report pipeline: validate, compile, resolve the reference
/// value, run the rule(s), attach errors.
pub struct Integrator {
    configuration: Configuration,
    compiler: Box<dyn ExpressionCompiler>
}

impl Integrator {
    pub fn new(configuration: Configuration) -> Integrator {
        Integrator::with_compiler(configuration, Box::new(EvalexprCompiler::new()))
    }

    pub fn with_compiler(configuration: Configuration, compiler: Box<dyn ExpressionCompiler>) -> Integrator {
        Integrator { configuration, compiler }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    fn romberg_levels(&self, request: &IntegrationRequest) -> usize {
        request.romberg_levels().unwrap_or(self.configuration.romberg_levels())
    }

    pub fn integrate(&self,
                     request: &IntegrationRequest,
                     method: QuadratureMethod) -> Result<IntegrationReport, IntegrationError> {
        let input = request.validate()?;
        let f = self.compiler.compile(request.expression())?;
        let (a, b) = (input.bounds().lower(), input.bounds().upper());

        let exact = self.configuration
            .resolver()
            .resolve(request.expression(), &*f, a, b, request.manual_exact_value());
        let outcome = method.apply(&*f, a, b, input.partition_count(), self.romberg_levels(request))?;
        debug!("{} of '{}' on [{}, {}]: {}", method, request.expression(), a, b, outcome.result().value());

        let (result, romberg_table) = outcome.into_parts();
        Ok(IntegrationReport::new(request.expression().to_owned(),
                                  input.bounds(),
                                  input.partition_count(),
                                  method,
                                  result,
                                  romberg_table,
                                  exact))
    }

    pub fn compare(&self, request: &IntegrationRequest) -> Result<ComparisonReport, IntegrationError> {
        let input = request.validate()?;
        let methods = request.methods().unwrap_or(self.configuration.default_methods());
        if methods.is_empty() {
            return Err(IntegrationError::NoMethodsSelected);
        }
        let f = self.compiler.compile(request.expression())?;
        let (a, b) = (input.bounds().lower(), input.bounds().upper());

        let exact = self.configuration
            .resolver()
            .resolve(request.expression(), &*f, a, b, request.manual_exact_value());
        let comparison = self.configuration
            .comparator(methods, self.romberg_levels(request))
            .compare(&*f, a, b, input.partition_count(), exact.as_ref())?;

        Ok(ComparisonReport::new(request.expression().to_owned(), input.bounds(), input.partition_count(), comparison))
    }

    /// Single-method run when the request names exactly one method,
    /// comparison otherwise.
    pub fn run(&self, request: &IntegrationRequest) -> Result<IntegrationOutcome, IntegrationError> {
        match request.methods() {
            Some([method]) => Ok(IntegrationOutcome::Single(self.integrate(request, *method)?)),
            _ => Ok(IntegrationOutcome::Comparison(self.compare(request)?))
        }
    }
}

impl Default for Integrator {
    fn default() -> Integrator {
        Integrator::new(Configuration::default())
    }
}
