use evalexpr::{
    build_operator_tree,
    Context,
    ContextWithMutableFunctions,
    ContextWithMutableVariables,
    EvalexprError,
    EvalexprResult,
    Function,
    HashMapContext,
    Node,
    Operator,
    Value
};
use log::trace;
use thiserror::Error;

/// Abscissa used to probe a freshly parsed expression for identifiers
/// and arity mistakes that only surface at evaluation time.
const PROBE_ABSCISSA: f64 = 1.0;

const VARIABLE: &str = "x";

#[derive(Debug, Error)]
pub enum ExpressionError {
    #[error("expression must not be empty")]
    Empty,

    #[error("cannot parse expression '{expression}': {source}")]
    Parse { expression: String, source: EvalexprError },

    #[error("cannot evaluate expression '{expression}': {source}")]
    Probe { expression: String, source: EvalexprError }
}

/// A compiled real function of one variable. Evaluation failures are
/// reported as `NaN` so they flow into a quadrature sum like any other
/// non-finite sample.
pub type RealFunction = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// Turns an expression string in `x` into a callable.
pub trait ExpressionCompiler: Send + Sync {
    fn compile(&self, expression: &str) -> Result<RealFunction, ExpressionError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// evalexpr backend
// ─────────────────────────────────────────────────────────────────────────────

type UnaryFn = fn(f64) -> f64;

const UNARY_FUNCTIONS: [(&str, UnaryFn); 17] = [
    ("sin", f64::sin),
    ("cos", f64::cos),
    ("tan", f64::tan),
    ("asin", f64::asin),
    ("acos", f64::acos),
    ("atan", f64::atan),
    ("sinh", f64::sinh),
    ("cosh", f64::cosh),
    ("tanh", f64::tanh),
    ("exp", f64::exp),
    ("ln", f64::ln),
    ("log", f64::ln),
    ("log10", f64::log10),
    ("log2", f64::log2),
    ("sqrt", f64::sqrt),
    ("cbrt", f64::cbrt),
    ("abs", f64::abs)
];

const CONSTANTS: [(&str, f64); 2] = [
    ("pi", std::f64::consts::PI),
    ("e", std::f64::consts::E)
];

fn unary(function: UnaryFn) -> Function {
    Function::new(move |argument| {
        let x = argument.as_number()?;
        Ok(Value::Float(function(x)))
    })
}

fn base_context() -> Result<HashMapContext, EvalexprError> {
    let mut context = HashMapContext::new();
    for (name, value) in CONSTANTS {
        context.set_value(name.to_owned(), Value::Float(value))?;
    }
    for (name, function) in UNARY_FUNCTIONS {
        context.set_function(name.to_owned(), unary(function))?;
    }
    Ok(context)
}

/// evalexpr keeps integer literals as integers, so `1/2` would divide to
/// `0`. Every literal is rewritten as a float to get real arithmetic.
fn promote_integer_literals(node: &mut Node) {
    if let Operator::Const { value } = node.operator_mut() {
        if let Value::Int(integer) = *value {
            *value = Value::Float(integer as f64);
        }
    }
    for child in node.children_mut() {
        promote_integer_literals(child);
    }
}

/// Read-only view of the shared context with `x` bound to one abscissa.
struct BoundContext<'a> {
    base: &'a HashMapContext,
    x: Value
}

impl Context for BoundContext<'_> {
    fn get_value(&self, identifier: &str) -> Option<&Value> {
        if identifier == VARIABLE {
            Some(&self.x)
        } else {
            self.base.get_value(identifier)
        }
    }

    fn call_function(&self, identifier: &str, argument: &Value) -> EvalexprResult<Value> {
        self.base.call_function(identifier, argument)
    }

    fn are_builtin_functions_disabled(&self) -> bool {
        self.base.are_builtin_functions_disabled()
    }

    fn set_builtin_functions_disabled(&mut self, _disabled: bool) -> EvalexprResult<()> {
        Err(EvalexprError::ContextNotMutable)
    }
}

/// Parsed expression together with the functions and constants it is
/// evaluated against. Evaluation never mutates either.
pub struct CompiledExpression {
    node: Node,
    context: HashMapContext
}

impl CompiledExpression {
    fn try_evaluate(&self, x: f64) -> Result<f64, EvalexprError> {
        let bound = BoundContext { base: &self.context, x: Value::Float(x) };
        self.node.eval_number_with_context(&bound)
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.try_evaluate(x).unwrap_or_else(|error| {
            trace!("evaluation failed at x = {}: {}", x, error);
            f64::NAN
        })
    }
}

/// Default compiler backed by `evalexpr`. Supports `x`, `pi`, `e`,
/// `+ - * / ^ %`, parentheses and the usual one-argument elementary
/// functions (`log` is the natural logarithm).
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalexprCompiler;

impl EvalexprCompiler {
    pub fn new() -> EvalexprCompiler {
        EvalexprCompiler
    }

    pub fn compile_expression(&self, expression: &str) -> Result<CompiledExpression, ExpressionError> {
        if expression.trim().is_empty() {
            return Err(ExpressionError::Empty);
        }
        let mut node = build_operator_tree(expression)
            .map_err(|source| ExpressionError::Parse { expression: expression.to_owned(), source })?;
        promote_integer_literals(&mut node);
        let context = base_context()
            .map_err(|source| ExpressionError::Parse { expression: expression.to_owned(), source })?;
        let compiled = CompiledExpression { node, context };
        compiled.try_evaluate(PROBE_ABSCISSA)
            .map_err(|source| ExpressionError::Probe { expression: expression.to_owned(), source })?;
        Ok(compiled)
    }
}

impl ExpressionCompiler for EvalexprCompiler {
    fn compile(&self, expression: &str) -> Result<RealFunction, ExpressionError> {
        let compiled = self.compile_expression(expression)?;
        Ok(Box::new(move |x| compiled.evaluate(x)))
    }
}
