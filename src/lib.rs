pub mod configuration;

pub mod evaluator {
    pub mod expression;
}

pub mod quadrature {
    pub mod quadratureerror;
    pub mod bounds;
    pub mod samplepoint;
    pub mod steprecord;
    pub mod partition;
    pub mod quadratureresult;
    pub mod riemann;
    pub mod trapezoidal;
    pub mod simpson;
    pub mod romberg;
    pub mod quadraturemethod;
}

pub mod exact {
    pub mod knownintegral;
    pub mod exactvalue;
    pub mod exactvalueresolver;
}

pub mod accuracy {
    pub mod errorreport;
}

pub mod comparison {
    pub mod comparisonentry;
    pub mod comparator;
}

pub mod integration {
    pub mod integrationerror;
    pub mod request;
    pub mod report;
    pub mod integrator;
}

pub mod objectwithuuid;

#[cfg(test)]
mod proptests;
