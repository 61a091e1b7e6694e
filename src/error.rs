use thiserror::Error;

/// Fatal configuration problems, detected at engine construction before any
/// input is processed.
///
/// Out-of-range crisp inputs are not represented here: they are recovered
/// locally by clamping onto the sample grid and never surface as errors.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid triangle ({a}, {b}, {c}): parameters must be finite with a <= b <= c")]
    InvalidTriangle { a: f64, b: f64, c: f64 },

    #[error("invalid universe [{start}, {stop}) step {step}: need finite bounds, a positive step and at least two samples")]
    InvalidUniverse { start: f64, stop: f64, step: f64 },
}
