use thiserror::Error;

/// A failure of one of the collaborators a measurement cycle depends on.
///
/// Out-of-range and degenerate readings are not errors; they come back as
/// [`Reading::OutOfRange`](crate::Reading::OutOfRange).
#[derive(Error, Debug, PartialEq)]
pub enum Error<A, S> {
    #[error("ADC read failed: {0:?}")]
    Adc(A),

    #[error("presentation sink failed: {0:?}")]
    Sink(S),
}
