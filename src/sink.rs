use core::convert::Infallible;

use log::{info, warn};

use crate::color::BandTriple;
use crate::e24::StandardValue;

/// Where an [`Ohmmeter`](crate::Ohmmeter) sends each finished measurement,
/// typically a display driver.
pub trait PresentationSink {
    type Error: core::fmt::Debug;

    /// The resistor is missing, shorted, or outside the table's span.
    fn show_out_of_range(&mut self) -> Result<(), Self::Error>;

    fn show_result(&mut self, value: StandardValue, bands: BandTriple) -> Result<(), Self::Error>;
}

impl<T: PresentationSink + ?Sized> PresentationSink for &mut T {
    type Error = T::Error;

    fn show_out_of_range(&mut self) -> Result<(), Self::Error> {
        (**self).show_out_of_range()
    }

    fn show_result(&mut self, value: StandardValue, bands: BandTriple) -> Result<(), Self::Error> {
        (**self).show_result(value, bands)
    }
}

/// Presents measurements through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl PresentationSink for LogSink {
    type Error = Infallible;

    fn show_out_of_range(&mut self) -> Result<(), Self::Error> {
        warn!("out of range");
        Ok(())
    }

    fn show_result(&mut self, value: StandardValue, bands: BandTriple) -> Result<(), Self::Error> {
        info!("1: {}", bands.first);
        info!("2: {}", bands.second);
        info!("multiplier: {}", bands.multiplier);
        info!("resistance: {}", value.label());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::e24::nearest;

    #[test]
    fn log_sink_never_fails() {
        let mut sink = LogSink;
        assert_eq!(sink.show_out_of_range(), Ok(()));
        assert_eq!(
            sink.show_result(nearest(4_700.0), nearest(4_700.0).bands()),
            Ok(())
        );
    }

    #[test]
    fn forwards_through_references() {
        let mut sink = LogSink;
        let mut by_ref = &mut sink;
        assert_eq!(PresentationSink::show_out_of_range(&mut by_ref), Ok(()));
    }
}
