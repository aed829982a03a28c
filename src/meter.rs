use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayMs;
use log::{error, info, warn};

use crate::color::BandTriple;
use crate::config::Config;
use crate::divider::estimate;
use crate::e24::{self, StandardValue};
use crate::error::Error;
use crate::sampler::SampleAggregator;
use crate::sink::PresentationSink;

/// The outcome of one measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// The estimate fell outside the E24 table's span, or the divider
    /// voltage sat on a rail. `ohms` is `0.0` for a rail.
    OutOfRange { ohms: f32 },
    Matched {
        ohms: f32,
        value: StandardValue,
        bands: BandTriple,
    },
}

impl Reading {
    /// Snaps a resistance estimate to the E24 table, unless it lies
    /// outside the table's span.
    ///
    /// # Examples
    ///
    /// ```
    /// use resistor_bands::{ColorBand, Reading};
    ///
    /// assert_eq!(Reading::from_ohms(100.0), Reading::OutOfRange { ohms: 100.0 });
    ///
    /// match Reading::from_ohms(4_650.0) {
    ///     Reading::Matched { value, bands, .. } => {
    ///         assert_eq!(value.whole_ohms(), 4700);
    ///         assert_eq!(bands.second, ColorBand::Violet);
    ///     }
    ///     Reading::OutOfRange { .. } => unreachable!(),
    /// }
    /// ```
    pub fn from_ohms(ohms: f32) -> Self {
        if !e24::covers(ohms) {
            return Reading::OutOfRange { ohms };
        }

        let value = e24::nearest(ohms);
        Reading::Matched {
            ohms,
            value,
            bands: value.bands(),
        }
    }
}

type AdcError<Adc, ADC, Word, Pin> = <Adc as OneShot<ADC, Word, Pin>>::Error;
type CycleError<Adc, ADC, Word, Pin, Sink> =
    Error<AdcError<Adc, ADC, Word, Pin>, <Sink as PresentationSink>::Error>;

/// Measures a resistor on the ground side of a voltage divider.
#[derive(Debug)]
pub struct Ohmmeter<Pin, Delay, Sink> {
    sampler: SampleAggregator<Pin>,
    delay: Delay,
    sink: Sink,
    config: Config,
}

impl<Pin, Delay, Sink> Ohmmeter<Pin, Delay, Sink>
where
    Delay: DelayMs<u32>,
    Sink: PresentationSink,
{
    /// Returns an ohmmeter reading the divider on `pin`.
    ///
    /// # Examples
    ///
    /// ```
    /// use resistor_bands::{Config, LogSink, Ohmmeter};
    /// # use embedded_hal_mock::{adc::MockChan0, delay::MockNoop};
    /// #
    /// # let pin = MockChan0 {};
    /// # let delay = MockNoop::new();
    ///
    /// let meter = Ohmmeter::new(pin, delay, LogSink, Config::DEFAULT);
    /// # let _: Ohmmeter<MockChan0, MockNoop, LogSink> = meter;
    /// ```
    pub fn new(pin: Pin, delay: Delay, sink: Sink, config: Config) -> Self {
        Self {
            sampler: SampleAggregator::new(pin, config.sample_count, config.sample_interval_ms),
            delay,
            sink,
            config,
        }
    }

    /// Destroys the ohmmeter and returns the `Pin`, delay and sink.
    pub fn free(self) -> (Pin, Delay, Sink) {
        (self.sampler.free(), self.delay, self.sink)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Samples the divider and decodes the result without presenting it.
    pub fn measure<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<Reading, AdcError<Adc, ADC, Word, Pin>>
    where
        Word: Copy + Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let volts = self
            .sampler
            .read(adc, &mut self.delay, self.config.scale())?;
        let ohms = estimate(
            volts,
            self.config.reference_voltage,
            self.config.known_resistance,
        );

        Ok(Reading::from_ohms(ohms))
    }

    /// Runs one full measurement cycle: measures, hands the reading to the
    /// sink, logs it, and waits out the cycle interval.
    ///
    /// The cycle interval is observed even when a collaborator fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::num::NonZeroU32;
    /// use resistor_bands::{Config, LogSink, Ohmmeter, Reading};
    /// # use embedded_hal_mock::{
    /// #     adc::{Mock, MockChan0, Transaction},
    /// #     delay::MockNoop,
    /// # };
    /// #
    /// # let expectations: [Transaction<u16>; 1] = [Transaction::read(0, 2048)];
    /// # let mut adc = Mock::new(&expectations);
    /// # let pin = MockChan0 {};
    ///
    /// let config = Config {
    ///     sample_count: NonZeroU32::new(1).unwrap(),
    ///     ..Config::DEFAULT
    /// };
    /// let mut meter = Ohmmeter::new(pin, MockNoop::new(), LogSink, config);
    ///
    /// // Just over half of 3.3 V across 10 kΩ reads as a 10 kΩ part
    /// match meter.cycle(&mut adc).unwrap() {
    ///     Reading::Matched { value, .. } => assert_eq!(value.whole_ohms(), 10_000),
    ///     Reading::OutOfRange { .. } => unreachable!(),
    /// }
    /// ```
    pub fn cycle<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<Reading, CycleError<Adc, ADC, Word, Pin, Sink>>
    where
        Word: Copy + Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let result = self.measure_and_present(adc);
        self.delay.delay_ms(self.config.cycle_interval_ms);
        result
    }

    /// Runs measurement cycles forever. Collaborator failures are logged
    /// and the next cycle starts as usual.
    pub fn run<Adc, ADC, Word>(&mut self, adc: &mut Adc) -> !
    where
        Word: Copy + Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
        AdcError<Adc, ADC, Word, Pin>: core::fmt::Debug,
    {
        loop {
            if let Err(e) = self.cycle(adc) {
                error!("{}", e);
            }
        }
    }

    fn measure_and_present<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<Reading, CycleError<Adc, ADC, Word, Pin, Sink>>
    where
        Word: Copy + Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let reading = self.measure(adc).map_err(Error::Adc)?;

        match reading {
            Reading::OutOfRange { ohms } => {
                warn!("resistance out of range: {:.0} Ω", ohms);
                self.sink.show_out_of_range().map_err(Error::Sink)?;
            }
            Reading::Matched { value, bands, .. } => {
                info!(
                    "resistance: {}, colors: {}, {}, {}",
                    value, bands.first, bands.second, bands.multiplier
                );
                self.sink.show_result(value, bands).map_err(Error::Sink)?;
            }
        }

        Ok(reading)
    }
}
