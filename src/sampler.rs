use core::num::NonZeroU32;

use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayMs;

/// Maps a mean raw ADC value to volts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub reference_voltage: f32,
    pub adc_max: u32,
}

impl Scale {
    pub fn volts(&self, raw: f32) -> f32 {
        raw * self.reference_voltage / self.adc_max as f32
    }
}

type Error<Adc, ADC, Word, Pin> = <Adc as OneShot<ADC, Word, Pin>>::Error;

/// Averages repeated readings of one ADC channel into a voltage.
#[derive(Debug)]
pub struct SampleAggregator<Pin> {
    pin: Pin,
    samples: NonZeroU32,
    interval_ms: u32,
}

impl<Pin> SampleAggregator<Pin> {
    /// Returns an aggregator that takes `samples` readings from `pin`,
    /// waiting `interval_ms` after each one.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::num::NonZeroU32;
    /// use resistor_bands::SampleAggregator;
    /// # use embedded_hal_mock::adc::MockChan0;
    /// #
    /// # let pin = MockChan0 {};
    ///
    /// let sampler = SampleAggregator::new(pin, NonZeroU32::new(100).unwrap(), 1);
    /// # let _: SampleAggregator<MockChan0> = sampler;
    /// ```
    pub fn new(pin: Pin, samples: NonZeroU32, interval_ms: u32) -> Self {
        Self {
            pin,
            samples,
            interval_ms,
        }
    }

    /// Destroys the aggregator and returns the `Pin`.
    pub fn free(self) -> Pin {
        self.pin
    }

    pub fn samples(&self) -> NonZeroU32 {
        self.samples
    }

    /// Reads the channel `samples` times and returns the mean reading in
    /// volts. Blocks on every conversion and returns the first error the
    /// ADC reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::num::NonZeroU32;
    /// use resistor_bands::{SampleAggregator, Scale};
    /// # use embedded_hal_mock::{
    /// #     adc::{Mock, MockChan0, Transaction},
    /// #     delay::MockNoop,
    /// # };
    /// #
    /// # let expectations: [Transaction<u16>; 2] = [
    /// #     Transaction::read(0, 1000),
    /// #     Transaction::read(0, 3000),
    /// # ];
    /// # let mut adc = Mock::new(&expectations);
    /// # let pin = MockChan0 {};
    ///
    /// let mut sampler = SampleAggregator::new(pin, NonZeroU32::new(2).unwrap(), 1);
    /// let scale = Scale { reference_voltage: 4.0, adc_max: 4000 };
    ///
    /// // Readings of 1000 and 3000 average to 2000, which is 2.0 V
    /// let volts: f32 = sampler.read(&mut adc, &mut MockNoop::new(), scale).unwrap();
    /// assert!((volts - 2.0).abs() < 1e-6);
    /// ```
    pub fn read<Adc, ADC, Word, Delay>(
        &mut self,
        adc: &mut Adc,
        delay: &mut Delay,
        scale: Scale,
    ) -> Result<f32, Error<Adc, ADC, Word, Pin>>
    where
        Word: Copy + Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
        Delay: DelayMs<u32>,
    {
        let mut sum: u64 = 0;

        for _ in 0..self.samples.get() {
            let raw: Word = nb::block!(adc.read(&mut self.pin))?;
            sum += u64::from(raw.into());
            delay.delay_ms(self.interval_ms);
        }

        let mean = sum as f32 / self.samples.get() as f32;
        Ok(scale.volts(mean))
    }
}
