use core::num::NonZeroU32;

use crate::sampler::Scale;

/// Configuration for an [`Ohmmeter`](crate::Ohmmeter).
///
/// - `reference_voltage`: The voltage across the whole divider, which is also the voltage corresponding to the largest ADC value (V)
/// - `known_resistance`: The fixed resistor on the supply side of the divider (Ω)
/// - `precision`: The precision of the ADC in bits (eg. for 12-bit precision, use `12`)
/// - `sample_count`: How many ADC readings are averaged into one voltage
/// - `sample_interval_ms`: Delay after each ADC reading (ms)
/// - `cycle_interval_ms`: Delay after each measurement has been presented (ms)
///
/// # Examples
///
/// ```
/// use core::num::NonZeroU32;
/// use resistor_bands::Config;
///
/// let config = Config {
///     reference_voltage: 5.0,
///     known_resistance: 4700.0,
///     precision: 10,
///     sample_count: NonZeroU32::new(16).unwrap(),
///     ..Config::DEFAULT
/// };
///
/// assert_eq!(config.adc_max(), 1023);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub reference_voltage: f32,
    pub known_resistance: f32,
    pub precision: u32,
    pub sample_count: NonZeroU32,
    pub sample_interval_ms: u32,
    pub cycle_interval_ms: u32,
}

const DEFAULT_SAMPLE_COUNT: NonZeroU32 = match NonZeroU32::new(100) {
    Some(count) => count,
    None => panic!("sample count must be non-zero"),
};

impl Config {
    /// 3.3 V across a 10 kΩ reference resistor, read by a 12-bit ADC
    /// averaging 100 samples taken 1 ms apart, once per second.
    pub const DEFAULT: Config = Config {
        reference_voltage: 3.3,
        known_resistance: 10_000.0,
        precision: 12,
        sample_count: DEFAULT_SAMPLE_COUNT,
        sample_interval_ms: 1,
        cycle_interval_ms: 1000,
    };

    /// Returns the largest value the ADC can produce.
    pub const fn adc_max(&self) -> u32 {
        (1 << self.precision) - 1
    }

    pub(crate) fn scale(&self) -> Scale {
        Scale {
            reference_voltage: self.reference_voltage,
            adc_max: self.adc_max(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
