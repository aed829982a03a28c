//! Measures an unknown resistor through a voltage divider and reports the
//! nearest E24 part with its color bands.
//!
//! The divider is the unknown resistor between the ADC pin and ground, and
//! a known resistor between the pin and the reference voltage. Each cycle
//! an [`Ohmmeter`] averages a burst of ADC readings, solves the divider for
//! the unknown resistance, snaps it to the [`e24`] table and decodes the
//! result into a [`BandTriple`], which it hands to a [`PresentationSink`].
//!
//! # Examples
//!
//! ```
//! use core::num::NonZeroU32;
//! use resistor_bands::{ColorBand, Config, LogSink, Ohmmeter, Reading};
//! # use embedded_hal_mock::{
//! #     adc::{Mock, MockChan0, Transaction},
//! #     delay::MockNoop,
//! # };
//! #
//! # let expectations: [Transaction<u16>; 4] = [
//! #     Transaction::read(0, 1307),
//! #     Transaction::read(0, 1309),
//! #     Transaction::read(0, 1311),
//! #     Transaction::read(0, 1309),
//! # ];
//! # let mut adc = Mock::new(&expectations);
//! # let pin = MockChan0 {};
//! # let delay = MockNoop::new();
//!
//! let config = Config {
//!     sample_count: NonZeroU32::new(4).unwrap(),
//!     ..Config::DEFAULT
//! };
//! let mut meter = Ohmmeter::new(pin, delay, LogSink, config);
//!
//! match meter.cycle(&mut adc).unwrap() {
//!     Reading::Matched { value, bands, .. } => {
//!         assert_eq!(value.whole_ohms(), 4700);
//!         assert_eq!(bands.first, ColorBand::Yellow);
//!         assert_eq!(bands.second, ColorBand::Violet);
//!         assert_eq!(bands.multiplier, ColorBand::Red);
//!     }
//!     Reading::OutOfRange { .. } => unreachable!(),
//! }
//! ```
#![cfg_attr(not(test), no_std)]

mod color;
mod config;
mod divider;
pub mod e24;
mod error;
mod meter;
mod sampler;
mod sink;

pub use color::{decode, BandTriple, ColorBand};
pub use config::Config;
pub use divider::estimate;
pub use e24::StandardValue;
pub use error::Error;
pub use meter::{Ohmmeter, Reading};
pub use sampler::{SampleAggregator, Scale};
pub use sink::{LogSink, PresentationSink};
