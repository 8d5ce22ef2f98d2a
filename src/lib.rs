//! Driver for the Analog Devices AD56x4 family of quad channel SPI DACs
//!
//! Supported parts:
//!
//! | Part    | Resolution | Internal reference |
//! |---------|------------|--------------------|
//! | AD5624  | 12 bit     | no                 |
//! | AD5664  | 16 bit     | no                 |
//! | AD5624R | 12 bit     | yes                |
//! | AD5644R | 14 bit     | yes                |
//! | AD5664R | 16 bit     | yes                |
//!
//! Every operation is sent as a single 24 bit frame: two don't-care bits,
//! three command bits, three address bits and a 16 bit data word. The
//! driver keeps no copy of the chip registers, it only translates calls
//! into frames.
//!
//! The device is driven through an [`embedded_hal::spi::SpiDevice`], so
//! chip select handling is left to the HAL. Use [`MODE`] for the bus and
//! keep the clock at or below [`MAX_FREQUENCY_HZ`].
//!
//! ```
//! # use embedded_hal_mock::eh1::spi::{Mock, Transaction};
//! use ad56x4::{Ad5664R, Channel, SetMode};
//! # let spi = Mock::new(&[
//! #     Transaction::transaction_start(),
//! #     Transaction::write_vec(vec![0x19, 0x0A, 0xBC]),
//! #     Transaction::transaction_end(),
//! # ]);
//! let mut dac = Ad5664R::new(spi);
//! dac.set_channel(SetMode::InputDac, Channel::B, 0x0ABC).unwrap();
//! # dac.destroy().done();
//! ```

#![deny(unsafe_code, missing_docs)]
#![no_std]

use core::marker::PhantomData;

use embedded_hal::spi::{Mode, MODE_1};

mod channel;
mod common;
mod frame;
mod variant;

pub use channel::{ChannelMask, PowerMode, Quad, SetMode};
pub use frame::{encode_frame, Channel, Command, Frame};
pub use variant::{InternalReference, Resolution, Variant};

/// SPI mode 1: clock idles low, data is sampled on the falling edge
pub const MODE: Mode = MODE_1;

/// Highest SCLK frequency supported by the AD56x4 family
pub const MAX_FREQUENCY_HZ: u32 = 50_000_000;

/// AD56x4 DAC on an SPI device
///
/// `IC` is one of the types in [`marker`] and selects the resolution and
/// whether an internal reference is available.
pub struct Ad56x4<DEV, IC> {
    spi: DEV,
    _ic: PhantomData<IC>,
}

/// AD5624, 12 bit, external reference only
pub type Ad5624<DEV> = Ad56x4<DEV, marker::Ad5624>;
/// AD5664, 16 bit, external reference only
pub type Ad5664<DEV> = Ad56x4<DEV, marker::Ad5664>;
/// AD5624R, 12 bit with internal reference
pub type Ad5624R<DEV> = Ad56x4<DEV, marker::Ad5624R>;
/// AD5644R, 14 bit with internal reference
pub type Ad5644R<DEV> = Ad56x4<DEV, marker::Ad5644R>;
/// AD5664R, 16 bit with internal reference
pub type Ad5664R<DEV> = Ad56x4<DEV, marker::Ad5664R>;

/// Errors for this crate
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// SPI communication error
    Spi(E),
    /// Invalid argument
    InvalidArgument,
}

/// Markers
pub mod marker {
    /// AD5624
    pub enum Ad5624 {}
    /// AD5664
    pub enum Ad5664 {}
    /// AD5624R
    pub enum Ad5624R {}
    /// AD5644R
    pub enum Ad5644R {}
    /// AD5664R
    pub enum Ad5664R {}
}

mod private {
    use super::marker;
    pub trait Sealed {}

    impl Sealed for marker::Ad5624 {}
    impl Sealed for marker::Ad5664 {}
    impl Sealed for marker::Ad5624R {}
    impl Sealed for marker::Ad5644R {}
    impl Sealed for marker::Ad5664R {}
}
