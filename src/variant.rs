//! Chip variants
use crate::{marker, private::Sealed};

/// DAC resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// 12 bit, data bits DB15..DB4
    Bits12,
    /// 14 bit, data bits DB15..DB2
    Bits14,
    /// 16 bit
    Bits16,
}

impl Resolution {
    /// Number of significant bits
    pub const fn bits(self) -> u8 {
        match self {
            Resolution::Bits12 => 12,
            Resolution::Bits14 => 14,
            Resolution::Bits16 => 16,
        }
    }

    /// Largest right aligned code
    pub const fn max_code(self) -> u16 {
        (u16::MAX) >> (16 - self.bits())
    }

    /// Shift a right aligned code into the left aligned data word the chip
    /// expects. Returns `None` if the code does not fit.
    pub const fn align(self, code: u16) -> Option<u16> {
        if code > self.max_code() {
            None
        } else {
            Some(code << (16 - self.bits()))
        }
    }
}

/// A member of the AD56x4 family
pub trait Variant: Sealed {
    /// Resolution of the DAC
    const RESOLUTION: Resolution;
}

/// Parts with an internal 1.25V/2.5V reference, the "R" variants
pub trait InternalReference: Variant {}

impl Variant for marker::Ad5624 {
    const RESOLUTION: Resolution = Resolution::Bits12;
}
impl Variant for marker::Ad5664 {
    const RESOLUTION: Resolution = Resolution::Bits16;
}
impl Variant for marker::Ad5624R {
    const RESOLUTION: Resolution = Resolution::Bits12;
}
impl Variant for marker::Ad5644R {
    const RESOLUTION: Resolution = Resolution::Bits14;
}
impl Variant for marker::Ad5664R {
    const RESOLUTION: Resolution = Resolution::Bits16;
}

impl InternalReference for marker::Ad5624R {}
impl InternalReference for marker::Ad5644R {}
impl InternalReference for marker::Ad5664R {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_codes() {
        assert_eq!(Resolution::Bits12.max_code(), 0x0FFF);
        assert_eq!(Resolution::Bits14.max_code(), 0x3FFF);
        assert_eq!(Resolution::Bits16.max_code(), 0xFFFF);
    }

    #[test]
    fn left_alignment() {
        assert_eq!(Resolution::Bits12.align(0x0ABC), Some(0xABC0));
        assert_eq!(Resolution::Bits12.align(0x0FFF), Some(0xFFF0));
        assert_eq!(Resolution::Bits12.align(0x1000), None);
        assert_eq!(Resolution::Bits14.align(0x3FFF), Some(0xFFFC));
        assert_eq!(Resolution::Bits14.align(0x0001), Some(0x0004));
        assert_eq!(Resolution::Bits14.align(0x4000), None);
        assert_eq!(Resolution::Bits16.align(0xFFFF), Some(0xFFFF));
        assert_eq!(Resolution::Bits16.align(0), Some(0));
    }

    #[test]
    fn family_resolutions() {
        fn bits<IC: Variant>() -> u8 {
            IC::RESOLUTION.bits()
        }
        assert_eq!(bits::<marker::Ad5624>(), 12);
        assert_eq!(bits::<marker::Ad5664>(), 16);
        assert_eq!(bits::<marker::Ad5624R>(), 12);
        assert_eq!(bits::<marker::Ad5644R>(), 14);
        assert_eq!(bits::<marker::Ad5664R>(), 16);
    }
}
