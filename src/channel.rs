//! Channel selection, masks and per channel values
use core::ops::BitOr;

use bitfield_struct::bitfield;

use crate::{Channel, Command};

/// How a value written with [`set_channel`](crate::Ad56x4::set_channel)
/// reaches the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetMode {
    /// Only write the input register
    Input,
    /// Write the input register and update the DAC register of the channel
    InputDac,
    /// Write the input register and update the DAC registers of all channels
    InputDacAll,
}

impl From<SetMode> for Command {
    fn from(mode: SetMode) -> Self {
        match mode {
            SetMode::Input => Command::WriteInput,
            SetMode::InputDac => Command::WriteAndUpdate,
            SetMode::InputDacAll => Command::WriteInputUpdateAll,
        }
    }
}

/// Only the three register write commands are set modes, any other
/// command is handed back.
impl TryFrom<Command> for SetMode {
    type Error = Command;

    fn try_from(cmd: Command) -> Result<Self, Self::Error> {
        match cmd {
            Command::WriteInput => Ok(SetMode::Input),
            Command::WriteAndUpdate => Ok(SetMode::InputDac),
            Command::WriteInputUpdateAll => Ok(SetMode::InputDacAll),
            other => Err(other),
        }
    }
}

/// Convert a raw 3 bit command code
impl TryFrom<u8> for SetMode {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0b000 => Ok(SetMode::Input),
            0b011 => Ok(SetMode::InputDac),
            0b010 => Ok(SetMode::InputDacAll),
            other => Err(other),
        }
    }
}

/// Output state of a channel, data bits DB5..DB4 of a power up/down frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PowerMode {
    /// Normal operation
    #[default]
    Normal = 0b00,
    /// Powered down, output 1 kOhm to ground
    PullDown1k = 0b01,
    /// Powered down, output 100 kOhm to ground
    PullDown100k = 0b10,
    /// Powered down, output floating
    Tristate = 0b11,
}

impl From<PowerMode> for u8 {
    fn from(mode: PowerMode) -> Self {
        mode as u8
    }
}

/// Channel mask, bit 0 is channel A up to bit 3 for channel D.
///
/// Used for the power up/down and LDAC commands. The upper four bits are
/// never sent.
#[bitfield(u8)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelMask {
    /// Channel A
    pub a: bool,
    /// Channel B
    pub b: bool,
    /// Channel C
    pub c: bool,
    /// Channel D
    pub d: bool,
    #[bits(4)]
    __: u8,
}

impl ChannelMask {
    /// Every channel selected
    pub const ALL: Self = Self::new().with_a(true).with_b(true).with_c(true).with_d(true);

    /// Build a mask from one flag per channel, in D to A order like the
    /// bits on the wire.
    pub const fn from_flags(d: bool, c: bool, b: bool, a: bool) -> Self {
        Self::new().with_d(d).with_c(c).with_b(b).with_a(a)
    }

    /// The 4 bit mask
    pub fn raw(self) -> u8 {
        u8::from(self) & 0x0F
    }
}

/// Masks are equal when they select the same channels
impl PartialEq for ChannelMask {
    fn eq(&self, other: &Self) -> bool {
        self.raw() == other.raw()
    }
}

impl Eq for ChannelMask {}

impl From<Channel> for ChannelMask {
    fn from(chan: Channel) -> Self {
        match chan {
            Channel::A => Self::new().with_a(true),
            Channel::B => Self::new().with_b(true),
            Channel::C => Self::new().with_c(true),
            Channel::D => Self::new().with_d(true),
            Channel::All => Self::ALL,
        }
    }
}

/// Flags in D to A order
impl From<[bool; 4]> for ChannelMask {
    fn from(flags: [bool; 4]) -> Self {
        let [d, c, b, a] = flags;
        Self::from_flags(d, c, b, a)
    }
}

impl From<Quad<bool>> for ChannelMask {
    fn from(q: Quad<bool>) -> Self {
        Self::from_flags(q.d, q.c, q.b, q.a)
    }
}

impl BitOr for ChannelMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from(self.raw() | rhs.raw())
    }
}

impl BitOr<Channel> for ChannelMask {
    type Output = Self;

    fn bitor(self, rhs: Channel) -> Self {
        self | Self::from(rhs)
    }
}

/// One value for each of the four channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Quad<T> {
    /// Channel A
    pub a: T,
    /// Channel B
    pub b: T,
    /// Channel C
    pub c: T,
    /// Channel D
    pub d: T,
}

impl<T> Quad<T> {
    /// Values given in D to A order
    pub const fn new(d: T, c: T, b: T, a: T) -> Self {
        Self { a, b, c, d }
    }

    /// Values in D to A order, the inverse of `From<[T; 4]>`
    pub fn into_array(self) -> [T; 4] {
        [self.d, self.c, self.b, self.a]
    }

    /// Pair every value with its channel, A first
    pub fn by_channel(self) -> [(Channel, T); 4] {
        [
            (Channel::A, self.a),
            (Channel::B, self.b),
            (Channel::C, self.c),
            (Channel::D, self.d),
        ]
    }
}

impl<T: Copy> Quad<T> {
    /// Same value for every channel
    pub const fn splat(v: T) -> Self {
        Self::new(v, v, v, v)
    }
}

/// Values in D to A order
impl<T> From<[T; 4]> for Quad<T> {
    fn from(values: [T; 4]) -> Self {
        let [d, c, b, a] = values;
        Self::new(d, c, b, a)
    }
}
