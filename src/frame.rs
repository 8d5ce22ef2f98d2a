//! Frame encoding
//!
//! A frame is three bytes sent MSB first:
//!
//! | byte | contents                                            |
//! |------|-----------------------------------------------------|
//! | 0    | `0b00` (ignored), command C2..C0, address A2..A0    |
//! | 1    | data word bits 15:8                                 |
//! | 2    | data word bits 7:0                                  |
use bitfield_struct::bitfield;

/// Raw 24 bit frame as it goes out on the bus
pub type Frame = [u8; 3];

/// Command bits C2..C0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    /// Write to input register N
    WriteInput = 0b000,
    /// Update DAC register N from its input register
    UpdateDac = 0b001,
    /// Write to input register N and update all DAC registers
    WriteInputUpdateAll = 0b010,
    /// Write to input register N and update DAC register N
    WriteAndUpdate = 0b011,
    /// Power up or down the channels in the mask
    PowerUpDown = 0b100,
    /// Software reset
    Reset = 0b101,
    /// Set the LDAC register
    SetLdac = 0b110,
    /// Internal reference on/off
    ReferenceOnOff = 0b111,
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> Self {
        cmd as u8
    }
}

/// Dac Channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Channel {
    /// DAC Channel A
    A = 0b000,
    /// DAC Channel B
    B = 0b001,
    /// DAC Channel C
    C = 0b010,
    /// DAC Channel D
    D = 0b011,
    /// All DAC Channels
    All = 0b111,
}

impl From<Channel> for u8 {
    fn from(chan: Channel) -> Self {
        chan as u8
    }
}

#[bitfield(u8)]
struct CommandByte {
    #[bits(3)]
    addr: u8,

    #[bits(3)]
    cmd: u8,

    #[bits(2)]
    __: u8,
}

/// Pack a command, an address and a data word into a frame.
///
/// No range check is done on `data`, parts with less than 16 bits of
/// resolution ignore the low bits themselves.
pub fn encode_frame(cmd: Command, addr: Channel, data: u16) -> Frame {
    [
        CommandByte::new()
            .with_addr(u8::from(addr))
            .with_cmd(u8::from(cmd))
            .into(),
        (data >> 8) as u8,
        data as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMANDS: [Command; 8] = [
        Command::WriteInput,
        Command::UpdateDac,
        Command::WriteInputUpdateAll,
        Command::WriteAndUpdate,
        Command::PowerUpDown,
        Command::Reset,
        Command::SetLdac,
        Command::ReferenceOnOff,
    ];
    const CHANNELS: [Channel; 5] = [Channel::A, Channel::B, Channel::C, Channel::D, Channel::All];

    #[test]
    fn command_codes() {
        for (code, cmd) in COMMANDS.iter().enumerate() {
            assert_eq!(u8::from(*cmd), code as u8);
        }
    }

    #[test]
    fn address_codes() {
        assert_eq!(u8::from(Channel::A), 0b000);
        assert_eq!(u8::from(Channel::B), 0b001);
        assert_eq!(u8::from(Channel::C), 0b010);
        assert_eq!(u8::from(Channel::D), 0b011);
        assert_eq!(u8::from(Channel::All), 0b111);
    }

    #[test]
    fn frame_layout() {
        for cmd in COMMANDS {
            for chan in CHANNELS {
                for data in [0x0000, 0x0001, 0x00FF, 0x0100, 0x8000, 0xA55A, 0xFFFF] {
                    let frame = encode_frame(cmd, chan, data);
                    assert_eq!(frame[0] & 0b1100_0000, 0);
                    assert_eq!((frame[0] >> 3) & 0b111, u8::from(cmd));
                    assert_eq!(frame[0] & 0b111, u8::from(chan));
                    assert_eq!(u16::from_be_bytes([frame[1], frame[2]]), data);
                }
            }
        }
    }

    #[test]
    fn known_frames() {
        assert_eq!(
            encode_frame(Command::WriteAndUpdate, Channel::B, 0x0ABC),
            [0x19, 0x0A, 0xBC]
        );
        assert_eq!(encode_frame(Command::Reset, Channel::A, 1), [0x28, 0x00, 0x01]);
        assert_eq!(
            encode_frame(Command::ReferenceOnOff, Channel::A, 0),
            [0x38, 0x00, 0x00]
        );
        assert_eq!(
            encode_frame(Command::UpdateDac, Channel::All, 0),
            [0x0F, 0x00, 0x00]
        );
    }
}
