use core::marker::PhantomData;

use bitfield_struct::bitfield;
use embedded_hal::spi::SpiDevice;

use crate::{
    encode_frame, Ad56x4, Channel, ChannelMask, Command, Error, InternalReference, PowerMode,
    Quad, SetMode, Variant,
};

/// Data word of the power up/down command
#[bitfield(u16)]
struct PowerWord {
    #[bits(4)]
    mask: u8,

    #[bits(2)]
    mode: u8,

    #[bits(10)]
    __: u16,
}

impl<DEV, IC, E> Ad56x4<DEV, IC>
where
    DEV: SpiDevice<Error = E>,
    IC: Variant,
{
    /// Create a new AD56x4 DAC on an SPI device
    pub fn new(spi: DEV) -> Self {
        Self {
            spi,
            _ic: PhantomData,
        }
    }

    /// Destroy the driver and return the SPI device
    pub fn destroy(self) -> DEV {
        self.spi
    }

    /// Write a 16 bit value to one channel, or to all of them with
    /// [`Channel::All`].
    ///
    /// 12 and 14 bit parts ignore the low 4 and 2 bits, see
    /// [`set_channel_code`](Self::set_channel_code) for right aligned codes.
    /// ```
    /// # use embedded_hal_mock::eh1::spi::{Mock, Transaction};
    /// # use ad56x4::{Ad5664, Channel, SetMode};
    /// # let spi = Mock::new(&[
    /// #     Transaction::transaction_start(),
    /// #     Transaction::write_vec(vec![0x03, 0x80, 0x00]),
    /// #     Transaction::transaction_end(),
    /// # ]);
    /// # let mut dac = Ad5664::new(spi);
    /// dac.set_channel(SetMode::Input, Channel::D, 0x8000).unwrap();
    /// # dac.destroy().done();
    /// ```
    pub fn set_channel(&mut self, mode: SetMode, chan: Channel, val: u16) -> Result<(), Error<E>> {
        self.write(Command::from(mode), chan, val)
    }

    /// Write one value per channel. Sends four frames, channel D first.
    pub fn set_channels(&mut self, mode: SetMode, vals: Quad<u16>) -> Result<(), Error<E>> {
        for (chan, val) in vals.by_channel().into_iter().rev() {
            self.set_channel(mode, chan, val)?;
        }
        Ok(())
    }

    /// Write a right aligned code, shifted to fit the resolution of the part.
    ///
    /// Codes above the full scale of the part are rejected with
    /// [`Error::InvalidArgument`] and nothing is sent.
    pub fn set_channel_code(
        &mut self,
        mode: SetMode,
        chan: Channel,
        code: u16,
    ) -> Result<(), Error<E>> {
        let val = IC::RESOLUTION.align(code).ok_or(Error::InvalidArgument)?;
        self.set_channel(mode, chan, val)
    }

    /// Load the DAC register of a channel from its input register.
    pub fn update_channel(&mut self, chan: Channel) -> Result<(), Error<E>> {
        self.write(Command::UpdateDac, chan, 0)
    }

    /// Apply a power mode to every channel in the mask.
    pub fn power_up_down(&mut self, mode: PowerMode, mask: ChannelMask) -> Result<(), Error<E>> {
        let word = PowerWord::new()
            .with_mode(u8::from(mode))
            .with_mask(mask.raw());
        self.write(Command::PowerUpDown, Channel::A, word.into())
    }

    /// Give each channel its own power mode. Sends four frames, one per
    /// channel starting with A.
    pub fn power_up_down_each(&mut self, modes: Quad<PowerMode>) -> Result<(), Error<E>> {
        for (chan, mode) in modes.by_channel() {
            self.power_up_down(mode, ChannelMask::from(chan))?;
        }
        Ok(())
    }

    /// Give each channel its own power mode from an array, `modes[k]` goes
    /// to the channel in mask bit `k`: A, B, C, then D. Sends four frames
    /// in array order.
    pub fn power_up_down_modes(&mut self, modes: [PowerMode; 4]) -> Result<(), Error<E>> {
        for (bit, mode) in modes.into_iter().enumerate() {
            self.power_up_down(mode, ChannelMask::from(1u8 << bit))?;
        }
        Ok(())
    }

    /// Software reset.
    ///
    /// Input and DAC registers are always cleared. A full reset also clears
    /// the LDAC register, powers up all channels and turns the internal
    /// reference off.
    pub fn reset(&mut self, full_reset: bool) -> Result<(), Error<E>> {
        self.write(Command::Reset, Channel::A, full_reset as u16)
    }

    /// Set the LDAC register. Channels in the mask load their DAC register
    /// as soon as their input register is written.
    pub fn set_input_mode(&mut self, mask: ChannelMask) -> Result<(), Error<E>> {
        self.write(Command::SetLdac, Channel::A, mask.raw() as u16)
    }

    fn write(&mut self, cmd: Command, chan: Channel, data: u16) -> Result<(), Error<E>> {
        let frame = encode_frame(cmd, chan, data);
        #[cfg(feature = "defmt")]
        defmt::trace!("AD56x4 {} {}: {=[u8]:#x}", cmd, chan, &frame[..]);
        self.spi.write(&frame).map_err(Error::Spi)
    }
}

impl<DEV, IC, E> Ad56x4<DEV, IC>
where
    DEV: SpiDevice<Error = E>,
    IC: InternalReference,
{
    /// Switch between the internal reference (`true`) and the external
    /// reference (`false`).
    ///
    /// Only the R parts have an internal reference:
    /// ```compile_fail
    /// # use embedded_hal_mock::eh1::spi::Mock;
    /// let mut dac = ad56x4::Ad5664::new(Mock::<u8>::new(&[]));
    /// dac.use_internal_reference(true);
    /// ```
    pub fn use_internal_reference(&mut self, on: bool) -> Result<(), Error<E>> {
        self.write(Command::ReferenceOnOff, Channel::A, on as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_word_layout() {
        let word: u16 = PowerWord::new()
            .with_mode(u8::from(PowerMode::PullDown100k))
            .with_mask(0b1010)
            .into();
        assert_eq!(word, 0b10_1010);

        let word: u16 = PowerWord::new()
            .with_mode(u8::from(PowerMode::Tristate))
            .with_mask(ChannelMask::ALL.raw())
            .into();
        assert_eq!(word, 0x003F);
    }
}
