use core::cell::RefCell;

use ad56x4::{Ad5624, Ad5664R, Channel, ChannelMask, PowerMode, SetMode};
use embedded_hal_bus::spi::{NoDelay, RefCellDevice};
use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use embedded_hal_mock::eh1::spi::{Mock as MockSpi, Transaction as MockTransaction};

/// Chip select toggled once per frame
fn cs_frames(n: usize) -> PinMock {
    let trans: Vec<PinTransaction> = (0..n)
        .flat_map(|_| {
            [
                PinTransaction::set(PinState::Low),
                PinTransaction::set(PinState::High),
            ]
        })
        .collect();
    PinMock::new(&trans)
}

#[test]
fn two_dacs_one_bus() {
    let bus = RefCell::new(MockSpi::new(&[
        MockTransaction::write_vec(vec![0x18, 0x12, 0x34]),
        MockTransaction::flush(),
        MockTransaction::write_vec(vec![0x20, 0x00, 0x2F]),
        MockTransaction::flush(),
        MockTransaction::write_vec(vec![0x38, 0x00, 0x01]),
        MockTransaction::flush(),
    ]));
    let mut cs_a = cs_frames(2);
    let mut cs_b = cs_frames(1);

    {
        let mut dac_a = Ad5664R::new(RefCellDevice::new(&bus, cs_a.clone(), NoDelay));
        let mut dac_b = Ad5624::new(RefCellDevice::new(&bus, cs_b.clone(), NoDelay));

        dac_a
            .set_channel(SetMode::InputDac, Channel::A, 0x1234)
            .unwrap();
        dac_b
            .power_up_down(PowerMode::PullDown100k, ChannelMask::ALL)
            .unwrap();
        dac_a.use_internal_reference(true).unwrap();
    }

    bus.into_inner().done();
    cs_a.done();
    cs_b.done();
}
