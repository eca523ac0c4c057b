use crate::system::TipSwitch;

pub fn wait_until_tip_is_pressed(tip: &TipSwitch) {
    while !tip.pressed() {
        cortex_m::asm::delay(480_000_000 / 1000);
    }
}
