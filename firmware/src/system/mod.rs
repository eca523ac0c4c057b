mod sense;
mod tip;

pub use daisy::hal;

use daisy::led::LedUser;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use systick_monotonic::Systick;

pub use sense::SenseLine;
pub use tip::TipSwitch;

pub struct System {
    pub mono: Systick<1000>,
    pub status_led: LedUser,
    pub sense: SenseLine,
    pub tip: TipSwitch,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, mut dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mono = Systick::new(cp.SYST, 480_000_000);
        let status_led = daisy::board_split_leds!(pins).USER;

        let sense = SenseLine::init(
            pins.GPIO.PIN_B9.into_floating_input(),
            &mut dp.SYSCFG,
            &mut dp.EXTI,
        );
        let tip = TipSwitch::new(pins.GPIO.PIN_B10.into_floating_input());

        Self {
            mono,
            status_led,
            sense,
            tip,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal andexternal memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
