use crate::system::hal::gpio::{self, Edge, ExtiPin};
use crate::system::hal::pac::{EXTI, SYSCFG};

/// The sense line the carrier arrives on, one interrupt per rising edge.
///
/// The line is bound to its external interrupt once, during bring-up;
/// afterwards the handler only has to acknowledge edges.
pub struct SenseLine {
    pin: Pin,
}

pub type Pin = gpio::gpiog::PG13<gpio::Input>;

impl SenseLine {
    pub fn init(mut pin: Pin, syscfg: &mut SYSCFG, exti: &mut EXTI) -> Self {
        pin.make_interrupt_source(syscfg);
        pin.trigger_on_edge(exti, Edge::Rising);
        pin.enable_interrupt(exti);
        Self { pin }
    }

    /// Acknowledge the pending edge so the handler is not re-entered.
    pub fn acknowledge(&mut self) {
        self.pin.clear_interrupt_pending_bit();
    }
}
