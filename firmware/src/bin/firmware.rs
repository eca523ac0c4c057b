#![no_main]
#![no_std]

use touche_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0, EXTI1, EXTI2])]
mod app {
    use daisy::led::{Led, LedUser};
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use touche_detect::config::Config;
    use touche_detect::counter::PulseCounter;
    use touche_detect::detector::Detector;
    use touche_detect::event::Reading;
    use touche_detect::snapshot::Snapshot;
    use touche_firmware::report;
    use touche_firmware::system::{SenseLine, System, TipSwitch};

    const CONTROL_PERIOD_MS: u64 = 1;
    const BLINKS: u8 = 1;

    /// Filled by the edge interrupt, drained by the control loop. The
    /// counter is atomic inside, so neither side needs a lock.
    static PULSES: PulseCounter = PulseCounter::new();

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {
        reading: Reading,
        dwell_ms: Option<u32>,
    }

    #[local]
    struct Local {
        status_led: LedUser,
        sense: SenseLine,
        tip: TipSwitch,
        detector: Detector,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;

        let config = Config::default();
        let display_period_ms = u64::from(config.display_period_ms);
        let detector = Detector::new(config);

        control::spawn().unwrap();
        display::spawn(display_period_ms).unwrap();
        blink::spawn(true, BLINKS).unwrap();

        (
            Shared {
                reading: Reading::default(),
                dwell_ms: None,
            },
            Local {
                status_led: system.status_led,
                sense: system.sense,
                tip: system.tip,
                detector,
            },
            init::Monotonics(mono),
        )
    }

    /// Counts one carrier edge. Nothing else belongs in here.
    #[task(binds = EXTI15_10, local = [sense], priority = 3)]
    fn pulse(cx: pulse::Context) {
        cx.local.sense.acknowledge();
        PULSES.increment();
    }

    #[task(local = [detector, tip], shared = [reading, dwell_ms], priority = 2)]
    fn control(mut cx: control::Context) {
        let now_ms = monotonics::now().ticks() as u32;
        let snapshot = Snapshot {
            now_ms,
            pulses: PULSES.take_and_reset(),
            tip_pressed: cx.local.tip.pressed(),
        };

        if let Some(event) = cx.local.detector.update(snapshot) {
            report::touch(&event);
        }

        let reading = cx.local.detector.reading();
        let dwell_ms = cx.local.detector.dwell_so_far(now_ms);
        cx.shared.reading.lock(|shared| *shared = reading);
        cx.shared.dwell_ms.lock(|shared| *shared = dwell_ms);

        control::spawn_after(CONTROL_PERIOD_MS.millis()).unwrap();
    }

    #[task(shared = [reading, dwell_ms], priority = 1)]
    fn display(mut cx: display::Context, period_ms: u64) {
        let reading = cx.shared.reading.lock(|shared| *shared);
        let dwell_ms = cx.shared.dwell_ms.lock(|shared| *shared);
        report::live(reading, dwell_ms);

        display::spawn_after(period_ms.millis(), period_ms).unwrap();
    }

    #[task(local = [status_led])]
    fn blink(cx: blink::Context, on: bool, blinks: u8) {
        let time_on = 200.millis();
        let time_off_short = 200.millis();
        let time_off_long = 2.secs();

        if on {
            cx.local.status_led.on();
            blink::spawn_after(time_on, false, blinks).unwrap();
        } else {
            cx.local.status_led.off();
            if blinks > 1 {
                blink::spawn_after(time_off_short, true, blinks - 1).unwrap();
            } else {
                blink::spawn_after(time_off_long, true, BLINKS).unwrap();
            }
        }
    }
}
