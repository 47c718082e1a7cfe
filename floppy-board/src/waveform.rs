use core::cell::RefCell;

use critical_section::Mutex;
use embassy_stm32::{
    gpio::Output,
    interrupt,
    interrupt::InterruptExt,
    pac,
    timer::low_level::Timer,
};
use floppy_lib::{
    audio::reload::{expiry_ticks, TIMER_TICK_HZ},
    drivers::audio::{
        waveform::{SharedSynthState, WaveformIsr},
        WaveformDriver,
    },
};

use crate::{config::WAVEFORM_IRQ_PRIORITY, pins::WaveformTimer};

type FloppyIsr = WaveformIsr<Output<'static>, Output<'static>>;

// written by thread mode only while TIM3 is stopped
static SHARED_SYNTH_STATE: SharedSynthState = SharedSynthState::new();
// owned by the TIM3 handler once installed
static WAVEFORM_ISR: Mutex<RefCell<Option<FloppyIsr>>> = Mutex::new(RefCell::new(None));

const fn auto_reload(reload: u16) -> u16 {
    // the counter spans ARR + 1 ticks
    (expiry_ticks(reload) - 1) as u16
}

#[interrupt]
unsafe fn TIM3() {
    let regs = pac::TIM3;

    // a pending flag left behind by the update event at start is not an edge
    if !regs.sr().read().uif() {
        return;
    }
    regs.sr().modify(|r| r.set_uif(false));

    critical_section::with(|cs| {
        if let Some(isr) = WAVEFORM_ISR.borrow_ref_mut(cs).as_mut() {
            let reload = isr.on_timer_expiry(&SHARED_SYNTH_STATE);
            regs.arr().write(|r| r.set_arr(auto_reload(reload)));
        }
    });
}

/// Total waveform edges since boot.
pub fn isr_firings() -> u32 {
    critical_section::with(|cs| {
        WAVEFORM_ISR
            .borrow_ref(cs)
            .as_ref()
            .map_or(0, |isr| isr.firings())
    })
}

/// TIM3 as the square-wave generator for the drive's STEP input.
pub struct FloppyWaveform {
    _timer: Timer<'static, WaveformTimer>,
}

impl FloppyWaveform {
    pub fn new(
        tim: WaveformTimer,
        step: Output<'static>,
        direction: Output<'static>,
        inversion_threshold: u8,
    ) -> Self {
        // enables and resets the peripheral clock
        let timer = Timer::new(tim);
        let timer_clock = timer.get_clock_frequency().0;
        let prescaler = (timer_clock / TIMER_TICK_HZ).saturating_sub(1) as u16;
        defmt::debug!("waveform timer clock {} Hz, prescaler {}", timer_clock, prescaler);

        let regs = pac::TIM3;
        regs.cr1().modify(|r| r.set_cen(false));
        regs.psc().write_value(prescaler);
        regs.dier().modify(|r| r.set_uie(true));

        critical_section::with(|cs| {
            *WAVEFORM_ISR.borrow_ref_mut(cs) =
                Some(WaveformIsr::new(step, direction, inversion_threshold));
        });

        interrupt::TIM3.set_priority(WAVEFORM_IRQ_PRIORITY);
        unsafe { interrupt::TIM3.enable() };

        FloppyWaveform { _timer: timer }
    }
}

impl WaveformDriver for FloppyWaveform {
    fn start(&mut self, reload: u16) {
        SHARED_SYNTH_STATE.begin_tone(reload);

        let regs = pac::TIM3;
        critical_section::with(|_| {
            regs.arr().write(|r| r.set_arr(auto_reload(reload)));
            regs.cnt().write(|r| r.set_cnt(0));
            // latch prescaler and auto-reload before counting
            regs.egr().write(|r| r.set_ug(true));
            regs.sr().modify(|r| r.set_uif(false));
            regs.cr1().modify(|r| r.set_cen(true));
        });
    }

    fn stop(&mut self) {
        pac::TIM3.cr1().modify(|r| r.set_cen(false));
        SHARED_SYNTH_STATE.end_tone();
    }

    fn arm_direction(&mut self, flip: bool) {
        critical_section::with(|cs| {
            if let Some(isr) = WAVEFORM_ISR.borrow_ref_mut(cs).as_mut() {
                isr.arm(flip);
                defmt::info!("direction toggling armed, threshold {}", isr.toggler().threshold());
            }
        });
    }
}
