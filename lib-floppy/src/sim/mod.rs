//! Virtual-clock stand-in for the waveform timer hardware.
//!
//! Time only moves when a [`SimDelay`] is asked to wait. While the virtual
//! timer runs, every expiry that falls inside the waited span calls the real
//! [`WaveformIsr`] handler in order, so pin activity and direction flips come
//! out exactly as the interrupt would produce them.

use core::{cell::RefCell, convert::Infallible};

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, OutputPin},
};
use heapless::Vec;

use crate::{
    audio::reload::{expiry_ticks, TIMER_TICK_HZ},
    drivers::audio::{
        waveform::{SharedSynthState, WaveformIsr},
        WaveformDriver,
    },
};

pub const EVENT_LOG_DEPTH: usize = 64;

const TICKS_PER_US: u64 = TIMER_TICK_HZ as u64 / 1_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerEvent {
    Started { at_us: u64, reload: u16 },
    Stopped { at_us: u64 },
}

/// Output pin that remembers its level and counts its edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimPin {
    high: bool,
    rising_edges: u32,
    transitions: u32,
}

impl SimPin {
    pub const fn new() -> Self {
        Self {
            high: false,
            rising_edges: 0,
            transitions: 0,
        }
    }

    pub fn is_high(&self) -> bool {
        self.high
    }

    pub fn rising_edges(&self) -> u32 {
        self.rising_edges
    }

    pub fn transitions(&self) -> u32 {
        self.transitions
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.high {
            self.transitions += 1;
        }
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if !self.high {
            self.transitions += 1;
            self.rising_edges += 1;
        }
        self.high = true;
        Ok(())
    }
}

struct SimInner<STEP, DIR> {
    shared: SharedSynthState,
    isr: WaveformIsr<STEP, DIR>,
    now_ticks: u64,
    next_expiry: Option<u64>,
    starts: u32,
    events: Vec<TimerEvent, EVENT_LOG_DEPTH>,
}

impl<STEP: OutputPin, DIR: OutputPin> SimInner<STEP, DIR> {
    fn now_us(&self) -> u64 {
        self.now_ticks / TICKS_PER_US
    }

    fn log(&mut self, event: TimerEvent) {
        // keep the first EVENT_LOG_DEPTH events, later ones only move the counters
        let _ = self.events.push(event);
    }

    fn advance(&mut self, ticks: u64) {
        let target = self.now_ticks + ticks;

        while let Some(at) = self.next_expiry {
            if at > target {
                break;
            }
            self.now_ticks = at;
            let reload = self.isr.on_timer_expiry(&self.shared);
            self.next_expiry = Some(at + expiry_ticks(reload) as u64);
        }

        self.now_ticks = target;
    }
}

pub struct Simulation<STEP, DIR> {
    inner: RefCell<SimInner<STEP, DIR>>,
}

pub type SimulatedDrive = Simulation<SimPin, SimPin>;

impl SimulatedDrive {
    pub fn with_sim_pins(inversion_threshold: u8) -> Self {
        Simulation::new(SimPin::new(), SimPin::new(), inversion_threshold)
    }
}

impl<STEP: OutputPin, DIR: OutputPin> Simulation<STEP, DIR> {
    pub fn new(step_pin: STEP, direction_pin: DIR, inversion_threshold: u8) -> Self {
        Self {
            inner: RefCell::new(SimInner {
                shared: SharedSynthState::new(),
                isr: WaveformIsr::new(step_pin, direction_pin, inversion_threshold),
                now_ticks: 0,
                next_expiry: None,
                starts: 0,
                events: Vec::new(),
            }),
        }
    }

    pub fn driver(&self) -> SimWaveform<'_, STEP, DIR> {
        SimWaveform { sim: self }
    }

    pub fn delay(&self) -> SimDelay<'_, STEP, DIR> {
        SimDelay { sim: self }
    }

    pub fn now_us(&self) -> u64 {
        self.inner.borrow().now_us()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().shared.is_running()
    }

    pub fn starts(&self) -> u32 {
        self.inner.borrow().starts
    }

    pub fn events(&self) -> Vec<TimerEvent, EVENT_LOG_DEPTH> {
        self.inner.borrow().events.clone()
    }

    /// Inspect interrupt-owned state between waits.
    pub fn with_isr<R>(&self, f: impl FnOnce(&WaveformIsr<STEP, DIR>) -> R) -> R {
        f(&self.inner.borrow().isr)
    }

    pub fn advance_us(&self, us: u64) {
        self.inner.borrow_mut().advance(us * TICKS_PER_US);
    }
}

/// [`WaveformDriver`] backed by the virtual timer.
pub struct SimWaveform<'a, STEP, DIR> {
    sim: &'a Simulation<STEP, DIR>,
}

impl<STEP: OutputPin, DIR: OutputPin> WaveformDriver for SimWaveform<'_, STEP, DIR> {
    fn start(&mut self, reload: u16) {
        let mut inner = self.sim.inner.borrow_mut();
        inner.shared.begin_tone(reload);
        inner.next_expiry = Some(inner.now_ticks + expiry_ticks(reload) as u64);
        inner.starts += 1;
        let at_us = inner.now_us();
        inner.log(TimerEvent::Started { at_us, reload });
    }

    fn stop(&mut self) {
        let mut inner = self.sim.inner.borrow_mut();
        inner.shared.end_tone();
        inner.next_expiry = None;
        let at_us = inner.now_us();
        inner.log(TimerEvent::Stopped { at_us });
    }

    fn arm_direction(&mut self, flip: bool) {
        let mut inner = self.sim.inner.borrow_mut();
        debug_assert!(!inner.shared.is_running());
        inner.isr.arm(flip);
    }
}

/// Blocking delay that advances the virtual clock instead of spinning.
pub struct SimDelay<'a, STEP, DIR> {
    sim: &'a Simulation<STEP, DIR>,
}

impl<STEP: OutputPin, DIR: OutputPin> DelayNs for SimDelay<'_, STEP, DIR> {
    fn delay_ns(&mut self, ns: u32) {
        let ticks = ns as u64 * TIMER_TICK_HZ as u64 / 1_000_000_000;
        self.sim.inner.borrow_mut().advance(ticks);
    }

    fn delay_us(&mut self, us: u32) {
        self.sim.advance_us(us as u64);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.sim.advance_us(ms as u64 * 1000);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::reload::reload_value;

    #[test]
    fn idle_timer_never_fires() {
        let sim = SimulatedDrive::with_sim_pins(150);
        sim.delay().delay_ms(500);
        assert_eq!(sim.now_us(), 500_000);
        assert_eq!(sim.with_isr(|isr| isr.firings()), 0);
    }

    #[test]
    fn running_timer_fires_at_reload_period() {
        let sim = SimulatedDrive::with_sim_pins(150);
        // 1000 Hz effective: 1000 ticks of 0.5 us per expiry
        let reload = reload_value(1000, 1).unwrap();
        sim.driver().start(reload);
        sim.delay().delay_ms(10);
        sim.driver().stop();

        assert_eq!(sim.with_isr(|isr| isr.firings()), 20);
        // one rising edge every two expiries: 1000 Hz on the step output
        assert_eq!(sim.with_isr(|isr| isr.step_pin().rising_edges()), 10);
        assert_eq!(
            sim.events().as_slice(),
            &[
                TimerEvent::Started { at_us: 0, reload },
                TimerEvent::Stopped { at_us: 10_000 },
            ]
        );
    }
}
