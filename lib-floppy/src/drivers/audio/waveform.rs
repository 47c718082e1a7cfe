//! Waveform timer interrupt state.
//!
//! Two owners, one per field set:
//! - [`SharedSynthState`] is written by the main context while the timer is
//!   stopped and only read from the interrupt.
//! - [`WaveformIsr`] (edge counter, head direction, pin levels) is owned by
//!   the interrupt. The main context reaches it only to arm toggling, inside
//!   a critical section, with the timer stopped.

use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

use embedded_hal::digital::OutputPin;

pub struct SharedSynthState {
    reload: AtomicU16,
    running: AtomicBool,
}

impl Default for SharedSynthState {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedSynthState {
    pub const fn new() -> Self {
        Self {
            reload: AtomicU16::new(0),
            running: AtomicBool::new(false),
        }
    }

    pub fn reload(&self) -> u16 {
        self.reload.load(Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Install the reload value for the next tone. The timer must be stopped.
    pub fn begin_tone(&self, reload: u16) {
        debug_assert!(!self.is_running(), "reload written while the waveform timer runs");
        self.reload.store(reload, Ordering::Relaxed);
        self.running.store(true, Ordering::Release);
    }

    pub fn end_tone(&self) {
        self.running.store(false, Ordering::Release);
    }
}

/// Counts waveform edges and reverses the head every `threshold` of them once armed.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirectionToggler {
    edge_counter: u8,
    threshold: u8,
    armed: bool,
    direction: bool,
    flips: u32,
}

impl DirectionToggler {
    /// `threshold` must be non-zero: the counter is incremented before it is
    /// compared, so it never equals zero outside a wrap.
    pub const fn new(threshold: u8) -> Self {
        assert!(threshold != 0, "direction inversion threshold must be non-zero");

        Self {
            edge_counter: 0,
            threshold,
            armed: false,
            direction: false,
            flips: 0,
        }
    }

    pub fn edge_counter(&self) -> u8 {
        self.edge_counter
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn direction(&self) -> bool {
        self.direction
    }

    pub fn flips(&self) -> u32 {
        self.flips
    }

    /// Restart the inversion phase from zero and enable flipping for the rest of the run.
    pub fn arm(&mut self) {
        self.edge_counter = 0;
        self.armed = true;
    }

    /// Manual reversal, outside the counted phase.
    pub fn invert(&mut self) -> bool {
        self.direction = !self.direction;
        self.direction
    }

    /// Called once per timer expiry. Returns the new direction when it flipped.
    pub fn on_edge(&mut self) -> Option<bool> {
        // unarmed counting free-runs through the u8 range
        self.edge_counter = self.edge_counter.wrapping_add(1);

        if self.armed && self.edge_counter == self.threshold {
            self.edge_counter = 0;
            self.flips = self.flips.wrapping_add(1);
            Some(self.invert())
        } else {
            None
        }
    }
}

pub struct WaveformIsr<STEP, DIR> {
    step_pin: STEP,
    step_high: bool,
    direction_pin: DIR,
    toggler: DirectionToggler,
    firings: u32,
}

impl<STEP: OutputPin, DIR: OutputPin> WaveformIsr<STEP, DIR> {
    /// Takes both outputs and drives them low.
    pub fn new(mut step_pin: STEP, mut direction_pin: DIR, inversion_threshold: u8) -> Self {
        let _ = step_pin.set_low();
        let _ = direction_pin.set_low();

        Self {
            step_pin,
            step_high: false,
            direction_pin,
            toggler: DirectionToggler::new(inversion_threshold),
            firings: 0,
        }
    }

    /// Timer expiry handler. Returns the reload value to write back into the
    /// counter so the timer free-runs at the current tone's period.
    pub fn on_timer_expiry(&mut self, shared: &SharedSynthState) -> u16 {
        let reload = shared.reload();

        self.step_high = !self.step_high;
        let _ = self.step_pin.set_state(self.step_high.into());
        self.firings = self.firings.wrapping_add(1);

        if let Some(direction) = self.toggler.on_edge() {
            let _ = self.direction_pin.set_state(direction.into());
        }

        reload
    }

    /// Arm direction toggling, optionally reversing the head right away.
    /// Only called with the timer stopped.
    pub fn arm(&mut self, flip: bool) {
        if flip {
            let direction = self.toggler.invert();
            let _ = self.direction_pin.set_state(direction.into());
        }
        self.toggler.arm();
    }

    pub fn toggler(&self) -> &DirectionToggler {
        &self.toggler
    }

    pub fn firings(&self) -> u32 {
        self.firings
    }

    pub fn step_pin(&self) -> &STEP {
        &self.step_pin
    }

    pub fn direction_pin(&self) -> &DIR {
        &self.direction_pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_wraps_at_threshold_once_armed() {
        let mut toggler = DirectionToggler::new(3);
        toggler.arm();

        let flips: Vec<Option<bool>> = (0..7).map(|_| toggler.on_edge()).collect();
        assert_eq!(
            flips,
            [None, None, Some(true), None, None, Some(false), None]
        );
        assert_eq!(toggler.edge_counter(), 1);
        assert_eq!(toggler.flips(), 2);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn zero_threshold_is_rejected() {
        let _ = DirectionToggler::new(0);
    }

    #[test]
    fn unarmed_never_flips() {
        let mut toggler = DirectionToggler::new(140);
        for _ in 0..1000 {
            assert_eq!(toggler.on_edge(), None);
        }
        assert_eq!(toggler.edge_counter(), (1000 % 256) as u8);
        assert!(!toggler.direction());
    }

    #[test]
    fn arming_restarts_phase() {
        let mut toggler = DirectionToggler::new(140);
        for _ in 0..100 {
            toggler.on_edge();
        }
        toggler.arm();
        assert_eq!(toggler.edge_counter(), 0);
        for _ in 0..139 {
            assert_eq!(toggler.on_edge(), None);
        }
        assert_eq!(toggler.on_edge(), Some(true));
    }

    #[test]
    fn shared_state_tracks_tone() {
        let shared = SharedSynthState::new();
        assert!(!shared.is_running());
        shared.begin_tone(62_506);
        assert!(shared.is_running());
        assert_eq!(shared.reload(), 62_506);
        shared.end_tone();
        assert!(!shared.is_running());
        // reload survives the stop, the next start overwrites it
        assert_eq!(shared.reload(), 62_506);
    }
}
