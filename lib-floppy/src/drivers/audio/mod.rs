pub mod waveform;

/// Hardware seam for the square-wave timer driving the stepper.
///
/// `start` and `arm_direction` are only ever called while the timer is
/// stopped, so the interrupt handler never races the main context on the
/// values they install.
pub trait WaveformDriver {
    fn start(&mut self, reload: u16);
    fn stop(&mut self);
    fn arm_direction(&mut self, flip: bool);
}
