/// A single tone handed to the tone player. Never stored, consumed on the spot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneRequest {
    pub frequency: u16,
    pub duration_ms: u32,
}

/// One song entry: a tone followed by a silent gap (often zero).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Beat {
    pub tone: u16,
    pub duration_ms: u32,
    pub gap_ms: u32,
}

impl Beat {
    pub const fn note(tone: u16, duration_ms: u32) -> Self {
        Beat { tone, duration_ms, gap_ms: 0 }
    }

    pub const fn note_then_rest(tone: u16, duration_ms: u32, gap_ms: u32) -> Self {
        Beat { tone, duration_ms, gap_ms }
    }

    pub const fn request(&self) -> ToneRequest {
        ToneRequest {
            frequency: self.tone,
            duration_ms: self.duration_ms,
        }
    }
}

/// Startup step that drives the head against its end stop before toggling is armed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    pub tone: u16,
    pub duration_ms: u32,
    /// silence after arming, before the song starts
    pub settle_ms: u32,
}

pub const DEFAULT_CALIBRATION: Calibration = Calibration {
    tone: 698,
    duration_ms: 2714,
    settle_ms: 1714,
};

/// Immutable song table plus the per-drive constants it was tuned for.
#[derive(Clone, Copy, Debug)]
pub struct Song {
    pub title: &'static str,
    /// compensates for the stepper's mechanical response, 1, 2 or 4
    pub divisor: u16,
    /// ISR firings between head direction flips
    pub inversion_threshold: u8,
    /// `None` means toggling is armed from power-on
    pub calibration: Option<Calibration>,
    pub beats: &'static [Beat],
}

impl Song {
    pub fn len(&self) -> usize {
        self.beats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }

    /// Sum of tone and gap durations.
    pub fn total_ms(&self) -> u64 {
        self.beats
            .iter()
            .map(|beat| beat.duration_ms as u64 + beat.gap_ms as u64)
            .sum()
    }

    /// Index and error of the first beat the waveform timer cannot produce.
    pub fn first_unplayable(&self) -> Option<(usize, super::AudioError)> {
        self.beats.iter().enumerate().find_map(|(i, beat)| {
            super::reload::reload_value(beat.tone, self.divisor)
                .err()
                .map(|err| (i, err))
        })
    }
}
