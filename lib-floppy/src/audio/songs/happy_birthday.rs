use crate::audio::note::{Beat, Song, DEFAULT_CALIBRATION};

pub const HAPPY_BIRTHDAY: Song = Song {
    title: "Happy Birthday",
    divisor: 4,
    inversion_threshold: 140,
    calibration: Some(DEFAULT_CALIBRATION),
    beats: &HAPPY_BIRTHDAY_BEATS,
};

const HAPPY_BIRTHDAY_BEATS: [Beat; 52] = [
    Beat::note(391, 230),
    Beat::note(391, 230),
    Beat::note(440, 461),
    Beat::note(391, 461),
    Beat::note(523, 461),
    Beat::note(493, 923),
    Beat::note(391, 230),
    Beat::note(391, 230),
    Beat::note(440, 461),
    Beat::note(391, 461),
    Beat::note(587, 461),
    Beat::note(523, 923),
    Beat::note(391, 230),
    Beat::note(391, 230),
    Beat::note(783, 461),
    Beat::note(659, 461),
    Beat::note(523, 230),
    Beat::note(523, 230),
    Beat::note(493, 461),
    Beat::note(440, 461),
    Beat::note(698, 230),
    Beat::note(698, 230),
    Beat::note(659, 461),
    Beat::note(523, 461),
    Beat::note(587, 461),
    Beat::note(523, 923),
    Beat::note(391, 230),
    Beat::note(391, 230),
    Beat::note(440, 461),
    Beat::note(391, 461),
    Beat::note(523, 461),
    Beat::note(493, 923),
    Beat::note(391, 230),
    Beat::note(391, 230),
    Beat::note(440, 461),
    Beat::note(391, 461),
    Beat::note(587, 461),
    Beat::note(523, 923),
    Beat::note(391, 230),
    Beat::note(391, 230),
    Beat::note(783, 465),
    Beat::note(659, 465),
    Beat::note(523, 232),
    Beat::note(523, 232),
    Beat::note(493, 480),
    Beat::note(440, 480),
    Beat::note(698, 247),
    Beat::note(698, 247),
    Beat::note(659, 512),
    Beat::note(523, 512),
    Beat::note(587, 512),
    Beat::note(523, 1025),
];
