use crate::audio::note::{Beat, Song};

pub const SUPER_MARIO: Song = Song {
    title: "Super Mario Bros Theme",
    divisor: 2,
    inversion_threshold: 150,
    calibration: None,
    beats: &SUPER_MARIO_BEATS,
};

const SUPER_MARIO_BEATS: [Beat; 156] = [
    Beat::note_then_rest(660, 100, 150),
    Beat::note_then_rest(660, 100, 300),
    Beat::note_then_rest(660, 100, 300),
    Beat::note_then_rest(510, 100, 100),
    Beat::note_then_rest(660, 100, 300),
    Beat::note_then_rest(770, 100, 550),
    Beat::note_then_rest(380, 100, 575),
    Beat::note_then_rest(510, 100, 450),
    Beat::note_then_rest(380, 100, 400),
    Beat::note_then_rest(320, 100, 500),
    Beat::note_then_rest(440, 100, 300),
    Beat::note_then_rest(480, 80, 330),
    Beat::note_then_rest(450, 100, 150),
    Beat::note_then_rest(430, 100, 300),
    Beat::note_then_rest(380, 100, 200),
    Beat::note_then_rest(660, 80, 200),
    Beat::note_then_rest(760, 50, 150),
    Beat::note_then_rest(860, 100, 300),
    Beat::note_then_rest(700, 80, 150),
    Beat::note_then_rest(760, 50, 350),
    Beat::note_then_rest(660, 80, 300),
    Beat::note_then_rest(520, 80, 150),
    Beat::note_then_rest(580, 80, 150),
    Beat::note_then_rest(480, 80, 500),
    Beat::note_then_rest(510, 100, 450),
    Beat::note_then_rest(380, 100, 400),
    Beat::note_then_rest(320, 100, 500),
    Beat::note_then_rest(440, 100, 300),
    Beat::note_then_rest(480, 80, 330),
    Beat::note_then_rest(450, 100, 150),
    Beat::note_then_rest(430, 100, 300),
    Beat::note_then_rest(380, 100, 200),
    Beat::note_then_rest(660, 80, 200),
    Beat::note_then_rest(760, 50, 150),
    Beat::note_then_rest(860, 100, 300),
    Beat::note_then_rest(700, 80, 150),
    Beat::note_then_rest(760, 50, 350),
    Beat::note_then_rest(660, 80, 300),
    Beat::note_then_rest(520, 80, 150),
    Beat::note_then_rest(580, 80, 150),
    Beat::note_then_rest(480, 80, 500),
    Beat::note_then_rest(500, 100, 300),
    Beat::note_then_rest(760, 100, 100),
    Beat::note_then_rest(720, 100, 150),
    Beat::note_then_rest(680, 100, 150),
    Beat::note_then_rest(620, 150, 300),
    Beat::note_then_rest(650, 150, 300),
    Beat::note_then_rest(380, 100, 150),
    Beat::note_then_rest(430, 100, 150),
    Beat::note_then_rest(500, 100, 300),
    Beat::note_then_rest(430, 100, 150),
    Beat::note_then_rest(500, 100, 100),
    Beat::note_then_rest(570, 100, 220),
    Beat::note_then_rest(500, 100, 300),
    Beat::note_then_rest(760, 100, 100),
    Beat::note_then_rest(720, 100, 150),
    Beat::note_then_rest(680, 100, 150),
    Beat::note_then_rest(620, 150, 300),
    Beat::note_then_rest(650, 200, 300),
    Beat::note_then_rest(1020, 80, 300),
    Beat::note_then_rest(1020, 80, 150),
    Beat::note_then_rest(1020, 80, 300),
    Beat::note_then_rest(380, 100, 300),
    Beat::note_then_rest(500, 100, 300),
    Beat::note_then_rest(760, 100, 100),
    Beat::note_then_rest(720, 100, 150),
    Beat::note_then_rest(680, 100, 150),
    Beat::note_then_rest(620, 150, 300),
    Beat::note_then_rest(650, 150, 300),
    Beat::note_then_rest(380, 100, 150),
    Beat::note_then_rest(430, 100, 150),
    Beat::note_then_rest(500, 100, 300),
    Beat::note_then_rest(430, 100, 150),
    Beat::note_then_rest(500, 100, 100),
    Beat::note_then_rest(570, 100, 420),
    Beat::note_then_rest(585, 100, 450),
    Beat::note_then_rest(550, 100, 420),
    Beat::note_then_rest(500, 100, 360),
    Beat::note_then_rest(380, 100, 300),
    Beat::note_then_rest(500, 100, 300),
    Beat::note_then_rest(500, 100, 150),
    Beat::note_then_rest(500, 100, 300),
    Beat::note_then_rest(500, 100, 300),
    Beat::note_then_rest(760, 100, 100),
    Beat::note_then_rest(720, 100, 150),
    Beat::note_then_rest(680, 100, 150),
    Beat::note_then_rest(620, 150, 300),
    Beat::note_then_rest(650, 150, 300),
    Beat::note_then_rest(380, 100, 150),
    Beat::note_then_rest(430, 100, 150),
    Beat::note_then_rest(500, 100, 300),
    Beat::note_then_rest(430, 100, 150),
    Beat::note_then_rest(500, 100, 100),
    Beat::note_then_rest(570, 100, 220),
    Beat::note_then_rest(500, 100, 300),
    Beat::note_then_rest(760, 100, 100),
    Beat::note_then_rest(720, 100, 150),
    Beat::note_then_rest(680, 100, 150),
    Beat::note_then_rest(620, 150, 300),
    Beat::note_then_rest(650, 200, 300),
    Beat::note_then_rest(1020, 80, 300),
    Beat::note_then_rest(1020, 80, 150),
    Beat::note_then_rest(1020, 80, 300),
    Beat::note_then_rest(380, 100, 300),
    Beat::note_then_rest(500, 100, 300),
    Beat::note_then_rest(760, 100, 100),
    Beat::note_then_rest(720, 100, 150),
    Beat::note_then_rest(680, 100, 150),
    Beat::note_then_rest(620, 150, 300),
    Beat::note_then_rest(650, 150, 300),
    Beat::note_then_rest(380, 100, 150),
    Beat::note_then_rest(430, 100, 150),
    Beat::note_then_rest(500, 100, 300),
    Beat::note_then_rest(430, 100, 150),
    Beat::note_then_rest(500, 100, 100),
    Beat::note_then_rest(570, 100, 420),
    Beat::note_then_rest(585, 100, 450),
    Beat::note_then_rest(550, 100, 420),
    Beat::note_then_rest(500, 100, 360),
    Beat::note_then_rest(380, 100, 300),
    Beat::note_then_rest(500, 100, 300),
    Beat::note_then_rest(500, 100, 150),
    Beat::note_then_rest(500, 100, 300),
    Beat::note_then_rest(500, 60, 150),
    Beat::note_then_rest(500, 80, 300),
    Beat::note_then_rest(500, 60, 350),
    Beat::note_then_rest(500, 80, 150),
    Beat::note_then_rest(580, 80, 350),
    Beat::note_then_rest(660, 80, 150),
    Beat::note_then_rest(500, 80, 300),
    Beat::note_then_rest(430, 80, 150),
    Beat::note_then_rest(380, 80, 600),
    Beat::note_then_rest(500, 60, 150),
    Beat::note_then_rest(500, 80, 300),
    Beat::note_then_rest(500, 60, 350),
    Beat::note_then_rest(500, 80, 150),
    Beat::note_then_rest(580, 80, 150),
    Beat::note_then_rest(660, 80, 550),
    Beat::note_then_rest(870, 80, 325),
    Beat::note_then_rest(760, 80, 600),
    Beat::note_then_rest(500, 60, 150),
    Beat::note_then_rest(500, 80, 300),
    Beat::note_then_rest(500, 60, 350),
    Beat::note_then_rest(500, 80, 150),
    Beat::note_then_rest(580, 80, 350),
    Beat::note_then_rest(660, 80, 150),
    Beat::note_then_rest(500, 80, 300),
    Beat::note_then_rest(430, 80, 150),
    Beat::note_then_rest(380, 80, 600),
    Beat::note_then_rest(660, 100, 150),
    Beat::note_then_rest(660, 100, 300),
    Beat::note_then_rest(660, 100, 300),
    Beat::note_then_rest(510, 100, 100),
    Beat::note_then_rest(660, 100, 300),
    Beat::note_then_rest(770, 100, 550),
    Beat::note_then_rest(380, 100, 575),
];
