use crate::audio::note::{Beat, Song, DEFAULT_CALIBRATION};

pub const BADINERIE_MELODY: Song = Song {
    title: "Bach - Badinerie (melody)",
    divisor: 4,
    inversion_threshold: 140,
    calibration: Some(DEFAULT_CALIBRATION),
    beats: &BADINERIE_MELODY_BEATS,
};

const BADINERIE_MELODY_BEATS: [Beat; 426] = [
    Beat::note_then_rest(987, 177, 62),
    Beat::note_then_rest(1174, 85, 33),
    Beat::note_then_rest(987, 56, 81),
    Beat::note_then_rest(739, 204, 37),
    Beat::note_then_rest(987, 70, 43),
    Beat::note_then_rest(739, 62, 91),
    Beat::note_then_rest(587, 197, 54),
    Beat::note_then_rest(739, 56, 39),
    Beat::note_then_rest(587, 72, 64),
    Beat::note_then_rest(493, 272, 218),
    Beat::note_then_rest(369, 112, 16),
    Beat::note_then_rest(493, 87, 54),
    Beat::note_then_rest(587, 104, 2),
    Beat::note_then_rest(493, 72, 60),
    Beat::note_then_rest(554, 100, 12),
    Beat::note_then_rest(493, 77, 60),
    Beat::note_then_rest(554, 104, 6),
    Beat::note_then_rest(493, 93, 52),
    Beat::note_then_rest(466, 87, 22),
    Beat::note_then_rest(554, 102, 22),
    Beat::note_then_rest(659, 100, 18),
    Beat::note_then_rest(554, 77, 60),
    Beat::note_then_rest(587, 108, 141),
    Beat::note_then_rest(493, 83, 166),
    Beat::note_then_rest(987, 208, 31),
    Beat::note_then_rest(1174, 87, 25),
    Beat::note_then_rest(987, 60, 87),
    Beat::note_then_rest(739, 208, 47),
    Beat::note_then_rest(987, 66, 33),
    Beat::note_then_rest(739, 75, 68),
    Beat::note_then_rest(587, 202, 47),
    Beat::note_then_rest(739, 77, 41),
    Beat::note_then_rest(587, 75, 60),
    Beat::note_then_rest(493, 329, 164),
    Beat::note_then_rest(587, 125, 120),
    Beat::note_then_rest(587, 127, 131),
    Beat::note_then_rest(587, 122, 135),
    Beat::note_then_rest(587, 127, 127),
    Beat::note_then_rest(987, 100, 131),
    Beat::note_then_rest(587, 131, 125),
    Beat::note_then_rest(659, 60, 50),
    Beat::note_then_rest(659, 61, 72),
    Beat::note_then_rest(554, 155, 102),
    Beat::note_then_rest(739, 116, 141),
    Beat::note_then_rest(739, 112, 141),
    Beat::note_then_rest(739, 112, 131),
    Beat::note_then_rest(739, 116, 133),
    Beat::note_then_rest(1174, 118, 133),
    Beat::note_then_rest(739, 143, 100),
    Beat::note_then_rest(830, 59, 68),
    Beat::note_then_rest(830, 84, 22),
    Beat::note_then_rest(698, 136, 137),
    Beat::note_then_rest(554, 114, 131),
    Beat::note_then_rest(880, 81, 31),
    Beat::note_then_rest(739, 83, 50),
    Beat::note_then_rest(830, 102, 8),
    Beat::note_then_rest(739, 66, 52),
    Beat::note_then_rest(830, 100, 25),
    Beat::note_then_rest(739, 83, 37),
    Beat::note_then_rest(698, 100, 29),
    Beat::note_then_rest(830, 72, 50),
    Beat::note_then_rest(987, 95, 27),
    Beat::note_then_rest(830, 62, 64),
    Beat::note_then_rest(880, 89, 39),
    Beat::note_then_rest(830, 66, 56),
    Beat::note_then_rest(880, 89, 41),
    Beat::note_then_rest(830, 72, 60),
    Beat::note_then_rest(739, 66, 54),
    Beat::note_then_rest(880, 60, 66),
    Beat::note_then_rest(739, 141, 99),
    Beat::note_then_rest(739, 68, 58),
    Beat::note_then_rest(987, 66, 58),
    Beat::note_then_rest(739, 151, 108),
    Beat::note_then_rest(739, 56, 64),
    Beat::note_then_rest(1108, 89, 29),
    Beat::note_then_rest(739, 122, 2),
    Beat::note_then_rest(698, 142, 101),
    Beat::note_then_rest(1174, 75, 45),
    Beat::note_then_rest(739, 106, 10),
    Beat::note_then_rest(698, 155, 90),
    Beat::note_then_rest(1174, 79, 43),
    Beat::note_then_rest(1108, 75, 54),
    Beat::note_then_rest(987, 95, 54),
    Beat::note_then_rest(1108, 79, 39),
    Beat::note_then_rest(880, 81, 43),
    Beat::note_then_rest(830, 56, 41),
    Beat::note_then_rest(739, 85, 70),
    Beat::note_then_rest(880, 102, 147),
    Beat::note_then_rest(880, 53, 45),
    Beat::note_then_rest(880, 65, 72),
    Beat::note_then_rest(739, 218, 295),
    Beat::note_then_rest(987, 177, 62),
    Beat::note_then_rest(1174, 85, 33),
    Beat::note_then_rest(987, 56, 81),
    Beat::note_then_rest(739, 204, 37),
    Beat::note_then_rest(987, 70, 43),
    Beat::note_then_rest(739, 62, 91),
    Beat::note_then_rest(587, 197, 54),
    Beat::note_then_rest(739, 56, 39),
    Beat::note_then_rest(587, 72, 64),
    Beat::note_then_rest(493, 272, 218),
    Beat::note_then_rest(369, 112, 16),
    Beat::note_then_rest(493, 87, 54),
    Beat::note_then_rest(587, 104, 2),
    Beat::note_then_rest(493, 72, 60),
    Beat::note_then_rest(554, 100, 12),
    Beat::note_then_rest(493, 77, 60),
    Beat::note_then_rest(554, 104, 6),
    Beat::note_then_rest(493, 93, 52),
    Beat::note_then_rest(466, 87, 22),
    Beat::note_then_rest(554, 102, 22),
    Beat::note_then_rest(659, 100, 18),
    Beat::note_then_rest(554, 77, 60),
    Beat::note_then_rest(587, 108, 141),
    Beat::note_then_rest(493, 83, 166),
    Beat::note_then_rest(987, 208, 31),
    Beat::note_then_rest(1174, 87, 25),
    Beat::note_then_rest(987, 60, 87),
    Beat::note_then_rest(739, 208, 47),
    Beat::note_then_rest(987, 66, 33),
    Beat::note_then_rest(739, 75, 68),
    Beat::note_then_rest(587, 202, 47),
    Beat::note_then_rest(739, 77, 41),
    Beat::note_then_rest(587, 75, 60),
    Beat::note_then_rest(493, 329, 164),
    Beat::note_then_rest(587, 125, 120),
    Beat::note_then_rest(587, 127, 131),
    Beat::note_then_rest(587, 122, 135),
    Beat::note_then_rest(587, 127, 127),
    Beat::note_then_rest(987, 100, 131),
    Beat::note_then_rest(587, 131, 125),
    Beat::note_then_rest(659, 60, 50),
    Beat::note_then_rest(659, 61, 72),
    Beat::note_then_rest(554, 155, 102),
    Beat::note_then_rest(739, 116, 141),
    Beat::note_then_rest(739, 112, 141),
    Beat::note_then_rest(739, 112, 131),
    Beat::note_then_rest(739, 116, 133),
    Beat::note_then_rest(1174, 118, 133),
    Beat::note_then_rest(739, 143, 100),
    Beat::note_then_rest(830, 59, 68),
    Beat::note_then_rest(830, 84, 22),
    Beat::note_then_rest(698, 136, 137),
    Beat::note_then_rest(554, 114, 131),
    Beat::note_then_rest(880, 81, 31),
    Beat::note_then_rest(739, 83, 50),
    Beat::note_then_rest(830, 102, 8),
    Beat::note_then_rest(739, 66, 52),
    Beat::note_then_rest(830, 100, 25),
    Beat::note_then_rest(739, 83, 37),
    Beat::note_then_rest(698, 100, 29),
    Beat::note_then_rest(830, 72, 50),
    Beat::note_then_rest(987, 95, 27),
    Beat::note_then_rest(830, 62, 64),
    Beat::note_then_rest(880, 89, 39),
    Beat::note_then_rest(830, 66, 56),
    Beat::note_then_rest(880, 89, 41),
    Beat::note_then_rest(830, 72, 60),
    Beat::note_then_rest(739, 66, 54),
    Beat::note_then_rest(880, 60, 66),
    Beat::note_then_rest(739, 141, 99),
    Beat::note_then_rest(739, 68, 58),
    Beat::note_then_rest(987, 66, 58),
    Beat::note_then_rest(739, 151, 108),
    Beat::note_then_rest(739, 56, 64),
    Beat::note_then_rest(1108, 89, 29),
    Beat::note_then_rest(739, 122, 2),
    Beat::note_then_rest(698, 142, 101),
    Beat::note_then_rest(1174, 75, 45),
    Beat::note_then_rest(739, 106, 10),
    Beat::note_then_rest(698, 155, 90),
    Beat::note_then_rest(1174, 79, 43),
    Beat::note_then_rest(1108, 75, 54),
    Beat::note_then_rest(987, 95, 54),
    Beat::note_then_rest(1108, 79, 39),
    Beat::note_then_rest(880, 81, 43),
    Beat::note_then_rest(830, 56, 41),
    Beat::note_then_rest(739, 85, 70),
    Beat::note_then_rest(880, 102, 147),
    Beat::note_then_rest(880, 53, 45),
    Beat::note_then_rest(880, 65, 72),
    Beat::note_then_rest(739, 218, 306),
    Beat::note_then_rest(739, 197, 50),
    Beat::note_then_rest(880, 83, 41),
    Beat::note_then_rest(739, 52, 72),
    Beat::note_then_rest(554, 227, 18),
    Beat::note_then_rest(739, 79, 43),
    Beat::note_then_rest(554, 83, 56),
    Beat::note_then_rest(440, 210, 41),
    Beat::note_then_rest(554, 64, 22),
    Beat::note_then_rest(440, 100, 52),
    Beat::note_then_rest(369, 254, 239),
    Beat::note_then_rest(523, 258, 233),
    Beat::note_then_rest(659, 225, 27),
    Beat::note_then_rest(622, 97, 14),
    Beat::note_then_rest(739, 75, 62),
    Beat::note_then_rest(880, 156, 72),
    Beat::note_then_rest(783, 75, 41),
    Beat::note_then_rest(739, 72, 66),
    Beat::note_then_rest(783, 91, 172),
    Beat::note_then_rest(659, 83, 168),
    Beat::note_then_rest(783, 218, 25),
    Beat::note_then_rest(987, 81, 31),
    Beat::note_then_rest(783, 68, 66),
    Beat::note_then_rest(659, 200, 56),
    Beat::note_then_rest(783, 77, 37),
    Beat::note_then_rest(659, 68, 66),
    Beat::note_then_rest(554, 208, 45),
    Beat::note_then_rest(659, 81, 27),
    Beat::note_then_rest(554, 72, 66),
    Beat::note_then_rest(440, 500, 112),
    Beat::note_then_rest(587, 87, 33),
    Beat::note_then_rest(739, 60, 60),
    Beat::note_then_rest(587, 77, 54),
    Beat::note_then_rest(659, 120, 8),
    Beat::note_then_rest(587, 77, 56),
    Beat::note_then_rest(659, 110, 135),
    Beat::note_then_rest(554, 97, 16),
    Beat::note_then_rest(659, 116, 14),
    Beat::note_then_rest(783, 91, 22),
    Beat::note_then_rest(659, 95, 33),
    Beat::note_then_rest(739, 83, 31),
    Beat::note_then_rest(659, 89, 37),
    Beat::note_then_rest(739, 100, 31),
    Beat::note_then_rest(659, 77, 45),
    Beat::note_then_rest(587, 91, 25),
    Beat::note_then_rest(739, 62, 54),
    Beat::note_then_rest(587, 149, 112),
    Beat::note_then_rest(587, 68, 56),
    Beat::note_then_rest(783, 126, 125),
    Beat::note_then_rest(554, 130, 114),
    Beat::note_then_rest(880, 100, 27),
    Beat::note_then_rest(587, 132, 116),
    Beat::note_then_rest(587, 68, 54),
    Beat::note_then_rest(987, 97, 35),
    Beat::note_then_rest(587, 110, 16),
    Beat::note_then_rest(554, 127, 4),
    Beat::note_then_rest(587, 70, 56),
    Beat::note_then_rest(987, 81, 43),
    Beat::note_then_rest(880, 104, 27),
    Beat::note_then_rest(783, 64, 60),
    Beat::note_then_rest(880, 95, 20),
    Beat::note_then_rest(739, 91, 33),
    Beat::note_then_rest(659, 89, 16),
    Beat::note_then_rest(587, 97, 47),
    Beat::note_then_rest(739, 139, 95),
    Beat::note_then_rest(739, 58, 62),
    Beat::note_then_rest(739, 77, 56),
    Beat::note_then_rest(587, 304, 210),
    Beat::note_then_rest(739, 100, 145),
    Beat::note_then_rest(739, 108, 150),
    Beat::note_then_rest(739, 97, 150),
    Beat::note_then_rest(739, 106, 147),
    Beat::note_then_rest(1174, 93, 145),
    Beat::note_then_rest(739, 131, 129),
    Beat::note_then_rest(783, 66, 56),
    Beat::note_then_rest(783, 67, 50),
    Beat::note_then_rest(659, 143, 116),
    Beat::note_then_rest(659, 120, 137),
    Beat::note_then_rest(659, 114, 122),
    Beat::note_then_rest(659, 120, 129),
    Beat::note_then_rest(659, 131, 112),
    Beat::note_then_rest(1108, 93, 147),
    Beat::note_then_rest(659, 125, 106),
    Beat::note_then_rest(739, 62, 54),
    Beat::note_then_rest(739, 89, 41),
    Beat::note_then_rest(587, 145, 125),
    Beat::note_then_rest(987, 114, 120),
    Beat::note_then_rest(1174, 79, 41),
    Beat::note_then_rest(987, 64, 58),
    Beat::note_then_rest(880, 255, 516),
    Beat::note_then_rest(987, 110, 12),
    Beat::note_then_rest(783, 63, 74),
    Beat::note_then_rest(659, 572, 166),
    Beat::note_then_rest(783, 116, 2),
    Beat::note_then_rest(659, 71, 75),
    Beat::note_then_rest(523, 91, 27),
    Beat::note_then_rest(659, 93, 12),
    Beat::note_then_rest(783, 97, 20),
    Beat::note_then_rest(659, 62, 60),
    Beat::note_then_rest(523, 120, 122),
    Beat::note_then_rest(523, 126, 141),
    Beat::note_then_rest(466, 100, 150),
    Beat::note_then_rest(369, 110, 147),
    Beat::note_then_rest(391, 229, 31),
    Beat::note_then_rest(369, 89, 143),
    Beat::note_then_rest(493, 187, 52),
    Beat::note_then_rest(466, 97, 27),
    Beat::note_then_rest(554, 83, 47),
    Beat::note_then_rest(659, 202, 47),
    Beat::note_then_rest(587, 87, 22),
    Beat::note_then_rest(554, 81, 56),
    Beat::note_then_rest(587, 183, 68),
    Beat::note_then_rest(493, 107, 53),
    Beat::note_then_rest(659, 101, 239),
    Beat::note_then_rest(587, 95, 14),
    Beat::note_then_rest(739, 85, 50),
    Beat::note_then_rest(987, 100, 156),
    Beat::note_then_rest(739, 70, 187),
    Beat::note_then_rest(659, 81, 14),
    Beat::note_then_rest(587, 114, 25),
    Beat::note_then_rest(554, 89, 31),
    Beat::note_then_rest(587, 52, 91),
    Beat::note_then_rest(554, 261, 252),
    Beat::note_then_rest(739, 197, 50),
    Beat::note_then_rest(880, 83, 41),
    Beat::note_then_rest(739, 52, 72),
    Beat::note_then_rest(554, 227, 18),
    Beat::note_then_rest(739, 79, 43),
    Beat::note_then_rest(554, 83, 56),
    Beat::note_then_rest(440, 210, 41),
    Beat::note_then_rest(554, 64, 22),
    Beat::note_then_rest(440, 100, 52),
    Beat::note_then_rest(369, 254, 239),
    Beat::note_then_rest(523, 258, 233),
    Beat::note_then_rest(659, 225, 27),
    Beat::note_then_rest(622, 97, 14),
    Beat::note_then_rest(739, 75, 62),
    Beat::note_then_rest(880, 156, 72),
    Beat::note_then_rest(783, 75, 41),
    Beat::note_then_rest(739, 72, 66),
    Beat::note_then_rest(783, 91, 172),
    Beat::note_then_rest(659, 83, 168),
    Beat::note_then_rest(783, 218, 25),
    Beat::note_then_rest(987, 81, 31),
    Beat::note_then_rest(783, 68, 66),
    Beat::note_then_rest(659, 200, 56),
    Beat::note_then_rest(783, 77, 37),
    Beat::note_then_rest(659, 68, 66),
    Beat::note_then_rest(554, 208, 45),
    Beat::note_then_rest(659, 81, 27),
    Beat::note_then_rest(554, 72, 66),
    Beat::note_then_rest(440, 500, 112),
    Beat::note_then_rest(587, 87, 33),
    Beat::note_then_rest(739, 60, 60),
    Beat::note_then_rest(587, 77, 54),
    Beat::note_then_rest(659, 120, 8),
    Beat::note_then_rest(587, 77, 56),
    Beat::note_then_rest(659, 110, 135),
    Beat::note_then_rest(554, 97, 16),
    Beat::note_then_rest(659, 116, 14),
    Beat::note_then_rest(783, 91, 22),
    Beat::note_then_rest(659, 95, 33),
    Beat::note_then_rest(739, 83, 31),
    Beat::note_then_rest(659, 89, 37),
    Beat::note_then_rest(739, 100, 31),
    Beat::note_then_rest(659, 77, 45),
    Beat::note_then_rest(587, 91, 25),
    Beat::note_then_rest(739, 62, 54),
    Beat::note_then_rest(587, 149, 112),
    Beat::note_then_rest(587, 68, 56),
    Beat::note_then_rest(783, 126, 125),
    Beat::note_then_rest(554, 130, 114),
    Beat::note_then_rest(880, 100, 27),
    Beat::note_then_rest(587, 132, 116),
    Beat::note_then_rest(587, 68, 54),
    Beat::note_then_rest(987, 97, 35),
    Beat::note_then_rest(587, 110, 16),
    Beat::note_then_rest(554, 127, 4),
    Beat::note_then_rest(587, 70, 56),
    Beat::note_then_rest(987, 81, 43),
    Beat::note_then_rest(880, 104, 27),
    Beat::note_then_rest(783, 64, 60),
    Beat::note_then_rest(880, 95, 20),
    Beat::note_then_rest(739, 91, 33),
    Beat::note_then_rest(659, 89, 16),
    Beat::note_then_rest(587, 97, 47),
    Beat::note_then_rest(739, 139, 95),
    Beat::note_then_rest(739, 58, 62),
    Beat::note_then_rest(739, 77, 56),
    Beat::note_then_rest(587, 304, 210),
    Beat::note_then_rest(739, 100, 145),
    Beat::note_then_rest(739, 108, 150),
    Beat::note_then_rest(739, 97, 150),
    Beat::note_then_rest(739, 106, 147),
    Beat::note_then_rest(1174, 93, 145),
    Beat::note_then_rest(739, 131, 129),
    Beat::note(783, 66),
    Beat::note_then_rest(739, 64, 43),
    Beat::note_then_rest(739, 91, 234),
    Beat::note_then_rest(659, 120, 137),
    Beat::note_then_rest(659, 114, 122),
    Beat::note_then_rest(659, 120, 129),
    Beat::note_then_rest(659, 131, 112),
    Beat::note_then_rest(1108, 93, 147),
    Beat::note_then_rest(659, 125, 106),
    Beat::note_then_rest(739, 62, 54),
    Beat::note_then_rest(739, 89, 41),
    Beat::note_then_rest(587, 145, 125),
    Beat::note_then_rest(987, 114, 120),
    Beat::note_then_rest(1174, 79, 41),
    Beat::note_then_rest(987, 64, 58),
    Beat::note_then_rest(880, 255, 516),
    Beat::note_then_rest(987, 110, 12),
    Beat::note_then_rest(783, 63, 74),
    Beat::note_then_rest(659, 572, 166),
    Beat::note_then_rest(783, 116, 2),
    Beat::note_then_rest(659, 71, 75),
    Beat::note_then_rest(523, 91, 27),
    Beat::note_then_rest(659, 93, 12),
    Beat::note_then_rest(783, 97, 20),
    Beat::note_then_rest(659, 62, 60),
    Beat::note_then_rest(523, 120, 122),
    Beat::note_then_rest(523, 126, 141),
    Beat::note_then_rest(466, 100, 150),
    Beat::note_then_rest(369, 110, 147),
    Beat::note_then_rest(391, 229, 31),
    Beat::note_then_rest(369, 89, 143),
    Beat::note_then_rest(493, 187, 52),
    Beat::note_then_rest(466, 97, 27),
    Beat::note_then_rest(554, 83, 47),
    Beat::note_then_rest(659, 202, 47),
    Beat::note_then_rest(587, 87, 22),
    Beat::note_then_rest(554, 81, 56),
    Beat::note_then_rest(587, 183, 68),
    Beat::note_then_rest(493, 107, 53),
    Beat::note_then_rest(659, 101, 239),
    Beat::note_then_rest(587, 95, 14),
    Beat::note_then_rest(739, 85, 50),
    Beat::note_then_rest(987, 100, 156),
    Beat::note_then_rest(739, 70, 187),
    Beat::note_then_rest(659, 81, 14),
    Beat::note_then_rest(587, 114, 25),
    Beat::note_then_rest(554, 89, 31),
    Beat::note_then_rest(587, 52, 91),
    Beat::note(554, 261),
];
