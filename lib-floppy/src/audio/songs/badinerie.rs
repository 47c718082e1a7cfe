use crate::audio::note::{Beat, Song, DEFAULT_CALIBRATION};

pub const BADINERIE: Song = Song {
    title: "Bach - Badinerie",
    divisor: 4,
    inversion_threshold: 140,
    calibration: Some(DEFAULT_CALIBRATION),
    beats: &BADINERIE_BEATS,
};

const BADINERIE_BEATS: [Beat; 446] = [
    Beat::note_then_rest(123, 122, 120),
    Beat::note_then_rest(1174, 86, 31),
    Beat::note_then_rest(987, 57, 70),
    Beat::note_then_rest(146, 109, 134),
    Beat::note_then_rest(123, 125, 103),
    Beat::note_then_rest(587, 156, 90),
    Beat::note_then_rest(146, 144, 118),
    Beat::note_then_rest(493, 179, 70),
    Beat::note_then_rest(184, 122, 129),
    Beat::note_then_rest(369, 114, 14),
    Beat::note_then_rest(493, 88, 22),
    Beat::note_then_rest(123, 121, 12),
    Beat::note_then_rest(493, 74, 31),
    Beat::note(391, 138),
    Beat::note_then_rest(493, 78, 45),
    Beat::note_then_rest(493, 146, 97),
    Beat::note_then_rest(554, 125, 6),
    Beat::note_then_rest(554, 102, 20),
    Beat::note_then_rest(659, 101, 16),
    Beat::note_then_rest(554, 78, 54),
    Beat::note_then_rest(493, 131, 101),
    Beat::note_then_rest(146, 90, 32),
    Beat::note_then_rest(138, 87, 50),
    Beat::note_then_rest(123, 118, 124),
    Beat::note_then_rest(1174, 89, 22),
    Beat::note_then_rest(987, 62, 85),
    Beat::note_then_rest(739, 207, 27),
    Beat::note_then_rest(123, 123, 126),
    Beat::note_then_rest(587, 139, 102),
    Beat::note_then_rest(146, 132, 2),
    Beat::note_then_rest(587, 77, 29),
    Beat::note_then_rest(293, 185, 87),
    Beat::note_then_rest(184, 118, 120),
    Beat::note_then_rest(369, 126, 117),
    Beat::note_then_rest(587, 309, 60),
    Beat::note_then_rest(554, 100, 22),
    Beat::note_then_rest(587, 305, 68),
    Beat::note_then_rest(987, 78, 43),
    Beat::note_then_rest(587, 193, 50),
    Beat::note_then_rest(440, 133, 2),
    Beat::note_then_rest(659, 56, 60),
    Beat::note_then_rest(329, 118, 121),
    Beat::note_then_rest(440, 131, 123),
    Beat::note_then_rest(587, 123, 8),
    Beat::note_then_rest(293, 87, 25),
    Beat::note_then_rest(415, 148, 94),
    Beat::note_then_rest(587, 116, 2),
    Beat::note_then_rest(246, 86, 37),
    Beat::note(587, 115),
    Beat::note_then_rest(1174, 90, 35),
    Beat::note_then_rest(739, 173, 80),
    Beat::note_then_rest(830, 54, 18),
    Beat::note_then_rest(739, 72, 6),
    Beat::note_then_rest(830, 85, 6),
    Beat::note_then_rest(415, 127, 124),
    Beat::note_then_rest(739, 122, 18),
    Beat::note_then_rest(739, 89, 18),
    Beat::note_then_rest(739, 119, 22),
    Beat::note_then_rest(739, 85, 16),
    Beat::note_then_rest(246, 121, 18),
    Beat::note_then_rest(739, 67, 47),
    Beat::note_then_rest(207, 117, 8),
    Beat::note_then_rest(739, 85, 35),
    Beat::note_then_rest(698, 101, 26),
    Beat::note_then_rest(830, 74, 43),
    Beat::note_then_rest(987, 109, 16),
    Beat::note_then_rest(830, 64, 58),
    Beat::note_then_rest(184, 113, 18),
    Beat::note_then_rest(830, 68, 45),
    Beat::note_then_rest(739, 128, 10),
    Beat::note_then_rest(830, 74, 27),
    Beat::note_then_rest(739, 118, 30),
    Beat::note_then_rest(880, 61, 43),
    Beat::note_then_rest(554, 119, 10),
    Beat::note_then_rest(698, 118, 10),
    Beat::note_then_rest(739, 107, 20),
    Beat::note_then_rest(987, 67, 56),
    Beat::note_then_rest(493, 122, 123),
    Beat::note_then_rest(739, 107, 25),
    Beat::note_then_rest(1108, 90, 27),
    Beat::note(739, 124),
    Beat::note_then_rest(698, 144, 99),
    Beat::note_then_rest(1174, 75, 41),
    Beat::note_then_rest(293, 123, 120),
    Beat::note_then_rest(246, 124, 115),
    Beat::note_then_rest(1108, 76, 52),
    Beat::note_then_rest(987, 96, 20),
    Beat::note_then_rest(739, 115, 33),
    Beat::note_then_rest(880, 82, 27),
    Beat::note_then_rest(830, 119, 129),
    Beat::note_then_rest(440, 121, 130),
    Beat::note_then_rest(554, 108, 2),
    Beat::note_then_rest(880, 67, 70),
    Beat::note_then_rest(739, 220, 287),
    Beat::note_then_rest(123, 122, 120),
    Beat::note_then_rest(1174, 86, 31),
    Beat::note_then_rest(987, 57, 70),
    Beat::note_then_rest(146, 109, 134),
    Beat::note_then_rest(123, 125, 103),
    Beat::note_then_rest(587, 156, 90),
    Beat::note_then_rest(146, 144, 118),
    Beat::note_then_rest(493, 179, 70),
    Beat::note_then_rest(184, 122, 129),
    Beat::note_then_rest(369, 114, 14),
    Beat::note_then_rest(493, 88, 22),
    Beat::note_then_rest(123, 121, 12),
    Beat::note_then_rest(493, 74, 31),
    Beat::note(391, 138),
    Beat::note_then_rest(493, 78, 45),
    Beat::note_then_rest(493, 146, 97),
    Beat::note_then_rest(554, 125, 6),
    Beat::note_then_rest(554, 102, 20),
    Beat::note_then_rest(659, 101, 16),
    Beat::note_then_rest(554, 78, 54),
    Beat::note_then_rest(493, 131, 101),
    Beat::note_then_rest(146, 90, 32),
    Beat::note_then_rest(138, 87, 50),
    Beat::note_then_rest(123, 118, 124),
    Beat::note_then_rest(1174, 89, 22),
    Beat::note_then_rest(987, 62, 85),
    Beat::note_then_rest(739, 207, 27),
    Beat::note_then_rest(123, 123, 126),
    Beat::note_then_rest(587, 139, 102),
    Beat::note_then_rest(146, 132, 2),
    Beat::note_then_rest(587, 77, 29),
    Beat::note_then_rest(293, 185, 87),
    Beat::note_then_rest(184, 118, 120),
    Beat::note_then_rest(369, 126, 117),
    Beat::note_then_rest(587, 309, 60),
    Beat::note_then_rest(554, 100, 22),
    Beat::note_then_rest(587, 305, 68),
    Beat::note_then_rest(987, 78, 43),
    Beat::note_then_rest(587, 193, 50),
    Beat::note_then_rest(440, 133, 2),
    Beat::note_then_rest(659, 56, 60),
    Beat::note_then_rest(329, 118, 121),
    Beat::note_then_rest(440, 131, 123),
    Beat::note_then_rest(587, 123, 8),
    Beat::note_then_rest(293, 87, 25),
    Beat::note_then_rest(415, 148, 94),
    Beat::note_then_rest(587, 116, 2),
    Beat::note_then_rest(246, 86, 37),
    Beat::note(587, 115),
    Beat::note_then_rest(1174, 90, 35),
    Beat::note_then_rest(739, 173, 80),
    Beat::note_then_rest(830, 54, 18),
    Beat::note_then_rest(739, 72, 6),
    Beat::note_then_rest(830, 85, 6),
    Beat::note_then_rest(415, 127, 124),
    Beat::note_then_rest(739, 122, 18),
    Beat::note_then_rest(739, 89, 18),
    Beat::note_then_rest(739, 119, 22),
    Beat::note_then_rest(739, 85, 16),
    Beat::note_then_rest(246, 121, 18),
    Beat::note_then_rest(739, 67, 47),
    Beat::note_then_rest(207, 117, 8),
    Beat::note_then_rest(739, 85, 35),
    Beat::note_then_rest(698, 101, 26),
    Beat::note_then_rest(830, 74, 43),
    Beat::note_then_rest(987, 109, 16),
    Beat::note_then_rest(830, 64, 58),
    Beat::note_then_rest(184, 113, 18),
    Beat::note_then_rest(830, 68, 45),
    Beat::note_then_rest(739, 128, 10),
    Beat::note_then_rest(830, 74, 27),
    Beat::note_then_rest(739, 118, 30),
    Beat::note_then_rest(880, 61, 43),
    Beat::note_then_rest(554, 119, 10),
    Beat::note_then_rest(698, 118, 10),
    Beat::note_then_rest(739, 107, 20),
    Beat::note_then_rest(987, 67, 56),
    Beat::note_then_rest(493, 122, 123),
    Beat::note_then_rest(739, 107, 25),
    Beat::note_then_rest(1108, 90, 27),
    Beat::note(739, 124),
    Beat::note_then_rest(698, 144, 99),
    Beat::note_then_rest(1174, 75, 41),
    Beat::note_then_rest(293, 123, 120),
    Beat::note_then_rest(246, 124, 115),
    Beat::note_then_rest(1108, 76, 52),
    Beat::note_then_rest(987, 96, 20),
    Beat::note_then_rest(739, 115, 33),
    Beat::note_then_rest(880, 82, 27),
    Beat::note_then_rest(830, 119, 129),
    Beat::note_then_rest(440, 121, 130),
    Beat::note_then_rest(554, 108, 2),
    Beat::note_then_rest(880, 67, 70),
    Beat::note_then_rest(739, 220, 281),
    Beat::note_then_rest(440, 156, 108),
    Beat::note_then_rest(880, 85, 39),
    Beat::note_then_rest(739, 54, 41),
    Beat::note_then_rest(369, 170, 81),
    Beat::note_then_rest(92, 105, 37),
    Beat::note_then_rest(554, 85, 20),
    Beat::note_then_rest(440, 181, 72),
    Beat::note_then_rest(110, 109, 6),
    Beat::note_then_rest(440, 102, 29),
    Beat::note_then_rest(220, 174, 77),
    Beat::note(220, 94),
    Beat::note_then_rest(184, 91, 56),
    Beat::note_then_rest(369, 186, 60),
    Beat::note_then_rest(493, 159, 86),
    Beat::note_then_rest(123, 218, 32),
    Beat::note_then_rest(123, 207, 41),
    Beat::note_then_rest(123, 181, 47),
    Beat::note_then_rest(123, 163, 93),
    Beat::note_then_rest(164, 167, 74),
    Beat::note_then_rest(246, 106, 6),
    Beat::note_then_rest(195, 89, 45),
    Beat::note_then_rest(164, 187, 63),
    Beat::note_then_rest(195, 111, 22),
    Beat::note_then_rest(783, 70, 54),
    Beat::note_then_rest(138, 155, 109),
    Beat::note_then_rest(110, 143, 88),
    Beat::note_then_rest(659, 183, 67),
    Beat::note_then_rest(138, 126, 132),
    Beat::note_then_rest(329, 196, 43),
    Beat::note_then_rest(164, 170, 81),
    Beat::note_then_rest(184, 150, 91),
    Beat::note_then_rest(739, 62, 58),
    Beat::note_then_rest(587, 78, 47),
    Beat::note_then_rest(493, 113, 18),
    Beat::note_then_rest(587, 78, 27),
    Beat::note_then_rest(391, 128, 4),
    Beat::note_then_rest(587, 107, 14),
    Beat::note_then_rest(220, 131, 120),
    Beat::note_then_rest(440, 133, 115),
    Beat::note_then_rest(739, 84, 29),
    Beat::note_then_rest(659, 90, 33),
    Beat::note_then_rest(440, 125, 6),
    Beat::note_then_rest(659, 78, 43),
    Beat::note_then_rest(587, 93, 22),
    Beat::note_then_rest(739, 64, 51),
    Beat::note_then_rest(587, 150, 110),
    Beat::note_then_rest(587, 69, 54),
    Beat::note_then_rest(783, 127, 4),
    Beat::note_then_rest(195, 126, 118),
    Beat::note_then_rest(369, 177, 59),
    Beat::note_then_rest(220, 126, 2),
    Beat::note(554, 132),
    Beat::note_then_rest(391, 193, 38),
    Beat::note_then_rest(246, 134, 6),
    Beat::note_then_rest(554, 128, 2),
    Beat::note_then_rest(587, 72, 52),
    Beat::note_then_rest(987, 83, 14),
    Beat::note_then_rest(164, 130, 26),
    Beat::note_then_rest(783, 66, 31),
    Beat::note_then_rest(369, 143, 101),
    Beat::note_then_rest(493, 139, 104),
    Beat::note_then_rest(440, 123, 131),
    Beat::note_then_rest(391, 128, 43),
    Beat::note_then_rest(659, 79, 2),
    Beat::note_then_rest(146, 138, 122),
    Beat::note_then_rest(110, 110, 120),
    Beat::note_then_rest(73, 137, 113),
    Beat::note_then_rest(739, 316, 49),
    Beat::note_then_rest(659, 80, 50),
    Beat::note_then_rest(440, 119, 119),
    Beat::note_then_rest(146, 164, 79),
    Beat::note_then_rest(739, 195, 58),
    Beat::note_then_rest(659, 74, 12),
    Beat::note(739, 65),
    Beat::note_then_rest(587, 101, 4),
    Beat::note_then_rest(659, 143, 95),
    Beat::note_then_rest(116, 119, 132),
    Beat::note_then_rest(659, 316, 41),
    Beat::note_then_rest(587, 90, 37),
    Beat::note_then_rest(466, 105, 4),
    Beat::note_then_rest(233, 93, 45),
    Beat::note_then_rest(466, 115, 14),
    Beat::note_then_rest(1108, 72, 29),
    Beat::note_then_rest(233, 113, 135),
    Beat::note_then_rest(739, 63, 43),
    Beat::note_then_rest(587, 94, 27),
    Beat::note_then_rest(587, 224, 57),
    Beat::note_then_rest(987, 116, 118),
    Beat::note_then_rest(1174, 81, 39),
    Beat::note_then_rest(987, 65, 56),
    Beat::note_then_rest(164, 461, 42),
    Beat::note_then_rest(391, 132, 130),
    Beat::note_then_rest(987, 111, 10),
    Beat::note_then_rest(783, 64, 64),
    Beat::note_then_rest(164, 255, 8),
    Beat::note_then_rest(493, 107, 6),
    Beat::note_then_rest(391, 93, 24),
    Beat::note_then_rest(329, 155, 90),
    Beat::note(783, 118),
    Beat::note_then_rest(659, 73, 70),
    Beat::note_then_rest(164, 237, 2),
    Beat::note_then_rest(329, 99, 4),
    Beat::note_then_rest(659, 64, 58),
    Beat::note_then_rest(523, 120, 119),
    Beat::note_then_rest(523, 126, 123),
    Beat::note(493, 236),
    Beat::note_then_rest(466, 158, 122),
    Beat::note_then_rest(391, 228, 27),
    Beat::note_then_rest(277, 121, 111),
    Beat::note_then_rest(493, 187, 49),
    Beat::note_then_rest(466, 99, 25),
    Beat::note_then_rest(554, 84, 43),
    Beat::note_then_rest(554, 157, 92),
    Beat::note_then_rest(587, 89, 20),
    Beat::note_then_rest(554, 83, 45),
    Beat::note_then_rest(493, 226, 30),
    Beat::note_then_rest(493, 108, 6),
    Beat::note_then_rest(246, 81, 45),
    Beat::note_then_rest(739, 125, 6),
    Beat::note_then_rest(493, 87, 37),
    Beat::note_then_rest(587, 96, 12),
    Beat::note_then_rest(739, 86, 46),
    Beat::note_then_rest(987, 101, 139),
    Beat::note_then_rest(123, 108, 125),
    Beat::note(184, 128),
    Beat::note_then_rest(587, 116, 22),
    Beat::note_then_rest(554, 90, 20),
    Beat::note_then_rest(587, 73, 68),
    Beat::note_then_rest(554, 256, 241),
    Beat::note_then_rest(440, 156, 108),
    Beat::note_then_rest(880, 85, 39),
    Beat::note_then_rest(739, 54, 41),
    Beat::note_then_rest(369, 170, 81),
    Beat::note_then_rest(92, 105, 37),
    Beat::note_then_rest(554, 85, 20),
    Beat::note_then_rest(440, 181, 72),
    Beat::note_then_rest(110, 109, 6),
    Beat::note_then_rest(440, 102, 29),
    Beat::note_then_rest(220, 174, 77),
    Beat::note(220, 94),
    Beat::note_then_rest(184, 91, 56),
    Beat::note_then_rest(369, 186, 60),
    Beat::note_then_rest(493, 159, 86),
    Beat::note_then_rest(123, 218, 32),
    Beat::note_then_rest(123, 207, 41),
    Beat::note_then_rest(123, 181, 47),
    Beat::note_then_rest(123, 163, 93),
    Beat::note_then_rest(164, 167, 74),
    Beat::note_then_rest(246, 106, 6),
    Beat::note_then_rest(195, 89, 45),
    Beat::note_then_rest(164, 187, 63),
    Beat::note_then_rest(195, 111, 22),
    Beat::note_then_rest(783, 70, 54),
    Beat::note_then_rest(138, 155, 109),
    Beat::note_then_rest(110, 143, 88),
    Beat::note_then_rest(659, 183, 67),
    Beat::note_then_rest(138, 126, 132),
    Beat::note_then_rest(329, 196, 43),
    Beat::note_then_rest(164, 170, 81),
    Beat::note_then_rest(184, 150, 91),
    Beat::note_then_rest(739, 62, 58),
    Beat::note_then_rest(587, 78, 47),
    Beat::note_then_rest(493, 113, 18),
    Beat::note_then_rest(587, 78, 27),
    Beat::note_then_rest(391, 128, 4),
    Beat::note_then_rest(587, 107, 14),
    Beat::note_then_rest(220, 131, 120),
    Beat::note_then_rest(440, 133, 115),
    Beat::note_then_rest(739, 84, 29),
    Beat::note_then_rest(659, 90, 33),
    Beat::note_then_rest(440, 125, 6),
    Beat::note_then_rest(659, 78, 43),
    Beat::note_then_rest(587, 93, 22),
    Beat::note_then_rest(739, 64, 51),
    Beat::note_then_rest(587, 150, 110),
    Beat::note_then_rest(587, 69, 54),
    Beat::note_then_rest(783, 127, 4),
    Beat::note_then_rest(195, 126, 118),
    Beat::note_then_rest(369, 177, 59),
    Beat::note_then_rest(220, 126, 2),
    Beat::note(554, 132),
    Beat::note_then_rest(391, 193, 38),
    Beat::note_then_rest(246, 134, 6),
    Beat::note_then_rest(554, 128, 2),
    Beat::note_then_rest(587, 72, 52),
    Beat::note_then_rest(987, 83, 14),
    Beat::note_then_rest(164, 130, 26),
    Beat::note_then_rest(783, 66, 31),
    Beat::note_then_rest(369, 143, 101),
    Beat::note_then_rest(493, 139, 104),
    Beat::note_then_rest(440, 123, 131),
    Beat::note_then_rest(391, 128, 43),
    Beat::note_then_rest(659, 79, 2),
    Beat::note_then_rest(146, 138, 122),
    Beat::note_then_rest(110, 110, 120),
    Beat::note_then_rest(73, 137, 113),
    Beat::note_then_rest(739, 316, 49),
    Beat::note_then_rest(659, 80, 50),
    Beat::note_then_rest(440, 119, 119),
    Beat::note_then_rest(146, 164, 79),
    Beat::note_then_rest(739, 195, 58),
    Beat::note_then_rest(659, 74, 12),
    Beat::note(739, 65),
    Beat::note_then_rest(587, 101, 4),
    Beat::note_then_rest(659, 143, 95),
    Beat::note_then_rest(116, 119, 132),
    Beat::note_then_rest(659, 316, 41),
    Beat::note_then_rest(587, 90, 37),
    Beat::note_then_rest(466, 105, 4),
    Beat::note_then_rest(233, 93, 45),
    Beat::note_then_rest(466, 115, 14),
    Beat::note_then_rest(1108, 72, 29),
    Beat::note_then_rest(233, 113, 135),
    Beat::note_then_rest(739, 63, 43),
    Beat::note_then_rest(587, 94, 27),
    Beat::note_then_rest(587, 224, 57),
    Beat::note_then_rest(987, 116, 118),
    Beat::note_then_rest(1174, 81, 39),
    Beat::note_then_rest(987, 65, 56),
    Beat::note_then_rest(164, 461, 42),
    Beat::note_then_rest(391, 132, 130),
    Beat::note_then_rest(987, 111, 10),
    Beat::note_then_rest(783, 64, 64),
    Beat::note_then_rest(164, 255, 8),
    Beat::note_then_rest(493, 107, 6),
    Beat::note_then_rest(391, 93, 24),
    Beat::note_then_rest(329, 155, 90),
    Beat::note(783, 118),
    Beat::note_then_rest(659, 73, 70),
    Beat::note_then_rest(164, 237, 2),
    Beat::note_then_rest(329, 99, 4),
    Beat::note_then_rest(659, 64, 58),
    Beat::note_then_rest(523, 120, 119),
    Beat::note_then_rest(523, 126, 123),
    Beat::note(493, 236),
    Beat::note_then_rest(466, 158, 122),
    Beat::note_then_rest(391, 228, 27),
    Beat::note_then_rest(277, 121, 111),
    Beat::note_then_rest(493, 187, 49),
    Beat::note_then_rest(466, 99, 25),
    Beat::note_then_rest(554, 84, 43),
    Beat::note_then_rest(554, 157, 92),
    Beat::note_then_rest(587, 89, 20),
    Beat::note_then_rest(554, 83, 45),
    Beat::note_then_rest(493, 226, 30),
    Beat::note_then_rest(493, 108, 6),
    Beat::note_then_rest(246, 81, 45),
    Beat::note_then_rest(739, 125, 6),
    Beat::note_then_rest(493, 87, 37),
    Beat::note_then_rest(587, 96, 12),
    Beat::note_then_rest(739, 86, 46),
    Beat::note_then_rest(987, 101, 139),
    Beat::note_then_rest(123, 108, 125),
    Beat::note(184, 129),
    Beat::note_then_rest(587, 125, 27),
    Beat::note_then_rest(554, 113, 25),
    Beat::note_then_rest(587, 91, 85),
    Beat::note(554, 320),
];
