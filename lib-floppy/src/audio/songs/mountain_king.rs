use crate::audio::note::{Beat, Song, DEFAULT_CALIBRATION};

pub const MOUNTAIN_KING: Song = Song {
    title: "Grieg - In the Hall of the Mountain King",
    divisor: 4,
    inversion_threshold: 140,
    calibration: Some(DEFAULT_CALIBRATION),
    beats: &MOUNTAIN_KING_BEATS,
};

const MOUNTAIN_KING_BEATS: [Beat; 613] = [
    Beat::note_then_rest(184, 1654, 84),
    Beat::note_then_rest(61, 106, 109),
    Beat::note_then_rest(69, 106, 110),
    Beat::note_then_rest(73, 106, 109),
    Beat::note_then_rest(82, 106, 110),
    Beat::note_then_rest(92, 106, 109),
    Beat::note_then_rest(73, 106, 110),
    Beat::note_then_rest(92, 213, 220),
    Beat::note_then_rest(87, 106, 109),
    Beat::note_then_rest(69, 106, 110),
    Beat::note_then_rest(87, 213, 220),
    Beat::note_then_rest(82, 106, 109),
    Beat::note_then_rest(65, 106, 110),
    Beat::note_then_rest(82, 213, 220),
    Beat::note_then_rest(61, 106, 109),
    Beat::note_then_rest(69, 106, 110),
    Beat::note_then_rest(73, 106, 109),
    Beat::note_then_rest(82, 106, 110),
    Beat::note_then_rest(92, 106, 109),
    Beat::note_then_rest(73, 106, 110),
    Beat::note_then_rest(92, 106, 109),
    Beat::note_then_rest(123, 106, 110),
    Beat::note_then_rest(110, 106, 109),
    Beat::note_then_rest(92, 106, 110),
    Beat::note_then_rest(73, 106, 109),
    Beat::note_then_rest(92, 106, 110),
    Beat::note_then_rest(110, 781, 84),
    Beat::note_then_rest(123, 106, 109),
    Beat::note_then_rest(138, 106, 110),
    Beat::note_then_rest(146, 106, 109),
    Beat::note_then_rest(164, 106, 110),
    Beat::note_then_rest(184, 106, 109),
    Beat::note_then_rest(146, 106, 110),
    Beat::note_then_rest(184, 213, 220),
    Beat::note_then_rest(174, 106, 109),
    Beat::note_then_rest(138, 106, 110),
    Beat::note_then_rest(174, 213, 220),
    Beat::note_then_rest(164, 106, 109),
    Beat::note_then_rest(130, 106, 110),
    Beat::note_then_rest(164, 213, 220),
    Beat::note_then_rest(123, 106, 109),
    Beat::note_then_rest(138, 106, 110),
    Beat::note_then_rest(146, 106, 109),
    Beat::note_then_rest(164, 106, 110),
    Beat::note_then_rest(184, 106, 109),
    Beat::note_then_rest(146, 106, 110),
    Beat::note_then_rest(184, 106, 109),
    Beat::note_then_rest(246, 106, 110),
    Beat::note_then_rest(220, 106, 109),
    Beat::note_then_rest(184, 106, 110),
    Beat::note_then_rest(146, 106, 109),
    Beat::note_then_rest(184, 106, 110),
    Beat::note_then_rest(110, 781, 84),
    Beat::note_then_rest(92, 106, 109),
    Beat::note_then_rest(103, 106, 110),
    Beat::note_then_rest(116, 106, 109),
    Beat::note_then_rest(123, 106, 110),
    Beat::note_then_rest(138, 106, 109),
    Beat::note_then_rest(116, 106, 110),
    Beat::note_then_rest(138, 213, 220),
    Beat::note_then_rest(146, 106, 109),
    Beat::note_then_rest(116, 106, 110),
    Beat::note_then_rest(146, 213, 220),
    Beat::note_then_rest(138, 106, 109),
    Beat::note_then_rest(116, 106, 110),
    Beat::note_then_rest(138, 213, 220),
    Beat::note_then_rest(92, 106, 109),
    Beat::note_then_rest(103, 106, 110),
    Beat::note_then_rest(116, 106, 109),
    Beat::note_then_rest(123, 106, 110),
    Beat::note_then_rest(138, 106, 109),
    Beat::note_then_rest(116, 106, 110),
    Beat::note_then_rest(138, 213, 220),
    Beat::note_then_rest(146, 106, 109),
    Beat::note_then_rest(116, 106, 110),
    Beat::note_then_rest(146, 213, 220),
    Beat::note_then_rest(138, 425, 8),
    Beat::note_then_rest(69, 213, 220),
    Beat::note_then_rest(184, 106, 109),
    Beat::note_then_rest(207, 106, 110),
    Beat::note_then_rest(233, 106, 109),
    Beat::note_then_rest(246, 106, 110),
    Beat::note_then_rest(277, 106, 109),
    Beat::note_then_rest(233, 106, 110),
    Beat::note_then_rest(277, 213, 220),
    Beat::note_then_rest(293, 106, 109),
    Beat::note_then_rest(233, 106, 110),
    Beat::note_then_rest(293, 213, 220),
    Beat::note_then_rest(277, 106, 109),
    Beat::note_then_rest(233, 106, 110),
    Beat::note_then_rest(277, 213, 220),
    Beat::note_then_rest(184, 106, 109),
    Beat::note_then_rest(207, 106, 110),
    Beat::note_then_rest(233, 106, 109),
    Beat::note_then_rest(246, 106, 110),
    Beat::note_then_rest(277, 106, 109),
    Beat::note_then_rest(233, 106, 110),
    Beat::note_then_rest(277, 213, 220),
    Beat::note_then_rest(293, 106, 109),
    Beat::note_then_rest(233, 106, 110),
    Beat::note_then_rest(293, 213, 220),
    Beat::note_then_rest(277, 425, 8),
    Beat::note_then_rest(69, 213, 220),
    Beat::note_then_rest(61, 103, 106),
    Beat::note_then_rest(69, 103, 107),
    Beat::note_then_rest(73, 103, 106),
    Beat::note_then_rest(82, 103, 107),
    Beat::note_then_rest(92, 103, 106),
    Beat::note_then_rest(73, 103, 107),
    Beat::note_then_rest(92, 207, 214),
    Beat::note_then_rest(87, 103, 106),
    Beat::note_then_rest(69, 103, 107),
    Beat::note_then_rest(87, 207, 214),
    Beat::note_then_rest(82, 103, 106),
    Beat::note_then_rest(65, 103, 107),
    Beat::note_then_rest(82, 207, 214),
    Beat::note_then_rest(61, 103, 106),
    Beat::note_then_rest(69, 103, 107),
    Beat::note_then_rest(73, 103, 106),
    Beat::note_then_rest(82, 103, 107),
    Beat::note_then_rest(92, 103, 106),
    Beat::note_then_rest(73, 103, 107),
    Beat::note_then_rest(92, 103, 106),
    Beat::note_then_rest(123, 103, 107),
    Beat::note_then_rest(110, 103, 106),
    Beat::note_then_rest(92, 103, 107),
    Beat::note_then_rest(73, 103, 106),
    Beat::note_then_rest(92, 103, 107),
    Beat::note_then_rest(110, 760, 82),
    Beat::note_then_rest(123, 103, 106),
    Beat::note_then_rest(138, 103, 107),
    Beat::note_then_rest(146, 103, 106),
    Beat::note_then_rest(164, 103, 107),
    Beat::note_then_rest(184, 103, 106),
    Beat::note_then_rest(146, 103, 107),
    Beat::note_then_rest(184, 207, 214),
    Beat::note_then_rest(174, 103, 106),
    Beat::note_then_rest(138, 103, 107),
    Beat::note_then_rest(174, 207, 214),
    Beat::note_then_rest(164, 103, 106),
    Beat::note_then_rest(130, 103, 107),
    Beat::note_then_rest(164, 207, 214),
    Beat::note_then_rest(123, 103, 106),
    Beat::note_then_rest(138, 103, 107),
    Beat::note_then_rest(146, 103, 106),
    Beat::note_then_rest(164, 103, 107),
    Beat::note_then_rest(184, 103, 106),
    Beat::note_then_rest(146, 103, 107),
    Beat::note_then_rest(184, 103, 106),
    Beat::note_then_rest(246, 103, 107),
    Beat::note_then_rest(184, 103, 106),
    Beat::note_then_rest(146, 103, 107),
    Beat::note_then_rest(184, 103, 106),
    Beat::note_then_rest(246, 103, 107),
    Beat::note_then_rest(123, 760, 82),
    Beat::note_then_rest(246, 103, 106),
    Beat::note_then_rest(277, 103, 107),
    Beat::note_then_rest(184, 103, 1),
    Beat::note_then_rest(87, 95, 9),
    Beat::note_then_rest(329, 103, 107),
    Beat::note_then_rest(369, 103, 106),
    Beat::note_then_rest(293, 103, 107),
    Beat::note_then_rest(184, 205, 3),
    Beat::note_then_rest(92, 103, 107),
    Beat::note_then_rest(349, 103, 106),
    Beat::note_then_rest(277, 103, 107),
    Beat::note_then_rest(184, 205, 3),
    Beat::note_then_rest(92, 103, 107),
    Beat::note_then_rest(329, 103, 106),
    Beat::note_then_rest(261, 103, 107),
    Beat::note_then_rest(184, 205, 3),
    Beat::note_then_rest(92, 103, 107),
    Beat::note_then_rest(246, 103, 106),
    Beat::note_then_rest(277, 103, 107),
    Beat::note_then_rest(184, 103, 1),
    Beat::note_then_rest(87, 95, 9),
    Beat::note_then_rest(329, 103, 107),
    Beat::note_then_rest(369, 103, 106),
    Beat::note_then_rest(293, 103, 107),
    Beat::note_then_rest(369, 103, 1),
    Beat::note_then_rest(87, 95, 9),
    Beat::note_then_rest(493, 103, 107),
    Beat::note_then_rest(440, 103, 106),
    Beat::note_then_rest(369, 103, 107),
    Beat::note_then_rest(220, 103, 1),
    Beat::note_then_rest(103, 95, 9),
    Beat::note_then_rest(369, 103, 107),
    Beat::note_then_rest(440, 756, 82),
    Beat::note_then_rest(493, 103, 106),
    Beat::note_then_rest(554, 103, 107),
    Beat::note_then_rest(369, 103, 1),
    Beat::note_then_rest(87, 95, 9),
    Beat::note_then_rest(659, 103, 107),
    Beat::note_then_rest(739, 103, 106),
    Beat::note_then_rest(587, 103, 107),
    Beat::note_then_rest(369, 205, 3),
    Beat::note_then_rest(92, 103, 107),
    Beat::note_then_rest(698, 103, 106),
    Beat::note_then_rest(554, 103, 107),
    Beat::note_then_rest(369, 205, 3),
    Beat::note_then_rest(92, 103, 107),
    Beat::note_then_rest(659, 103, 106),
    Beat::note_then_rest(523, 103, 107),
    Beat::note_then_rest(369, 205, 3),
    Beat::note_then_rest(92, 103, 107),
    Beat::note_then_rest(493, 103, 106),
    Beat::note_then_rest(554, 103, 107),
    Beat::note_then_rest(369, 103, 1),
    Beat::note_then_rest(87, 95, 9),
    Beat::note_then_rest(659, 103, 107),
    Beat::note_then_rest(739, 103, 106),
    Beat::note_then_rest(587, 103, 107),
    Beat::note_then_rest(739, 103, 1),
    Beat::note_then_rest(87, 95, 9),
    Beat::note_then_rest(987, 103, 107),
    Beat::note_then_rest(880, 103, 106),
    Beat::note_then_rest(739, 103, 107),
    Beat::note_then_rest(440, 103, 1),
    Beat::note_then_rest(103, 95, 9),
    Beat::note_then_rest(739, 103, 107),
    Beat::note_then_rest(880, 756, 82),
    Beat::note_then_rest(369, 103, 106),
    Beat::note_then_rest(415, 103, 107),
    Beat::note_then_rest(466, 103, 1),
    Beat::note_then_rest(130, 95, 9),
    Beat::note_then_rest(493, 103, 107),
    Beat::note_then_rest(554, 103, 106),
    Beat::note_then_rest(466, 103, 107),
    Beat::note_then_rest(554, 205, 3),
    Beat::note_then_rest(138, 103, 107),
    Beat::note_then_rest(587, 103, 106),
    Beat::note_then_rest(466, 103, 107),
    Beat::note_then_rest(587, 205, 3),
    Beat::note_then_rest(146, 103, 107),
    Beat::note_then_rest(554, 103, 106),
    Beat::note_then_rest(466, 103, 107),
    Beat::note_then_rest(554, 205, 3),
    Beat::note_then_rest(138, 103, 107),
    Beat::note_then_rest(369, 103, 106),
    Beat::note_then_rest(415, 103, 107),
    Beat::note_then_rest(466, 103, 1),
    Beat::note_then_rest(130, 95, 9),
    Beat::note_then_rest(493, 103, 107),
    Beat::note_then_rest(554, 103, 106),
    Beat::note_then_rest(466, 103, 107),
    Beat::note_then_rest(554, 205, 3),
    Beat::note_then_rest(138, 103, 107),
    Beat::note_then_rest(587, 103, 106),
    Beat::note_then_rest(466, 103, 107),
    Beat::note_then_rest(587, 205, 3),
    Beat::note_then_rest(146, 103, 107),
    Beat::note_then_rest(554, 413, 8),
    Beat::note_then_rest(369, 377, 41),
    Beat::note_then_rest(739, 103, 106),
    Beat::note_then_rest(830, 103, 107),
    Beat::note_then_rest(932, 103, 1),
    Beat::note_then_rest(130, 95, 9),
    Beat::note_then_rest(987, 103, 107),
    Beat::note_then_rest(1108, 103, 106),
    Beat::note_then_rest(932, 103, 107),
    Beat::note_then_rest(1108, 205, 3),
    Beat::note_then_rest(138, 103, 107),
    Beat::note_then_rest(1174, 103, 106),
    Beat::note_then_rest(932, 103, 107),
    Beat::note_then_rest(1174, 205, 3),
    Beat::note_then_rest(146, 103, 107),
    Beat::note_then_rest(1108, 103, 106),
    Beat::note_then_rest(932, 103, 107),
    Beat::note_then_rest(1108, 205, 3),
    Beat::note_then_rest(138, 103, 107),
    Beat::note_then_rest(739, 103, 106),
    Beat::note_then_rest(830, 103, 107),
    Beat::note_then_rest(932, 103, 1),
    Beat::note_then_rest(130, 95, 9),
    Beat::note_then_rest(987, 103, 107),
    Beat::note_then_rest(1108, 103, 106),
    Beat::note_then_rest(932, 103, 107),
    Beat::note_then_rest(1108, 205, 3),
    Beat::note_then_rest(138, 103, 107),
    Beat::note_then_rest(1174, 103, 106),
    Beat::note_then_rest(932, 103, 107),
    Beat::note_then_rest(1174, 205, 3),
    Beat::note_then_rest(146, 103, 107),
    Beat::note_then_rest(1108, 413, 8),
    Beat::note_then_rest(739, 377, 41),
    Beat::note_then_rest(246, 101, 34),
    Beat::note_then_rest(87, 123, 12),
    Beat::note_then_rest(92, 125, 12),
    Beat::note_then_rest(184, 101, 34),
    Beat::note_then_rest(87, 123, 12),
    Beat::note_then_rest(92, 125, 12),
    Beat::note_then_rest(369, 101, 34),
    Beat::note_then_rest(87, 123, 12),
    Beat::note_then_rest(92, 125, 12),
    Beat::note_then_rest(184, 202, 70),
    Beat::note_then_rest(92, 126, 12),
    Beat::note_then_rest(349, 101, 34),
    Beat::note_then_rest(87, 123, 12),
    Beat::note_then_rest(92, 125, 12),
    Beat::note_then_rest(184, 202, 70),
    Beat::note_then_rest(92, 126, 12),
    Beat::note_then_rest(329, 101, 34),
    Beat::note_then_rest(87, 123, 12),
    Beat::note_then_rest(92, 125, 12),
    Beat::note_then_rest(184, 202, 70),
    Beat::note_then_rest(92, 126, 12),
    Beat::note_then_rest(246, 101, 34),
    Beat::note_then_rest(87, 123, 12),
    Beat::note_then_rest(92, 125, 12),
    Beat::note_then_rest(184, 101, 34),
    Beat::note_then_rest(87, 123, 12),
    Beat::note_then_rest(92, 125, 12),
    Beat::note_then_rest(369, 101, 34),
    Beat::note_then_rest(87, 123, 12),
    Beat::note_then_rest(92, 125, 12),
    Beat::note_then_rest(246, 101, 34),
    Beat::note_then_rest(87, 123, 12),
    Beat::note_then_rest(92, 125, 12),
    Beat::note_then_rest(440, 101, 34),
    Beat::note_then_rest(103, 123, 12),
    Beat::note_then_rest(110, 125, 12),
    Beat::note_then_rest(220, 101, 34),
    Beat::note_then_rest(103, 123, 12),
    Beat::note_then_rest(110, 125, 12),
    Beat::note_then_rest(440, 780, 39),
    Beat::note_then_rest(493, 99, 34),
    Beat::note_then_rest(87, 121, 12),
    Beat::note_then_rest(92, 123, 12),
    Beat::note_then_rest(369, 99, 34),
    Beat::note_then_rest(87, 121, 12),
    Beat::note_then_rest(92, 123, 12),
    Beat::note_then_rest(739, 99, 34),
    Beat::note_then_rest(87, 121, 12),
    Beat::note_then_rest(92, 123, 12),
    Beat::note_then_rest(369, 197, 69),
    Beat::note_then_rest(92, 123, 12),
    Beat::note_then_rest(698, 99, 34),
    Beat::note_then_rest(87, 121, 12),
    Beat::note_then_rest(92, 123, 12),
    Beat::note_then_rest(369, 197, 69),
    Beat::note_then_rest(92, 123, 12),
    Beat::note_then_rest(659, 99, 34),
    Beat::note_then_rest(87, 121, 12),
    Beat::note_then_rest(92, 123, 12),
    Beat::note_then_rest(369, 197, 69),
    Beat::note_then_rest(92, 123, 12),
    Beat::note_then_rest(493, 98, 33),
    Beat::note_then_rest(87, 118, 12),
    Beat::note_then_rest(92, 119, 12),
    Beat::note_then_rest(369, 94, 97),
    Beat::note_then_rest(659, 92, 94),
    Beat::note_then_rest(739, 90, 93),
    Beat::note_then_rest(587, 88, 91),
    Beat::note_then_rest(739, 86, 89),
    Beat::note_then_rest(987, 85, 87),
    Beat::note_then_rest(739, 83, 86),
    Beat::note_then_rest(587, 82, 84),
    Beat::note_then_rest(493, 242, 81),
    Beat::note_then_rest(493, 568, 60),
    Beat::note_then_rest(987, 77, 80),
    Beat::note_then_rest(1108, 77, 80),
    Beat::note_then_rest(1174, 77, 80),
    Beat::note_then_rest(1318, 77, 79),
    Beat::note_then_rest(1479, 77, 80),
    Beat::note_then_rest(1174, 77, 80),
    Beat::note_then_rest(1479, 154, 2),
    Beat::note_then_rest(92, 77, 79),
    Beat::note_then_rest(1396, 77, 80),
    Beat::note_then_rest(1108, 77, 80),
    Beat::note_then_rest(1396, 154, 2),
    Beat::note_then_rest(92, 77, 79),
    Beat::note_then_rest(1318, 77, 80),
    Beat::note_then_rest(1046, 77, 80),
    Beat::note_then_rest(1318, 154, 2),
    Beat::note_then_rest(92, 77, 79),
    Beat::note_then_rest(987, 77, 80),
    Beat::note_then_rest(1108, 77, 80),
    Beat::note_then_rest(1174, 77, 80),
    Beat::note_then_rest(1318, 77, 79),
    Beat::note_then_rest(1479, 77, 80),
    Beat::note_then_rest(1174, 77, 80),
    Beat::note_then_rest(1479, 77, 80),
    Beat::note_then_rest(1975, 77, 79),
    Beat::note_then_rest(1760, 77, 80),
    Beat::note_then_rest(1479, 77, 80),
    Beat::note_then_rest(1174, 77, 80),
    Beat::note_then_rest(1479, 77, 79),
    Beat::note_then_rest(1760, 566, 61),
    Beat::note_then_rest(987, 77, 80),
    Beat::note_then_rest(1108, 77, 80),
    Beat::note_then_rest(1174, 77, 80),
    Beat::note_then_rest(1318, 77, 79),
    Beat::note_then_rest(1479, 77, 80),
    Beat::note_then_rest(1174, 77, 80),
    Beat::note_then_rest(1479, 154, 2),
    Beat::note_then_rest(92, 77, 79),
    Beat::note_then_rest(1396, 77, 80),
    Beat::note_then_rest(1108, 77, 80),
    Beat::note_then_rest(1396, 154, 2),
    Beat::note_then_rest(92, 77, 79),
    Beat::note_then_rest(1318, 77, 80),
    Beat::note_then_rest(1046, 77, 80),
    Beat::note_then_rest(1318, 154, 2),
    Beat::note_then_rest(92, 77, 79),
    Beat::note_then_rest(987, 77, 80),
    Beat::note_then_rest(1108, 77, 80),
    Beat::note_then_rest(1174, 77, 80),
    Beat::note_then_rest(1318, 77, 79),
    Beat::note_then_rest(1479, 77, 80),
    Beat::note_then_rest(1174, 77, 80),
    Beat::note_then_rest(1479, 77, 80),
    Beat::note_then_rest(1975, 77, 79),
    Beat::note_then_rest(1760, 77, 80),
    Beat::note_then_rest(1479, 77, 80),
    Beat::note_then_rest(880, 77, 80),
    Beat::note_then_rest(1479, 77, 79),
    Beat::note_then_rest(1760, 566, 61),
    Beat::note_then_rest(1479, 77, 80),
    Beat::note_then_rest(1661, 77, 80),
    Beat::note_then_rest(1864, 77, 80),
    Beat::note_then_rest(1975, 77, 79),
    Beat::note_then_rest(2217, 77, 80),
    Beat::note_then_rest(1864, 77, 79),
    Beat::note_then_rest(2217, 154, 2),
    Beat::note_then_rest(138, 77, 79),
    Beat::note_then_rest(2349, 77, 79),
    Beat::note_then_rest(1864, 77, 80),
    Beat::note_then_rest(2349, 154, 2),
    Beat::note_then_rest(164, 77, 80),
    Beat::note_then_rest(2217, 77, 79),
    Beat::note_then_rest(1864, 77, 80),
    Beat::note_then_rest(2217, 154, 2),
    Beat::note_then_rest(138, 77, 79),
    Beat::note_then_rest(1479, 77, 79),
    Beat::note_then_rest(1661, 77, 80),
    Beat::note_then_rest(1864, 77, 80),
    Beat::note_then_rest(1975, 77, 80),
    Beat::note_then_rest(2217, 77, 80),
    Beat::note_then_rest(1864, 77, 80),
    Beat::note_then_rest(2217, 154, 2),
    Beat::note_then_rest(138, 77, 80),
    Beat::note_then_rest(2349, 77, 80),
    Beat::note_then_rest(1864, 77, 80),
    Beat::note_then_rest(2349, 154, 2),
    Beat::note_then_rest(164, 77, 80),
    Beat::note_then_rest(2217, 308, 6),
    Beat::note_then_rest(146, 77, 80),
    Beat::note_then_rest(138, 77, 79),
    Beat::note_then_rest(1479, 77, 80),
    Beat::note_then_rest(1661, 77, 80),
    Beat::note_then_rest(1864, 77, 80),
    Beat::note_then_rest(1975, 77, 79),
    Beat::note_then_rest(2217, 77, 80),
    Beat::note_then_rest(1864, 77, 79),
    Beat::note_then_rest(2217, 154, 2),
    Beat::note_then_rest(138, 77, 79),
    Beat::note_then_rest(2489, 77, 79),
    Beat::note_then_rest(1864, 77, 80),
    Beat::note_then_rest(2489, 154, 2),
    Beat::note_then_rest(174, 77, 80),
    Beat::note_then_rest(2217, 77, 79),
    Beat::note_then_rest(1864, 77, 80),
    Beat::note_then_rest(2217, 154, 2),
    Beat::note_then_rest(138, 77, 79),
    Beat::note_then_rest(1479, 77, 79),
    Beat::note_then_rest(1661, 77, 80),
    Beat::note_then_rest(1864, 77, 80),
    Beat::note_then_rest(1975, 77, 80),
    Beat::note_then_rest(2217, 77, 80),
    Beat::note_then_rest(1864, 77, 80),
    Beat::note_then_rest(2217, 154, 2),
    Beat::note_then_rest(138, 77, 80),
    Beat::note_then_rest(2489, 77, 80),
    Beat::note_then_rest(1864, 77, 80),
    Beat::note_then_rest(2489, 154, 2),
    Beat::note_then_rest(174, 77, 80),
    Beat::note_then_rest(2217, 308, 6),
    Beat::note_then_rest(155, 77, 80),
    Beat::note_then_rest(138, 77, 79),
    Beat::note_then_rest(987, 73, 76),
    Beat::note_then_rest(1108, 73, 76),
    Beat::note_then_rest(1174, 73, 76),
    Beat::note_then_rest(1318, 73, 75),
    Beat::note_then_rest(1479, 73, 76),
    Beat::note_then_rest(1174, 73, 76),
    Beat::note_then_rest(1479, 146, 2),
    Beat::note_then_rest(92, 73, 75),
    Beat::note_then_rest(1396, 73, 76),
    Beat::note_then_rest(1108, 73, 76),
    Beat::note_then_rest(1396, 146, 2),
    Beat::note_then_rest(92, 73, 75),
    Beat::note_then_rest(1318, 73, 76),
    Beat::note_then_rest(1046, 73, 76),
    Beat::note_then_rest(1318, 146, 2),
    Beat::note_then_rest(92, 73, 75),
    Beat::note_then_rest(987, 73, 76),
    Beat::note_then_rest(1108, 73, 76),
    Beat::note_then_rest(1174, 73, 76),
    Beat::note_then_rest(1318, 73, 75),
    Beat::note_then_rest(1479, 73, 76),
    Beat::note_then_rest(1174, 73, 76),
    Beat::note_then_rest(1479, 73, 76),
    Beat::note_then_rest(1975, 73, 75),
    Beat::note_then_rest(1760, 73, 76),
    Beat::note_then_rest(1479, 73, 76),
    Beat::note_then_rest(1174, 73, 76),
    Beat::note_then_rest(1479, 73, 75),
    Beat::note_then_rest(1760, 537, 58),
    Beat::note_then_rest(987, 72, 73),
    Beat::note_then_rest(1108, 72, 74),
    Beat::note_then_rest(1174, 72, 74),
    Beat::note_then_rest(1318, 72, 74),
    Beat::note_then_rest(1479, 72, 74),
    Beat::note_then_rest(1174, 72, 74),
    Beat::note_then_rest(1479, 144, 2),
    Beat::note_then_rest(92, 72, 74),
    Beat::note_then_rest(1396, 72, 73),
    Beat::note_then_rest(1108, 72, 73),
    Beat::note_then_rest(1396, 143, 2),
    Beat::note_then_rest(92, 72, 74),
    Beat::note_then_rest(1318, 72, 73),
    Beat::note_then_rest(1046, 72, 73),
    Beat::note_then_rest(1318, 143, 2),
    Beat::note_then_rest(92, 72, 74),
    Beat::note_then_rest(987, 72, 73),
    Beat::note_then_rest(1108, 72, 74),
    Beat::note_then_rest(1174, 72, 74),
    Beat::note_then_rest(1318, 72, 74),
    Beat::note_then_rest(1479, 70, 72),
    Beat::note_then_rest(1174, 70, 72),
    Beat::note_then_rest(1479, 68, 70),
    Beat::note_then_rest(1975, 68, 70),
    Beat::note_then_rest(1479, 67, 69),
    Beat::note_then_rest(1174, 67, 69),
    Beat::note_then_rest(1479, 67, 69),
    Beat::note_then_rest(1975, 67, 69),
    Beat::note_then_rest(987, 490, 53),
    Beat::note_then_rest(61, 207, 22),
    Beat::note_then_rest(1174, 207, 484),
    Beat::note_then_rest(61, 207, 22),
    Beat::note_then_rest(1174, 207, 484),
    Beat::note_then_rest(493, 56, 58),
    Beat::note_then_rest(554, 56, 58),
    Beat::note_then_rest(587, 56, 58),
    Beat::note_then_rest(659, 56, 58),
    Beat::note_then_rest(739, 56, 58),
    Beat::note_then_rest(587, 56, 58),
    Beat::note_then_rest(739, 56, 58),
    Beat::note_then_rest(987, 56, 58),
    Beat::note_then_rest(932, 56, 58),
    Beat::note_then_rest(739, 56, 58),
    Beat::note_then_rest(932, 56, 58),
    Beat::note_then_rest(1108, 56, 58),
    Beat::note_then_rest(987, 415, 44),
    Beat::note_then_rest(61, 207, 22),
    Beat::note_then_rest(1174, 207, 484),
    Beat::note_then_rest(61, 207, 22),
    Beat::note_then_rest(1174, 207, 484),
    Beat::note_then_rest(987, 56, 58),
    Beat::note_then_rest(1108, 56, 58),
    Beat::note_then_rest(1174, 56, 58),
    Beat::note_then_rest(1318, 56, 58),
    Beat::note_then_rest(1479, 56, 58),
    Beat::note_then_rest(1174, 56, 58),
    Beat::note_then_rest(1479, 56, 58),
    Beat::note_then_rest(1975, 56, 58),
    Beat::note_then_rest(1864, 56, 58),
    Beat::note_then_rest(1479, 56, 58),
    Beat::note_then_rest(1864, 56, 58),
    Beat::note_then_rest(2217, 56, 58),
    Beat::note_then_rest(1975, 415, 44),
    Beat::note_then_rest(61, 207, 22),
    Beat::note_then_rest(1174, 208, 484),
    Beat::note_then_rest(61, 207, 22),
    Beat::note_then_rest(1174, 207, 484),
    Beat::note_then_rest(61, 207, 22),
    Beat::note_then_rest(1174, 206, 22),
    Beat::note_then_rest(1174, 206, 22),
    Beat::note_then_rest(1174, 207, 22),
    Beat::note(1661, 41),
    Beat::note(1760, 68),
    Beat::note(1864, 39),
    Beat::note_then_rest(1174, 56, 22),
    Beat::note_then_rest(1174, 206, 22),
    Beat::note_then_rest(1174, 206, 22),
    Beat::note_then_rest(1174, 207, 484),
    Beat::note_then_rest(61, 52, 5),
    Beat::note_then_rest(123, 52, 5),
    Beat::note_then_rest(61, 52, 5),
    Beat::note_then_rest(123, 52, 5),
    Beat::note_then_rest(61, 52, 5),
    Beat::note_then_rest(123, 52, 5),
    Beat::note_then_rest(61, 52, 5),
    Beat::note_then_rest(123, 52, 5),
    Beat::note_then_rest(61, 52, 5),
    Beat::note_then_rest(123, 52, 5),
    Beat::note_then_rest(61, 52, 5),
    Beat::note_then_rest(123, 52, 5),
    Beat::note_then_rest(61, 52, 5),
    Beat::note_then_rest(123, 52, 5),
    Beat::note_then_rest(61, 52, 5),
    Beat::note_then_rest(123, 52, 5),
    Beat::note_then_rest(61, 52, 5),
    Beat::note_then_rest(123, 52, 5),
    Beat::note_then_rest(61, 52, 5),
    Beat::note_then_rest(123, 52, 5),
    Beat::note_then_rest(61, 52, 5),
    Beat::note_then_rest(123, 52, 5),
    Beat::note_then_rest(61, 52, 5),
    Beat::note_then_rest(123, 52, 5),
    Beat::note_then_rest(30, 207, 22),
    Beat::note_then_rest(1174, 207, 40110),
    Beat::note(12, 8496),
];
