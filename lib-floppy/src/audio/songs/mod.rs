use super::note::Song;

mod badinerie;
mod badinerie_melody;
mod happy_birthday;
mod mountain_king;
mod super_mario;

pub use badinerie::BADINERIE;
pub use badinerie_melody::BADINERIE_MELODY;
pub use happy_birthday::HAPPY_BIRTHDAY;
pub use mountain_king::MOUNTAIN_KING;
pub use super_mario::SUPER_MARIO;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SongId {
    SuperMario,
    Badinerie,
    BadinerieMelody,
    HappyBirthday,
    MountainKing,
}

impl SongId {
    pub const ALL: [SongId; 5] = [
        SongId::SuperMario,
        SongId::Badinerie,
        SongId::BadinerieMelody,
        SongId::HappyBirthday,
        SongId::MountainKing,
    ];
}

pub const fn song(id: SongId) -> &'static Song {
    match id {
        SongId::SuperMario => &SUPER_MARIO,
        SongId::Badinerie => &BADINERIE,
        SongId::BadinerieMelody => &BADINERIE_MELODY,
        SongId::HappyBirthday => &HAPPY_BIRTHDAY,
        SongId::MountainKing => &MOUNTAIN_KING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioError;

    #[test]
    fn tables_are_tuned_per_drive() {
        assert_eq!(SUPER_MARIO.divisor, 2);
        assert_eq!(SUPER_MARIO.inversion_threshold, 150);
        assert!(SUPER_MARIO.calibration.is_none());

        for id in [SongId::Badinerie, SongId::BadinerieMelody, SongId::HappyBirthday, SongId::MountainKing] {
            let s = song(id);
            assert_eq!(s.divisor, 4);
            assert_eq!(s.inversion_threshold, 140);
            assert!(s.calibration.is_some());
        }
    }

    #[test]
    fn song_shapes() {
        assert_eq!(SUPER_MARIO.len(), 156);
        assert_eq!(SUPER_MARIO.beats[0], crate::audio::note::Beat::note_then_rest(660, 100, 150));
        assert_eq!(HAPPY_BIRTHDAY.len(), 52);
        for id in SongId::ALL {
            assert!(!song(id).is_empty());
        }
    }

    #[test]
    fn mountain_king_bass_is_below_timer_range() {
        // the bass line was arranged for a timer that silently wrapped
        assert_eq!(
            MOUNTAIN_KING.first_unplayable(),
            Some((1, AudioError::FrequencyOutOfRange))
        );
        assert_eq!(SUPER_MARIO.first_unplayable(), None);
        assert_eq!(HAPPY_BIRTHDAY.first_unplayable(), None);
    }
}
