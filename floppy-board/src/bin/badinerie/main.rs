#![no_std]
#![no_main]

use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use floppy_board::{create_song_firmware, get_system_config};
use floppy_lib::audio::songs::SongId;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(get_system_config());
    defmt::info!("embassy HAL configured.");

    create_song_firmware!(p, SongId::Badinerie);
}
