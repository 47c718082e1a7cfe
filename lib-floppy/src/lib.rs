#![cfg_attr(not(test), no_std)]

// must stay first so the logging macros are visible to every module below
mod fmt;

pub mod audio;
pub mod console;
pub mod drivers;
pub mod sim;
