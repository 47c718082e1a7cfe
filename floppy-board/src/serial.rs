use embassy_stm32::{
    mode::Blocking,
    usart::{self, Uart},
};
use floppy_lib::console::SerialConsole;

pub struct ConsoleSerial {
    uart: Uart<'static, Blocking>,
}

impl ConsoleSerial {
    pub fn new(uart: Uart<'static, Blocking>) -> Self {
        ConsoleSerial { uart }
    }
}

impl SerialConsole for ConsoleSerial {
    fn read_byte(&mut self) -> u8 {
        let mut byte = [0u8; 1];

        loop {
            match self.uart.blocking_read(&mut byte) {
                Ok(()) => return byte[0],
                // the driver clears the flag, reception carries on with the next byte
                Err(usart::Error::Overrun) => defmt::warn!("console overrun, byte dropped"),
                Err(err) => defmt::warn!("console read error {}", err),
            }
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        if let Err(err) = self.uart.blocking_write(bytes) {
            defmt::warn!("console write error {}", err);
        }
    }
}
