use embassy_stm32::peripherals::*;

////////////////////
//  floppy drive  //
////////////////////

// square wave into the drive's STEP input
pub type StepPin = PA0;
// head direction into the drive's DIR input
pub type DirectionPin = PA1;

// TIM2 is taken by the embassy time driver
pub type WaveformTimer = TIM3;

///////////////
//  console  //
///////////////

pub type ConsoleUart = USART2;
pub type ConsoleUartTxPin = PA2;
pub type ConsoleUartRxPin = PA3;
