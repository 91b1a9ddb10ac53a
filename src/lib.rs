// usb2text - HID keystroke reconstruction
// Line sources and output rendering around the usb2text-decoder core

pub mod output;
pub mod source;

pub use usb2text_decoder as decoder;
