pub mod rgb565;
