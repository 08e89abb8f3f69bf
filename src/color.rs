#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RGBColorFormat<T> {
    pub red: T,
    pub green: T,
    pub blue: T,
}

impl<T> RGBColorFormat<T> {
    pub fn new(red: T, green: T, blue: T) -> Self {
        RGBColorFormat { red, green, blue }
    }
}

/// A pixel packed as 5 bits red, 6 bits green and 5 bits blue,
/// red in the most significant bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb565ColorFormat(u16);

const RED_SHIFT: u16 = 11;
const GREEN_SHIFT: u16 = 5;
const RED_MASK: u16 = 0b1_1111;
const GREEN_MASK: u16 = 0b11_1111;
const BLUE_MASK: u16 = 0b1_1111;

impl Rgb565ColorFormat {
    pub fn value(&self) -> u16 {
        self.0
    }

    pub fn red(&self) -> u8 {
        ((self.0 >> RED_SHIFT) & RED_MASK) as u8
    }

    pub fn green(&self) -> u8 {
        ((self.0 >> GREEN_SHIFT) & GREEN_MASK) as u8
    }

    pub fn blue(&self) -> u8 {
        (self.0 & BLUE_MASK) as u8
    }

    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

impl From<u16> for Rgb565ColorFormat {
    fn from(value: u16) -> Self {
        Rgb565ColorFormat(value)
    }
}

impl From<Rgb565ColorFormat> for u16 {
    fn from(value: Rgb565ColorFormat) -> Self {
        value.0
    }
}

impl From<&RGBColorFormat<u8>> for Rgb565ColorFormat {
    /// Drops the low bits of every channel. There is no rounding.
    fn from(value: &RGBColorFormat<u8>) -> Self {
        let red = (value.red >> 3) as u16;
        let green = (value.green >> 2) as u16;
        let blue = (value.blue >> 3) as u16;
        Rgb565ColorFormat((red << RED_SHIFT) | (green << GREEN_SHIFT) | blue)
    }
}

impl From<RGBColorFormat<u8>> for Rgb565ColorFormat {
    fn from(value: RGBColorFormat<u8>) -> Self {
        Rgb565ColorFormat::from(&value)
    }
}
