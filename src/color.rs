use std::fmt::{Display, Formatter};
use crate::hash::HashedInput;


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Color {
    pub fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xff]
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub fn pick_color(hashed: &HashedInput) -> Color {
    let bytes = hashed.bytes();
    Color {
        r: bytes[0],
        g: bytes[1],
        b: bytes[2]
    }
}
