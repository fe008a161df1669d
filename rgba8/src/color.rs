use bytemuck::{Pod, Zeroable};

// One RGBA color. `a` is opacity: 0 = transparent, 255 = opaque.
// Layout is four consecutive bytes in r, g, b, a order, no padding.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Zeroable, Pod)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    // Opaque black
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0, a: 255 }
    }
}
