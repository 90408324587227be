//! Reference theme palettes shipped as configuration data.

use crate::face::Typeface;

mod solarized;
mod zenburn;

pub use solarized::solarized;
pub use zenburn::zenburn;

/// One named color across the depths a palette supports. The 8-color column
/// carries its own typeface because bright variants only exist through the
/// bold attribute there.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Swatch {
    pub typeface8: Typeface,
    pub index8: u8,
    pub index16: u8,
    pub index256: u8,
}

impl Swatch {
    pub const fn new(typeface8: Typeface, index8: u8, index16: u8, index256: u8) -> Self {
        Self {
            typeface8,
            index8,
            index16,
            index256,
        }
    }
}
