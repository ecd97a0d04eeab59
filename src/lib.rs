//! shadekit provides the color model conversions and tonal ramps behind a
//! single color workspace: one selected color, viewed and edited as hex, RGB,
//! HSL, HSB and CMYK, along with a ramp of shades from white through the color
//! to black.

#![deny(missing_docs)]

mod convert;
mod favorites;
mod hex;
mod math;
mod models;
mod shades;
mod workspace;

#[cfg(test)]
mod test;

pub use convert::{
    cmyk_to_rgb, hsb_to_rgb, hsl_to_rgb, rgb_to_cmyk, rgb_to_hsb, rgb_to_hsl,
};
pub use favorites::{FavoriteColor, Favorites, FavoritesStore, MemoryStore, StoreError};
pub use hex::{format_hex, parse_hex, HexColor, HexParseError};
pub use math::Component;
pub use models::{
    parse_channel, Cmyk, CmykChannel, Hsb, HsbChannel, Hsl, HslChannel, Model, Rgb, RgbChannel,
    Space,
};
pub use shades::{closest_shade_index, generate_shades, ShadeRamp, BASE_INDEX, SHADE_COUNT};
pub use workspace::{Changes, Edit, Workspace, WorkspaceOptions};
