//! The current selection, and every view derived from it.
//!
//! A [`Workspace`] holds exactly one canonical color. Every edit goes through
//! [`Workspace::apply`], which updates the canonical color and re-derives all
//! other views before any subscriber gets to see the result.

use bitflags::bitflags;
use log::{debug, trace};

use crate::favorites::{Favorites, FavoritesStore, MemoryStore, StoreError};
use crate::hex::HexColor;
use crate::models::{
    Cmyk, CmykChannel, Hsb, HsbChannel, Hsl, HslChannel, Model, Rgb, RgbChannel, Space,
};
use crate::shades::{ShadeRamp, BASE_INDEX};

bitflags! {
    /// The views of a [`Workspace`] that an edit changed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Changes : u16 {
        /// The canonical color.
        const COLOR = 1 << 0;
        /// The RGB channels.
        const RGB = 1 << 1;
        /// The HSL channels.
        const HSL = 1 << 2;
        /// The HSB channels.
        const HSB = 1 << 3;
        /// The CMYK channels.
        const CMYK = 1 << 4;
        /// The text in the hex input.
        const HEX_INPUT = 1 << 5;
        /// The shade ramp.
        const SHADES = 1 << 6;
        /// The selected shade.
        const SELECTED_SHADE = 1 << 7;
        /// The favorites list.
        const FAVORITES = 1 << 8;
    }
}

/// A single edit to a [`Workspace`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit<'a> {
    /// Text typed into the hex input. The color only changes once the text
    /// is a valid `#rrggbb`.
    Hex(&'a str),
    /// A color chosen in a picker.
    Picker(HexColor),
    /// Text typed into one RGB channel.
    Rgb(RgbChannel, &'a str),
    /// Text typed into one HSL channel.
    Hsl(HslChannel, &'a str),
    /// Text typed into one HSB channel.
    Hsb(HsbChannel, &'a str),
    /// Text typed into one CMYK channel.
    Cmyk(CmykChannel, &'a str),
    /// A shade picked from the ramp, by index. The ramp stays as it is.
    Shade(usize),
    /// A favorite picked from the favorites list, by index.
    Favorite(usize),
}

/// Where the new color of an edit came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Origin {
    /// One of the channel models. That model keeps the value as edited.
    Model(Space),
    /// The hex input. The input keeps the text as typed.
    HexInput,
    /// A picker or a favorite.
    Selection,
    /// The shade ramp.
    Shade(usize),
}

/// Settings for a new [`Workspace`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkspaceOptions {
    /// The color selected at the start.
    pub initial: HexColor,
}

impl Default for WorkspaceOptions {
    fn default() -> Self {
        Self {
            initial: HexColor::from_rgb(Rgb::new(63, 81, 181)),
        }
    }
}

type Subscriber<S> = Box<dyn FnMut(&Workspace<S>, Changes)>;

/// Holds the selected color along with every view derived from it.
pub struct Workspace<S = MemoryStore> {
    color: HexColor,
    rgb: Rgb,
    hsl: Hsl,
    hsb: Hsb,
    cmyk: Cmyk,
    hex_input: String,
    shades: ShadeRamp,
    selected_shade: Option<usize>,
    favorites: Favorites<S>,
    subscribers: Vec<Subscriber<S>>,
}

impl Workspace<MemoryStore> {
    /// Create a workspace with favorites kept in memory.
    pub fn new(options: WorkspaceOptions) -> Self {
        Self::with_favorites(options, Favorites::default())
    }
}

impl Default for Workspace<MemoryStore> {
    fn default() -> Self {
        Self::new(WorkspaceOptions::default())
    }
}

impl<S: FavoritesStore> Workspace<S> {
    /// Create a workspace around an already loaded favorites list.
    pub fn with_favorites(options: WorkspaceOptions, favorites: Favorites<S>) -> Self {
        let color = options.initial;
        let rgb = color.to_rgb();

        Self {
            color,
            rgb,
            hsl: rgb.to_hsl(),
            hsb: rgb.to_hsb(),
            cmyk: rgb.to_cmyk(),
            hex_input: color.to_string(),
            shades: ShadeRamp::from_base(color),
            selected_shade: Some(BASE_INDEX),
            favorites,
            subscribers: Vec::new(),
        }
    }

    /// Register a callback that runs after every edit that changed something.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Workspace<S>, Changes) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply a single edit and re-derive every view that depends on it.
    pub fn apply(&mut self, edit: Edit<'_>) -> Changes {
        let changes = match edit {
            Edit::Hex(text) => self.edit_hex_input(text),
            Edit::Picker(color) => self.recompute(color.to_rgb(), Origin::Selection),
            Edit::Rgb(channel, text) => {
                let rgb = self.rgb.with_input(channel, text);
                self.recompute(rgb, Origin::Model(Space::Rgb))
            }
            Edit::Hsl(channel, text) => {
                let hsl = self.hsl.with_input(channel, text);
                let mut changes = Self::replace(&mut self.hsl, hsl, Changes::HSL);
                changes |= self.recompute(hsl.to_rgb(), Origin::Model(Space::Hsl));
                changes
            }
            Edit::Hsb(channel, text) => {
                let hsb = self.hsb.with_input(channel, text);
                let mut changes = Self::replace(&mut self.hsb, hsb, Changes::HSB);
                changes |= self.recompute(hsb.to_rgb(), Origin::Model(Space::Hsb));
                changes
            }
            Edit::Cmyk(channel, text) => {
                let cmyk = self.cmyk.with_input(channel, text);
                let mut changes = Self::replace(&mut self.cmyk, cmyk, Changes::CMYK);
                changes |= self.recompute(cmyk.to_rgb(), Origin::Model(Space::Cmyk));
                changes
            }
            Edit::Shade(index) => match self.shades.get(index) {
                Some(shade) => self.recompute(shade.to_rgb(), Origin::Shade(index)),
                None => Changes::empty(),
            },
            Edit::Favorite(index) => match self.favorites.get(index).map(|f| f.color) {
                Some(color) => self.recompute(color.to_rgb(), Origin::Selection),
                None => Changes::empty(),
            },
        };

        debug!("applied {:?} to {}: {:?}", edit, self.color, changes);
        self.notify(changes);
        changes
    }

    /// Reset the hex input to the current color if it does not hold a valid
    /// `#rrggbb`, as when the input loses focus.
    pub fn commit_hex_input(&mut self) -> Changes {
        let changes = if HexColor::parse(&self.hex_input).is_none() {
            let current = self.color.to_string();
            Self::replace(&mut self.hex_input, current, Changes::HEX_INPUT)
        } else {
            Changes::empty()
        };
        self.notify(changes);
        changes
    }

    /// Add the current color to the front of the favorites. Returns `false`
    /// if it already was a favorite.
    pub fn add_current_to_favorites(&mut self) -> Result<bool, StoreError> {
        let color = self.color;
        let result = self.favorites.add(color);
        self.notify_favorites(!matches!(result, Ok(false)));
        result
    }

    /// Remove the favorite at `index`.
    pub fn remove_favorite(&mut self, index: usize) -> Result<bool, StoreError> {
        let result = self.favorites.remove(index).map(|removed| removed.is_some());
        self.notify_favorites(!matches!(result, Ok(false)));
        result
    }

    /// Rename the favorite at `index`.
    pub fn rename_favorite(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<bool, StoreError> {
        let result = self.favorites.rename(index, name);
        self.notify_favorites(!matches!(result, Ok(false)));
        result
    }

    /// Remove every favorite.
    pub fn clear_favorites(&mut self) -> Result<(), StoreError> {
        let changed = !self.favorites.is_empty();
        let result = self.favorites.clear();
        self.notify_favorites(changed);
        result
    }

    fn edit_hex_input(&mut self, text: &str) -> Changes {
        let mut changes =
            Self::replace(&mut self.hex_input, text.to_owned(), Changes::HEX_INPUT);
        if let Some(color) = HexColor::parse(text) {
            changes |= self.recompute(color.to_rgb(), Origin::HexInput);
        }
        changes
    }

    /// Make `rgb` the canonical color and re-derive every view that did not
    /// originate the change.
    fn recompute(&mut self, rgb: Rgb, origin: Origin) -> Changes {
        let mut changes = Changes::empty();

        let color = HexColor::from_rgb(rgb);
        changes |= Self::replace(&mut self.color, color, Changes::COLOR);
        changes |= Self::replace(&mut self.rgb, rgb, Changes::RGB);

        if origin != Origin::HexInput {
            let text = color.to_string();
            changes |= Self::replace(&mut self.hex_input, text, Changes::HEX_INPUT);
        }
        if origin != Origin::Model(Space::Hsl) {
            changes |= Self::replace(&mut self.hsl, rgb.to_hsl(), Changes::HSL);
        }
        if origin != Origin::Model(Space::Hsb) {
            changes |= Self::replace(&mut self.hsb, rgb.to_hsb(), Changes::HSB);
        }
        if origin != Origin::Model(Space::Cmyk) {
            changes |= Self::replace(&mut self.cmyk, rgb.to_cmyk(), Changes::CMYK);
        }
        trace!("derived views of {} from {:?}", color, origin);

        match origin {
            Origin::Shade(index) => {
                changes |=
                    Self::replace(&mut self.selected_shade, Some(index), Changes::SELECTED_SHADE);
            }
            _ if changes.contains(Changes::COLOR) => {
                let shades = ShadeRamp::from_base(color);
                changes |= Self::replace(&mut self.shades, shades, Changes::SHADES);
                changes |= Self::replace(
                    &mut self.selected_shade,
                    Some(BASE_INDEX),
                    Changes::SELECTED_SHADE,
                );
                trace!("regenerated shades around {}", color);
            }
            _ => {}
        }

        changes
    }

    /// Store `value` in `slot`, and return `flag` if that changed it.
    fn replace<T: PartialEq>(slot: &mut T, value: T, flag: Changes) -> Changes {
        if *slot == value {
            Changes::empty()
        } else {
            *slot = value;
            flag
        }
    }

    fn notify_favorites(&mut self, changed: bool) {
        if changed {
            self.notify(Changes::FAVORITES);
        }
    }

    fn notify(&mut self, changes: Changes) {
        if changes.is_empty() {
            return;
        }

        let mut subscribers = std::mem::take(&mut self.subscribers);
        for subscriber in subscribers.iter_mut() {
            subscriber(self, changes);
        }
        self.subscribers = subscribers;
    }
}

impl<S> Workspace<S> {
    /// The canonical color.
    pub fn color(&self) -> HexColor {
        self.color
    }

    /// The color as RGB channels.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The color in the HSL notation.
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// The color in the HSB notation.
    pub fn hsb(&self) -> Hsb {
        self.hsb
    }

    /// The color as CMYK channels.
    pub fn cmyk(&self) -> Cmyk {
        self.cmyk
    }

    /// The text currently in the hex input. This can differ from the
    /// canonical color while a hex color is being typed.
    pub fn hex_input(&self) -> &str {
        &self.hex_input
    }

    /// The shade ramp around the last color that was not picked from it.
    pub fn shades(&self) -> &ShadeRamp {
        &self.shades
    }

    /// The index of the selected shade.
    pub fn selected_shade(&self) -> Option<usize> {
        self.selected_shade
    }

    /// The favorites list.
    pub fn favorites(&self) -> &Favorites<S> {
        &self.favorites
    }

    /// Whether the current color is a favorite.
    pub fn is_favorite(&self) -> bool {
        self.favorites.contains(self.color)
    }
}
