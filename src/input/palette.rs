//! Tool state: palette swatches, brush width, and the eraser shortcut.

use crate::draw::{Color, color};
use log::{debug, warn};

/// Minimum brush width in pixels.
pub const MIN_WIDTH: u32 = 1;
/// Maximum brush width in pixels.
pub const MAX_WIDTH: u32 = 64;

/// A single palette entry.
///
/// Swatches carry a stored color that the custom color input may rewrite;
/// reselecting the swatch later yields the edited value (deliberate two-way
/// bind, not a bug).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    /// The color applied when this swatch is selected
    pub color: Color,
}

/// Current stroke color and brush width, plus the swatch palette they are
/// selected from.
///
/// Read by every stroke segment drawn; mutated only through the selection
/// operations below. At most one swatch is active at a time.
#[derive(Debug, Clone)]
pub struct ToolState {
    swatches: Vec<Swatch>,
    active_swatch: Option<usize>,
    current_color: Color,
    width: u32,
    background: Color,
}

impl ToolState {
    /// Creates tool state with the default eight-swatch palette.
    ///
    /// `background` is the fixed surface background color the eraser paints
    /// with. If `color` matches a palette entry that swatch starts active.
    pub fn with_defaults(initial: Color, width: u32, background: Color) -> Self {
        let swatches: Vec<Swatch> = [
            color::BLACK,
            color::RED,
            color::GREEN,
            color::BLUE,
            color::YELLOW,
            color::ORANGE,
            color::PINK,
            color::WHITE,
        ]
        .into_iter()
        .map(|color| Swatch { color })
        .collect();

        let active_swatch = swatches.iter().position(|s| s.color == initial);

        let mut state = Self {
            swatches,
            active_swatch,
            current_color: initial,
            width: MIN_WIDTH,
            background,
        };
        state.set_width(width);
        state
    }

    /// Selects a swatch by index, deselecting all others.
    ///
    /// The stroke color becomes the swatch's stored color (which may have
    /// been rewritten by [`set_custom_color`](Self::set_custom_color)).
    /// Unknown indices are ignored with a warning.
    pub fn select_swatch(&mut self, index: usize) {
        let Some(swatch) = self.swatches.get(index) else {
            warn!("Ignoring selection of unknown swatch {index}");
            return;
        };
        self.current_color = swatch.color;
        self.active_swatch = Some(index);
        debug!("Selected swatch {index} ({})", self.current_color.to_hex());
    }

    /// Applies a custom color from the free-form color input.
    ///
    /// Updates the stroke color and rewrites the active swatch's stored
    /// color so future reselection reflects the edited value.
    pub fn set_custom_color(&mut self, color: Color) {
        self.current_color = color;
        if let Some(index) = self.active_swatch {
            self.swatches[index].color = color;
            debug!("Rebound swatch {index} to {}", color.to_hex());
        }
    }

    /// Switches to eraser mode: paints with the fixed background color.
    ///
    /// This does not track underlying content, so erasing over a
    /// non-background-colored region leaves the background color behind.
    pub fn erase_mode(&mut self) {
        self.current_color = self.background;
        debug!("Eraser active ({})", self.background.to_hex());
    }

    /// Sets the brush width in pixels, clamped to the valid range.
    pub fn set_width(&mut self, width: u32) {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
            warn!("Invalid brush width {width}, clamping to {MIN_WIDTH}-{MAX_WIDTH} range");
        }
        self.width = width.clamp(MIN_WIDTH, MAX_WIDTH);
    }

    /// The color the next stroke segment will be drawn with.
    pub fn color(&self) -> Color {
        self.current_color
    }

    /// The width the next stroke segment will be drawn with.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The fixed surface background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// All palette swatches in display order.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Index of the currently active swatch, if any.
    pub fn active_swatch(&self) -> Option<usize> {
        self.active_swatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, BLUE, GREEN, WHITE};

    fn tools() -> ToolState {
        ToolState::with_defaults(BLACK, 4, WHITE)
    }

    #[test]
    fn select_swatch_activates_exactly_one() {
        let mut tools = tools();
        tools.select_swatch(3); // blue
        assert_eq!(tools.active_swatch(), Some(3));
        assert_eq!(tools.color(), BLUE);

        tools.select_swatch(2); // green
        assert_eq!(tools.active_swatch(), Some(2));
        assert_eq!(tools.color(), GREEN);
    }

    #[test]
    fn unknown_swatch_selection_is_ignored() {
        let mut tools = tools();
        tools.select_swatch(1);
        tools.select_swatch(99);
        assert_eq!(tools.active_swatch(), Some(1));
    }

    #[test]
    fn custom_color_rebinds_the_active_swatch() {
        let mut tools = tools();
        tools.select_swatch(1);
        let teal = Color::new(0, 128, 128);
        tools.set_custom_color(teal);
        assert_eq!(tools.color(), teal);

        // Reselecting the edited swatch yields the custom color
        tools.select_swatch(0);
        tools.select_swatch(1);
        assert_eq!(tools.color(), teal);
    }

    #[test]
    fn custom_color_without_active_swatch_only_changes_stroke_color() {
        let mut tools = ToolState::with_defaults(Color::new(10, 20, 30), 4, WHITE);
        assert_eq!(tools.active_swatch(), None);
        tools.set_custom_color(Color::new(1, 2, 3));
        assert_eq!(tools.color(), Color::new(1, 2, 3));
        assert_eq!(tools.swatches()[0].color, BLACK);
    }

    #[test]
    fn eraser_paints_with_the_background_color() {
        let mut tools = tools();
        tools.select_swatch(3);
        tools.erase_mode();
        assert_eq!(tools.color(), WHITE);
        // Swatch selection state is untouched by the eraser shortcut
        assert_eq!(tools.active_swatch(), Some(3));
    }

    #[test]
    fn width_is_clamped_to_valid_range() {
        let mut tools = tools();
        tools.set_width(0);
        assert_eq!(tools.width(), MIN_WIDTH);
        tools.set_width(500);
        assert_eq!(tools.width(), MAX_WIDTH);
        tools.set_width(7);
        assert_eq!(tools.width(), 7);
    }
}
