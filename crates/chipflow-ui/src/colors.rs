use chipflow_ui_graphics::Color;

/// Resolved paint for one chip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChipStyle {
    pub background: Color,
    pub text: Color,
}

/// Chip colors for the selected and unselected states.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChipColors {
    pub selected_background: Color,
    pub unselected_background: Color,
    pub selected_text: Color,
    pub unselected_text: Color,
}

impl ChipColors {
    pub fn resolve(&self, selected: bool) -> ChipStyle {
        if selected {
            ChipStyle {
                background: self.selected_background,
                text: self.selected_text,
            }
        } else {
            ChipStyle {
                background: self.unselected_background,
                text: self.unselected_text,
            }
        }
    }
}

impl Default for ChipColors {
    fn default() -> Self {
        Self {
            selected_background: Color::BLUE,
            unselected_background: Color::LIGHT_GRAY,
            selected_text: Color::WHITE,
            unselected_text: Color::BLACK,
        }
    }
}
