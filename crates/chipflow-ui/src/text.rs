use chipflow_ui_graphics::TextStyle;
use std::borrow::Cow;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::chip::Density;

const ELLIPSIS: char = '\u{2026}';

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
}

/// Host capability that sizes a single line of text.
pub trait TextMeasurer: Send + Sync + 'static {
    fn measure(&self, text: &str, style: &TextStyle, density: Density) -> TextMetrics;

    /// Shortens `text` with a trailing ellipsis until it fits `max_width` pixels.
    fn ellipsize<'a>(
        &self,
        text: &'a str,
        style: &TextStyle,
        density: Density,
        max_width: f32,
    ) -> Cow<'a, str> {
        if self.measure(text, style, density).width <= max_width {
            return Cow::Borrowed(text);
        }
        let mut fitted = String::new();
        for (offset, ch) in text.char_indices() {
            let end = offset + ch.len_utf8();
            let mut candidate = String::with_capacity(end + ELLIPSIS.len_utf8());
            candidate.push_str(&text[..end]);
            candidate.push(ELLIPSIS);
            if self.measure(&candidate, style, density).width > max_width {
                break;
            }
            fitted = candidate;
        }
        if fitted.is_empty() {
            fitted.push(ELLIPSIS);
        }
        Cow::Owned(fitted)
    }
}

/// Fixed-advance measurer: every character is half an em wide.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonospacedTextMeasurer;

impl MonospacedTextMeasurer {
    pub const ADVANCE_EM: f32 = 0.5;
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle, density: Density) -> TextMetrics {
        let font_size = style.font_size_px(density.density, density.font_scale);
        TextMetrics {
            width: text.chars().count() as f32 * font_size * Self::ADVANCE_EM,
            height: style.line_height_px(density.density, density.font_scale),
        }
    }
}

fn global_text_measurer() -> &'static RwLock<Box<dyn TextMeasurer>> {
    static TEXT_MEASURER: OnceLock<RwLock<Box<dyn TextMeasurer>>> = OnceLock::new();
    TEXT_MEASURER.get_or_init(|| RwLock::new(Box::new(MonospacedTextMeasurer)))
}

/// Replaces the process-wide measurer used by [`crate::ChipFlow::measure`].
pub fn set_text_measurer<M: TextMeasurer>(measurer: M) {
    let mut guard = global_text_measurer()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Box::new(measurer);
}

pub fn measure_text(text: &str, style: &TextStyle, density: Density) -> TextMetrics {
    global_text_measurer()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .measure(text, style, density)
}

pub(crate) fn with_text_measurer<R>(f: impl FnOnce(&dyn TextMeasurer) -> R) -> R {
    let guard = global_text_measurer()
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    f(guard.as_ref())
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
