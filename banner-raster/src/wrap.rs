//! Greedy word wrapping driven by font measurements.

use crate::error::{BannerError, BannerResult};
use crate::font::TextMeasure;
use serde::{Deserialize, Serialize};

/// Word order used when packing lines.
///
/// Right-to-left only reverses the order of words before packing. Characters
/// inside a word keep their order and no bidirectional shaping is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextDirection {
    #[default]
    #[serde(rename = "ltr")]
    LeftToRight,
    #[serde(rename = "rtl")]
    RightToLeft,
}

/// Pack the words of `text` into lines no wider than `max_width` pixels.
///
/// Words are separated by single spaces. A word that alone is wider than
/// `max_width` gets a line of its own and is never broken. Empty text yields
/// one empty line.
///
/// Explicit `\n` breaks are not split here: they stay inside their word and
/// the font measures and draws such a line as stacked rows.
pub fn wrap<M: TextMeasure + ?Sized>(
    text: &str,
    font: &mut M,
    max_width: i32,
    direction: TextDirection,
) -> BannerResult<Vec<String>> {
    if max_width <= 0 {
        return Err(BannerError::DegenerateGeometry(format!(
            "wrap width must be positive, got {max_width}"
        )));
    }

    let mut words: Vec<&str> = text.split(' ').collect();
    if direction == TextDirection::RightToLeft {
        words.reverse();
    }

    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for word in words {
        current.push(word);
        let width = font.measure(&current.join(" ")).width;
        if width as i64 > max_width as i64 {
            if current.len() > 1 {
                current.pop();
                lines.push(current.join(" "));
                current = vec![word];
            } else {
                lines.push(word.to_string());
                current.clear();
            }
        }
    }
    if !current.is_empty() {
        lines.push(current.join(" "));
    }

    log::debug!(target: "banner", "wrapped into {} lines at {}px", lines.len(), max_width);
    Ok(lines)
}

/// Split on explicit line breaks only, without any width-based reflow.
pub fn split_literal(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
