//! Window Geometry
//!
//! Derives the window size the content wants. The host applies its own
//! clamping and jitter threshold on top of this.

use crate::models::{Item, ViewMode};
use crate::todo_list::longest_text_chars;

/// Layout metrics in CSS pixels. Mirrors the sizes in `styles.css`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryConfig {
    pub min_width: u32,
    pub max_width: u32,
    pub normal_base_width: u32,
    pub compact_base_width: u32,
    /// Horizontal padding of the root container
    pub horizontal_padding: u32,
    /// Checkbox, delete button and gaps in a normal row
    pub normal_row_chrome: u32,
    /// Row padding in a compact row
    pub compact_row_chrome: u32,
    pub px_per_char: u32,

    pub normal_min_height: u32,
    pub compact_min_height: u32,
    pub max_height: u32,
    pub normal_header_height: u32,
    pub compact_header_height: u32,
    /// Input row plus filter row
    pub controls_height: u32,
    pub row_height: u32,
    pub normal_row_gap: u32,
    pub compact_row_gap: u32,
    /// The list scrolls past this height
    pub normal_list_cap: u32,
    pub compact_list_cap: u32,
    /// Padding plus window margin
    pub vertical_extra: u32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            min_width: 200,
            max_width: 500,
            normal_base_width: 280,
            compact_base_width: 200,
            horizontal_padding: 32,
            normal_row_chrome: 90,
            compact_row_chrome: 24,
            px_per_char: 8,

            normal_min_height: 250,
            compact_min_height: 160,
            max_height: 800,
            normal_header_height: 64,
            compact_header_height: 36,
            controls_height: 110,
            row_height: 44,
            normal_row_gap: 8,
            compact_row_gap: 4,
            normal_list_cap: 300,
            compact_list_cap: 100,
            vertical_extra: 72,
        }
    }
}

/// Desired window size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetGeometry {
    pub width: u32,
    pub height: u32,
}

impl TargetGeometry {
    pub fn compute(mode: ViewMode, visible: &[Item], config: &GeometryConfig) -> Self {
        Self {
            width: target_width(mode, longest_text_chars(visible), config),
            height: target_height(mode, visible.len(), config),
        }
    }
}

/// Width grows linearly with the longest text, within `[min_width, max_width]`
pub fn target_width(mode: ViewMode, longest_chars: usize, config: &GeometryConfig) -> u32 {
    let (base, chrome) = match mode {
        ViewMode::Normal => (config.normal_base_width, config.normal_row_chrome),
        ViewMode::Compact => (config.compact_base_width, config.compact_row_chrome),
    };
    let chars = u32::try_from(longest_chars).unwrap_or(u32::MAX);
    let content = config
        .horizontal_padding
        .saturating_add(chrome)
        .saturating_add(chars.saturating_mul(config.px_per_char));
    base.max(content).clamp(config.min_width, config.max_width)
}

/// Height from the visible row count, within the mode's height band
pub fn target_height(mode: ViewMode, visible_count: usize, config: &GeometryConfig) -> u32 {
    let (header, controls, gap, cap, min) = match mode {
        ViewMode::Normal => (
            config.normal_header_height,
            config.controls_height,
            config.normal_row_gap,
            config.normal_list_cap,
            config.normal_min_height,
        ),
        ViewMode::Compact => (
            config.compact_header_height,
            0,
            config.compact_row_gap,
            config.compact_list_cap,
            config.compact_min_height,
        ),
    };

    let rows = u32::try_from(visible_count).unwrap_or(u32::MAX);
    let list = if rows == 0 {
        0
    } else {
        rows.saturating_mul(config.row_height)
            .saturating_add((rows - 1).saturating_mul(gap))
            .min(cap)
    };

    let total = config.vertical_extra + header + controls + list;
    total.clamp(min, config.max_height.max(min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_monotonic_and_clamped() {
        let config = GeometryConfig::default();
        for mode in [ViewMode::Normal, ViewMode::Compact] {
            let mut prev = 0;
            for chars in 0..200 {
                let w = target_width(mode, chars, &config);
                assert!(w >= prev, "width shrank at {} chars", chars);
                assert!((config.min_width..=config.max_width).contains(&w));
                prev = w;
            }
        }
    }

    #[test]
    fn test_width_for_short_and_long_texts() {
        let config = GeometryConfig::default();
        let short = target_width(ViewMode::Normal, 3, &config);
        let long = target_width(ViewMode::Normal, 50, &config);
        assert_eq!(short, config.normal_base_width);
        assert!(long > short);
        assert_eq!(target_width(ViewMode::Normal, 10_000, &config), config.max_width);
        assert_eq!(target_width(ViewMode::Compact, 0, &config), config.min_width);
    }

    #[test]
    fn test_height_bands() {
        let config = GeometryConfig::default();
        assert_eq!(target_height(ViewMode::Normal, 0, &config), config.normal_min_height);
        assert_eq!(target_height(ViewMode::Compact, 0, &config), config.compact_min_height);
        let h = target_height(ViewMode::Normal, 1_000, &config);
        assert!(h <= config.max_height);
    }

    #[test]
    fn test_height_grows_until_list_cap() {
        let config = GeometryConfig::default();
        let two = target_height(ViewMode::Normal, 2, &config);
        let four = target_height(ViewMode::Normal, 4, &config);
        let many = target_height(ViewMode::Normal, 50, &config);
        assert!(four > two);
        assert_eq!(many, config.vertical_extra + config.normal_header_height + config.controls_height + config.normal_list_cap);
    }

    #[test]
    fn test_compact_is_not_taller_than_normal() {
        let config = GeometryConfig::default();
        for n in 0..20 {
            assert!(target_height(ViewMode::Compact, n, &config) <= target_height(ViewMode::Normal, n, &config));
        }
    }
}
