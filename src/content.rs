//! Tooltip content — text collection and size estimation.
//!
//! The coordinator has no rendering backend, so the tooltip box is sized
//! from average glyph advance per font size. Hosts that can measure real
//! text may override the estimate before placement.

use crate::project::ProjectInfo;

const TITLE_FONT_SIZE: f32 = 14.0;
const BODY_FONT_SIZE: f32 = 12.0;
const META_FONT_SIZE: f32 = 10.0;
const LINE_SPACING: f32 = 2.0;
const PADDING_H: f32 = 12.0;
const PADDING_V: f32 = 12.0;
const MIN_WIDTH: f32 = 120.0;
const MAX_CONTENT_WIDTH: f32 = 260.0;
const AVG_GLYPH_ADVANCE: f32 = 0.55;

/// Text ready for display in the tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
}

fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * AVG_GLYPH_ADVANCE
}

fn line_height(font_size: f32) -> f32 {
    (font_size * 1.2).ceil()
}

impl TooltipContent {
    pub fn from_project(info: &ProjectInfo) -> Self {
        Self {
            title: info.title.clone(),
            description: info.description.clone(),
            tags: info.tags.clone(),
            demo_url: info.demo_url.clone(),
            repo_url: info.repo_url.clone(),
        }
    }

    /// Whether a links row is shown.
    pub fn has_links(&self) -> bool {
        self.demo_url.is_some() || self.repo_url.is_some()
    }

    /// Estimate the tooltip's on-screen width and height.
    ///
    /// Must run before placement so the box is positioned with correct
    /// dimensions.
    pub fn measure(&self) -> (f32, f32) {
        let mut max_width: f32 = MIN_WIDTH;
        let mut total_height: f32 = 0.0;
        let mut lines = 0usize;

        let mut add_line = |width: f32, font_size: f32| {
            max_width = max_width.max(width.min(MAX_CONTENT_WIDTH));
            if lines > 0 {
                total_height += LINE_SPACING;
            }
            total_height += line_height(font_size);
            lines += 1;
        };

        add_line(text_width(&self.title, TITLE_FONT_SIZE), TITLE_FONT_SIZE);

        // Description wraps at the content width cap.
        let desc_width = text_width(&self.description, BODY_FONT_SIZE);
        let wrapped = (desc_width / MAX_CONTENT_WIDTH).ceil().max(1.0) as usize;
        for _ in 0..wrapped {
            add_line(desc_width, BODY_FONT_SIZE);
        }

        if !self.tags.is_empty() {
            let row = self.tags.join(" \u{00b7} ");
            add_line(text_width(&row, META_FONT_SIZE), META_FONT_SIZE);
        }

        if self.has_links() {
            add_line(MIN_WIDTH, META_FONT_SIZE);
        }

        (max_width + PADDING_H * 2.0, total_height + PADDING_V * 2.0)
    }
}
