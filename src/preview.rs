// Image viewer: decoding, height capping and half-block rendering

use crate::error::{Result, SorterError};
use image::{imageops::FilterType, DynamicImage, GenericImageView, Pixel};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use std::path::{Path, PathBuf};

/// Default maximum display height in pixels
pub const DEFAULT_MAX_HEIGHT: u32 = 600;

/// Loads an image from a file path
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| SorterError::DecodeFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Caps the height at `max_height`, keeping the aspect ratio. Never upscales.
pub fn fit_to_max_height(width: u32, height: u32, max_height: u32) -> (u32, u32) {
    if height <= max_height || height == 0 {
        return (width, height);
    }

    let new_width = (width as u64 * max_height as u64 / height as u64) as u32;
    (new_width.max(1), max_height)
}

/// Calculates new dimensions to fit image within max width and height while preserving aspect ratio
pub fn calculate_resize_dimensions(
    original_width: u32,
    original_height: u32,
    max_width: u32,
    max_height: u32,
) -> (u32, u32) {
    if original_width == 0 || original_height == 0 {
        return (0, 0);
    }

    let width_ratio = max_width as f64 / original_width as f64;
    let height_ratio = max_height as f64 / original_height as f64;

    let ratio = width_ratio.min(height_ratio);

    if ratio >= 1.0 {
        // Image is smaller than max dimensions, don't upscale
        (original_width, original_height)
    } else {
        let new_width = (original_width as f64 * ratio) as u32;
        let new_height = (original_height as f64 * ratio) as u32;
        (new_width, new_height)
    }
}

/// Converts an image to styled lines using half-block characters for terminal display.
/// Uses the upper half block character (▀) with foreground color for the upper pixel
/// and background color for the lower pixel, effectively displaying 2 pixels per cell.
pub fn image_to_halfblock_lines(img: &DynamicImage, width: u32, height: u32) -> Vec<Line<'static>> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    // Ensure height is even for proper half-block rendering
    let height = height + height % 2;

    let img = img.resize_exact(width, height, FilterType::Triangle);
    let img = img.to_rgb8();

    let mut lines = Vec::with_capacity((height / 2) as usize);
    for y in (0..height).step_by(2) {
        let spans: Vec<Span<'static>> = (0..width)
            .map(|x| {
                let upper = img.get_pixel(x, y).to_rgb();
                let lower = img.get_pixel(x, y + 1).to_rgb();
                let style = Style::default()
                    .fg(Color::Rgb(upper[0], upper[1], upper[2]))
                    .bg(Color::Rgb(lower[0], lower[1], lower[2]));
                Span::styled("▀", style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines
}

/// The image currently on display
#[derive(Debug)]
pub struct DisplayedImage {
    pub path: PathBuf,
    /// Size of the decoded file
    pub original: (u32, u32),
    /// Image after the height cap
    pub image: DynamicImage,
}

/// Holds the displayed image and caches its rendering for one pane size
#[derive(Debug)]
pub struct Viewer {
    max_height: u32,
    displayed: Option<DisplayedImage>,
    rendered: Option<((u16, u16), Vec<Line<'static>>)>,
}

impl Viewer {
    pub fn new(max_height: u32) -> Self {
        Self {
            max_height: max_height.max(1),
            displayed: None,
            rendered: None,
        }
    }

    /// Decodes `path` and makes it the displayed image.
    ///
    /// On failure the previously displayed image stays in place.
    pub fn show(&mut self, path: &Path) -> Result<()> {
        let img = load_image(path)?;
        let (width, height) = img.dimensions();
        let (new_width, new_height) = fit_to_max_height(width, height, self.max_height);

        let image = if (new_width, new_height) == (width, height) {
            img
        } else {
            img.resize_exact(new_width, new_height, FilterType::Triangle)
        };

        self.displayed = Some(DisplayedImage {
            path: path.to_path_buf(),
            original: (width, height),
            image,
        });
        self.rendered = None;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.displayed = None;
        self.rendered = None;
    }

    pub fn displayed(&self) -> Option<&DisplayedImage> {
        self.displayed.as_ref()
    }

    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Half-block lines for a pane of `cols` x `rows` cells
    pub fn lines_for(&mut self, cols: u16, rows: u16) -> &[Line<'static>] {
        let Some(displayed) = self.displayed.as_ref() else {
            return &[];
        };

        let stale = !matches!(&self.rendered, Some((size, _)) if *size == (cols, rows));
        if stale {
            let (width, height) = displayed.image.dimensions();
            let (w, h) = calculate_resize_dimensions(width, height, cols as u32, rows as u32 * 2);
            let lines = image_to_halfblock_lines(&displayed.image, w, h);
            self.rendered = Some(((cols, rows), lines));
        }

        self.rendered
            .as_ref()
            .map(|(_, lines)| lines.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HEIGHT)
    }
}
