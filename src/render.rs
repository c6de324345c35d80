//! Word-cloud PNG renderer.
//!
//! Thin plumbing over `image`/`imageproc`/`ab_glyph`: frequency-proportional
//! font sizes, greedy archimedean-spiral placement into unoccupied pixels,
//! optional shape mask with a drawn contour.  Best-effort layout — a word
//! that finds no free spot is skipped, not an error.

use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use anyhow::{bail, Context, Result};
use image::{imageops::FilterType, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use log::{debug, warn};

/// Fixed renderer configuration (matches the original tool's defaults).
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub background: Rgba<u8>,
    /// Shape mask: near-white pixels are excluded from layout.
    pub mask_path: Option<PathBuf>,
    /// TTF/OTF font; falls back to common system font locations when unset.
    pub font_path: Option<PathBuf>,
    pub max_words: usize,
    pub contour_width: u32,
    pub contour_color: Rgba<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 680,
            background: Rgba([0, 0, 0, 255]),
            mask_path: None,
            font_path: None,
            max_words: 500,
            contour_width: 2,
            contour_color: Rgba([0, 128, 0, 255]),
        }
    }
}

const FONT_FALLBACKS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
];

const PALETTE: &[Rgba<u8>] = &[
    Rgba([102, 194, 165, 255]),
    Rgba([252, 141, 98, 255]),
    Rgba([141, 160, 203, 255]),
    Rgba([231, 138, 195, 255]),
    Rgba([166, 216, 84, 255]),
    Rgba([255, 217, 47, 255]),
];

const MIN_FONT_PX: f32 = 12.0;
const MAX_FONT_PX: f32 = 96.0;

fn load_font(options: &RenderOptions) -> Result<FontVec> {
    let candidates: Vec<PathBuf> = options
        .font_path
        .iter()
        .cloned()
        .chain(FONT_FALLBACKS.iter().copied().map(PathBuf::from))
        .collect();
    for path in &candidates {
        if let Ok(bytes) = std::fs::read(path) {
            if let Ok(font) = FontVec::try_from_vec(bytes) {
                debug!("using font {}", path.display());
                return Ok(font);
            }
        }
    }
    bail!("no usable font found (tried {:?}); set render font path", candidates)
}

/// Occupancy grid over the canvas; `true` means a pixel cannot take text.
struct Occupancy {
    width: u32,
    height: u32,
    blocked: Vec<bool>,
}

impl Occupancy {
    fn from_mask(mask: Option<&RgbaImage>, width: u32, height: u32) -> Self {
        let mut blocked = vec![false; (width * height) as usize];
        if let Some(mask) = mask {
            for (x, y, px) in mask.enumerate_pixels() {
                // Near-white mask pixels are outside the shape.
                let outside = px.0[0] > 240 && px.0[1] > 240 && px.0[2] > 240;
                if outside {
                    blocked[(y * width + x) as usize] = true;
                }
            }
        }
        Self { width, height, blocked }
    }

    fn rect_free(&self, x: i32, y: i32, w: u32, h: u32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as u32, y as u32);
        if x + w >= self.width || y + h >= self.height {
            return false;
        }
        for yy in y..y + h {
            for xx in x..x + w {
                if self.blocked[(yy * self.width + xx) as usize] {
                    return false;
                }
            }
        }
        true
    }

    fn mark_rect(&mut self, x: u32, y: u32, w: u32, h: u32) {
        let x_end = (x + w).min(self.width);
        let y_end = (y + h).min(self.height);
        for yy in y..y_end {
            for xx in x..x_end {
                self.blocked[(yy * self.width + xx) as usize] = true;
            }
        }
    }

    /// Walk an archimedean spiral from the canvas center until the rect fits.
    fn find_spot(&self, w: u32, h: u32) -> Option<(u32, u32)> {
        let cx = self.width as f32 / 2.0;
        let cy = self.height as f32 / 2.0;
        let mut theta = 0.0f32;
        let step = 0.1;
        let pitch = 1.2;
        while theta < 600.0 {
            let r = pitch * theta;
            let x = (cx + r * theta.cos() - w as f32 / 2.0) as i32;
            let y = (cy + r * 0.62 * theta.sin() - h as f32 / 2.0) as i32;
            if self.rect_free(x, y, w, h) {
                return Some((x as u32, y as u32));
            }
            theta += step;
        }
        None
    }
}

fn draw_contour(canvas: &mut RgbaImage, occupancy: &Occupancy, options: &RenderOptions) {
    let (w, h) = (occupancy.width as i32, occupancy.height as i32);
    let blocked = |x: i32, y: i32| {
        x < 0 || y < 0 || x >= w || y >= h || occupancy.blocked[(y * w + x) as usize]
    };
    for y in 0..h {
        for x in 0..w {
            if !blocked(x, y) {
                continue;
            }
            let on_edge = !blocked(x - 1, y) || !blocked(x + 1, y) || !blocked(x, y - 1)
                || !blocked(x, y + 1);
            if !on_edge {
                continue;
            }
            let r = options.contour_width as i32;
            for dy in -r..=r {
                for dx in -r..=r {
                    let (px, py) = (x + dx, y + dy);
                    if px >= 0 && py >= 0 && px < w && py < h {
                        canvas.put_pixel(px as u32, py as u32, options.contour_color);
                    }
                }
            }
        }
    }
}

/// Render `rows` (already sorted by descending count) to a PNG at `output`.
pub fn render(rows: &[(String, usize)], options: &RenderOptions, output: &Path) -> Result<()> {
    let font = load_font(options)?;

    let mask = match &options.mask_path {
        Some(path) => {
            let img = image::open(path)
                .with_context(|| format!("cannot open mask image: {}", path.display()))?
                .resize_exact(options.width, options.height, FilterType::Nearest)
                .to_rgba8();
            Some(img)
        }
        None => None,
    };

    let mut canvas = RgbaImage::from_pixel(options.width, options.height, options.background);
    let mut occupancy = Occupancy::from_mask(mask.as_ref(), options.width, options.height);

    if options.contour_width > 0 && mask.is_some() {
        draw_contour(&mut canvas, &occupancy, options);
    }

    let max_count = rows.first().map(|(_, n)| *n).unwrap_or(1).max(1) as f32;
    let mut placed = 0usize;
    for (i, (word, count)) in rows.iter().take(options.max_words).enumerate() {
        // Square-root scaling keeps the tail of the distribution readable.
        let ratio = (*count as f32 / max_count).sqrt();
        let scale = PxScale::from(MIN_FONT_PX + (MAX_FONT_PX - MIN_FONT_PX) * ratio);
        let (tw, th) = text_size(scale, &font, word);
        if tw == 0 || th == 0 {
            continue;
        }
        // One pixel of margin on every side so neighbors never touch.
        match occupancy.find_spot(tw + 2, th + 2) {
            Some((x, y)) => {
                let color = PALETTE[i % PALETTE.len()];
                draw_text_mut(&mut canvas, color, x as i32 + 1, y as i32 + 1, scale, &font, word);
                occupancy.mark_rect(x, y, tw + 2, th + 2);
                placed += 1;
            }
            None => warn!("no room for '{}', skipping", word),
        }
    }
    debug!("placed {} of {} words", placed, rows.len().min(options.max_words));

    if let Some(dir) = output.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create output directory: {}", dir.display()))?;
    }
    canvas
        .save(output)
        .with_context(|| format!("cannot write image: {}", output.display()))?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
