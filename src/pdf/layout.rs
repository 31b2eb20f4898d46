// src/pdf/layout.rs
//! Top-down flow layout on printpdf pages.
//!
//! printpdf only places things at absolute coordinates (origin bottom-left,
//! millimetres). `Flow` keeps a cursor `y` running from the frame top down to
//! the frame bottom and opens a new page whenever the next block does not fit.
//! Blocks are atomic except paragraphs (split between lines) and tables
//! (split between rows).
//!
//! Per-page decorations (logo, footer, page numbers) are drawn afterwards over
//! [`Flow::page_layers`], once the page count is known.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::DynamicImage;
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::xobject::ImageFilter;
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerIndex, PdfLayerReference, PdfPageIndex, Point, Polygon, Px, Rgb,
};

use crate::config::consts::{MARGIN_BOTTOM_MM, MARGIN_TOP_MM, MARGIN_X_MM, PAGE_H_MM, PAGE_W_MM};
use crate::error::{Error, Result};

use super::metrics::{self, Face, PT_TO_MM};
use super::picture::{Embedded, Picture};

pub type Rgb3 = (f32, f32, f32);

pub const BLACK: Rgb3 = (0.0, 0.0, 0.0);
pub const FOOTER_GREY: Rgb3 = (0.2, 0.2, 0.2);
pub const DARK_GREY: Rgb3 = (0.663, 0.663, 0.663);
pub const LIGHT_GREY: Rgb3 = (0.827, 0.827, 0.827);
pub const GRID_GREY: Rgb3 = (0.5, 0.5, 0.5);

const LAYER_NAME: &str = "Layer 1";
const IMAGE_DPI: f32 = 300.0;
/// Baseline offset within a line box, as a fraction of the leading.
const BASELINE_RATIO: f32 = 0.8;

const TABLE_FONT_PT: f32 = 10.0;
const TABLE_LEADING_PT: f32 = 12.0;
const TABLE_PAD_X_PT: f32 = 6.0;
const TABLE_PAD_Y_PT: f32 = 3.0;
const GRID_PT: f32 = 0.25;

const QR_PAD_X_PT: f32 = 6.0;
const QR_PAD_Y_PT: f32 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug)]
pub struct TextStyle {
    pub size: f32,
    pub leading: f32,
    pub face: Face,
    pub align: Align,
    pub color: Rgb3,
}

/// Writable area of every page.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    pub left: f32,
    pub width: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Frame {
    pub fn a4(extra_bottom_mm: f32) -> Self {
        Self {
            left: MARGIN_X_MM,
            width: PAGE_W_MM - 2.0 * MARGIN_X_MM,
            top: PAGE_H_MM - MARGIN_TOP_MM,
            bottom: MARGIN_BOTTOM_MM + extra_bottom_mm,
        }
    }
}

pub struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl Fonts {
    pub fn get(&self, face: Face) -> &IndirectFontRef {
        match face {
            Face::Regular => &self.regular,
            Face::Bold => &self.bold,
            Face::Oblique => &self.oblique,
        }
    }
}

pub struct Flow {
    doc: PdfDocumentReference,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    current: (PdfPageIndex, PdfLayerIndex),
    fonts: Fonts,
    frame: Frame,
    y: f32,
}

fn pdf_err<E: std::fmt::Debug>(e: E) -> Error {
    Error::Pdf(format!("{e:?}"))
}

impl Flow {
    pub fn new(title: &str, frame: Frame) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_W_MM), Mm(PAGE_H_MM), LAYER_NAME);
        let fonts = Fonts {
            regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?,
            bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_err)?,
            oblique: doc.add_builtin_font(BuiltinFont::HelveticaOblique).map_err(pdf_err)?,
        };
        Ok(Self {
            doc,
            pages: vec![(page, layer)],
            current: (page, layer),
            fonts,
            frame,
            y: frame.top,
        })
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn fonts(&self) -> &Fonts {
        &self.fonts
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Height left on the current page.
    pub fn remaining(&self) -> f32 {
        self.y - self.frame.bottom
    }

    fn at_page_top(&self) -> bool {
        (self.frame.top - self.y).abs() < f32::EPSILON
    }

    fn layer(&self) -> PdfLayerReference {
        let (page, layer) = self.current;
        self.doc.get_page(page).get_layer(layer)
    }

    pub fn page_layers(&self) -> Vec<PdfLayerReference> {
        self.pages
            .iter()
            .map(|&(page, layer)| self.doc.get_page(page).get_layer(layer))
            .collect()
    }

    pub fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_W_MM), Mm(PAGE_H_MM), LAYER_NAME);
        self.pages.push((page, layer));
        self.current = (page, layer);
        self.y = self.frame.top;
        logd!("Pdf: page {} opened", self.pages.len());
    }

    /// Open a new page unless a block of height `h` fits. A block taller than
    /// a whole page is placed on a fresh page and allowed to overflow.
    pub fn ensure(&mut self, h: f32) {
        if h > self.remaining() && !self.at_page_top() {
            self.new_page();
        }
    }

    /// Conditional page break: new page if less than `h` remains.
    pub fn break_if_less_than(&mut self, h: f32) {
        if self.remaining() < h {
            self.new_page();
        }
    }

    pub fn space_pt(&mut self, pt: f32) {
        self.y = (self.y - pt * PT_TO_MM).max(self.frame.bottom);
    }

    /// Wrapped text across the frame width.
    pub fn paragraph(&mut self, text: &str, style: TextStyle) {
        let lines = metrics::wrap(text, self.frame.width, style.size, style.face);
        let leading = style.leading * PT_TO_MM;
        for line in &lines {
            self.ensure(leading);
            let baseline = self.y - leading * BASELINE_RATIO;
            let layer = self.layer();
            draw_aligned(&layer, &self.fonts, line, style, self.frame.left, self.frame.width, baseline);
            self.y -= leading;
        }
    }

    /// Two equal columns, grey bold header row, thin grid.
    pub fn table(&mut self, header: (&str, &str), rows: &[(&str, &str)]) {
        let col_w = self.frame.width / 2.0;
        let pad_x = TABLE_PAD_X_PT * PT_TO_MM;
        let pad_y = TABLE_PAD_Y_PT * PT_TO_MM;
        let leading = TABLE_LEADING_PT * PT_TO_MM;
        let text_w = col_w - 2.0 * pad_x;

        let all = std::iter::once((header, true)).chain(rows.iter().map(|r| (*r, false)));
        for ((key, value), is_header) in all {
            let face = if is_header { Face::Bold } else { Face::Regular };
            let cells = [
                metrics::wrap(key, text_w, TABLE_FONT_PT, face),
                metrics::wrap(value, text_w, TABLE_FONT_PT, face),
            ];
            let n = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
            let row_h = n as f32 * leading + 2.0 * pad_y;

            self.ensure(row_h);
            let layer = self.layer();
            let top = self.y;
            let left = self.frame.left;

            if is_header {
                fill_rect(&layer, left, top - row_h, self.frame.width, row_h, LIGHT_GREY);
            }
            for (i, lines) in cells.iter().enumerate() {
                let cell_x = left + i as f32 * col_w;
                for (j, line) in lines.iter().enumerate() {
                    let baseline = top - pad_y - (j as f32 + BASELINE_RATIO) * leading;
                    draw_text(&layer, self.fonts.get(face), line, TABLE_FONT_PT, cell_x + pad_x, baseline, BLACK);
                }
                stroke_rect(&layer, cell_x, top - row_h, col_w, row_h, GRID_GREY, GRID_PT);
            }
            self.y -= row_h;
        }
    }

    /// Pictures side by side, each centred in an equal share of the width and
    /// vertically centred in the row. Sizes are `(width, height)` in mm.
    pub fn picture_row(&mut self, items: &[(&Picture, f32, f32)]) {
        if items.is_empty() {
            return;
        }
        let row_h = items.iter().map(|(_, _, h)| *h).fold(0.0_f32, f32::max);
        self.ensure(row_h);

        let layer = self.layer();
        let cell_w = self.frame.width / items.len() as f32;
        for (i, (pic, w, h)) in items.iter().enumerate() {
            let x = self.frame.left + i as f32 * cell_w + (cell_w - w) / 2.0;
            let y = self.y - row_h + (row_h - h) / 2.0;
            place_picture(&layer, pic, x, y, *w, *h);
        }
        self.y -= row_h;
    }

    /// QR code on the left, bordered call-to-action text on the right.
    pub fn qr_block(&mut self, qr: &Picture, qr_mm: f32, column_mm: f32, paragraphs: &[&str], style: TextStyle) {
        let box_w = self.frame.width - column_mm;
        let pad_x = QR_PAD_X_PT * PT_TO_MM;
        let pad_y = QR_PAD_Y_PT * PT_TO_MM;
        let leading = style.leading * PT_TO_MM;

        let lines = metrics::wrap(&paragraphs.join("\n\n"), box_w - 2.0 * pad_x, style.size, style.face);
        let box_h = lines.len() as f32 * leading + 2.0 * pad_y;
        let row_h = box_h.max(qr_mm);
        self.ensure(row_h);

        let layer = self.layer();
        let left = self.frame.left;
        let row_bottom = self.y - row_h;

        place_picture(&layer, qr, left, row_bottom + (row_h - qr_mm) / 2.0, qr_mm, qr_mm);

        let box_x = left + column_mm;
        let box_bottom = row_bottom + (row_h - box_h) / 2.0;
        stroke_rect(&layer, box_x, box_bottom, box_w, box_h, BLACK, GRID_PT);
        for (j, line) in lines.iter().enumerate() {
            let baseline = box_bottom + box_h - pad_y - (j as f32 + BASELINE_RATIO) * leading;
            draw_aligned(&layer, &self.fonts, line, style, box_x + pad_x, box_w - 2.0 * pad_x, baseline);
        }
        self.y = row_bottom;
    }

    pub fn save(self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.doc.save(&mut BufWriter::new(file)).map_err(pdf_err)
    }
}

/* ---------- absolute drawing primitives ---------- */

pub fn rgb(c: Rgb3) -> Color {
    Color::Rgb(Rgb::new(c.0, c.1, c.2, None))
}

pub fn draw_text(layer: &PdfLayerReference, font: &IndirectFontRef, text: &str, size: f32, x: f32, baseline: f32, color: Rgb3) {
    if text.is_empty() {
        return;
    }
    layer.set_fill_color(rgb(color));
    layer.use_text(text, size, Mm(x), Mm(baseline), font);
}

/// One line of text aligned inside `[x, x + width]`.
pub fn draw_aligned(layer: &PdfLayerReference, fonts: &Fonts, text: &str, style: TextStyle, x: f32, width: f32, baseline: f32) {
    let tw = metrics::text_width_mm(text, style.size, style.face);
    let x = match style.align {
        Align::Left => x,
        Align::Center => x + (width - tw) / 2.0,
        Align::Right => x + width - tw,
    };
    draw_text(layer, fonts.get(style.face), text, style.size, x, baseline, style.color);
}

fn rect_points(x: f32, y: f32, w: f32, h: f32) -> Vec<(Point, bool)> {
    vec![
        (Point::new(Mm(x), Mm(y)), false),
        (Point::new(Mm(x + w), Mm(y)), false),
        (Point::new(Mm(x + w), Mm(y + h)), false),
        (Point::new(Mm(x), Mm(y + h)), false),
    ]
}

pub fn fill_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32, color: Rgb3) {
    layer.set_fill_color(rgb(color));
    layer.add_polygon(Polygon {
        rings: vec![rect_points(x, y, w, h)],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
}

pub fn stroke_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32, color: Rgb3, thickness_pt: f32) {
    layer.set_outline_color(rgb(color));
    layer.set_outline_thickness(thickness_pt);
    layer.add_line(Line { points: rect_points(x, y, w, h), is_closed: true });
}

pub fn hline(layer: &PdfLayerReference, x1: f32, x2: f32, y: f32, color: Rgb3, thickness_pt: f32) {
    layer.set_outline_color(rgb(color));
    layer.set_outline_thickness(thickness_pt);
    layer.add_line(Line {
        points: vec![(Point::new(Mm(x1), Mm(y)), false), (Point::new(Mm(x2), Mm(y)), false)],
        is_closed: false,
    });
}

/// Place `pic` with its lower-left corner at (`x`, `y`), stretched to `w`×`h` mm.
/// Pixels are resampled for that size and stored as JPEG.
pub fn place_picture(layer: &PdfLayerReference, pic: &Picture, x: f32, y: f32, w: f32, h: f32) {
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    if let Some(emb) = pic.encode_for(w, h) {
        place_embedded(layer, &emb, x, y, w, h);
    }
}

/// Like [`place_picture`] for an image encoded once and drawn on several pages.
pub fn place_embedded(layer: &PdfLayerReference, emb: &Embedded, x: f32, y: f32, w: f32, h: f32) {
    let (px_w, px_h) = (emb.width_px as f32, emb.height_px as f32);
    if w <= 0.0 || h <= 0.0 || px_w <= 0.0 || px_h <= 0.0 {
        return;
    }
    let native_w = px_w / IMAGE_DPI * 25.4;
    let native_h = px_h / IMAGE_DPI * 25.4;
    jpeg_image(emb).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x)),
            translate_y: Some(Mm(y)),
            scale_x: Some(w / native_w),
            scale_y: Some(h / native_h),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        },
    );
}

/// `/DCTDecode` image XObject. Built on a 1×1 RGB template so every other
/// field keeps printpdf's RGB defaults.
fn jpeg_image(emb: &Embedded) -> Image {
    let mut image = Image::from_dynamic_image(&DynamicImage::new_rgb8(1, 1));
    image.image.width = Px(emb.width_px as usize);
    image.image.height = Px(emb.height_px as usize);
    image.image.image_data = emb.jpeg.clone();
    image.image.image_filter = Some(ImageFilter::DCT);
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_table_spills_onto_new_pages() {
        let mut flow = Flow::new("t", Frame::a4(0.0)).unwrap();
        let rows: Vec<(&str, &str)> = (0..120).map(|_| ("Schlüssel", "Wert")).collect();
        flow.table(("Attribut", "Wert"), &rows);
        assert!(flow.page_count() > 1);
        assert_eq!(flow.page_layers().len(), flow.page_count());
    }

    #[test]
    fn conditional_break_only_when_short_of_space() {
        let mut flow = Flow::new("t", Frame::a4(0.0)).unwrap();
        flow.break_if_less_than(PAGE_H_MM / 2.0);
        assert_eq!(flow.page_count(), 1);
        flow.space_pt(500.0);
        flow.break_if_less_than(PAGE_H_MM / 2.0);
        assert_eq!(flow.page_count(), 2);
    }
}
