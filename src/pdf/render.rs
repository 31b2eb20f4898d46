// src/pdf/render.rs
//! Datasheet composition.
//!
//! Page sequence (body):
//! ```text
//! title, article number
//! product image row (≤ 3)
//! Technical data      → base specs + technical specs
//! Description         → optional
//! ── conditional page break (half a page) ──
//! Drawing             → first _zg image + drawing specs
//! QR block            → if the locale's QR image exists
//! disclaimer          → unless placed in the footer
//! ```
//! Decorations on every page: logo, "DATASHEET | name | Version MM/YYYY",
//! company line, divider, "Page X of Y".

use std::path::{Path, PathBuf};

use printpdf::PdfLayerReference;

use crate::config::consts::*;
use crate::config::options::{AppOptions, DisclaimerPlacement, LayoutOptions, LogoPlacement};
use crate::core::{html, net::Fetcher, sanitize};
use crate::error::Result;
use crate::record::ProductRecord;
use crate::resources;
use crate::specs::images;

use super::labels::{Labels, NO_ARTICLE_NUMBER, UNKNOWN_PRODUCT};
use super::layout::*;
use super::metrics::{self, Face, PT_TO_MM};
use super::picture::{self, Embedded, Picture};

const TITLE: TextStyle = TextStyle { size: 20.0, leading: 22.0, face: Face::Bold, align: Align::Center, color: BLACK };
const HEADING: TextStyle = TextStyle { size: 14.0, leading: 18.0, face: Face::Bold, align: Align::Left, color: BLACK };
const BODY: TextStyle = TextStyle { size: 11.0, leading: 14.0, face: Face::Regular, align: Align::Left, color: BLACK };
const BODY_CENTERED: TextStyle = TextStyle { align: Align::Center, ..BODY };
const DISCLAIMER: TextStyle = TextStyle { size: 7.5, leading: 9.0, face: Face::Oblique, align: Align::Center, color: DARK_GREY };
const FOOTER: TextStyle = TextStyle { size: 7.0, leading: 8.5, face: Face::Regular, align: Align::Center, color: FOOTER_GREY };

const HEADING_BEFORE_PT: f32 = 12.0;
const HEADING_AFTER_PT: f32 = 6.0;

// Header/footer band (mm from the page bottom)
const LOGO_BOX_W: f32 = 64.0;
const LOGO_BOX_H: f32 = 26.0;
const LOGO_BOTTOM: f32 = PAGE_H_MM - 30.0;
const FOOTER_DISCLAIMER_Y: f32 = 18.5;
const HEADER_LINE_Y: f32 = 15.5;
const DIVIDER_Y: f32 = 14.5;
const COMPANY_LINE_Y: f32 = 10.0;
const PAGE_NUMBER_Y: f32 = 5.5;
const FOOTER_DISCLAIMER_GAP: f32 = 0.5;

const QR_SIZE: f32 = 35.0;
const QR_COLUMN: f32 = 40.0;

/// `<folder>/<article | emico_product>_<suffix>.pdf`
pub fn output_path(folder: &Path, article_number: Option<&str>, labels: &Labels) -> PathBuf {
    let stem = article_number
        .map(sanitize::sanitize_file_stem)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| s!(FALLBACK_FILE_STEM));
    folder.join(format!("{stem}_{}.{PDF_EXT}", labels.file_suffix))
}

/// Render with the record's own (validated) language.
pub fn render_record(record: &ProductRecord, folder: &Path, opts: &AppOptions) -> Result<PathBuf> {
    render(record, record.language.code(), folder, opts)
}

/// Render `record` with the labels of `lang_code`; unknown codes get German.
/// Image download failures drop the image and never fail the render.
pub fn render(record: &ProductRecord, lang_code: &str, folder: &Path, opts: &AppOptions) -> Result<PathBuf> {
    let labels = Labels::for_code(lang_code);
    let layout = &opts.render.layout;
    let root = opts.render.resource_root.clone().unwrap_or_else(resources::resource_root);
    let fetcher = Fetcher::new(&opts.fetch)?;

    let path = output_path(folder, record.article_number.as_deref(), labels);
    logf!("Pdf: render {} -> {}", labels.file_suffix, path.display());

    let footer_disclaimer = match layout.disclaimer {
        DisclaimerPlacement::Footer => metrics::wrap(labels.disclaimer, content_width(), FOOTER.size, Face::Oblique),
        DisclaimerPlacement::Body => Vec::new(),
    };
    let extra_bottom = match footer_disclaimer.len() {
        0 => 0.0,
        n => n as f32 * FOOTER.leading * PT_TO_MM + FOOTER_DISCLAIMER_GAP,
    };
    let title = record.product_name.as_deref().unwrap_or(UNKNOWN_PRODUCT);
    let mut flow = Flow::new(title, Frame::a4(extra_bottom))?;

    body(&mut flow, record, labels, layout, &fetcher, &root);

    let decor = Decorations {
        labels,
        layout,
        logo: resources::existing(&root, LOGO_FILE)
            .and_then(|p| picture::load_local(&p))
            .and_then(|logo| {
                let (w, h) = picture::fit_contain(logo.natural_w_mm, logo.natural_h_mm, LOGO_BOX_W, LOGO_BOX_H);
                // encoded once, the same bytes go on every page
                logo.encode_for(w, h).map(|emb| (emb, w, h))
            }),
        footer_disclaimer,
        product: sanitize::clean_product_name(record.product_name.as_deref().unwrap_or_default()),
        version: chrono::Local::now().format("%m/%Y").to_string(),
    };
    let total = flow.page_count();
    for (i, layer) in flow.page_layers().iter().enumerate() {
        decor.draw(layer, flow.fonts(), i + 1, total);
    }

    flow.save(&path)?;
    logf!("Pdf: wrote {} ({} page(s))", path.display(), total);
    Ok(path)
}

fn heading(flow: &mut Flow, text: &str) {
    flow.space_pt(HEADING_BEFORE_PT);
    // keep the heading with at least one line of what follows
    flow.ensure((HEADING.leading + HEADING_AFTER_PT + BODY.leading) * PT_TO_MM);
    flow.paragraph(text, HEADING);
    flow.space_pt(HEADING_AFTER_PT);
}

fn body(flow: &mut Flow, record: &ProductRecord, labels: &Labels, layout: &LayoutOptions, fetcher: &Fetcher, root: &Path) {
    let frame = flow.frame();

    // Title + article number
    flow.paragraph(record.product_name.as_deref().unwrap_or(UNKNOWN_PRODUCT), TITLE);
    flow.space_pt(4.0);
    let nr = record.article_number.as_deref().unwrap_or(NO_ARTICLE_NUMBER);
    flow.paragraph(&format!("{}: {}", labels.article, nr), BODY_CENTERED);
    flow.space_pt(10.0);

    // Product images
    let urls = images::product_images(&record.image_urls);
    if !urls.is_empty() {
        let max_w = frame.width / urls.len() as f32 - layout.image_gap_mm;
        let max_h = PAGE_H_MM / 6.0;
        let pics: Vec<Picture> = urls.iter().filter_map(|u| picture::fetch_picture(fetcher, u)).collect();
        let row: Vec<(&Picture, f32, f32)> = pics
            .iter()
            .map(|p| {
                let (w, h) = picture::fit_within(p.natural_w_mm, p.natural_h_mm, max_w, max_h);
                (p, w, h)
            })
            .collect();
        logd!("Pdf: {}/{} product image(s) placed", row.len(), urls.len());
        flow.picture_row(&row);
        flow.space_pt(12.0);
    }

    // Technical data
    let technical = record.technical_data();
    if !technical.is_empty() {
        heading(flow, labels.technical_data);
        let rows: Vec<(&str, &str)> = technical.iter().collect();
        flow.table(labels.table_headers, &rows);
        flow.space_pt(12.0);
    }

    // Description
    let description = record
        .description_html
        .as_deref()
        .map(html::fragment_to_text)
        .unwrap_or_default();
    if !description.is_empty() {
        heading(flow, labels.description);
        flow.paragraph(&description, BODY);
        flow.space_pt(10.0);
    }

    flow.break_if_less_than(PAGE_H_MM / 2.0);

    // Drawing
    heading(flow, labels.drawing);
    if let Some(pic) = images::drawing_image(&record.image_urls).and_then(|u| picture::fetch_picture(fetcher, u)) {
        let (w, h) = picture::fit_within(pic.natural_w_mm, pic.natural_h_mm, frame.width, PAGE_H_MM / 5.0);
        flow.picture_row(&[(&pic, w, h)]);
        flow.space_pt(12.0);
    }
    if !record.drawing_specs.is_empty() {
        let rows: Vec<(&str, &str)> = record.drawing_specs.iter().collect();
        flow.table(labels.table_headers, &rows);
        flow.space_pt(12.0);
    }

    // QR call-to-action
    match resources::existing(root, labels.qr_file).and_then(|p| picture::load_local(&p)) {
        Some(qr) => {
            flow.space_pt(8.0);
            flow.qr_block(&qr, QR_SIZE, QR_COLUMN, labels.qr_text, BODY);
            flow.space_pt(2.0);
        }
        None => logw!("Pdf: QR image {} unavailable, block skipped", labels.qr_file),
    }

    if layout.disclaimer == DisclaimerPlacement::Body {
        flow.space_pt(6.0);
        flow.paragraph(labels.disclaimer, DISCLAIMER);
    }
}

fn content_width() -> f32 {
    PAGE_W_MM - 2.0 * MARGIN_X_MM
}

/// Baselines for `n` lines whose last line sits on `bottom`, first line on top.
fn stacked_baselines(bottom: f32, n: usize, leading_mm: f32) -> Vec<f32> {
    (0..n).map(|i| bottom + (n - 1 - i) as f32 * leading_mm).collect()
}

/// `name`, cut back with "..." until it is at most `max_mm` wide.
fn fit_header_name(name: &str, max_mm: f32, size_pt: f32) -> String {
    if metrics::text_width_mm(name, size_pt, Face::Regular) <= max_mm {
        return s!(name);
    }
    let mut chars: Vec<char> = name.chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let cut = format!("{}...", chars.iter().collect::<String>().trim_end());
        if metrics::text_width_mm(&cut, size_pt, Face::Regular) <= max_mm {
            return cut;
        }
    }
    s!("...")
}

struct Decorations<'a> {
    labels: &'a Labels,
    layout: &'a LayoutOptions,
    logo: Option<(Embedded, f32, f32)>,
    footer_disclaimer: Vec<String>,
    product: String,
    version: String,
}

impl Decorations<'_> {
    fn draw(&self, layer: &PdfLayerReference, fonts: &Fonts, page: usize, total: usize) {
        let left = MARGIN_X_MM;
        let width = content_width();

        if let Some((logo, w, h)) = &self.logo {
            let x = match self.layout.logo {
                LogoPlacement::Center => (PAGE_W_MM - w) / 2.0,
                LogoPlacement::Left => left,
            };
            place_embedded(layer, logo, x, LOGO_BOTTOM + (LOGO_BOX_H - h) / 2.0, *w, *h);
        }

        let baselines = stacked_baselines(FOOTER_DISCLAIMER_Y, self.footer_disclaimer.len(), FOOTER.leading * PT_TO_MM);
        let style = TextStyle { face: Face::Oblique, color: DARK_GREY, ..FOOTER };
        for (line, y) in self.footer_disclaimer.iter().zip(baselines) {
            draw_aligned(layer, fonts, line, style, left, width, y);
        }

        // "DATASHEET | Product | Version " regular, the date bold
        let ver_w = metrics::text_width_mm(&self.version, FOOTER.size, Face::Bold);
        let frame_w = metrics::text_width_mm(&format!("{} |  | Version ", self.labels.datasheet), FOOTER.size, Face::Regular);
        let product = fit_header_name(&self.product, width - frame_w - ver_w, FOOTER.size);
        let lead = format!("{} | {} | Version ", self.labels.datasheet, product);
        let lead_w = metrics::text_width_mm(&lead, FOOTER.size, Face::Regular);
        let x = left + (width - lead_w - ver_w) / 2.0;
        draw_text(layer, fonts.get(Face::Regular), &lead, FOOTER.size, x, HEADER_LINE_Y, FOOTER_GREY);
        draw_text(layer, fonts.get(Face::Bold), &self.version, FOOTER.size, x + lead_w, HEADER_LINE_Y, BLACK);

        hline(layer, left, left + width, DIVIDER_Y, FOOTER_GREY, 1.0);

        for (i, line) in metrics::wrap(self.labels.company, width, FOOTER.size, FOOTER.face).iter().enumerate() {
            let y = COMPANY_LINE_Y - (i as f32) * FOOTER.leading * PT_TO_MM;
            draw_aligned(layer, fonts, line, FOOTER, left, width, y);
        }

        let page_text = self.labels.page_of(page, total);
        let style = TextStyle { align: Align::Right, color: BLACK, ..FOOTER };
        draw_aligned(layer, fonts, &page_text, style, left, width, PAGE_NUMBER_Y);
    }
}
