// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = concat!("emico_datasheet/", env!("CARGO_PKG_VERSION"));
pub const CDN_IMAGE_PATTERN: &str = r#"https://intellishop\.sirv\.com/[^\s"'>]+"#;
pub const LANGUAGE_PATTERN: &str = r"/(..)-DE/emico";
pub const URL_PLACEHOLDER: &str = "https://www.emico.com/produkt/...";

// Product page selectors
pub const SEL_INFO_SECTION: &str = "div.col-lg-6.col-xl-8.ps-lg-4.ps-xl-5";
pub const SEL_PRODUCT_NAME: &str = "h1";
pub const SEL_PARAGRAPH: &str = "p";
pub const SEL_DESCRIPTION: &str = "div.is-detail-page__description p";
pub const SEL_SPECS_CONTAINER: &str = "div.container.my-3";
pub const SEL_SPEC_ROW: &str = "div.row.is-flex-table__row";
pub const SEL_SPEC_CELL: &str = "div";
pub const ARTICLE_KEYWORDS: &str = r"(?i)Artikel|Part|pieza|article|Articolo";

// Spec group container ids
pub const GROUP_BASE: &str = "group-2";
pub const GROUP_TECHNICAL: &str = "group-3";
pub const GROUP_DRAWING: &str = "group-6";

// Image classification
pub const DRAWING_SUFFIX_PATTERN: &str = r"(?i)_zg(?:_\d+)?\.(jpg|png)$";
pub const MAX_PRODUCT_IMAGES: usize = 3;

// Resources
pub const RESOURCE_ENV: &str = "EMICO_RESOURCES";
pub const RESOURCE_DIR: &str = "assets";
pub const LOGO_FILE: &str = "emicologo.png";

// Output
pub const DEFAULT_DOWNLOADS_DIR: &str = "Downloads";
pub const FALLBACK_FILE_STEM: &str = "emico_product";
pub const PDF_EXT: &str = "pdf";

// Page geometry (A4, millimetres)
pub const PAGE_W_MM: f32 = 210.0;
pub const PAGE_H_MM: f32 = 297.0;
pub const MARGIN_X_MM: f32 = 25.0;
pub const MARGIN_TOP_MM: f32 = 30.0;
pub const MARGIN_BOTTOM_MM: f32 = 20.0;
