// src/pdf/labels.rs
//! Localized datasheet strings. Unknown locales get German.

use crate::lang::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Labels {
    pub datasheet: &'static str,
    /// ("Page", "of")
    pub page_words: (&'static str, &'static str),
    pub article: &'static str,
    pub technical_data: &'static str,
    /// ("Attribute", "Value")
    pub table_headers: (&'static str, &'static str),
    pub description: &'static str,
    pub drawing: &'static str,
    pub company: &'static str,
    /// Call-to-action paragraphs shown beside the QR code.
    pub qr_text: &'static [&'static str],
    pub disclaimer: &'static str,
    pub file_suffix: &'static str,
    /// QR code image under the resource root.
    pub qr_file: &'static str,
}

pub const UNKNOWN_PRODUCT: &str = "Produktname unbekannt";
pub const NO_ARTICLE_NUMBER: &str = "–";

const DE: Labels = Labels {
    datasheet: "DATENBLATT",
    page_words: ("Seite", "von"),
    article: "Artikelnummer",
    technical_data: "Technische Daten",
    table_headers: ("Attribut", "Wert"),
    description: "Beschreibung",
    drawing: "Zeichnung und Maßtabelle",
    company: "syskomp gehmeyr GmbH – emico • Max-Planck-Straße 1 • 92224 Amberg • Tel.: +49 9621 67545-0 • sales@emico.com",
    qr_text: &[
        "Scannen Sie den QR-Code, um weitere Artikel in dieser Kategorie zu entdecken.",
        "Für eine individuelle Beratung freuen wir uns über Ihre E-Mail an sales@emico.com oder telefonisch unter +49 9621 67545-0.",
    ],
    disclaimer: "Die Angaben in diesem Dokument erfolgen nach bestem Wissen, jedoch ohne Gewähr. Änderungen und Irrtümer sind vorbehalten.",
    file_suffix: "Datenblatt_de",
    qr_file: "emico_qr.png",
};

const EN: Labels = Labels {
    datasheet: "DATASHEET",
    page_words: ("Page", "of"),
    article: "Article Number",
    technical_data: "Technical Data",
    table_headers: ("Attribute", "Value"),
    description: "Description",
    drawing: "Drawing and Dimension Table",
    company: "syskomp gehmeyr GmbH – emico • Max-Planck-Straße 1 • 92224 Amberg • Phone: +49 9621 67545-0 • sales@emico.com",
    qr_text: &[
        "Scan the QR code to discover more items in this category.",
        "For personalized advice, feel free to contact us at sales@emico.com or by phone at +49 9621 67545-0.",
    ],
    disclaimer: "The information in this document is provided to the best of our knowledge, but without guarantee. Changes and errors reserved.",
    file_suffix: "Productsheet_en",
    qr_file: "emico_qr_en.png",
};

const FR: Labels = Labels {
    datasheet: "FICHE TECHNIQUE",
    page_words: ("Page", "sur"),
    article: "Numéro d’article",
    technical_data: "Données techniques",
    table_headers: ("Attribut", "Valeur"),
    description: "Description",
    drawing: "Dessin et tableau des dimensions",
    company: "syskomp gehmeyr GmbH – emico • Max-Planck-Straße 1 • 92224 Amberg • Tél.: +49 9621 67545-0 • sales@emico.com",
    qr_text: &[
        "Scannez le code QR pour découvrir d'autres articles dans cette catégorie.",
        "Pour un conseil personnalisé, contactez-nous par e-mail à sales@emico.com ou par téléphone au +49 9621 67545-0.",
    ],
    disclaimer: "Les informations contenues dans ce document sont fournies au mieux de nos connaissances, mais sans garantie.",
    file_suffix: "FicheDeDonnées_fr",
    qr_file: "emico_qr_fr.png",
};

const ES: Labels = Labels {
    datasheet: "HOJA TÉCNICA",
    page_words: ("Página", "de"),
    article: "Número de artículo",
    technical_data: "Datos técnicos",
    table_headers: ("Atributo", "Valor"),
    description: "Descripción",
    drawing: "Dibujo y tabla de dimensiones",
    company: "syskomp gehmeyr GmbH – emico • Max-Planck-Straße 1 • 92224 Amberg • Tel.: +49 9621 67545-0 • sales@emico.com",
    qr_text: &[
        "Escanee el código QR para descubrir más artículos en esta categoría.",
        "Para recibir asesoramiento personalizado, puede escribirnos a sales@emico.com o llamarnos al +49 9621 67545-0.",
    ],
    disclaimer: "La información de este documento se proporciona según nuestro leal saber y entender, pero sin garantía.",
    file_suffix: "FichaDeDatos_es",
    qr_file: "emico_qr_es.png",
};

const IT: Labels = Labels {
    datasheet: "SCHEDA TECNICA",
    page_words: ("Pagina", "di"),
    article: "Numero articolo",
    technical_data: "Dati tecnici",
    table_headers: ("Attributo", "Valore"),
    description: "Descrizione",
    drawing: "Disegno e tabella delle dimensioni",
    company: "syskomp gehmeyr GmbH – emico • Via Gerolamo Fracastoro 3 • 37010 Cavaion Veronese • Tel.: +39 045 7235605 • info@emico.it",
    qr_text: &[
        "Scansiona il codice QR per scoprire altri articoli in questa categoria.",
        "Per una consulenza personalizzata, contattaci via e-mail a info@emico.it oppure telefonicamente al +39 045 7235605.",
    ],
    disclaimer: "Le informazioni contenute in questo documento sono fornite al meglio delle nostre conoscenze, ma senza garanzia.",
    file_suffix: "SchedaDati_it",
    qr_file: "emico_qr_it.png",
};

impl Labels {
    pub fn for_language(lang: Language) -> &'static Labels {
        match lang {
            Language::De => &DE,
            Language::En => &EN,
            Language::Es => &ES,
            Language::Fr => &FR,
            Language::It => &IT,
        }
    }

    /// Lenient lookup by raw code.
    pub fn for_code(code: &str) -> &'static Labels {
        Self::for_language(Language::from_code_or_default(code))
    }

    pub fn page_of(&self, page: usize, total: usize) -> String {
        format!("{} {} {} {}", self.page_words.0, page, self.page_words.1, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_code_falls_back_to_german() {
        assert_eq!(Labels::for_code("nl"), &DE);
        assert_eq!(Labels::for_code(""), &DE);
    }

    #[test]
    fn page_of_is_localized() {
        assert_eq!(Labels::for_language(Language::Es).page_of(1, 3), "Página 1 de 3");
    }
}
