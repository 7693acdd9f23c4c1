use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator tag for every section a page can declare.
///
/// Wire names are the lowercase Spanish tags used by the content files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    Trayectoria,
    Clientes,
    Servicios,
    Marcas,
    Testimonios,
    Previsualizar,
    Calidad,
    Faq,
    Footer,
}

impl SectionKind {
    pub const ALL: [SectionKind; 10] = [
        SectionKind::Hero,
        SectionKind::Trayectoria,
        SectionKind::Clientes,
        SectionKind::Servicios,
        SectionKind::Marcas,
        SectionKind::Testimonios,
        SectionKind::Previsualizar,
        SectionKind::Calidad,
        SectionKind::Faq,
        SectionKind::Footer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Trayectoria => "trayectoria",
            SectionKind::Clientes => "clientes",
            SectionKind::Servicios => "servicios",
            SectionKind::Marcas => "marcas",
            SectionKind::Testimonios => "testimonios",
            SectionKind::Previsualizar => "previsualizar",
            SectionKind::Calidad => "calidad",
            SectionKind::Faq => "faq",
            SectionKind::Footer => "footer",
        }
    }

    /// Unknown tags are `None`, never an error: manifests are allowed to
    /// declare kinds this build has no renderer for yet.
    pub fn parse(tag: &str) -> Option<SectionKind> {
        SectionKind::ALL.iter().copied().find(|k| k.as_str() == tag)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
