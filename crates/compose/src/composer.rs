//! Section composer: walks the page manifest in order, resolves each
//! declared kind to its validated content and mapped props, then applies
//! the one layout rule the landing page has: a `servicios` section
//! immediately followed by `marcas` renders as a single shared band.

use crate::mapper::calidad::{map_calidad, CalidadUiProps};
use crate::mapper::clientes::{map_clientes, ClientesUiProps};
use crate::mapper::faq::{map_faq, FaqUiProps};
use crate::mapper::hero::{map_hero, HeroUiProps};
use crate::mapper::marcas::{map_marcas, MarcasUiProps};
use crate::mapper::previsualizar::{map_previsualizar, PrevisualizarUiProps};
use crate::mapper::servicios::{map_servicios, ServiciosUiProps};
use crate::mapper::testimonios::{map_testimonios, TestimoniosUiProps};
use crate::mapper::trayectoria::{map_trayectoria, TrayectoriaUiProps};
use crate::preview::PreviewSource;
use domain::kind::SectionKind;
use domain::schema::page::PageContent;
use domain::{schema, Result};
use serde::Serialize;
use serde_json::Value as Json;
use std::collections::HashMap;
use tracing::debug;

/// Already-loaded raw section documents, one per kind. Filling this is
/// the loader's job; composition itself does no I/O.
#[derive(Debug, Clone, Default)]
pub struct SectionStore {
    docs: HashMap<SectionKind, Json>,
}

impl SectionStore {
    pub fn new() -> Self {
        SectionStore::default()
    }

    pub fn insert(&mut self, kind: SectionKind, doc: Json) {
        self.docs.insert(kind, doc);
    }

    pub fn get(&self, kind: SectionKind) -> Option<&Json> {
        self.docs.get(&kind)
    }
}

/// Props plus the renderer they belong to.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "renderer", content = "props", rename_all = "lowercase")]
pub enum SectionProps {
    Hero(HeroUiProps),
    Trayectoria(TrayectoriaUiProps),
    Clientes(ClientesUiProps),
    Servicios(ServiciosUiProps),
    Marcas(MarcasUiProps),
    Testimonios(TestimoniosUiProps),
    Previsualizar(PrevisualizarUiProps),
    Calidad(CalidadUiProps),
    Faq(FaqUiProps),
    /// Two adjacent sections under one shared visual wrapper.
    Band(BandUiProps),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BandUiProps {
    pub servicios: ServiciosUiProps,
    pub marcas: MarcasUiProps,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComposedSection {
    /// Unique within one composed page, even when a kind repeats:
    /// `{kind}-{manifestIndex}`, or `{keyA}+{keyB}` for a grouped band.
    pub key: String,
    #[serde(flatten)]
    pub props: SectionProps,
}

struct Resolved {
    kind: SectionKind,
    key: String,
    props: SectionProps,
}

/// Compose the ordered section list for a validated page document.
#[tracing::instrument(skip_all)]
pub fn compose(
    page: &PageContent,
    store: &SectionStore,
    source: &PreviewSource,
) -> Result<Vec<ComposedSection>> {
    let manifest: Vec<String> = page
        .sections
        .iter()
        .map(|s| s.kind.as_str().to_owned())
        .collect();
    compose_manifest(&manifest, store, source)
}

/// Compose from a raw manifest of kind tags.
///
/// Tags that are unknown, have no renderer here (currently `footer`,
/// rendered by the layout), or have no content document in the store are
/// skipped, never fatal; a manifest may declare kinds this build cannot
/// render yet. Validation failures are fatal.
#[tracing::instrument(skip_all)]
pub fn compose_manifest(
    manifest: &[String],
    store: &SectionStore,
    source: &PreviewSource,
) -> Result<Vec<ComposedSection>> {
    let mut resolved: Vec<Resolved> = Vec::with_capacity(manifest.len());

    for (idx, tag) in manifest.iter().enumerate() {
        let Some(kind) = SectionKind::parse(tag) else {
            debug!(%tag, idx, "skipping unknown section kind");
            continue;
        };
        let Some(props) = resolve(kind, store, source)? else {
            debug!(%kind, idx, "skipping section without renderer or content");
            continue;
        };
        resolved.push(Resolved {
            kind,
            key: format!("{kind}-{idx}"),
            props,
        });
    }

    // Adjacency grouping: a single forward scan with one-step lookahead.
    // The explicit `i += 2` is what keeps the rule non-transitive: a
    // servicios/marcas pair never chains into a longer band.
    let mut sections = Vec::with_capacity(resolved.len());
    let mut i = 0;
    while i < resolved.len() {
        let next_is_marcas = resolved
            .get(i + 1)
            .is_some_and(|next| next.kind == SectionKind::Marcas);

        if resolved[i].kind == SectionKind::Servicios && next_is_marcas {
            if let (SectionProps::Servicios(servicios), SectionProps::Marcas(marcas)) =
                (resolved[i].props.clone(), resolved[i + 1].props.clone())
            {
                sections.push(ComposedSection {
                    key: format!("{}+{}", resolved[i].key, resolved[i + 1].key),
                    props: SectionProps::Band(BandUiProps { servicios, marcas }),
                });
                i += 2;
                continue;
            }
        }

        sections.push(ComposedSection {
            key: resolved[i].key.clone(),
            props: resolved[i].props.clone(),
        });
        i += 1;
    }

    Ok(sections)
}

fn resolve(
    kind: SectionKind,
    store: &SectionStore,
    source: &PreviewSource,
) -> Result<Option<SectionProps>> {
    let Some(doc) = store.get(kind) else {
        return Ok(None);
    };

    let props = match kind {
        SectionKind::Hero => SectionProps::Hero(map_hero(schema::hero::parse(doc)?)),
        SectionKind::Trayectoria => {
            SectionProps::Trayectoria(map_trayectoria(schema::trayectoria::parse(doc)?))
        }
        SectionKind::Clientes => SectionProps::Clientes(map_clientes(schema::clientes::parse(doc)?)),
        SectionKind::Servicios => {
            SectionProps::Servicios(map_servicios(schema::servicios::parse(doc)?))
        }
        SectionKind::Marcas => SectionProps::Marcas(map_marcas(schema::marcas::parse(doc)?)),
        SectionKind::Testimonios => {
            SectionProps::Testimonios(map_testimonios(schema::testimonios::parse(doc)?))
        }
        SectionKind::Previsualizar => SectionProps::Previsualizar(map_previsualizar(
            schema::previsualizar::parse(doc)?,
            source,
        )),
        SectionKind::Calidad => SectionProps::Calidad(map_calidad(schema::calidad::parse(doc)?)),
        SectionKind::Faq => SectionProps::Faq(map_faq(schema::faq::parse(doc)?)),
        // The landing page has no footer renderer; the layout owns it.
        SectionKind::Footer => return Ok(None),
    };

    Ok(Some(props))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest(kinds: &[&str]) -> Vec<String> {
        kinds.iter().map(|k| (*k).to_owned()).collect()
    }

    fn store() -> SectionStore {
        let mut store = SectionStore::new();
        store.insert(
            SectionKind::Hero,
            json!({
                "kind": "hero",
                "videoSrc": "/v.mp4",
                "titleBefore": "Equipos",
                "titleHighlight": "de precisión",
                "description": "d",
                "cta": { "label": "Ver", "href": "/c" },
                "features": [{ "icon": "icon01", "title": "t", "description": "d" }],
                "pill": { "label": "l", "value": "v", "caption": "c", "avatars": ["/a.png"] }
            }),
        );
        store.insert(
            SectionKind::Servicios,
            json!({
                "titleLines": ["Servicio técnico"],
                "cards": [{ "key": "m", "image": "/s.png", "label": "01", "title": "Mantenimiento" }]
            }),
        );
        store.insert(
            SectionKind::Marcas,
            json!({
                "kind": "marcas",
                "title": "Nuestras marcas",
                "logos": [{ "name": "Briot", "src": "/b.svg" }]
            }),
        );
        store.insert(
            SectionKind::Faq,
            json!({
                "kind": "faq",
                "items": [{ "id": "q1", "question": "q", "answer": "a" }]
            }),
        );
        store
    }

    fn no_products() -> PreviewSource {
        PreviewSource::default()
    }

    fn keys(sections: &[ComposedSection]) -> Vec<&str> {
        sections.iter().map(|s| s.key.as_str()).collect()
    }

    #[test]
    fn adjacent_servicios_marcas_group_into_band() {
        let composed =
            compose_manifest(&manifest(&["hero", "servicios", "marcas", "faq"]), &store(), &no_products())
                .expect("compose");
        assert_eq!(composed.len(), 3);
        assert_eq!(keys(&composed), ["hero-0", "servicios-1+marcas-2", "faq-3"]);
        assert!(matches!(composed[1].props, SectionProps::Band(_)));
    }

    #[test]
    fn non_adjacent_pair_stays_independent() {
        let composed = compose_manifest(&manifest(&["servicios", "hero", "marcas"]), &store(), &no_products())
            .expect("compose");
        assert_eq!(composed.len(), 3);
        assert!(matches!(composed[0].props, SectionProps::Servicios(_)));
        assert!(matches!(composed[2].props, SectionProps::Marcas(_)));
    }

    #[test]
    fn grouping_does_not_chain() {
        // servicios, marcas, marcas: the band takes the first pair only.
        let composed = compose_manifest(&manifest(&["servicios", "marcas", "marcas"]), &store(), &no_products())
            .expect("compose");
        assert_eq!(composed.len(), 2);
        assert_eq!(keys(&composed), ["servicios-0+marcas-1", "marcas-2"]);
    }

    #[test]
    fn repeated_kind_gets_distinct_keys() {
        let composed = compose_manifest(&manifest(&["hero", "hero"]), &store(), &no_products()).expect("compose");
        assert_eq!(keys(&composed), ["hero-0", "hero-1"]);
    }

    #[test]
    fn unknown_kind_is_skipped_silently() {
        let composed = compose_manifest(&manifest(&["hero", "galeria", "faq"]), &store(), &no_products())
            .expect("compose");
        assert_eq!(keys(&composed), ["hero-0", "faq-2"]);
    }

    #[test]
    fn kind_without_content_is_skipped() {
        // calidad is declared but has no document in the store.
        let composed = compose_manifest(&manifest(&["hero", "calidad", "faq"]), &store(), &no_products())
            .expect("compose");
        assert_eq!(keys(&composed), ["hero-0", "faq-2"]);
    }

    #[test]
    fn keys_keep_manifest_indices_after_skips() {
        let composed = compose_manifest(&manifest(&["calidad", "servicios", "marcas"]), &store(), &no_products())
            .expect("compose");
        assert_eq!(keys(&composed), ["servicios-1+marcas-2"]);
    }

    #[test]
    fn footer_has_no_landing_renderer() {
        let composed = compose_manifest(&manifest(&["footer"]), &store(), &no_products()).expect("compose");
        assert!(composed.is_empty());
    }

    #[test]
    fn invalid_section_document_is_fatal() {
        let mut store = store();
        store.insert(SectionKind::Marcas, json!({ "kind": "marcas", "logos": [] }));
        let err =
            compose_manifest(&manifest(&["servicios", "marcas"]), &store, &no_products()).unwrap_err();
        assert!(err.to_string().contains("logos"));
    }

    #[test]
    fn previsualizar_tabs_resolve_tiles_from_source() {
        let mut store = store();
        store.insert(
            SectionKind::Previsualizar,
            json!({
                "title": "Previsualiza",
                "tabs": [{ "key": "bis", "label": "Biseladoras", "categoryKey": "biseladoras", "limit": 2 }]
            }),
        );
        let mut source = PreviewSource::new();
        source.insert(
            "biseladoras",
            vec![
                ("attitude".to_owned(), json!({ "name": "Attitude", "order": 2 })),
                ("emotion".to_owned(), json!({ "name": "Emotion", "order": 1 })),
                ("zafiro".to_owned(), json!({ "name": "Zafiro", "order": 3 })),
            ],
        );

        let composed =
            compose_manifest(&manifest(&["previsualizar"]), &store, &source).expect("compose");
        let SectionProps::Previsualizar(props) = &composed[0].props else {
            panic!("expected previsualizar props");
        };
        let names: Vec<_> = props.tabs[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Emotion", "Attitude"]);
    }

    #[test]
    fn compose_is_deterministic() {
        let tags = manifest(&["hero", "servicios", "marcas", "faq"]);
        let store = store();
        let a = compose_manifest(&tags, &store, &no_products()).expect("a");
        let b = compose_manifest(&tags, &store, &no_products()).expect("b");
        assert_eq!(a, b);
    }

    #[test]
    fn composed_sections_serialize_with_renderer_tag() {
        let composed = compose_manifest(&manifest(&["hero"]), &store(), &no_products()).expect("compose");
        let json = serde_json::to_value(&composed).expect("serialize");
        assert_eq!(json[0]["key"], "hero-0");
        assert_eq!(json[0]["renderer"], "hero");
        assert_eq!(json[0]["props"]["videoSrc"], "/v.mp4");
    }

    #[test]
    fn compose_accepts_validated_page() {
        let doc = json!({
            "header": {
                "logo": { "src": "/logo.svg", "alt": "Vitrina" },
                "nav": [{ "label": "Inicio", "href": "/" }]
            },
            "sections": [
                { "kind": "hero" },
                { "kind": "servicios" },
                { "kind": "marcas" }
            ]
        });
        let page = schema::page::parse(&doc).expect("page");
        let composed = compose(&page, &store(), &no_products()).expect("compose");
        assert_eq!(keys(&composed), ["hero-0", "servicios-1+marcas-2"]);
    }
}
