use crate::preview::{preview_items, CatalogPreviewItem, PreviewSource};
use domain::schema::previsualizar::{PreviewCta, PrevisualizarContent};
use serde::Serialize;

/// Tiles shown per tab when the content declares no limit.
const DEFAULT_TAB_LIMIT: usize = 3;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewTabUi {
    pub key: String,
    pub label: String,
    pub category_key: String,
    pub items: Vec<CatalogPreviewItem>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PrevisualizarUiProps {
    pub title: String,
    pub tabs: Vec<PreviewTabUi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<PreviewCta>,
}

pub fn map_previsualizar(
    content: PrevisualizarContent,
    source: &PreviewSource,
) -> PrevisualizarUiProps {
    let tabs = content
        .tabs
        .into_iter()
        .map(|tab| {
            let limit = tab.limit.map(|l| l as usize).unwrap_or(DEFAULT_TAB_LIMIT);
            let items = preview_items(&tab.category_key, source.docs_for(&tab.category_key), limit);
            PreviewTabUi {
                key: tab.key,
                label: tab.label,
                category_key: tab.category_key,
                items,
            }
        })
        .collect();

    PrevisualizarUiProps {
        title: content.title,
        tabs,
        cta: content.cta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn source() -> PreviewSource {
        let mut source = PreviewSource::new();
        source.insert(
            "biseladoras",
            vec![
                ("attitude".to_owned(), json!({ "name": "Attitude", "order": 2 })),
                ("emotion".to_owned(), json!({ "name": "Emotion", "order": 1 })),
                ("zafiro".to_owned(), json!({ "name": "Zafiro" })),
                ("delta".to_owned(), json!({ "name": "Delta" })),
            ],
        );
        source
    }

    fn parse(doc: serde_json::Value) -> PrevisualizarContent {
        domain::schema::previsualizar::parse(&doc).expect("parse")
    }

    #[test]
    fn tabs_resolve_items_with_default_limit() {
        let props = map_previsualizar(
            parse(json!({
                "title": "Previsualiza",
                "tabs": [{ "key": "bis", "label": "Biseladoras", "categoryKey": "biseladoras" }]
            })),
            &source(),
        );
        let names: Vec<_> = props.tabs[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Emotion", "Attitude", "Delta"]);
    }

    #[test]
    fn declared_limit_overrides_default() {
        let props = map_previsualizar(
            parse(json!({
                "tabs": [{ "key": "bis", "label": "B", "categoryKey": "biseladoras", "limit": 1 }]
            })),
            &source(),
        );
        assert_eq!(props.tabs[0].items.len(), 1);
        assert_eq!(props.tabs[0].items[0].name, "Emotion");
    }

    #[test]
    fn unknown_category_yields_no_items() {
        let props = map_previsualizar(
            parse(json!({
                "tabs": [{ "key": "oft", "label": "O", "categoryKey": "equipos-oftalmologicos" }]
            })),
            &source(),
        );
        assert!(props.tabs[0].items.is_empty());
    }
}
