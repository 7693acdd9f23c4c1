use domain::schema::faq::FaqContent;
use serde::Serialize;

/// Presentation default, not part of the content contract.
const DEFAULT_TITLE: &str = "FAQ’s";

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FaqItemUi {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FaqUiProps {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub items: Vec<FaqItemUi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_email: Option<String>,
}

pub fn map_faq(content: FaqContent) -> FaqUiProps {
    let title = content
        .title
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_owned());

    let (cta_label, cta_email) = match content.cta {
        Some(cta) => (Some(cta.label), Some(cta.email)),
        None => (None, None),
    };

    FaqUiProps {
        id: content.id,
        title,
        subtitle: content.subtitle.map(|s| s.trim().to_owned()),
        items: content
            .items
            .into_iter()
            .map(|item| FaqItemUi {
                id: item.id,
                question: item.question.trim().to_owned(),
                answer: item.answer.trim().to_owned(),
            })
            .collect(),
        cta_label,
        cta_email,
    }
}
