use domain::schema::testimonios::{Testimonio, TestimoniosContent};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TestimoniosUiProps {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Testimonio>,
}

pub fn map_testimonios(content: TestimoniosContent) -> TestimoniosUiProps {
    TestimoniosUiProps {
        title: content.title,
        subtitle: content.subtitle,
        items: content.items,
    }
}
