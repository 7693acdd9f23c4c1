use domain::schema::clientes::{ClienteLogo, ClientesContent};
use serde::Serialize;

/// The renderer shows a single row of five logos (wrapping on small
/// screens); anything beyond five is dropped here, not in content.
const MAX_LOGOS: usize = 5;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientesUiProps {
    pub title: String,
    pub subtitle: String,
    pub logos: Vec<ClienteLogo>,
}

pub fn map_clientes(content: ClientesContent) -> ClientesUiProps {
    let mut logos = content.logos;
    logos.truncate(MAX_LOGOS);
    ClientesUiProps {
        title: content.title,
        subtitle: content.subtitle,
        logos,
    }
}
