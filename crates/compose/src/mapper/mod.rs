//! Per-kind mappers: canonical content → flat UI props. Mappers rename to
//! the renderer vocabulary, apply presentation defaults that are not part
//! of the content contract, and resolve static lookups. They never
//! validate; input is canonical by construction.

pub mod calidad;
pub mod catalog;
pub mod clientes;
pub mod faq;
pub mod hero;
pub mod marcas;
pub mod previsualizar;
pub mod servicios;
pub mod testimonios;
pub mod trayectoria;
