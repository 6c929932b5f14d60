pub mod layouts;
pub mod pages;

pub use pages::index_page;
