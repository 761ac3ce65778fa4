//! Database entities module

pub mod article;

pub use article::Entity as Article;
