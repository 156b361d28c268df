pub mod formatting;
pub mod grouping;
pub mod loader;
pub mod resolver;
pub mod view;
