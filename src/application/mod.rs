pub mod resolver;
pub mod translate;
