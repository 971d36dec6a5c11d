pub mod arguments;
pub mod parsers;
pub mod resolver;
pub mod version;
