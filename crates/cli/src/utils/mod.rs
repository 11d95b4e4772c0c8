pub mod parser;

pub use parser::parse_build_ref;
