pub mod environment;
pub mod options;

pub use environment::print_environment;
pub use options::print_options;
