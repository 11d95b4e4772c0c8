//! Build selection lists: result filtering and option formatting

pub mod filter;
pub mod formatter;
pub mod provider;

pub use filter::filter_builds;
pub use formatter::{
    BuildOptionFormatter, DEFAULT_DATE_FORMAT, DefaultBuildFormatter, is_valid_date_format,
};
pub use provider::{BuildOption, BuildOptionsProvider, result_options};
