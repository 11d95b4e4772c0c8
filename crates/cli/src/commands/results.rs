use anyhow::Result;
use buildvars_core::options::result_options;

use crate::display::print_options;

pub fn results_command() -> Result<()> {
    print_options(&result_options());
    Ok(())
}
