use anyhow::{Result, bail};
use buildvars_core::integration::check_var_name_template;

pub fn check_template_command(template: &str) -> Result<()> {
    match check_var_name_template(template) {
        Ok(()) => {
            println!("✅ Template is valid");
            Ok(())
        }
        Err(message) => bail!("{message}"),
    }
}
