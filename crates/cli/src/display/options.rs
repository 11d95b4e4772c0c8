use buildvars_core::options::BuildOption;

/// One option per line: value, then label when it differs
pub fn print_options(options: &[BuildOption]) {
    let width = options.iter().map(|o| o.value.len()).max().unwrap_or(0);
    for option in options {
        if option.label == option.value {
            println!("{}", option.value);
        } else {
            println!("{:<width$}  {}", option.value, option.label);
        }
    }
}
