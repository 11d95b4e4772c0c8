use buildvars_core::EnvironmentMap;

pub fn print_environment(env: &EnvironmentMap) {
    for (key, value) in env {
        println!("{key}={value}");
    }
}
