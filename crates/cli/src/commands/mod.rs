pub mod builds;
pub mod check_template;
pub mod context;
pub mod import;
pub mod init;
pub mod projects;
pub mod results;
pub mod step;

pub use builds::builds_command;
pub use check_template::check_template_command;
pub use context::CommandContext;
pub use import::import_command;
pub use init::init_command;
pub use projects::projects_command;
pub use results::results_command;
pub use step::step_command;
