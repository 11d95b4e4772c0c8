use crate::transfer::TransferAgent;

/// What to import: which project, which build of it, and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportVarsConfiguration {
    pub source_project_name: String,
    /// Display name or number; may reference variables of the current build
    pub source_build_id: String,
    pub transfer_agent: TransferAgent,
}

impl ImportVarsConfiguration {
    pub fn new(
        source_project_name: impl Into<String>,
        source_build_id: impl Into<String>,
        transfer_agent: TransferAgent,
    ) -> Self {
        Self {
            source_project_name: source_project_name.into(),
            source_build_id: source_build_id.into(),
            transfer_agent,
        }
    }
}
