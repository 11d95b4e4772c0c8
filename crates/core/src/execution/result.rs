use serde::Serialize;

/// Outcome of one successful import
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportResult {
    pub project_name: String,
    /// The identifier as configured, before expansion
    pub build_id: String,
    /// Growth of the current environment. Overwritten keys do not count, and
    /// deferred contributions count as zero.
    pub net_variables_imported: usize,
}
