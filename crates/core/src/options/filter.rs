use std::sync::Arc;

use crate::{interfaces::Build, types::BuildResult};

/// Keep the builds whose result equals `filter`, in their original order.
/// Without a filter the history is handed back as is.
pub fn filter_builds(
    history: Vec<Arc<dyn Build>>,
    filter: Option<BuildResult>,
) -> Vec<Arc<dyn Build>> {
    let Some(wanted) = filter else {
        return history;
    };

    history
        .into_iter()
        .filter(|build| build.result() == Some(wanted))
        .collect()
}
