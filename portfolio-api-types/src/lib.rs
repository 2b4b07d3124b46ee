mod contact;
mod project;
mod search;

pub use contact::ContactResponse;
pub use project::ProjectImage;
pub use search::SearchResult;

use serde::{Deserialize, Serialize};

/// Response body for endpoints that only report whether they succeeded,
/// such as `/toggle_dark`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub success: bool,
}
