use serde::{Deserialize, Serialize};

use gig_core::DerivedIdentity;

/// A rendered page of the navigation shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageView {
    /// Page identifier, e.g. `company-dashboard`
    pub page: String,

    /// Resource the page is about, such as a profile or project id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,

    /// Identity the page was rendered for
    pub viewer: DerivedIdentity,
}

impl PageView {
    pub fn new(page: impl Into<String>, viewer: DerivedIdentity) -> Self {
        Self {
            page: page.into(),
            resource_id: None,
            viewer,
        }
    }

    pub fn about(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }
}
