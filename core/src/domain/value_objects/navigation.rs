//! Navigation outcomes produced by the route guard and role dispatch.

use serde::{Deserialize, Serialize};

/// Result of consulting the route guard for a protected subtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation<T> {
    /// The protected subtree, rendered unchanged
    Render(T),
    /// Navigate elsewhere instead of rendering
    Redirect(String),
}

impl<T> Navigation<T> {
    /// Checks if the subtree was rendered
    pub fn is_render(&self) -> bool {
        matches!(self, Navigation::Render(_))
    }

    /// The redirect target, if any
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Navigation::Redirect(path) => Some(path.as_str()),
            Navigation::Render(_) => None,
        }
    }

    /// Consumes the outcome, yielding the rendered subtree
    pub fn into_rendered(self) -> Option<T> {
        match self {
            Navigation::Render(view) => Some(view),
            Navigation::Redirect(_) => None,
        }
    }
}

/// Decision returned to an interaction handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum Dispatch {
    /// Navigate to the given path
    Navigate(String),
    /// Stay put and show the notice to the user
    Deny(String),
    /// Do nothing
    Stay,
}

impl Dispatch {
    /// The path to navigate to, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            Dispatch::Navigate(path) => Some(path.as_str()),
            _ => None,
        }
    }

    /// The user-visible denial notice, if any
    pub fn notice(&self) -> Option<&str> {
        match self {
            Dispatch::Deny(notice) => Some(notice.as_str()),
            _ => None,
        }
    }
}
