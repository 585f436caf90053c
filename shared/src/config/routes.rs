//! Navigation entry points

use serde::{Deserialize, Serialize};

/// Entry points the route guard redirects to
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoutesConfig {
    /// Where anonymous visitors are sent
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Where authenticated users without the required role are sent
    #[serde(default = "default_home_path")]
    pub home_path: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            home_path: default_home_path(),
        }
    }
}

fn default_login_path() -> String {
    String::from("/login")
}

fn default_home_path() -> String {
    String::from("/")
}
