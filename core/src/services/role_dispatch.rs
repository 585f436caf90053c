//! Role-based decisions for interaction handlers.
//!
//! Everything here is pure: no storage, no I/O, no logging.

use crate::domain::entities::session::{DerivedIdentity, Role, Session};
use crate::domain::value_objects::navigation::Dispatch;

/// Prefix of freelancer profile pages
pub const FREELANCER_PROFILE_PREFIX: &str = "/freelancer";

/// Prefix of company profile pages
pub const COMPANY_PROFILE_PREFIX: &str = "/company";

/// Prefix of project detail pages
pub const PROJECT_DETAILS_PREFIX: &str = "/projects";

/// Notice shown when a company account tries to open project details
pub const PROJECT_DETAILS_DENIED: &str = "Only freelancers can view project details";

/// Profile path for a role and user id, `None` when the id is absent or blank
pub fn profile_route_for(role: Role, user_id: Option<&str>) -> Option<String> {
    let user_id = user_id.map(str::trim).filter(|id| !id.is_empty())?;
    Some(child_path(profile_prefix(role), user_id))
}

/// `prefix/segment` with the segment percent-encoded, since ids come from the backend
fn child_path(prefix: &str, segment: &str) -> String {
    format!("{}/{}", prefix, urlencoding::encode(segment))
}

fn profile_prefix(role: Role) -> &'static str {
    match role {
        Role::Freelancer => FREELANCER_PROFILE_PREFIX,
        Role::Company => COMPANY_PROFILE_PREFIX,
    }
}

/// Only freelancers may open a project's detail view
pub fn can_view_project_details(role: Role) -> bool {
    role == Role::Freelancer
}

/// "View details" on a project card
pub fn open_project_details(role: Role, project_id: &str) -> Dispatch {
    if !can_view_project_details(role) {
        return Dispatch::Deny(PROJECT_DETAILS_DENIED.to_string());
    }
    match project_id.trim() {
        "" => Dispatch::Stay,
        id => Dispatch::Navigate(child_path(PROJECT_DETAILS_PREFIX, id)),
    }
}

/// "My profile" for the current identity
pub fn my_profile(identity: &DerivedIdentity) -> Dispatch {
    if !identity.is_logged_in {
        return Dispatch::Stay;
    }
    profile_route_for(identity.role, identity.user_id.as_deref())
        .map_or(Dispatch::Stay, Dispatch::Navigate)
}

/// Where a user lands right after logging in
pub fn post_login_destination(session: &Session) -> String {
    child_path(profile_prefix(session.role()), session.user_id().trim())
}
