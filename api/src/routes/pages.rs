//! Pages of the navigation shell.
//!
//! Access control lives in the route table: these handlers assume the
//! [`RequireSession`](crate::middleware::RequireSession) wrapper already
//! admitted the visitor where a page is protected.

use actix_web::{web, HttpResponse};

use gig_core::services::{my_profile, open_project_details};
use gig_core::{Dispatch, RouteGuard};
use gig_shared::{error_codes, ErrorResponse};

use crate::dto::PageView;
use crate::handlers::redirect;
use crate::middleware::CurrentIdentity;

fn render(page: &str, identity: CurrentIdentity) -> HttpResponse {
    HttpResponse::Ok().json(PageView::new(page, identity.0))
}

/// GET /
pub async fn home(identity: CurrentIdentity) -> HttpResponse {
    render("home", identity)
}

/// GET /login
pub async fn login_page(identity: CurrentIdentity) -> HttpResponse {
    render("login", identity)
}

/// GET /me, the current user's own profile
pub async fn me(identity: CurrentIdentity, guard: web::Data<RouteGuard>) -> HttpResponse {
    match my_profile(&identity.0) {
        Dispatch::Navigate(path) => redirect(&path),
        _ => redirect(guard.home_path()),
    }
}

/// GET /freelancer/{id}
pub async fn freelancer_profile(id: web::Path<String>, identity: CurrentIdentity) -> HttpResponse {
    HttpResponse::Ok().json(PageView::new("freelancer-profile", identity.0).about(id.into_inner()))
}

/// GET /company/{id}
pub async fn company_profile(id: web::Path<String>, identity: CurrentIdentity) -> HttpResponse {
    HttpResponse::Ok().json(PageView::new("company-profile", identity.0).about(id.into_inner()))
}

pub async fn notifications(identity: CurrentIdentity) -> HttpResponse {
    render("notifications", identity)
}

pub async fn wallet(identity: CurrentIdentity) -> HttpResponse {
    render("wallet", identity)
}

pub async fn company_dashboard(identity: CurrentIdentity) -> HttpResponse {
    render("company-dashboard", identity)
}

pub async fn new_project(identity: CurrentIdentity) -> HttpResponse {
    render("new-project", identity)
}

pub async fn bids(identity: CurrentIdentity) -> HttpResponse {
    render("bids", identity)
}

/// GET /projects/{id}
///
/// Company accounts are refused with a visible notice instead of a redirect.
pub async fn project_details(id: web::Path<String>, identity: CurrentIdentity) -> HttpResponse {
    let id = id.into_inner();
    match open_project_details(identity.0.role, &id) {
        Dispatch::Navigate(_) => {
            HttpResponse::Ok().json(PageView::new("project-details", identity.0).about(id))
        }
        Dispatch::Deny(notice) => {
            HttpResponse::Forbidden().json(ErrorResponse::new(error_codes::FORBIDDEN, notice))
        }
        Dispatch::Stay => HttpResponse::NotFound().json(ErrorResponse::new(
            error_codes::NOT_FOUND,
            "Project not found",
        )),
    }
}
