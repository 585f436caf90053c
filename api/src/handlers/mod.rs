pub mod error;

pub use error::ApiError;

use actix_web::http::header::LOCATION;
use actix_web::HttpResponse;

/// `302 Found` pointing at `location`
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location))
        .finish()
}
