//! Route guard middleware for protected pages.
//!
//! Wraps a resource and consults the shared [`AuthContext`] before the
//! handler runs. Visitors without a session get `302 Found` to the login
//! page, sessions with the wrong role get `302 Found` to home. The wrapped
//! handler is only invoked when access is allowed, in which case the derived
//! identity is placed in the request extensions for [`CurrentIdentity`].

use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorInternalServerError,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;

use gig_core::{AuthContext, DerivedIdentity, Navigation, Role, RouteGuard};

use crate::handlers::redirect;

/// Route guard middleware factory
#[derive(Debug, Clone, Copy)]
pub struct RequireSession {
    /// Role the wrapped pages are restricted to, any session when `None`
    required_role: Option<Role>,
}

impl RequireSession {
    /// Any logged-in user may pass
    pub fn any() -> Self {
        Self { required_role: None }
    }

    /// Only sessions with `role` may pass
    pub fn role(role: Role) -> Self {
        Self {
            required_role: Some(role),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware {
            service: Rc::new(service),
            required_role: self.required_role,
        }))
    }
}

/// Route guard middleware service
pub struct RequireSessionMiddleware<S> {
    service: Rc<S>,
    required_role: Option<Role>,
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let required_role = self.required_role;

        Box::pin(async move {
            let identity = match req.app_data::<web::Data<AuthContext>>() {
                Some(context) => context.identity(),
                None => return Err(ErrorInternalServerError("Auth context not configured")),
            };

            let navigation = match req.app_data::<web::Data<RouteGuard>>() {
                Some(guard) => guard.guard(&identity, required_role, || ()),
                None => RouteGuard::default().guard(&identity, required_role, || ()),
            };

            match navigation {
                Navigation::Redirect(target) => {
                    log::debug!("Guarded {} redirected to {}", req.path(), target);
                    let response = redirect(&target).map_into_right_body();
                    Ok(req.into_response(response))
                }
                Navigation::Render(()) => {
                    req.extensions_mut().insert(identity);
                    let response = service.call(req).await?;
                    Ok(response.map_into_left_body())
                }
            }
        })
    }
}

/// Identity of the visitor making the request.
///
/// Behind [`RequireSession`] this is the identity the guard admitted.
/// Elsewhere it is derived from the shared auth context, or anonymous when
/// none is configured.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub DerivedIdentity);

impl FromRequest for CurrentIdentity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let admitted = req.extensions().get::<DerivedIdentity>().cloned();
        let identity = admitted.unwrap_or_else(|| {
            req.app_data::<web::Data<AuthContext>>()
                .map(|context| context.identity())
                .unwrap_or_default()
        });
        ready(Ok(CurrentIdentity(identity)))
    }
}
