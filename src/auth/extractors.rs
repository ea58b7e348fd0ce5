use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::Caller;

/// Extracts the request's `Caller` from extensions.
///
/// Auth middleware inserts `Caller::User` when a valid bearer token was
/// presented; when nothing was inserted the request is anonymous. Extraction
/// itself never fails, so handlers on optionally-authenticated routes take a
/// `Caller` argument and branch on the variant.
impl FromRequest for Caller {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let caller = req
            .extensions()
            .get::<Caller>()
            .copied()
            .unwrap_or(Caller::Anonymous);
        ready(Ok(caller))
    }
}
