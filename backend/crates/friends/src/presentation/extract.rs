//! Request extractors

use axum::extract::FromRequest;

use crate::error::FriendError;

/// `axum::Json`, but a body that is not JSON at all is a `FriendError`
/// (400 problem JSON) rather than axum's plain-text rejection
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(FriendError))]
pub struct JsonBody<T>(pub T);
