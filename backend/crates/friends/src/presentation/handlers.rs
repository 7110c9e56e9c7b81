//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use platform::password::CredentialHasher;

use crate::application::{FriendInput, FriendsFacade};
use crate::domain::repository::FriendCollection;
use crate::error::{FriendError, FriendResult};
use crate::presentation::dto::{
    CreatedResponse, DeletedResponse, FriendRequest, FriendResponse, ModifiedResponse,
    VerifyRequest,
};
use crate::presentation::extract::JsonBody;

/// Shared state for friends handlers
pub struct FriendsAppState<C, H>
where
    C: FriendCollection + Send + Sync + 'static,
    H: CredentialHasher,
{
    pub facade: FriendsFacade<C, H>,
}

impl<C, H> Clone for FriendsAppState<C, H>
where
    C: FriendCollection + Send + Sync + 'static,
    H: CredentialHasher,
{
    fn clone(&self) -> Self {
        Self {
            facade: self.facade.clone(),
        }
    }
}

/// POST /api/friends
pub async fn add_friend<C, H>(
    State(state): State<FriendsAppState<C, H>>,
    JsonBody(req): JsonBody<FriendRequest>,
) -> FriendResult<impl IntoResponse>
where
    C: FriendCollection + Send + Sync + 'static,
    H: CredentialHasher,
{
    let input = FriendInput::try_from(req)?;
    let friend_id = state.facade.add_friend(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: friend_id.to_string(),
        }),
    ))
}

/// PUT /api/friends/{email}
pub async fn edit_friend<C, H>(
    State(state): State<FriendsAppState<C, H>>,
    Path(email): Path<String>,
    JsonBody(req): JsonBody<FriendRequest>,
) -> FriendResult<Json<ModifiedResponse>>
where
    C: FriendCollection + Send + Sync + 'static,
    H: CredentialHasher,
{
    let input = FriendInput::try_from(req)?;
    let modified_count = state.facade.edit_friend(&email, input).await?;
    Ok(Json(ModifiedResponse { modified_count }))
}

/// DELETE /api/friends/{email}
pub async fn delete_friend<C, H>(
    State(state): State<FriendsAppState<C, H>>,
    Path(email): Path<String>,
) -> FriendResult<Json<DeletedResponse>>
where
    C: FriendCollection + Send + Sync + 'static,
    H: CredentialHasher,
{
    let deleted = state.facade.delete_friend(&email).await?;
    Ok(Json(DeletedResponse { deleted }))
}

/// GET /api/friends
pub async fn get_all_friends<C, H>(
    State(state): State<FriendsAppState<C, H>>,
) -> FriendResult<Json<Vec<FriendResponse>>>
where
    C: FriendCollection + Send + Sync + 'static,
    H: CredentialHasher,
{
    let friends = state.facade.get_all_friends().await?;
    Ok(Json(friends.into_iter().map(FriendResponse::from).collect()))
}

/// GET /api/friends/{email}
pub async fn get_friend<C, H>(
    State(state): State<FriendsAppState<C, H>>,
    Path(email): Path<String>,
) -> FriendResult<Json<FriendResponse>>
where
    C: FriendCollection + Send + Sync + 'static,
    H: CredentialHasher,
{
    let friend = state.facade.get_friend(&email).await?;
    Ok(Json(friend.into()))
}

/// POST /api/friends/verify
///
/// Unknown email and wrong password get the same 401.
pub async fn verify_friend<C, H>(
    State(state): State<FriendsAppState<C, H>>,
    JsonBody(req): JsonBody<VerifyRequest>,
) -> FriendResult<Json<FriendResponse>>
where
    C: FriendCollection + Send + Sync + 'static,
    H: CredentialHasher,
{
    let (email, password) = req.into_credentials();
    let friend = state
        .facade
        .get_verified_friend(&email, password)
        .await?
        .ok_or(FriendError::InvalidCredentials)?;

    Ok(Json(friend.into()))
}
