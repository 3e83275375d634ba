//! HTTP API endpoints for user records.
//!
//! # Endpoints
//!
//! * `GET /users` - List every user
//! * `POST /users/create` - Create a user, responds with every user
//! * `DELETE /users/delete?id=<id>` - Delete a user
//! * `PATCH /users/update?id=<id>` - Update a user's `name` and/or `age`
//!
//! Each path accepts exactly one method. Any other method gets a
//! `405 Method Not Allowed` with an empty body.
//!
//! # Example
//!
//! ```rust,no_run
//! use actix_web::{App, web};
//! use userbox_users::{api::bind_services, store::UserStore};
//!
//! let store = web::Data::new(UserStore::new());
//! let app = App::new()
//!     .app_data(store)
//!     .service(bind_services(web::scope("/users")));
//! ```

use actix_web::{
    FromRequest, HttpRequest, HttpResponse, ResponseError, Result, Scope,
    dev::{Payload, ServiceFactory, ServiceRequest},
    http::{StatusCode, header::ContentType},
    web::{self, Json},
};
use futures::future::{Ready, err, ok};
use qstring::QString;

use crate::{
    UserError,
    api::models::{ApiCreateUser, ApiUpdateUser, ApiUser, from_json_object},
    store::UserStore,
};

pub mod models;

/// Binds the user endpoints to an Actix-Web scope.
///
/// The list endpoint is bound to the scope's own path, so mount this on
/// `/users`.
#[must_use]
pub fn bind_services<
    T: ServiceFactory<ServiceRequest, Config = (), Error = actix_web::Error, InitError = ()>,
>(
    scope: Scope<T>,
) -> Scope<T> {
    scope
        .service(web::resource("").route(web::get().to(list_users_endpoint)))
        .service(web::resource("/create").route(web::post().to(create_user_endpoint)))
        .service(web::resource("/delete").route(web::delete().to(delete_user_endpoint)))
        .service(web::resource("/update").route(web::patch().to(update_user_endpoint)))
}

impl ResponseError for UserError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingId | Self::InvalidId { .. } | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        log::debug!("Responding with {status}: {self}");

        match self {
            Self::InvalidBody(_) => HttpResponse::build(status)
                .content_type(ContentType::plaintext())
                .body(self.to_string()),
            Self::MissingId | Self::InvalidId { .. } | Self::NotFound { .. } => {
                HttpResponse::new(status)
            }
        }
    }
}

/// The required `id` query parameter of the delete and update endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdQuery(pub i64);

impl UserIdQuery {
    /// Reads the `id` query parameter from the request.
    ///
    /// # Errors
    ///
    /// * If the `id` query parameter is missing or empty
    /// * If the `id` query parameter is not an integer
    pub fn from_request_inner(req: &HttpRequest) -> Result<Self, UserError> {
        let query = QString::from(req.query_string());

        let Some(id) = query.get("id").filter(|id| !id.is_empty()) else {
            return Err(UserError::MissingId);
        };

        id.parse::<i64>()
            .map(Self)
            .map_err(|source| UserError::InvalidId {
                value: id.to_string(),
                source,
            })
    }
}

impl FromRequest for UserIdQuery {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, actix_web::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match Self::from_request_inner(req) {
            Ok(x) => ok(x),
            Err(x) => err(x.into()),
        }
    }
}

fn to_api_users(users: Vec<crate::models::User>) -> Vec<ApiUser> {
    users.into_iter().map(Into::into).collect()
}

/// API endpoint to list every user in creation order.
///
/// # Errors
///
/// * Never, apart from the method check done by the router
pub async fn list_users_endpoint(store: web::Data<UserStore>) -> Result<Json<Vec<ApiUser>>> {
    Ok(Json(to_api_users(store.list())))
}

/// API endpoint to create a user.
///
/// Responds with every user, the new one last.
///
/// # Errors
///
/// * If the body is not a JSON object with a string `name` and an integer `age`
pub async fn create_user_endpoint(
    store: web::Data<UserStore>,
    body: web::Bytes,
) -> Result<Json<Vec<ApiUser>>> {
    let user = from_json_object::<ApiCreateUser>(&body).map_err(UserError::from)?;
    let (_, users) = store.create(user.into());

    Ok(Json(to_api_users(users)))
}

/// API endpoint to delete a user. Responds with an empty body.
///
/// # Errors
///
/// * If the `id` query parameter is missing or not an integer
/// * If no user has the given id
pub async fn delete_user_endpoint(
    store: web::Data<UserStore>,
    id: UserIdQuery,
) -> Result<HttpResponse> {
    store.delete(id.0)?;

    Ok(HttpResponse::Ok().finish())
}

/// API endpoint to update a user's `name` and/or `age`.
///
/// The whole body is validated before the user is touched, so a rejected
/// request never leaves a partial update behind.
///
/// # Errors
///
/// * If the `id` query parameter is missing or not an integer
/// * If the body is not a JSON object, has a key other than `name`/`age`, or
///   has a value of the wrong type
/// * If no user has the given id
pub async fn update_user_endpoint(
    store: web::Data<UserStore>,
    id: UserIdQuery,
    body: web::Bytes,
) -> Result<Json<ApiUser>> {
    let update = from_json_object::<ApiUpdateUser>(&body).map_err(UserError::from)?;
    let user = store.update(id.0, update.into())?;

    Ok(Json(user.into()))
}
