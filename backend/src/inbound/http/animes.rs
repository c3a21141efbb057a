//! Anime catalogue HTTP handlers.
//!
//! ```text
//! GET    /animes?page=0&size=20&sort=name,desc
//! GET    /animes/all
//! GET    /animes/find?name=Ippo
//! GET    /animes/{id}
//! POST   /animes               {"name":"Angel Beats"}
//! PUT    /animes               {"id":1,"name":"Angel Beats 2"}
//! DELETE /animes/{id}
//! DELETE /animes/admin/{id}
//! ```
//!
//! Every route requires HTTP Basic credentials.

use actix_web::{HttpResponse, delete, get, post, put, web};
use pagination::{Page, PageParams};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Anime, AnimeId, Authority};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthenticatedPrincipal;
use crate::inbound::http::error::{ErrorPayload, json_config, path_config, query_config};
use crate::inbound::http::schemas::AnimePageSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{validate_insert, validate_page, validate_update};

/// Anime as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnimeBody {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Angel Beats")]
    pub name: String,
}

impl From<Anime> for AnimeBody {
    fn from(value: Anime) -> Self {
        Self {
            id: value.id().get(),
            name: value.name().to_string(),
        }
    }
}

/// Body for `POST /animes`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct AnimeInsertRequest {
    #[schema(example = "Angel Beats")]
    pub name: Option<String>,
}

/// Body for `PUT /animes`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct AnimeUpdateRequest {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "Angel Beats 2")]
    pub name: Option<String>,
}

/// Query for `GET /animes/find`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameQuery {
    /// Case-sensitive fragment the name must contain.
    pub name: String,
}

fn to_bodies(animes: Vec<Anime>) -> Vec<AnimeBody> {
    animes.into_iter().map(AnimeBody::from).collect()
}

/// One page of anime.
#[utoipa::path(
    get,
    path = "/animes",
    params(
        ("page" = Option<u32>, Query, description = "Zero-based page number", example = 0),
        ("size" = Option<u32>, Query, description = "Page size", example = 20),
        ("sort" = Option<String>, Query, description = "`id` or `name`, optionally `,asc` or `,desc`", example = "name,desc")
    ),
    responses(
        (status = 200, description = "Page of anime", body = AnimePageSchema),
        (status = 400, description = "Invalid paging parameters", body = ErrorPayload),
        (status = 401, description = "Unauthorized", body = ErrorPayload)
    ),
    tags = ["animes"],
    operation_id = "listAnimes",
    security(("basicAuth" = []))
)]
#[get("")]
pub async fn list_animes(
    _principal: AuthenticatedPrincipal,
    state: web::Data<HttpState>,
    params: web::Query<PageParams>,
) -> ApiResult<web::Json<Page<AnimeBody>>> {
    let request = validate_page(params.into_inner(), state.max_page_size)?;
    let page = state.animes.list_page(&request).await?;
    Ok(web::Json(page.map(AnimeBody::from)))
}

/// Every anime, ordered by id.
#[utoipa::path(
    get,
    path = "/animes/all",
    responses(
        (status = 200, description = "All anime", body = [AnimeBody]),
        (status = 401, description = "Unauthorized", body = ErrorPayload)
    ),
    tags = ["animes"],
    operation_id = "listAllAnimes",
    security(("basicAuth" = []))
)]
#[get("/all")]
pub async fn list_all_animes(
    _principal: AuthenticatedPrincipal,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<AnimeBody>>> {
    let animes = state.animes.list_all().await?;
    Ok(web::Json(to_bodies(animes)))
}

/// Anime whose name contains the given fragment.
#[utoipa::path(
    get,
    path = "/animes/find",
    params(NameQuery),
    responses(
        (status = 200, description = "Matching anime, possibly none", body = [AnimeBody]),
        (status = 400, description = "Missing name parameter", body = ErrorPayload),
        (status = 401, description = "Unauthorized", body = ErrorPayload)
    ),
    tags = ["animes"],
    operation_id = "findAnimesByName",
    security(("basicAuth" = []))
)]
#[get("/find")]
pub async fn find_animes_by_name(
    _principal: AuthenticatedPrincipal,
    state: web::Data<HttpState>,
    query: web::Query<NameQuery>,
) -> ApiResult<web::Json<Vec<AnimeBody>>> {
    let animes = state.animes.find_by_name(&query.name).await?;
    Ok(web::Json(to_bodies(animes)))
}

/// A single anime.
#[utoipa::path(
    get,
    path = "/animes/{id}",
    params(("id" = i64, Path, description = "Anime identifier")),
    responses(
        (status = 200, description = "Anime", body = AnimeBody),
        (status = 400, description = "Unknown id or malformed path", body = ErrorPayload),
        (status = 401, description = "Unauthorized", body = ErrorPayload)
    ),
    tags = ["animes"],
    operation_id = "findAnimeById",
    security(("basicAuth" = []))
)]
#[get("/{id}")]
pub async fn find_anime_by_id(
    _principal: AuthenticatedPrincipal,
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<AnimeBody>> {
    let anime = state.animes.find_by_id(AnimeId::new(id.into_inner())).await?;
    Ok(web::Json(anime.into()))
}

/// Create an anime. The store assigns the id.
#[utoipa::path(
    post,
    path = "/animes",
    request_body = AnimeInsertRequest,
    responses(
        (status = 201, description = "Created", body = AnimeBody),
        (status = 400, description = "Invalid fields or malformed body", body = ErrorPayload),
        (status = 401, description = "Unauthorized", body = ErrorPayload)
    ),
    tags = ["animes"],
    operation_id = "createAnime",
    security(("basicAuth" = []))
)]
#[post("")]
pub async fn create_anime(
    principal: AuthenticatedPrincipal,
    state: web::Data<HttpState>,
    payload: web::Json<AnimeInsertRequest>,
) -> ApiResult<HttpResponse> {
    let request = validate_insert(payload.name.as_deref())?;
    let created = state.animes_command.create(request).await?;
    info!(anime_id = %created.id(), user = principal.username(), "anime created");
    Ok(HttpResponse::Created().json(AnimeBody::from(created)))
}

/// Overwrite an existing anime.
#[utoipa::path(
    put,
    path = "/animes",
    request_body = AnimeUpdateRequest,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Unknown id, invalid fields or malformed body", body = ErrorPayload),
        (status = 401, description = "Unauthorized", body = ErrorPayload)
    ),
    tags = ["animes"],
    operation_id = "replaceAnime",
    security(("basicAuth" = []))
)]
#[put("")]
pub async fn replace_anime(
    principal: AuthenticatedPrincipal,
    state: web::Data<HttpState>,
    payload: web::Json<AnimeUpdateRequest>,
) -> ApiResult<HttpResponse> {
    let request = validate_update(payload.id, payload.name.as_deref())?;
    let id = request.id;
    state.animes_command.replace(request).await?;
    info!(anime_id = %id, user = principal.username(), "anime replaced");
    Ok(HttpResponse::NoContent().finish())
}

/// Remove an anime.
#[utoipa::path(
    delete,
    path = "/animes/{id}",
    params(("id" = i64, Path, description = "Anime identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Unknown id or malformed path", body = ErrorPayload),
        (status = 401, description = "Unauthorized", body = ErrorPayload)
    ),
    tags = ["animes"],
    operation_id = "deleteAnime",
    security(("basicAuth" = []))
)]
#[delete("/{id}")]
pub async fn delete_anime(
    principal: AuthenticatedPrincipal,
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = AnimeId::new(id.into_inner());
    state.animes_command.delete(id).await?;
    info!(anime_id = %id, user = principal.username(), "anime deleted");
    Ok(HttpResponse::NoContent().finish())
}

/// Remove an anime; restricted to administrators.
#[utoipa::path(
    delete,
    path = "/animes/admin/{id}",
    params(("id" = i64, Path, description = "Anime identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Unknown id or malformed path", body = ErrorPayload),
        (status = 401, description = "Unauthorized", body = ErrorPayload),
        (status = 403, description = "ROLE_ADMIN required", body = ErrorPayload)
    ),
    tags = ["animes"],
    operation_id = "adminDeleteAnime",
    security(("basicAuth" = []))
)]
#[delete("/admin/{id}")]
pub async fn admin_delete_anime(
    principal: AuthenticatedPrincipal,
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    principal.require(Authority::Admin)?;
    let id = AnimeId::new(id.into_inner());
    state.animes_command.delete(id).await?;
    info!(anime_id = %id, user = principal.username(), "anime deleted by admin");
    Ok(HttpResponse::NoContent().finish())
}

/// Register the `/animes` scope.
///
/// Literal segments are registered ahead of `/{id}` so `all` and `find`
/// never reach the numeric path decoder.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use anime_backend::inbound::http::animes;
///
/// let _app = App::new().configure(animes::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/animes")
            .app_data(json_config())
            .app_data(path_config())
            .app_data(query_config())
            .service(list_animes)
            .service(list_all_animes)
            .service(find_animes_by_name)
            .service(create_anime)
            .service(replace_anime)
            .service(admin_delete_anime)
            .service(find_anime_by_id)
            .service(delete_anime),
    );
}

#[cfg(test)]
#[path = "animes_tests.rs"]
mod tests;
