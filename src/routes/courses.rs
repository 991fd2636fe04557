use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde_json::json;
use uuid::Uuid;

use crate::auth::extractor::CurrentUser;
use crate::db;
use crate::db::courses::NewCourse;
use crate::error::AppError;
use crate::form::{self, MultipartForm};
use crate::models::{Course, CourseResponse};
use crate::response::Envelope;
use crate::state::SharedState;

/// Text fields of the create-course form.
#[derive(Debug)]
pub struct CreateCourse {
    pub name: String,
    pub creator_id: String,
    pub creator_name: String,
    pub category: String,
    pub description: String,
}

impl CreateCourse {
    fn bind(form: &mut MultipartForm) -> Result<Self, String> {
        Ok(Self {
            name: form.take_required("Name")?,
            creator_id: form.take_required("CreatorID")?,
            creator_name: form.take_required("CreatorName")?,
            category: form.take_optional("Category"),
            description: form.take_optional("Description"),
        })
    }
}

pub async fn create(
    user: CurrentUser,
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Envelope>), AppError> {
    let mut form = form::parse_multipart(&headers, body)
        .await
        .map_err(AppError::Upload)?;

    let image = form
        .take_file("image")
        .ok_or_else(|| AppError::Upload("Missing image file".to_string()))?;
    let stored = state.images.store(&image).await.map_err(AppError::Upload)?;

    let course = match insert_course(&state, &user, &mut form, &stored.url).await {
        Ok(course) => course,
        Err(err) => {
            if let Err(e) = state.images.discard(&stored).await {
                tracing::warn!("Failed to discard image of rejected course: {e}");
            }
            return Err(err);
        }
    };

    tracing::info!(course_id = %course.id, creator_id = %course.creator_id, "Course created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(
            StatusCode::CREATED,
            json!({ "course": CourseResponse::from(course) }),
        )),
    ))
}

/// Bind and authorize the create form, then insert the row.
async fn insert_course(
    state: &SharedState,
    user: &CurrentUser,
    form: &mut MultipartForm,
    image_url: &str,
) -> Result<Course, AppError> {
    let payload = CreateCourse::bind(form).map_err(AppError::Validation)?;

    let creator_id = Uuid::parse_str(&payload.creator_id)
        .ok()
        .filter(|id| *id == user.id)
        .ok_or_else(|| AppError::Forbidden("Access denied".to_string()))?;

    if payload.creator_name != user.name {
        return Err(AppError::Validation(
            "The creator's name does not match the current user's name".to_string(),
        ));
    }

    db::courses::create(
        &state.pool,
        &NewCourse {
            name: &payload.name,
            creator_id,
            creator_name: &payload.creator_name,
            image_url,
            category: &payload.category,
            description: &payload.description,
        },
    )
    .await
    .map_err(|e| AppError::Conflict(e.to_string()))
}

/// Fetch courses by repeated `id` query parameters, stopping at the first failure.
pub async fn get_by_ids(
    State(state): State<SharedState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Envelope>, AppError> {
    let mut courses = Vec::new();

    for raw in ids_from_query(query.as_deref()) {
        let id = parse_id(&raw)?;
        let course = db::courses::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course with id={raw} not found")))?;

        let mut response = CourseResponse::from(course);
        // By-id lookups report the course name as the creator name.
        response.creator_name = response.name.clone();
        courses.push(response);
    }

    Ok(Json(Envelope::success(
        StatusCode::OK,
        json!({ "courses": courses }),
    )))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Envelope>, AppError> {
    let courses: Vec<CourseResponse> = db::courses::list_all(&state.pool)
        .await?
        .into_iter()
        .map(CourseResponse::from)
        .collect();

    Ok(Json(Envelope::success(
        StatusCode::OK,
        json!({ "courses": courses }),
    )))
}

/// Delete courses by repeated `id` query parameters. Unknown ids are skipped.
pub async fn delete(
    user: CurrentUser,
    State(state): State<SharedState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Envelope>, AppError> {
    // A malformed id rejects the whole request before anything is deleted.
    let ids = ids_from_query(query.as_deref())
        .iter()
        .map(|raw| parse_id(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let mut deleted = Vec::new();
    for id in ids {
        if let Some(course) = db::courses::delete(&state.pool, id).await? {
            tracing::info!(course_id = %course.id, deleted_by = %user.id, "Course deleted");
            deleted.push(CourseResponse::from(course));
        }
    }

    Ok(Json(Envelope::success(
        StatusCode::OK,
        json!({ "deletedCourses": deleted }),
    )))
}

fn ids_from_query(query: Option<&str>) -> Vec<String> {
    let Some(query) = query else {
        return Vec::new();
    };

    form_urlencoded::parse(query.as_bytes())
        .filter(|(k, _)| k == "id")
        .map(|(_, v)| v.into_owned())
        .collect()
}

fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::Validation(format!("Invalid course id: {raw}")))
}
