use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::slug;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub creator_id: Uuid,
    pub creator_name: String,
    pub image_url: String,
    pub category: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A course as returned to clients, with its `route` slug derived from the name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: Uuid,
    pub name: String,
    pub creator_id: Uuid,
    pub creator_name: String,
    pub image_url: String,
    pub category: String,
    pub description: String,
    pub route: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            route: slug::latinize(&course.name),
            id: course.id,
            name: course.name,
            creator_id: course.creator_id,
            creator_name: course.creator_name,
            image_url: course.image_url,
            category: course.category,
            description: course.description,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}
