use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Course;

pub struct NewCourse<'a> {
    pub name: &'a str,
    pub creator_id: Uuid,
    pub creator_name: &'a str,
    pub image_url: &'a str,
    pub category: &'a str,
    pub description: &'a str,
}

pub async fn create(pool: &PgPool, course: &NewCourse<'_>) -> Result<Course, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        "INSERT INTO courses (name, creator_id, creator_name, image_url, category, description)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(course.name)
    .bind(course.creator_id)
    .bind(course.creator_name)
    .bind(course.image_url)
    .bind(course.category)
    .bind(course.description)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Every course, in whatever order Postgres returns them.
pub async fn list_all(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>("SELECT * FROM courses")
        .fetch_all(pool)
        .await
}

/// Delete a course, returning the row as it was. `None` if nothing matched.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>("DELETE FROM courses WHERE id = $1 RETURNING *")
        .bind(id)
        .fetch_optional(pool)
        .await
}
