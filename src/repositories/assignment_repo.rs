//! Assignment repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Assignment, NewAssignment, UpdateAssignment};

/// Assignment repository holding an async connection pool.
#[derive(Clone)]
pub struct AssignmentRepository {
    pool: AsyncDbPool,
}

impl AssignmentRepository {
    /// Creates a new AssignmentRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new assignment record.
    pub async fn create(&self, new_assignment: NewAssignment) -> Result<Assignment, AppError> {
        use crate::schema::assignments::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(assignments)
            .values(&new_assignment)
            .returning(Assignment::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds an assignment by ID.
    ///
    /// # Returns
    /// `Some(Assignment)` if found, `None` otherwise
    pub async fn find_by_id(&self, assignment_id: i32) -> Result<Option<Assignment>, AppError> {
        use crate::schema::assignments::dsl::*;
        let mut conn = self.pool.get().await?;

        assignments
            .filter(id.eq(assignment_id))
            .select(Assignment::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists all assignments ordered by id.
    pub async fn list_all(&self) -> Result<Vec<Assignment>, AppError> {
        use crate::schema::assignments::dsl::*;
        let mut conn = self.pool.get().await?;

        assignments
            .order(id.asc())
            .select(Assignment::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Applies a partial update to an assignment.
    ///
    /// # Returns
    /// The updated assignment
    pub async fn update(
        &self,
        assignment_id: i32,
        update_data: UpdateAssignment,
    ) -> Result<Assignment, AppError> {
        use crate::schema::assignments::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(assignments.filter(id.eq(assignment_id)))
            .set(&update_data)
            .returning(Assignment::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes an assignment.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, assignment_id: i32) -> Result<usize, AppError> {
        use crate::schema::assignments::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(assignments.filter(id.eq(assignment_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
