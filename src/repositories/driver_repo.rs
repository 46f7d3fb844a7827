//! Driver repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Driver, NewDriver, UpdateDriver};

/// Driver repository holding an async connection pool.
#[derive(Clone)]
pub struct DriverRepository {
    pool: AsyncDbPool,
}

impl DriverRepository {
    /// Creates a new DriverRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new driver record.
    pub async fn create(&self, new_driver: NewDriver) -> Result<Driver, AppError> {
        use crate::schema::drivers::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(drivers)
            .values(&new_driver)
            .returning(Driver::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a driver by ID.
    ///
    /// # Returns
    /// `Some(Driver)` if found, `None` otherwise
    pub async fn find_by_id(&self, driver_id: i32) -> Result<Option<Driver>, AppError> {
        use crate::schema::drivers::dsl::*;
        let mut conn = self.pool.get().await?;

        drivers
            .filter(id.eq(driver_id))
            .select(Driver::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists all drivers ordered by id.
    pub async fn list_all(&self) -> Result<Vec<Driver>, AppError> {
        use crate::schema::drivers::dsl::*;
        let mut conn = self.pool.get().await?;

        drivers
            .order(id.asc())
            .select(Driver::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Checks whether a license number is already registered.
    ///
    /// # Arguments
    /// * `license` - The license number to check
    /// * `exclude_id` - A driver id to ignore, used when updating that driver
    pub async fn license_number_taken(
        &self,
        license: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, AppError> {
        use crate::schema::drivers::dsl::*;
        let mut conn = self.pool.get().await?;

        let mut query = drivers.filter(license_number.eq(license)).into_boxed();
        if let Some(driver_id) = exclude_id {
            query = query.filter(id.ne(driver_id));
        }

        let count: i64 = query
            .count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    /// Applies a partial update to a driver.
    ///
    /// # Returns
    /// The updated driver
    pub async fn update(
        &self,
        driver_id: i32,
        update_data: UpdateDriver,
    ) -> Result<Driver, AppError> {
        use crate::schema::drivers::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(drivers.filter(id.eq(driver_id)))
            .set(&update_data)
            .returning(Driver::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a driver. Assignment rows referencing the driver cascade.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, driver_id: i32) -> Result<usize, AppError> {
        use crate::schema::drivers::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(drivers.filter(id.eq(driver_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
