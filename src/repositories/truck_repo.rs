//! Truck repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewTruck, Truck, UpdateTruck};

/// Truck repository holding an async connection pool.
#[derive(Clone)]
pub struct TruckRepository {
    pool: AsyncDbPool,
}

impl TruckRepository {
    /// Creates a new TruckRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new truck record.
    pub async fn create(&self, new_truck: NewTruck) -> Result<Truck, AppError> {
        use crate::schema::trucks::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(trucks)
            .values(&new_truck)
            .returning(Truck::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a truck by ID.
    ///
    /// # Returns
    /// `Some(Truck)` if found, `None` otherwise
    pub async fn find_by_id(&self, truck_id: i32) -> Result<Option<Truck>, AppError> {
        use crate::schema::trucks::dsl::*;
        let mut conn = self.pool.get().await?;

        trucks
            .filter(id.eq(truck_id))
            .select(Truck::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists all trucks ordered by id.
    pub async fn list_all(&self) -> Result<Vec<Truck>, AppError> {
        use crate::schema::trucks::dsl::*;
        let mut conn = self.pool.get().await?;

        trucks
            .order(id.asc())
            .select(Truck::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Checks whether a plate number is already registered.
    ///
    /// # Arguments
    /// * `plate` - The plate number to check
    /// * `exclude_id` - A truck id to ignore, used when updating that truck
    pub async fn plate_number_taken(
        &self,
        plate: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, AppError> {
        use crate::schema::trucks::dsl::*;
        let mut conn = self.pool.get().await?;

        let mut query = trucks.filter(plate_number.eq(plate)).into_boxed();
        if let Some(truck_id) = exclude_id {
            query = query.filter(id.ne(truck_id));
        }

        let count: i64 = query
            .count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    /// Applies a partial update to a truck.
    ///
    /// # Returns
    /// The updated truck
    pub async fn update(&self, truck_id: i32, update_data: UpdateTruck) -> Result<Truck, AppError> {
        use crate::schema::trucks::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(trucks.filter(id.eq(truck_id)))
            .set(&update_data)
            .returning(Truck::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a truck. Assignment rows referencing the truck cascade.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, truck_id: i32) -> Result<usize, AppError> {
        use crate::schema::trucks::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(trucks.filter(id.eq(truck_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
