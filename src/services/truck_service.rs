//! Truck service for business logic operations.

use crate::error::{AppError, AppResult};
use crate::models::{NewTruck, Truck, UpdateTruck};
use crate::repositories::TruckRepository;

/// Truck service wrapping the `TruckRepository`.
#[derive(Clone)]
pub struct TruckService {
    repo: TruckRepository,
}

impl TruckService {
    /// Creates a new TruckService with the given repository.
    pub fn new(repo: TruckRepository) -> Self {
        Self { repo }
    }

    /// Creates a new truck.
    ///
    /// The plate number must be unique across the fleet.
    pub async fn create_truck(&self, new_truck: NewTruck) -> AppResult<Truck> {
        if self
            .repo
            .plate_number_taken(&new_truck.plate_number, None)
            .await?
        {
            return Err(AppError::Duplicate {
                entity: "truck".to_string(),
                field: "plate_number".to_string(),
                value: new_truck.plate_number.clone(),
            });
        }

        self.repo.create(new_truck).await
    }

    /// Gets a truck by ID.
    ///
    /// # Returns
    /// The truck if found, or `NotFound` error
    pub async fn get_truck(&self, id: i32) -> AppResult<Truck> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("truck", id))
    }

    /// Lists all trucks.
    pub async fn list_trucks(&self) -> AppResult<Vec<Truck>> {
        self.repo.list_all().await
    }

    /// Applies a partial update to a truck.
    ///
    /// An empty changeset returns the current row unchanged. A changed plate
    /// number is re-checked for uniqueness against other trucks.
    pub async fn update_truck(&self, id: i32, update_data: UpdateTruck) -> AppResult<Truck> {
        let existing = self.get_truck(id).await?;

        if update_data.is_empty() {
            return Ok(existing);
        }

        if let Some(plate) = &update_data.plate_number {
            if self.repo.plate_number_taken(plate, Some(id)).await? {
                return Err(AppError::Duplicate {
                    entity: "truck".to_string(),
                    field: "plate_number".to_string(),
                    value: plate.clone(),
                });
            }
        }

        self.repo.update(id, update_data).await
    }

    /// Deletes a truck and, via cascade, its assignment history.
    ///
    /// # Returns
    /// `NotFound` if no truck has the given ID
    pub async fn delete_truck(&self, id: i32) -> AppResult<()> {
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            return Err(AppError::not_found("truck", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::models::{DEFAULT_TRUCK_STATUS, NewTruck};
    use crate::services::test_support::{database_services, unique_tag};

    fn new_truck(tag: &str) -> NewTruck {
        NewTruck {
            plate_number: format!("TRK-{}", tag),
            model: "Scania R500".to_string(),
            status: DEFAULT_TRUCK_STATUS.to_string(),
            current_driver_id: None,
        }
    }

    #[tokio::test]
    async fn test_duplicate_plate_number_rejected() {
        let Some(services) = database_services().await else {
            return;
        };
        let tag = unique_tag();

        services.trucks.create_truck(new_truck(&tag)).await.unwrap();
        let err = services
            .trucks
            .create_truck(new_truck(&tag))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Duplicate { field, .. } if field == "plate_number"));
    }

    #[tokio::test]
    async fn test_delete_unknown_truck_is_not_found() {
        let Some(services) = database_services().await else {
            return;
        };

        let truck = services
            .trucks
            .create_truck(new_truck(&unique_tag()))
            .await
            .unwrap();
        services.trucks.delete_truck(truck.id).await.unwrap();

        let err = services.trucks.delete_truck(truck.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_to_taken_plate_number_rejected() {
        let Some(services) = database_services().await else {
            return;
        };
        let first_tag = unique_tag();
        let second_tag = unique_tag();

        let first = services.trucks.create_truck(new_truck(&first_tag)).await.unwrap();
        let second = services
            .trucks
            .create_truck(new_truck(&second_tag))
            .await
            .unwrap();

        let err = services
            .trucks
            .update_truck(
                second.id,
                crate::models::UpdateTruck {
                    plate_number: Some(first.plate_number.clone()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Duplicate { .. }));
    }
}
