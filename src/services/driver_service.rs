//! Driver service for business logic operations.

use crate::error::{AppError, AppResult};
use crate::models::{Driver, NewDriver, UpdateDriver};
use crate::repositories::DriverRepository;

/// Driver service wrapping the `DriverRepository`.
#[derive(Clone)]
pub struct DriverService {
    repo: DriverRepository,
}

impl DriverService {
    /// Creates a new DriverService with the given repository.
    pub fn new(repo: DriverRepository) -> Self {
        Self { repo }
    }

    /// Creates a new driver.
    ///
    /// The license number must be unique across the fleet; the unique index
    /// backs this check up against races.
    pub async fn create_driver(&self, new_driver: NewDriver) -> AppResult<Driver> {
        if self
            .repo
            .license_number_taken(&new_driver.license_number, None)
            .await?
        {
            return Err(AppError::Duplicate {
                entity: "driver".to_string(),
                field: "license_number".to_string(),
                value: new_driver.license_number.clone(),
            });
        }

        self.repo.create(new_driver).await
    }

    /// Gets a driver by ID.
    ///
    /// # Returns
    /// The driver if found, or `NotFound` error
    pub async fn get_driver(&self, id: i32) -> AppResult<Driver> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("driver", id))
    }

    /// Lists all drivers.
    pub async fn list_drivers(&self) -> AppResult<Vec<Driver>> {
        self.repo.list_all().await
    }

    /// Applies a partial update to a driver.
    ///
    /// An empty changeset returns the current row unchanged. A changed
    /// license number is re-checked for uniqueness against other drivers.
    pub async fn update_driver(&self, id: i32, update_data: UpdateDriver) -> AppResult<Driver> {
        let existing = self.get_driver(id).await?;

        if update_data.is_empty() {
            return Ok(existing);
        }

        if let Some(license) = &update_data.license_number {
            if self.repo.license_number_taken(license, Some(id)).await? {
                return Err(AppError::Duplicate {
                    entity: "driver".to_string(),
                    field: "license_number".to_string(),
                    value: license.clone(),
                });
            }
        }

        self.repo.update(id, update_data).await
    }

    /// Deletes a driver and, via cascade, its assignment history.
    ///
    /// # Returns
    /// `NotFound` if no driver has the given ID
    pub async fn delete_driver(&self, id: i32) -> AppResult<()> {
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            return Err(AppError::not_found("driver", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::models::{DEFAULT_ASSIGNMENT_STATUS, NewAssignment, NewDriver, NewTruck};
    use crate::services::test_support::{database_services, unique_tag};
    use crate::utils::datetime::parse_datetime;

    fn new_driver(tag: &str) -> NewDriver {
        NewDriver {
            name: format!("Driver {}", tag),
            license_number: format!("DL-{}", tag),
            contact_info: "555-0100".to_string(),
            assigned_truck_id: None,
        }
    }

    #[tokio::test]
    async fn test_duplicate_license_number_rejected() {
        let Some(services) = database_services().await else {
            return;
        };
        let tag = unique_tag();

        services.drivers.create_driver(new_driver(&tag)).await.unwrap();
        let err = services
            .drivers
            .create_driver(new_driver(&tag))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Duplicate { field, .. } if field == "license_number"));
    }

    #[tokio::test]
    async fn test_delete_unknown_driver_is_not_found() {
        let Some(services) = database_services().await else {
            return;
        };

        let driver = services
            .drivers
            .create_driver(new_driver(&unique_tag()))
            .await
            .unwrap();
        services.drivers.delete_driver(driver.id).await.unwrap();

        let err = services.drivers.delete_driver(driver.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_cascades_to_assignments() {
        let Some(services) = database_services().await else {
            return;
        };
        let tag = unique_tag();

        let driver = services.drivers.create_driver(new_driver(&tag)).await.unwrap();
        let truck = services
            .trucks
            .create_truck(NewTruck {
                plate_number: format!("TRK-{}", tag),
                model: "Volvo FH16".to_string(),
                status: "Available".to_string(),
                current_driver_id: None,
            })
            .await
            .unwrap();
        let assignment = services
            .assignments
            .create_assignment(NewAssignment {
                start_date: parse_datetime("start_date", "2024-01-15 08:00:00")
                    .unwrap()
                    .into(),
                end_date: None,
                status: DEFAULT_ASSIGNMENT_STATUS.to_string(),
                driver_id: driver.id,
                truck_id: truck.id,
            })
            .await
            .unwrap();

        services.drivers.delete_driver(driver.id).await.unwrap();

        let err = services
            .assignments
            .get_assignment(assignment.id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
