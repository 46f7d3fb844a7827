//! Assignment service for business logic operations.
//!
//! Assignments reference drivers and trucks, so create/update verify the
//! referenced rows exist before touching the assignments table. The foreign
//! keys remain the authoritative backstop.

use crate::error::{AppError, AppResult};
use crate::models::{Assignment, NewAssignment, UpdateAssignment};
use crate::repositories::{AssignmentRepository, DriverRepository, TruckRepository};

/// Assignment service coordinating the assignment, driver, and truck
/// repositories.
#[derive(Clone)]
pub struct AssignmentService {
    repo: AssignmentRepository,
    drivers: DriverRepository,
    trucks: TruckRepository,
}

impl AssignmentService {
    /// Creates a new AssignmentService with the given repositories.
    pub fn new(
        repo: AssignmentRepository,
        drivers: DriverRepository,
        trucks: TruckRepository,
    ) -> Self {
        Self {
            repo,
            drivers,
            trucks,
        }
    }

    /// Creates a new assignment.
    ///
    /// # Returns
    /// `NotFound` if the referenced driver or truck does not exist
    pub async fn create_assignment(&self, new_assignment: NewAssignment) -> AppResult<Assignment> {
        self.ensure_driver_exists(new_assignment.driver_id).await?;
        self.ensure_truck_exists(new_assignment.truck_id).await?;

        self.repo.create(new_assignment).await
    }

    /// Gets an assignment by ID.
    ///
    /// # Returns
    /// The assignment if found, or `NotFound` error
    pub async fn get_assignment(&self, id: i32) -> AppResult<Assignment> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("assignment", id))
    }

    /// Lists all assignments.
    pub async fn list_assignments(&self) -> AppResult<Vec<Assignment>> {
        self.repo.list_all().await
    }

    /// Applies a partial update to an assignment.
    ///
    /// An empty changeset returns the current row unchanged. Repointed
    /// driver/truck references are verified first.
    pub async fn update_assignment(
        &self,
        id: i32,
        update_data: UpdateAssignment,
    ) -> AppResult<Assignment> {
        let existing = self.get_assignment(id).await?;

        if update_data.is_empty() {
            return Ok(existing);
        }

        if let Some(driver_id) = update_data.driver_id {
            self.ensure_driver_exists(driver_id).await?;
        }
        if let Some(truck_id) = update_data.truck_id {
            self.ensure_truck_exists(truck_id).await?;
        }

        self.repo.update(id, update_data).await
    }

    /// Deletes an assignment.
    ///
    /// # Returns
    /// `NotFound` if no assignment has the given ID
    pub async fn delete_assignment(&self, id: i32) -> AppResult<()> {
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            return Err(AppError::not_found("assignment", id));
        }
        Ok(())
    }

    async fn ensure_driver_exists(&self, driver_id: i32) -> AppResult<()> {
        self.drivers
            .find_by_id(driver_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("driver", driver_id))
    }

    async fn ensure_truck_exists(&self, truck_id: i32) -> AppResult<()> {
        self.trucks
            .find_by_id(truck_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("truck", truck_id))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::models::{DEFAULT_ASSIGNMENT_STATUS, NewAssignment, NewDriver, NewTruck};
    use crate::services::Services;
    use crate::services::test_support::{database_services, unique_tag};
    use crate::utils::datetime::parse_datetime;

    async fn fixture(services: &Services, tag: &str) -> (i32, i32) {
        let driver = services
            .drivers
            .create_driver(NewDriver {
                name: format!("Driver {}", tag),
                license_number: format!("DL-{}", tag),
                contact_info: "555-0100".to_string(),
                assigned_truck_id: None,
            })
            .await
            .unwrap();
        let truck = services
            .trucks
            .create_truck(NewTruck {
                plate_number: format!("TRK-{}", tag),
                model: "MAN TGX".to_string(),
                status: "Available".to_string(),
                current_driver_id: None,
            })
            .await
            .unwrap();
        (driver.id, truck.id)
    }

    fn new_assignment(driver_id: i32, truck_id: i32) -> NewAssignment {
        NewAssignment {
            start_date: parse_datetime("start_date", "2024-01-15 08:00:00")
                .unwrap()
                .into(),
            end_date: None,
            status: DEFAULT_ASSIGNMENT_STATUS.to_string(),
            driver_id,
            truck_id,
        }
    }

    #[tokio::test]
    async fn test_create_with_missing_driver_is_not_found() {
        let Some(services) = database_services().await else {
            return;
        };
        let (driver_id, truck_id) = fixture(&services, &unique_tag()).await;
        services.drivers.delete_driver(driver_id).await.unwrap();

        let err = services
            .assignments
            .create_assignment(new_assignment(driver_id, truck_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity, .. } if entity == "driver"));

        // Nothing was persisted for the missing driver
        let listed = services.assignments.list_assignments().await.unwrap();
        assert!(listed.iter().all(|a| a.driver_id != driver_id));
    }

    #[tokio::test]
    async fn test_create_with_missing_truck_is_not_found() {
        let Some(services) = database_services().await else {
            return;
        };
        let (driver_id, truck_id) = fixture(&services, &unique_tag()).await;
        services.trucks.delete_truck(truck_id).await.unwrap();

        let err = services
            .assignments
            .create_assignment(new_assignment(driver_id, truck_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity, .. } if entity == "truck"));
    }

    #[tokio::test]
    async fn test_update_repointing_to_missing_driver_is_not_found() {
        let Some(services) = database_services().await else {
            return;
        };
        let (driver_id, truck_id) = fixture(&services, &unique_tag()).await;
        let assignment = services
            .assignments
            .create_assignment(new_assignment(driver_id, truck_id))
            .await
            .unwrap();

        let (other_driver_id, _) = fixture(&services, &unique_tag()).await;
        services.drivers.delete_driver(other_driver_id).await.unwrap();

        let err = services
            .assignments
            .update_assignment(
                assignment.id,
                crate::models::UpdateAssignment {
                    driver_id: Some(other_driver_id),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity, .. } if entity == "driver"));
    }
}
