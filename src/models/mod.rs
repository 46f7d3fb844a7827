mod assignment;
mod driver;
mod truck;
mod user;

pub use assignment::{Assignment, DEFAULT_ASSIGNMENT_STATUS, NewAssignment, UpdateAssignment};
pub use driver::{Driver, NewDriver, UpdateDriver};
pub use truck::{DEFAULT_TRUCK_STATUS, NewTruck, Truck, UpdateTruck};
pub use user::{NewUser, Role, User};
