use async_trait::async_trait;

use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::shared::AppError;
use crate::domain::shared::Either;

/// Port for employee use-cases.
#[async_trait]
pub trait EmployeeServicePort: Send + Sync + 'static {
    /// Register a new employee.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Internal` - Hashing or persistence failed
    async fn create_employee(&self, command: CreateEmployeeCommand) -> Either<AppError, Employee>;

    /// Retrieve an employee by its raw identifier.
    ///
    /// # Errors
    /// * `InvalidId` - Identifier is blank or not a UUID
    /// * `NotFound` - Employee does not exist
    async fn get_employee(&self, id: &str) -> Either<AppError, Employee>;
}

/// Account lookup and persistence for the employee aggregate.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// Persist a new employee.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Internal` - Storage failed
    async fn create(&self, employee: Employee) -> Result<Employee, AppError>;

    /// Retrieve an employee by email, `None` when absent.
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError>;

    /// Retrieve an employee by identifier, `None` when absent.
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, AppError>;
}
