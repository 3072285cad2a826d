use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::shared::AppError;

/// Employee store used when no database is configured.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    employees: Arc<RwLock<HashMap<EmployeeId, Employee>>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, employee: Employee) -> Result<Employee, AppError> {
        let mut employees = self.employees.write().await;

        // Same check the unique index performs in Postgres
        if employees
            .values()
            .any(|existing| existing.email == employee.email)
        {
            return Err(AppError::EmailAlreadyExists(employee.email.to_string()));
        }

        employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError> {
        Ok(self
            .employees
            .read()
            .await
            .values()
            .find(|employee| employee.email.as_str() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, AppError> {
        Ok(self.employees.read().await.get(id).cloned())
    }
}
