use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::auth::ports::PasswordService;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::domain::shared::AppError;
use crate::domain::shared::Either;

/// Employee use-cases backed by an injected repository and password service.
pub struct EmployeeService<ER, PS>
where
    ER: EmployeeRepository,
    PS: PasswordService,
{
    repository: Arc<ER>,
    passwords: Arc<PS>,
}

impl<ER, PS> EmployeeService<ER, PS>
where
    ER: EmployeeRepository,
    PS: PasswordService,
{
    pub fn new(repository: Arc<ER>, passwords: Arc<PS>) -> Self {
        Self {
            repository,
            passwords,
        }
    }

    async fn register(&self, command: CreateEmployeeCommand) -> Result<Employee, AppError> {
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(AppError::EmailAlreadyExists(command.email.to_string()));
        }

        let password_hash = self.passwords.hash(command.password.expose()).await?;
        let now = Utc::now();

        let employee = Employee {
            id: EmployeeId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            role: command
                .role
                .unwrap_or_else(|| CreateEmployeeCommand::DEFAULT_ROLE.to_string()),
            active: true,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(employee).await?;
        tracing::info!(employee_id = %created.id, "Employee registered");

        Ok(created)
    }

    async fn lookup(&self, id: &str) -> Result<Employee, AppError> {
        let employee_id = EmployeeId::from_string(id)?;

        self.repository
            .find_by_id(&employee_id)
            .await?
            .ok_or_else(|| AppError::not_found_with_id("Employee", id))
    }
}

#[async_trait]
impl<ER, PS> EmployeeServicePort for EmployeeService<ER, PS>
where
    ER: EmployeeRepository,
    PS: PasswordService,
{
    async fn create_employee(&self, command: CreateEmployeeCommand) -> Either<AppError, Employee> {
        self.register(command).await.into()
    }

    async fn get_employee(&self, id: &str) -> Either<AppError, Employee> {
        self.lookup(id).await.into()
    }
}
