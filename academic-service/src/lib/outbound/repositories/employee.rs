use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::employee::models::EmailAddress;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::EmployeeName;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::shared::AppError;

const EMAIL_UNIQUE_CONSTRAINT: &str = "employees_email_key";

pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EmployeeRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = AppError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        Ok(Employee {
            id: EmployeeId(row.id),
            name: EmployeeName::new(row.name).map_err(AppError::internal)?,
            email: EmailAddress::new(row.email).map_err(AppError::internal)?,
            password_hash: row.password_hash,
            role: row.role,
            active: row.active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn database_error(err: sqlx::Error) -> AppError {
    tracing::error!(error = %err, "Employee query failed");
    AppError::internal(err)
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create(&self, employee: Employee) -> Result<Employee, AppError> {
        sqlx::query(
            r#"
            INSERT INTO employees (id, name, email, password_hash, role, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(employee.id.0)
        .bind(employee.name.as_str())
        .bind(employee.email.as_str())
        .bind(&employee.password_hash)
        .bind(&employee.role)
        .bind(employee.active)
        .bind(employee.created_at)
        .bind(employee.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT)
                {
                    return AppError::EmailAlreadyExists(employee.email.to_string());
                }
            }
            database_error(e)
        })?;

        Ok(employee)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError> {
        sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, email, password_hash, role, active, created_at, updated_at
            FROM employees
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Employee::try_from)
        .transpose()
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, AppError> {
        sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, email, password_hash, role, active, created_at, updated_at
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Employee::try_from)
        .transpose()
    }
}
