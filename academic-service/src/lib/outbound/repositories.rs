pub mod employee;
pub mod memory;

pub use employee::PostgresEmployeeRepository;
pub use memory::InMemoryEmployeeRepository;
