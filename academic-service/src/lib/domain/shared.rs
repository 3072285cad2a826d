pub mod either;
pub mod errors;

pub use either::Either;
pub use errors::AppError;
pub use errors::ErrorCode;
