pub mod logger;
pub mod reader;

pub use logger::AuditLog;
pub use reader::AuditReader;
