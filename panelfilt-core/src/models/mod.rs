pub mod interval;
pub mod report;
pub mod variant;

// re-export for cleaner imports
pub use self::interval::VariantInterval;
pub use self::report::{ReportRow, VariantReport};
pub use self::variant::VariantToken;
