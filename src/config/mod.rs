//! Configuration module

mod site;

pub use site::SectionsConfig;
pub use site::SiteConfig;
pub use site::TocConfig;
