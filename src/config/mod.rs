//! Configuration module

mod site;

pub use site::ContentConfig;
pub use site::DateConfig;
pub use site::SiteConfig;
