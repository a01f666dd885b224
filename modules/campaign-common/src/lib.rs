pub mod types;
pub mod content;
pub mod safety;
pub mod dates;
pub mod config;
pub mod error;

pub use types::*;
pub use content::UPDATES;
pub use safety::*;
pub use dates::format_display_date;
pub use config::Config;
pub use error::CampaignError;
