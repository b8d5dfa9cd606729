pub mod consent_modal;
pub mod handlers;
pub mod header;
pub mod notice;
pub mod results;
pub mod upload_section;
pub mod utils;
