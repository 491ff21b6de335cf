// tell the rust compiler which modules we have in extra files
pub mod email_service_trait;
pub mod error;
pub mod mail_configuration;
pub mod mail_message;
pub mod mail_sender;
pub mod mail_transport;
pub mod tracer_trait;

pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");
