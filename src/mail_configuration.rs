use crate::error::PortamailError;
use secstr::SecStr;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds the connection parameters for the mail server
/// that delivers the notification emails.
///
/// The configuration is read fresh on every send, the
/// sender never caches it. The password is stored as
/// [`SecStr`] so that it never shows up in Debug output
/// or log files.
#[derive(Clone, Deserialize, Debug)]
pub struct MailServerConfiguration {
    /// When false, every send call is a silent no-op.
    pub enabled: bool,
    /// Selects SSL-wrapped smtps instead of plain smtp.
    pub use_ssl: bool,
    pub host: String,
    pub user: String,
    pub password: SecStr,
}

impl MailServerConfiguration {
    /// Read the mail server configuration from a json file.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PortamailError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let parsed_config: MailServerConfiguration = serde_json::from_reader(reader)?;
        parsed_config.pre_flight_check()?;
        Ok(parsed_config)
    }

    /// Make some pre flight checks after the configuration file
    /// has been loaded. A disabled configuration is always valid,
    /// it will never be used to open a transport.
    fn pre_flight_check(&self) -> Result<(), PortamailError> {
        if self.enabled && self.host.is_empty() {
            return Err("email is enabled but the mail server host is empty!"
                .to_string()
                .into());
        }
        Ok(())
    }

    /// The smtp AUTH command is only sent when a user is configured.
    pub fn wants_authentication(&self) -> bool {
        !self.user.is_empty()
    }

    /// Expose the stored password for the smtp AUTH command.
    pub fn unsecure_password(&self) -> String {
        String::from_utf8_lossy(self.password.unsecure()).to_string()
    }
}
