use crate::mail_message::MailAddressContext;

/// Combines all error types in one enum to ease error
/// propagation (deliberately no anyhow, nothing bad about it).
/// Content problems (addresses, missing body, MIME building)
/// and transport problems (connect, TLS setup, authentication,
/// transmission) are kept apart here but merged into a single
/// "send email failed" report at the `EmailSender` boundary.
#[derive(Debug)]
pub enum PortamailError {
    /// [`Error`](std::io::Error) for I/O operations when loading the configuration file.
    FromIoError(std::io::Error),
    /// Errors when deserializing the json configuration file.
    FromSerdeJsonError(serde_json::Error),
    /// A sender or recipient address could not be parsed.
    FromAddressError(lettre::address::AddressError, MailAddressContext),
    /// The recipient list contained no address at all.
    NoRecipients,
    /// The HTML body was absent, no message can be built without one.
    MissingBody,
    /// Building the MIME message failed.
    FromMessageError(lettre::error::Error),
    /// All errors from the smtp transport of the lettre crate.
    FromSmtpError(lettre::transport::smtp::Error),
    /// Plaintext error messages as [`String`]
    FromStringError(std::string::String),
}

impl std::fmt::Display for PortamailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortamailError::FromIoError(e) => write!(f, "{}", e),
            PortamailError::FromSerdeJsonError(e) => write!(f, "{}", e),
            PortamailError::FromAddressError(e, context) => write!(f, "{}, {:?}", e, context),
            PortamailError::NoRecipients => write!(f, "no recipient address given!"),
            PortamailError::MissingBody => write!(f, "html message body is missing!"),
            PortamailError::FromMessageError(e) => {
                write!(f, "error building email message: {}", e)
            }
            PortamailError::FromSmtpError(e) => write!(f, "{}", e),
            PortamailError::FromStringError(e) => write!(f, "{}", e),
        }
    }
}

// Make it an error!
impl std::error::Error for PortamailError {}

impl From<std::io::Error> for PortamailError {
    fn from(err: std::io::Error) -> Self {
        PortamailError::FromIoError(err)
    }
}

impl From<serde_json::Error> for PortamailError {
    fn from(err: serde_json::Error) -> Self {
        PortamailError::FromSerdeJsonError(err)
    }
}

impl From<lettre::error::Error> for PortamailError {
    fn from(err: lettre::error::Error) -> Self {
        PortamailError::FromMessageError(err)
    }
}

impl From<lettre::transport::smtp::Error> for PortamailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        PortamailError::FromSmtpError(err)
    }
}

impl From<std::string::String> for PortamailError {
    fn from(err: std::string::String) -> Self {
        PortamailError::FromStringError(err)
    }
}
