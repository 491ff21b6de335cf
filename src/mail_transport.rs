use crate::error::PortamailError;
use crate::mail_configuration::MailServerConfiguration;
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::transport::smtp::client::{SmtpConnection, TlsParameters};
use lettre::transport::smtp::extension::ClientId;
use lettre::transport::smtp::{SMTP_PORT, SUBMISSIONS_PORT};
use lettre::Message;

/// Contract for one open transport session that delivers a
/// single message. The real implementation is [`SmtpSession`];
/// tests substitute the network with their own implementation.
pub trait MailSession {
    /// Transmit the finalized message to all of its envelope
    /// recipients and return the server's last response line.
    fn send_message(&mut self, email_message: &Message) -> Result<String, PortamailError>;
    /// Release the session. This is a best-effort contract:
    /// a close failure is discarded by the implementation and
    /// never surfaces anywhere, not even in the log.
    fn close(self);
}

/// One smtp session, either plain or SSL-wrapped, chosen once
/// when the session is opened.
pub enum SmtpSession {
    Plain(SmtpConnection),
    Ssl(SmtpConnection),
}

impl SmtpSession {
    /// Open exactly one connection to the configured mail server,
    /// SSL-wrapped smtps on the submissions port when `use_ssl`
    /// is set, plain smtp on the default port otherwise. The AUTH
    /// command is only sent when a user is configured.
    pub fn open(config: &MailServerConfiguration) -> Result<Self, PortamailError> {
        let hello_name = ClientId::default();
        let mut smtp_session = if config.use_ssl {
            let tls_parameters = TlsParameters::new(config.host.clone())?;
            SmtpSession::Ssl(SmtpConnection::connect(
                (config.host.as_str(), SUBMISSIONS_PORT),
                None,
                &hello_name,
                Some(&tls_parameters),
                None,
            )?)
        } else {
            SmtpSession::Plain(SmtpConnection::connect(
                (config.host.as_str(), SMTP_PORT),
                None,
                &hello_name,
                None,
                None,
            )?)
        };
        if config.wants_authentication() {
            let credentials = Credentials::new(config.user.clone(), config.unsecure_password());
            smtp_session
                .connection_mut()
                .auth(&[Mechanism::Plain, Mechanism::Login], &credentials)?;
        }
        Ok(smtp_session)
    }

    /// Protocol name of this session, used in log messages.
    pub fn protocol(&self) -> &'static str {
        match self {
            SmtpSession::Plain(_) => "smtp",
            SmtpSession::Ssl(_) => "smtps",
        }
    }

    // single access path to the connection regardless of variant
    fn connection_mut(&mut self) -> &mut SmtpConnection {
        match self {
            SmtpSession::Plain(connection) => connection,
            SmtpSession::Ssl(connection) => connection,
        }
    }
}

impl MailSession for SmtpSession {
    fn send_message(&mut self, email_message: &Message) -> Result<String, PortamailError> {
        let formatted_message = email_message.formatted();
        let response = self
            .connection_mut()
            .send(email_message.envelope(), &formatted_message)?;
        let last_server_response = match response.message().next() {
            Some(line) => line.to_string(),
            None => response.code().to_string(),
        };
        Ok(last_server_response)
    }

    fn close(mut self) {
        // intentional: QUIT is best-effort, a close failure
        // must never escalate
        let _ = self.connection_mut().quit();
    }
}
