use crate::mail_configuration::MailServerConfiguration;
use crate::mail_message::Email;

/// This trait is a contract for implementing different
/// flavors of email delivery. The default implementation
/// is [`EmailSender`](crate::mail_sender::EmailSender),
/// which delivers over smtp/smtps and never raises to the
/// caller.
pub trait EmailService {
    /// deliver one notification email
    ///
    /// # Arguments
    ///
    /// - `email`:    the message to deliver
    /// - `config`:   mail server connection parameters, read
    ///   fresh on every call
    fn send(&self, email: &Email, config: &MailServerConfiguration);
}
