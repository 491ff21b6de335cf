use crate::error::PortamailError;
use crate::PROGRAM_NAME;
use lettre::message::{header::ContentType, Mailbox};
use lettre::Message;

/// Used to add details to email address parsing errors
#[derive(Debug)]
pub enum MailAddressContext {
    FromAddress,
    ToAddress,
}

/// This trait adds functionality to the lettre crate
pub trait ParseMailboxWithContext {
    /// parse an email address into the lettre `Mailbox` format and
    /// add a context to the error if that fails.
    ///
    /// # Arguments
    ///
    /// - `address`:         email address that should be parsed into a `Mailbox`
    /// - `error_context`:   context that shows what the email address should be used for
    ///   (from, to)
    fn parse_with_context_on_error(
        address: &str,
        error_context: MailAddressContext,
    ) -> Result<Mailbox, PortamailError>;
}

impl ParseMailboxWithContext for Mailbox {
    #[inline(always)]
    fn parse_with_context_on_error(
        address: &str,
        error_context: MailAddressContext,
    ) -> Result<Mailbox, PortamailError> {
        match address.parse::<Mailbox>() {
            Ok(p) => Ok(p),
            Err(e) => Err(PortamailError::FromAddressError(e, error_context)),
        }
    }
}

/// One notification email as handed in by the caller.
/// Lives for the duration of a single send call and is
/// never persisted.
#[derive(Clone, Debug)]
pub struct Email {
    /// sender address, e.g. `noreply@example.com`
    pub sender: String,
    /// one or more recipient addresses, delimited by
    /// comma and/or semicolon
    pub recipients: String,
    pub subject: String,
    /// the html body; an absent body prevents message construction
    pub body: Option<String>,
}

impl Email {
    /// Split the delimited recipients string and parse every
    /// entry into a `Mailbox`. At least one recipient must
    /// remain after empty entries have been skipped.
    pub fn parse_recipients(&self) -> Result<Vec<Mailbox>, PortamailError> {
        let mut parsed_recipients = Vec::new();
        for address in self
            .recipients
            .split([',', ';'])
            .map(str::trim)
            .filter(|address| !address.is_empty())
        {
            parsed_recipients.push(Mailbox::parse_with_context_on_error(
                address,
                MailAddressContext::ToAddress,
            )?);
        }
        if parsed_recipients.is_empty() {
            return Err(PortamailError::NoRecipients);
        }
        Ok(parsed_recipients)
    }

    /// Build the MIME message: From, To, Subject and the
    /// html body with content type `text/html`.
    pub fn build_mime_message(&self) -> Result<Message, PortamailError> {
        let parsed_mail_from = Mailbox::parse_with_context_on_error(
            &self.sender,
            MailAddressContext::FromAddress,
        )?;
        let mut message_builder = Message::builder()
            .from(parsed_mail_from)
            .subject(self.subject.clone())
            .user_agent(PROGRAM_NAME.to_string());
        for parsed_mail_to in self.parse_recipients()? {
            message_builder = message_builder.to(parsed_mail_to);
        }
        let mail_body = match &self.body {
            Some(b) => b.clone(),
            None => return Err(PortamailError::MissingBody),
        };
        let email_message = message_builder
            .header(ContentType::TEXT_HTML)
            .body(mail_body)?;
        Ok(email_message)
    }
}
