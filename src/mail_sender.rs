use crate::email_service_trait::EmailService;
use crate::error::PortamailError;
use crate::mail_configuration::MailServerConfiguration;
use crate::mail_message::Email;
use crate::mail_transport::{MailSession, SmtpSession};
use crate::tracer_trait::ErrorTracer;
use log::{debug, error};

/// Delivers notification emails over smtp/smtps with a
/// fire-and-forget contract: `send` never raises to the
/// caller. Failures are merged into one generic report,
/// logged at error level and forwarded to the injected
/// [`ErrorTracer`]; the caller cannot distinguish failure
/// from success without inspecting logs or traces.
pub struct EmailSender<T: ErrorTracer> {
    tracer: T,
}

impl<T: ErrorTracer> EmailSender<T> {
    pub fn new(tracer: T) -> Self {
        Self { tracer }
    }

    /// Deliver one email through the configured mail server.
    ///
    /// When the configuration is disabled this returns right
    /// away without any side effect, not even a log line.
    /// Otherwise exactly one transport session is opened,
    /// the message is sent to all resolved recipients and the
    /// session is released best-effort on every exit path.
    pub fn send(&self, email: &Email, config: &MailServerConfiguration) {
        self.send_via(email, config, SmtpSession::open);
    }

    /// Same contract as [`send`](Self::send), but with a
    /// caller-supplied transport opener. This is the seam that
    /// lets tests replace the smtp session with their own
    /// [`MailSession`] implementation.
    pub fn send_via<S, F>(
        &self,
        email: &Email,
        config: &MailServerConfiguration,
        open_transport: F,
    ) where
        S: MailSession,
        F: FnOnce(&MailServerConfiguration) -> Result<S, PortamailError>,
    {
        if !config.enabled {
            return;
        }
        if let Err(e) = try_send(email, config, open_transport) {
            error!("send email failed: {}", &e);
            self.tracer.trace_error("send email failed.", &e);
        }
    }
}

impl<T: ErrorTracer> EmailService for EmailSender<T> {
    fn send(&self, email: &Email, config: &MailServerConfiguration) {
        EmailSender::send(self, email, config);
    }
}

/// One linear send attempt: build the MIME message, open the
/// transport, transmit, release. No retry, no backoff. The
/// session is closed before the send result is inspected so
/// that the release happens on the failure path as well.
fn try_send<S, F>(
    email: &Email,
    config: &MailServerConfiguration,
    open_transport: F,
) -> Result<(), PortamailError>
where
    S: MailSession,
    F: FnOnce(&MailServerConfiguration) -> Result<S, PortamailError>,
{
    let email_message = email.build_mime_message()?;
    let mut smtp_session = open_transport(config)?;
    let send_result = smtp_session.send_message(&email_message);
    smtp_session.close();
    let last_server_response = send_result?;
    debug!("email response: {}", last_server_response);
    Ok(())
}
