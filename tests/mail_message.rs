use portamail::error::PortamailError;
use portamail::mail_message::Email;

fn test_email() -> Email {
    Email {
        sender: "a@x.com".to_string(),
        recipients: "b@x.com".to_string(),
        subject: "Hi".to_string(),
        body: Some("<b>hi</b>".to_string()),
    }
}

#[test]
fn parse_recipients_splits_on_comma_and_semicolon() {
    let email = Email {
        recipients: "b@x.com, c@x.com;d@x.com ; ,".to_string(),
        ..test_email()
    };
    let parsed = email.parse_recipients().unwrap();
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[0].email.to_string(), "b@x.com");
    assert_eq!(parsed[1].email.to_string(), "c@x.com");
    assert_eq!(parsed[2].email.to_string(), "d@x.com");
}

#[test]
fn parse_recipients_needs_at_least_one_address() {
    let email = Email {
        recipients: " ; , ".to_string(),
        ..test_email()
    };
    match email.parse_recipients() {
        Err(PortamailError::NoRecipients) => {}
        other => panic!("expected NoRecipients, got {:?}", other),
    }
}

#[test]
fn parse_recipients_reports_to_address_context() {
    let email = Email {
        recipients: "b@x.com, this-is-no-address".to_string(),
        ..test_email()
    };
    let error = email.parse_recipients().unwrap_err();
    assert!(format!("{}", error).contains("ToAddress"));
}

#[test]
fn build_mime_message_reports_from_address_context() {
    let email = Email {
        sender: "not an address".to_string(),
        ..test_email()
    };
    let error = email.build_mime_message().unwrap_err();
    assert!(format!("{}", error).contains("FromAddress"));
}

#[test]
fn build_mime_message_fails_without_body() {
    let email = Email {
        body: None,
        ..test_email()
    };
    match email.build_mime_message() {
        Err(PortamailError::MissingBody) => {}
        other => panic!("expected MissingBody, got {:?}", other),
    }
}

#[test]
fn build_mime_message_sets_html_headers() {
    let email = test_email();
    let message = email.build_mime_message().unwrap();
    let formatted = String::from_utf8_lossy(&message.formatted()).to_string();
    assert!(formatted.contains("From: a@x.com"));
    assert!(formatted.contains("To: b@x.com"));
    assert!(formatted.contains("Subject: Hi"));
    assert!(formatted.contains("text/html"));
    assert!(formatted.contains("<b>hi</b>"));
}

#[test]
fn build_mime_message_addresses_every_recipient() {
    let email = Email {
        recipients: "b@x.com;c@x.com".to_string(),
        ..test_email()
    };
    let message = email.build_mime_message().unwrap();
    let envelope_to = message.envelope().to();
    assert_eq!(envelope_to.len(), 2);
}
