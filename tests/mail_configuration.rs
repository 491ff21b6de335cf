use portamail::mail_configuration::MailServerConfiguration;
use std::path::Path;

pub const WORKSPACE_DIR: &str = env!("CARGO_MANIFEST_DIR");

#[test]
fn read_configuration_from_file() {
    let config = MailServerConfiguration::read_from_file(
        Path::new(WORKSPACE_DIR).join("conf.dev/mail-config.json"),
    )
    .unwrap();
    assert!(config.enabled);
    assert!(!config.use_ssl);
    assert_eq!(config.host, "smtp.example.com");
    assert_eq!(config.user, "mailuser");
    assert_eq!(config.unsecure_password(), "do-not-log-me");
}

#[test]
fn enabled_configuration_needs_a_host() {
    let result = MailServerConfiguration::read_from_file(
        Path::new(WORKSPACE_DIR).join("conf.dev/mail-config-missing-host.json"),
    );
    assert!(result.is_err());
}

#[test]
fn disabled_configuration_is_valid_without_a_host() {
    let config = MailServerConfiguration::read_from_file(
        Path::new(WORKSPACE_DIR).join("conf.dev/mail-config-disabled.json"),
    )
    .unwrap();
    assert!(!config.enabled);
}

#[test]
fn password_never_shows_up_in_debug_output() {
    let config = MailServerConfiguration::read_from_file(
        Path::new(WORKSPACE_DIR).join("conf.dev/mail-config.json"),
    )
    .unwrap();
    let debug_output = format!("{:?}", &config);
    assert!(!debug_output.contains("do-not-log-me"));
}

#[test]
fn authentication_only_with_a_configured_user() {
    let with_user = MailServerConfiguration::read_from_file(
        Path::new(WORKSPACE_DIR).join("conf.dev/mail-config.json"),
    )
    .unwrap();
    assert!(with_user.wants_authentication());
    let without_user = MailServerConfiguration::read_from_file(
        Path::new(WORKSPACE_DIR).join("conf.dev/mail-config-disabled.json"),
    )
    .unwrap();
    assert!(!without_user.wants_authentication());
}
