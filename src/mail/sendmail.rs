// mail/sendmail.rs
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};

use crate::config::Config;

/// Outbound mail seam. The production implementation talks SMTP; tests swap
/// in a recorder.
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug {
    async fn send_html(
        &self,
        to_email: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), String>;
}

#[derive(Debug, Clone)]
pub struct SmtpMailer {
    smtp_host: String,
    smtp_port: u16,
    smtp_username: String,
    smtp_password: String,
    from_email: String,
}

impl SmtpMailer {
    pub fn from_config(config: &Config) -> Self {
        SmtpMailer {
            smtp_host: config.smtp_host.clone(),
            smtp_port: config.smtp_port,
            smtp_username: config.smtp_username.clone(),
            smtp_password: config.smtp_password.clone(),
            from_email: config.smtp_from_email.clone(),
        }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_html(
        &self,
        to_email: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), String> {
        if to_email.is_empty() {
            return Err("Email recipient cannot be empty".to_string());
        }
        if !to_email.contains('@') {
            return Err(format!("Invalid email address: {}", to_email));
        }

        let email = Message::builder()
            .from(
                self.from_email
                    .parse()
                    .map_err(|e| format!("Invalid from address: {}", e))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| format!("Invalid recipient address: {}", e))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative().singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html_body.to_string()),
                ),
            )
            .map_err(|e| format!("Failed to build email: {}", e))?;

        let creds = Credentials::new(self.smtp_username.clone(), self.smtp_password.clone());
        let mailer = SmtpTransport::relay(&self.smtp_host)
            .map_err(|e| format!("SMTP relay error: {}", e))?
            .port(self.smtp_port)
            .credentials(creds)
            .build();

        match mailer.send(&email) {
            Ok(_) => {
                tracing::info!("Email sent successfully to {}", to_email);
                Ok(())
            }
            Err(e) => {
                tracing::error!("SMTP send failed for {}: {}", to_email, e);
                Err(format!("SMTP send failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
pub mod test_support {
    use super::Mailer;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records (recipient, subject) pairs instead of talking SMTP.
    #[derive(Debug, Default)]
    pub struct RecordingMailer {
        pub sent: Mutex<Vec<(String, String)>>,
    }

    impl RecordingMailer {
        pub fn sent_to(&self) -> Vec<(String, String)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send_html(
            &self,
            to_email: &str,
            subject: &str,
            _html_body: &str,
        ) -> Result<(), String> {
            self.sent
                .lock()
                .unwrap()
                .push((to_email.to_string(), subject.to_string()));
            Ok(())
        }
    }
}
