// mail/mails.rs
use std::fs;

use super::sendmail::Mailer;

fn render_template(
    template_path: &str,
    placeholders: &[(String, String)],
) -> Result<String, String> {
    let mut html = match fs::read_to_string(template_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("Failed to read email template {}: {}", template_path, e);
            return Err(format!("Template not found: {}", template_path));
        }
    };

    for (key, value) in placeholders {
        html = html.replace(key, value);
    }

    Ok(html)
}

fn app_url() -> String {
    std::env::var("APP_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

pub async fn send_application_accepted_email(
    mailer: &dyn Mailer,
    to_email: &str,
    username: &str,
    job_title: &str,
) -> Result<(), String> {
    let subject = "Application Accepted";
    let template_path = "src/mail/templates/Application-Accepted.html";
    let placeholders = vec![
        ("{{username}}".to_string(), username.to_string()),
        ("{{job_title}}".to_string(), job_title.to_string()),
        ("{{jobs_url}}".to_string(), format!("{}/jobs", app_url())),
    ];

    let html = render_template(template_path, &placeholders)?;
    mailer.send_html(to_email, subject, &html).await
}

pub async fn send_application_rejected_email(
    mailer: &dyn Mailer,
    to_email: &str,
    username: &str,
    job_title: &str,
) -> Result<(), String> {
    let subject = "Application Update";
    let template_path = "src/mail/templates/Application-Rejected.html";
    let placeholders = vec![
        ("{{username}}".to_string(), username.to_string()),
        ("{{job_title}}".to_string(), job_title.to_string()),
        ("{{jobs_url}}".to_string(), format!("{}/jobs", app_url())),
    ];

    let html = render_template(template_path, &placeholders)?;
    mailer.send_html(to_email, subject, &html).await
}

/// Notifies the job poster that a new application arrived.
pub async fn send_application_received_email(
    mailer: &dyn Mailer,
    to_email: &str,
    applicant_name: &str,
    job_title: &str,
) -> Result<(), String> {
    let subject = "New Job Application";
    let template_path = "src/mail/templates/Application-Received.html";
    let placeholders = vec![
        ("{{applicant_name}}".to_string(), applicant_name.to_string()),
        ("{{job_title}}".to_string(), job_title.to_string()),
        (
            "{{applications_url}}".to_string(),
            format!("{}/jobs/myJobs", app_url()),
        ),
    ];

    let html = render_template(template_path, &placeholders)?;
    mailer.send_html(to_email, subject, &html).await
}
