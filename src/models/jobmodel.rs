// models/jobmodel.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum JobType {
    Professional,
    Freelancer,
    QuickTask,
}

impl JobType {
    pub fn to_str(&self) -> &str {
        match self {
            JobType::Professional => "professional",
            JobType::Freelancer => "freelancer",
            JobType::QuickTask => "quickTask",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Closed,
}

/// Flat status written as-is; any value may overwrite any prior value.
/// There is deliberately no transition validation anywhere in the service.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn to_str(&self) -> &str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub from: f64,
    pub to: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JobBasicInfo {
    pub title: String,
    pub description: String,
    pub job_type: JobType,
    pub status: JobStatus,
    pub user_id: String,
    pub price_range: PriceRange,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub qualifications: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Job {
    pub id: String,
    pub basic_info: JobBasicInfo,
    #[serde(default)]
    pub details: JobDetails,
    /// Free-shape payload whose layout varies by job type.
    #[serde(default)]
    pub category_specific: serde_json::Value,
}

/// Per-job subcollection entry.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JobQuestion {
    pub id: String,
    pub job_id: String,
    pub question: String,
    pub answer_type: String,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationBasicInfo {
    pub job_id: String,
    pub user_id: String,
    pub status: ApplicationStatus,
    pub job_type: JobType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDetails {
    #[serde(default)]
    pub cover_letter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_link: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Application {
    pub id: String,
    pub basic_info: ApplicationBasicInfo,
    #[serde(default)]
    pub details: ApplicationDetails,
    /// Question text -> the applicant's response.
    #[serde(default)]
    pub answers: HashMap<String, String>,
    #[serde(default)]
    pub category_specific: serde_json::Value,
}
