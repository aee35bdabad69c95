// dtos/jobdtos.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

use crate::models::{
    jobmodel::{Application, ApplicationStatus, Job, JobQuestion, JobType, PriceRange},
    usermodel::{Education, WorkExperience},
};

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobQuestionDto {
    #[validate(length(min = 1, message = "Question is required"))]
    pub question: String,

    #[validate(length(min = 1, message = "Answer type is required"))]
    pub answer_type: String,

    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobDto {
    #[validate(length(min = 1, message = "User id is required"))]
    pub user_id: String,

    #[validate(length(min = 6, message = "Job title must be longer than 5 characters"))]
    pub job_title: String,

    #[serde(default)]
    pub description: String,

    pub job_category: JobType,

    pub price_range: PriceRange,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub requirements: String,

    #[serde(default)]
    pub qualifications: String,

    #[serde(default)]
    pub category_specific: serde_json::Value,

    #[serde(default)]
    #[validate]
    pub questions: Vec<CreateJobQuestionDto>,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyToJobDto {
    #[validate(length(min = 1, message = "Job id is required"))]
    pub job_id: String,

    #[validate(length(min = 1, message = "User id is required"))]
    pub user_id: String,

    #[serde(default)]
    pub cover_letter: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_link: Option<String>,

    #[serde(default)]
    pub answers: HashMap<String, String>,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationStatusDto {
    #[validate(length(min = 1, message = "Application id is required"))]
    pub application_id: String,

    pub status: ApplicationStatus,
}

/// `userId` XOR `jobId`; the handler rejects any other combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationsQueryDto {
    pub user_id: Option<String>,
    pub job_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteApplicationQueryDto {
    pub application_id: String,
}

/// Resolved display identity of the job poster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorView {
    pub name: String,
    pub username: String,
    pub profile_image: String,
}

/// Resolved display identity of an applicant, with the subcollections the
/// application list renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantView {
    pub name: String,
    pub email: String,
    pub profile_image: String,
    pub educations: Vec<Education>,
    pub work_experiences: Vec<WorkExperience>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationView {
    #[serde(flatten)]
    pub application: Application,
    pub applicant: ApplicantView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobView {
    #[serde(flatten)]
    pub job: Job,
    pub questions: Vec<JobQuestion>,
    pub creator: CreatorView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications: Option<Vec<ApplicationView>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobListResponseDto {
    pub status: String,
    pub jobs: Vec<JobView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplicationListResponseDto {
    pub status: String,
    pub applications: Vec<ApplicationView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobResponseDto {
    pub status: String,
    pub job: Job,
}
