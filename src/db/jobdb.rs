// db/jobdb.rs
use async_trait::async_trait;

use super::db::{collections, DBClient};
use crate::models::jobmodel::{Application, Job, JobQuestion};

#[async_trait]
pub trait JobExt {
    async fn save_job(&self, job: &Job) -> Result<(), sqlx::Error>;

    async fn get_job(&self, job_id: &str) -> Result<Option<Job>, sqlx::Error>;

    /// All jobs, newest first.
    async fn get_jobs(&self) -> Result<Vec<Job>, sqlx::Error>;

    /// One user's jobs, newest first.
    async fn get_jobs_by_user(&self, user_id: &str) -> Result<Vec<Job>, sqlx::Error>;

    /// Removes the job document only. Questions and applications keep their
    /// dangling foreign keys, matching the store's lack of cascade delete.
    async fn delete_job(&self, job_id: &str) -> Result<(), sqlx::Error>;

    async fn save_question(&self, question: &JobQuestion) -> Result<(), sqlx::Error>;

    async fn get_questions_for_jobs(
        &self,
        job_ids: &[String],
    ) -> Result<Vec<JobQuestion>, sqlx::Error>;

    async fn save_application(&self, application: &Application) -> Result<(), sqlx::Error>;

    async fn get_application(
        &self,
        application_id: &str,
    ) -> Result<Option<Application>, sqlx::Error>;

    async fn update_application(&self, application: &Application) -> Result<(), sqlx::Error>;

    async fn delete_application(&self, application_id: &str) -> Result<(), sqlx::Error>;

    async fn get_applications_by_job(
        &self,
        job_id: &str,
    ) -> Result<Vec<Application>, sqlx::Error>;

    async fn get_applications_for_jobs(
        &self,
        job_ids: &[String],
    ) -> Result<Vec<Application>, sqlx::Error>;
}

#[async_trait]
impl JobExt for DBClient {
    async fn save_job(&self, job: &Job) -> Result<(), sqlx::Error> {
        self.insert_document(collections::JOBS, &job.id, job).await
    }

    async fn get_job(&self, job_id: &str) -> Result<Option<Job>, sqlx::Error> {
        self.get_document(collections::JOBS, job_id).await
    }

    async fn get_jobs(&self) -> Result<Vec<Job>, sqlx::Error> {
        self.find_documents(collections::JOBS, &[], true).await
    }

    async fn get_jobs_by_user(&self, user_id: &str) -> Result<Vec<Job>, sqlx::Error> {
        self.find_documents(
            collections::JOBS,
            &[("basic_info.userId", user_id)],
            true,
        )
        .await
    }

    async fn delete_job(&self, job_id: &str) -> Result<(), sqlx::Error> {
        self.delete_document(collections::JOBS, job_id).await
    }

    async fn save_question(&self, question: &JobQuestion) -> Result<(), sqlx::Error> {
        self.insert_document(collections::QUESTIONS, &question.id, question)
            .await
    }

    async fn get_questions_for_jobs(
        &self,
        job_ids: &[String],
    ) -> Result<Vec<JobQuestion>, sqlx::Error> {
        self.find_documents_in(collections::QUESTIONS, "jobId", job_ids)
            .await
    }

    async fn save_application(&self, application: &Application) -> Result<(), sqlx::Error> {
        self.insert_document(collections::APPLICATIONS, &application.id, application)
            .await
    }

    async fn get_application(
        &self,
        application_id: &str,
    ) -> Result<Option<Application>, sqlx::Error> {
        self.get_document(collections::APPLICATIONS, application_id)
            .await
    }

    async fn update_application(&self, application: &Application) -> Result<(), sqlx::Error> {
        self.update_document(collections::APPLICATIONS, &application.id, application)
            .await
    }

    async fn delete_application(&self, application_id: &str) -> Result<(), sqlx::Error> {
        self.delete_document(collections::APPLICATIONS, application_id)
            .await
    }

    async fn get_applications_by_job(
        &self,
        job_id: &str,
    ) -> Result<Vec<Application>, sqlx::Error> {
        self.find_documents(
            collections::APPLICATIONS,
            &[("basic_info.jobId", job_id)],
            true,
        )
        .await
    }

    async fn get_applications_for_jobs(
        &self,
        job_ids: &[String],
    ) -> Result<Vec<Application>, sqlx::Error> {
        self.find_documents_in(collections::APPLICATIONS, "basic_info.jobId", job_ids)
            .await
    }
}
