// service/job_service.rs
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;

use crate::{
    db::{
        db::{new_document_id, DBClient},
        jobdb::JobExt,
        userdb::UserExt,
    },
    dtos::jobdtos::{ApplicantView, ApplicationView, ApplyToJobDto, CreateJobDto, CreatorView, JobView},
    mail::{mails, sendmail::Mailer},
    models::{
        jobmodel::{
            Application, ApplicationBasicInfo, ApplicationDetails, ApplicationStatus, Job,
            JobBasicInfo, JobDetails, JobQuestion, JobStatus,
        },
        usermodel::{Education, ProfileImage, ProfileImageSetAs, User, WorkExperience},
    },
    service::{
        error::ServiceError,
        profile_image::{resolve_profile_image, APPLICANT_PRIORITY, JOB_LIST_PRIORITY},
    },
};

fn group_by<T, F>(items: Vec<T>, key: F) -> HashMap<String, Vec<T>>
where
    F: Fn(&T) -> String,
{
    let mut grouped: HashMap<String, Vec<T>> = HashMap::new();
    for item in items {
        grouped.entry(key(&item)).or_default().push(item);
    }
    grouped
}

fn distinct<I: Iterator<Item = String>>(ids: I) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(id.clone())).collect()
}

fn build_creator(
    user_id: &str,
    users_by_id: &HashMap<String, User>,
    images_by_user: &HashMap<String, Vec<ProfileImage>>,
    roles_by_user: &HashMap<String, Vec<ProfileImageSetAs>>,
) -> CreatorView {
    let images = images_by_user.get(user_id).map(|v| v.as_slice()).unwrap_or(&[]);
    let roles = roles_by_user.get(user_id).map(|v| v.as_slice()).unwrap_or(&[]);
    let profile_image = resolve_profile_image(roles, images, JOB_LIST_PRIORITY);

    match users_by_id.get(user_id) {
        Some(user) => CreatorView {
            name: user.name.clone(),
            username: user.username.clone(),
            profile_image,
        },
        None => CreatorView {
            name: String::new(),
            username: String::new(),
            profile_image,
        },
    }
}

fn build_application_view(
    application: Application,
    users_by_id: &HashMap<String, User>,
    images_by_user: &HashMap<String, Vec<ProfileImage>>,
    roles_by_user: &HashMap<String, Vec<ProfileImageSetAs>>,
    educations_by_user: &HashMap<String, Vec<Education>>,
    experiences_by_user: &HashMap<String, Vec<WorkExperience>>,
) -> ApplicationView {
    let applicant_id = application.basic_info.user_id.clone();
    let images = images_by_user
        .get(&applicant_id)
        .map(|v| v.as_slice())
        .unwrap_or(&[]);
    let roles = roles_by_user
        .get(&applicant_id)
        .map(|v| v.as_slice())
        .unwrap_or(&[]);
    let profile_image = resolve_profile_image(roles, images, APPLICANT_PRIORITY);

    let (name, email) = users_by_id
        .get(&applicant_id)
        .map(|user| (user.name.clone(), user.email.clone()))
        .unwrap_or_default();

    ApplicationView {
        applicant: ApplicantView {
            name,
            email,
            profile_image,
            educations: educations_by_user
                .get(&applicant_id)
                .cloned()
                .unwrap_or_default(),
            work_experiences: experiences_by_user
                .get(&applicant_id)
                .cloned()
                .unwrap_or_default(),
        },
        application,
    }
}

/// Job aggregation. One primary query per listing, then batched child
/// lookups joined in memory; a failure anywhere aborts the whole
/// aggregation, partial results are never returned.
#[derive(Debug, Clone)]
pub struct JobService {
    db_client: Arc<DBClient>,
    mailer: Arc<dyn Mailer>,
}

impl JobService {
    pub fn new(db_client: Arc<DBClient>, mailer: Arc<dyn Mailer>) -> Self {
        Self { db_client, mailer }
    }

    pub async fn create_job(&self, dto: CreateJobDto) -> Result<Job, ServiceError> {
        let now = Utc::now();
        let job = Job {
            id: new_document_id(),
            basic_info: JobBasicInfo {
                title: dto.job_title,
                description: dto.description,
                job_type: dto.job_category,
                status: JobStatus::Active,
                user_id: dto.user_id,
                price_range: dto.price_range,
                location: dto.location,
                created_at: now,
                updated_at: now,
            },
            details: JobDetails {
                skills: dto.skills,
                requirements: dto.requirements,
                qualifications: dto.qualifications,
            },
            category_specific: dto.category_specific,
        };
        self.db_client.save_job(&job).await?;

        for question in dto.questions {
            let question = JobQuestion {
                id: new_document_id(),
                job_id: job.id.clone(),
                question: question.question,
                answer_type: question.answer_type,
                options: question.options,
            };
            self.db_client.save_question(&question).await?;
        }

        tracing::info!("Created job {} for user {}", job.id, job.basic_info.user_id);
        Ok(job)
    }

    /// All postings, newest first, each with its questions and resolved
    /// creator display.
    pub async fn fetch_jobs_with_questions(&self) -> Result<Vec<JobView>, ServiceError> {
        let jobs = self.db_client.get_jobs().await?;
        let job_ids: Vec<String> = jobs.iter().map(|job| job.id.clone()).collect();
        let creator_ids = distinct(jobs.iter().map(|job| job.basic_info.user_id.clone()));

        let (questions, users, images, image_roles) = tokio::try_join!(
            self.db_client.get_questions_for_jobs(&job_ids),
            self.db_client.get_users_by_ids(&creator_ids),
            self.db_client.get_profile_images_for_users(&creator_ids),
            self.db_client.get_image_roles_for_users(&creator_ids),
        )?;

        let mut questions_by_job = group_by(questions, |q| q.job_id.clone());
        let users_by_id: HashMap<String, User> =
            users.into_iter().map(|u| (u.id.clone(), u)).collect();
        let images_by_user = group_by(images, |i| i.user_id.clone());
        let roles_by_user = group_by(image_roles, |r| r.user_id.clone());

        Ok(jobs
            .into_iter()
            .map(|job| {
                let creator = build_creator(
                    &job.basic_info.user_id,
                    &users_by_id,
                    &images_by_user,
                    &roles_by_user,
                );
                JobView {
                    questions: questions_by_job.remove(&job.id).unwrap_or_default(),
                    creator,
                    applications: None,
                    job,
                }
            })
            .collect())
    }

    /// One user's postings, newest first, each with questions, creator
    /// display, and the full application list. Every application carries the
    /// applicant's resolved identity plus their education and
    /// work-experience subcollections.
    pub async fn fetch_user_jobs_with_questions(
        &self,
        user_id: &str,
    ) -> Result<Vec<JobView>, ServiceError> {
        let jobs = self.db_client.get_jobs_by_user(user_id).await?;
        let job_ids: Vec<String> = jobs.iter().map(|job| job.id.clone()).collect();

        let (questions, applications) = tokio::try_join!(
            self.db_client.get_questions_for_jobs(&job_ids),
            self.db_client.get_applications_for_jobs(&job_ids),
        )?;

        let applicant_ids = distinct(
            applications
                .iter()
                .map(|application| application.basic_info.user_id.clone()),
        );
        let display_ids = distinct(
            applicant_ids
                .iter()
                .cloned()
                .chain(std::iter::once(user_id.to_string())),
        );

        let (users, images, image_roles, educations, experiences) = tokio::try_join!(
            self.db_client.get_users_by_ids(&display_ids),
            self.db_client.get_profile_images_for_users(&display_ids),
            self.db_client.get_image_roles_for_users(&display_ids),
            self.db_client.get_educations_for_users(&applicant_ids),
            self.db_client.get_work_experiences_for_users(&applicant_ids),
        )?;

        let mut questions_by_job = group_by(questions, |q| q.job_id.clone());
        let mut applications_by_job =
            group_by(applications, |a| a.basic_info.job_id.clone());
        let users_by_id: HashMap<String, User> =
            users.into_iter().map(|u| (u.id.clone(), u)).collect();
        let images_by_user = group_by(images, |i| i.user_id.clone());
        let roles_by_user = group_by(image_roles, |r| r.user_id.clone());
        let educations_by_user = group_by(educations, |e| e.user_id.clone());
        let experiences_by_user = group_by(experiences, |e| e.user_id.clone());

        Ok(jobs
            .into_iter()
            .map(|job| {
                let creator = build_creator(
                    &job.basic_info.user_id,
                    &users_by_id,
                    &images_by_user,
                    &roles_by_user,
                );

                let applications = applications_by_job
                    .remove(&job.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|application| {
                        build_application_view(
                            application,
                            &users_by_id,
                            &images_by_user,
                            &roles_by_user,
                            &educations_by_user,
                            &experiences_by_user,
                        )
                    })
                    .collect();

                JobView {
                    questions: questions_by_job.remove(&job.id).unwrap_or_default(),
                    creator,
                    applications: Some(applications),
                    job,
                }
            })
            .collect())
    }

    /// One job's applications, newest first, with resolved applicants.
    pub async fn fetch_job_applications(
        &self,
        job_id: &str,
    ) -> Result<Vec<ApplicationView>, ServiceError> {
        let applications = self.db_client.get_applications_by_job(job_id).await?;
        let applicant_ids = distinct(
            applications
                .iter()
                .map(|application| application.basic_info.user_id.clone()),
        );

        let (users, images, image_roles, educations, experiences) = tokio::try_join!(
            self.db_client.get_users_by_ids(&applicant_ids),
            self.db_client.get_profile_images_for_users(&applicant_ids),
            self.db_client.get_image_roles_for_users(&applicant_ids),
            self.db_client.get_educations_for_users(&applicant_ids),
            self.db_client.get_work_experiences_for_users(&applicant_ids),
        )?;

        let users_by_id: HashMap<String, User> =
            users.into_iter().map(|u| (u.id.clone(), u)).collect();
        let images_by_user = group_by(images, |i| i.user_id.clone());
        let roles_by_user = group_by(image_roles, |r| r.user_id.clone());
        let educations_by_user = group_by(educations, |e| e.user_id.clone());
        let experiences_by_user = group_by(experiences, |e| e.user_id.clone());

        Ok(applications
            .into_iter()
            .map(|application| {
                build_application_view(
                    application,
                    &users_by_id,
                    &images_by_user,
                    &roles_by_user,
                    &educations_by_user,
                    &experiences_by_user,
                )
            })
            .collect())
    }

    pub async fn apply_to_job(&self, dto: ApplyToJobDto) -> Result<Application, ServiceError> {
        let job = self
            .db_client
            .get_job(&dto.job_id)
            .await?
            .ok_or_else(|| ServiceError::JobNotFound(dto.job_id.clone()))?;

        let now = Utc::now();
        let application = Application {
            id: new_document_id(),
            basic_info: ApplicationBasicInfo {
                job_id: dto.job_id.clone(),
                user_id: dto.user_id.clone(),
                status: ApplicationStatus::Pending,
                job_type: job.basic_info.job_type,
                created_at: now,
                updated_at: now,
            },
            details: ApplicationDetails {
                cover_letter: dto.cover_letter,
                resume_url: dto.resume_url,
                portfolio_link: dto.portfolio_link,
            },
            answers: dto.answers,
            category_specific: serde_json::Value::Null,
        };
        self.db_client.save_application(&application).await?;

        // Notify the poster; the application write already succeeded, so a
        // mail failure is only logged.
        if let Some(poster) = self.db_client.get_user(&job.basic_info.user_id).await? {
            let applicant_name = self
                .db_client
                .get_user(&dto.user_id)
                .await?
                .map(|user| user.name)
                .unwrap_or_else(|| "A candidate".to_string());

            if let Err(e) = mails::send_application_received_email(
                self.mailer.as_ref(),
                &poster.email,
                &applicant_name,
                &job.basic_info.title,
            )
            .await
            {
                tracing::warn!("Failed to notify job poster {}: {}", poster.email, e);
            }
        }

        Ok(application)
    }

    /// Overwrite the status, then dispatch the matching decision email.
    /// Any value may replace any prior value; only accepted/rejected mail.
    pub async fn update_application_status(
        &self,
        application_id: &str,
        status: ApplicationStatus,
    ) -> Result<(), ServiceError> {
        let mut application = self
            .db_client
            .get_application(application_id)
            .await?
            .ok_or_else(|| ServiceError::ApplicationNotFound(application_id.to_string()))?;

        application.basic_info.status = status;
        application.basic_info.updated_at = Utc::now();
        self.db_client.update_application(&application).await?;

        if !matches!(
            status,
            ApplicationStatus::Accepted | ApplicationStatus::Rejected
        ) {
            return Ok(());
        }

        let applicant = self
            .db_client
            .get_user(&application.basic_info.user_id)
            .await?
            .ok_or_else(|| {
                ServiceError::UserNotFound(application.basic_info.user_id.clone())
            })?;
        let job_title = self
            .db_client
            .get_job(&application.basic_info.job_id)
            .await?
            .map(|job| job.basic_info.title)
            .unwrap_or_default();

        let sent = match status {
            ApplicationStatus::Accepted => {
                mails::send_application_accepted_email(
                    self.mailer.as_ref(),
                    &applicant.email,
                    &applicant.name,
                    &job_title,
                )
                .await
            }
            ApplicationStatus::Rejected => {
                mails::send_application_rejected_email(
                    self.mailer.as_ref(),
                    &applicant.email,
                    &applicant.name,
                    &job_title,
                )
                .await
            }
            ApplicationStatus::Pending => Ok(()),
        };

        sent.map_err(ServiceError::Mail)
    }

    pub async fn delete_application(&self, application_id: &str) -> Result<(), ServiceError> {
        self.db_client.delete_application(application_id).await?;
        Ok(())
    }

    pub async fn delete_job(&self, job_id: &str) -> Result<(), ServiceError> {
        self.db_client.delete_job(job_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::jobdtos::CreateJobQuestionDto;
    use crate::mail::sendmail::test_support::RecordingMailer;
    use crate::models::jobmodel::{JobType, PriceRange};
    use crate::models::usermodel::ImageRole;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_service() -> (JobService, Arc<DBClient>, Arc<RecordingMailer>) {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let db_client = Arc::new(DBClient::new(pool));
        db_client.init_collections().await.unwrap();

        let mailer = Arc::new(RecordingMailer::default());
        let service = JobService::new(db_client.clone(), mailer.clone());
        (service, db_client, mailer)
    }

    fn job_dto(user_id: &str, title: &str, questions: Vec<CreateJobQuestionDto>) -> CreateJobDto {
        CreateJobDto {
            user_id: user_id.to_string(),
            job_title: title.to_string(),
            description: "".to_string(),
            job_category: JobType::Professional,
            price_range: PriceRange { from: 10.0, to: 20.0 },
            location: "".to_string(),
            skills: vec![],
            requirements: "".to_string(),
            qualifications: "".to_string(),
            category_specific: serde_json::Value::Null,
            questions,
        }
    }

    fn question(text: &str) -> CreateJobQuestionDto {
        CreateJobQuestionDto {
            question: text.to_string(),
            answer_type: "input".to_string(),
            options: vec![],
        }
    }

    #[tokio::test]
    async fn create_then_fetch_returns_job_with_questions() {
        let (service, _db, _mailer) = test_service().await;

        service
            .create_job(job_dto("u1", "Baker", vec![question("Experience?")]))
            .await
            .unwrap();

        let jobs = service.fetch_user_jobs_with_questions("u1").await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job.basic_info.title, "Baker");
        assert_eq!(jobs[0].questions.len(), 1);
        assert_eq!(jobs[0].questions[0].question, "Experience?");
        assert_eq!(jobs[0].questions[0].answer_type, "input");
    }

    #[tokio::test]
    async fn user_jobs_are_filtered_and_newest_first() {
        let (service, _db, _mailer) = test_service().await;

        service
            .create_job(job_dto("u1", "First posting", vec![]))
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        service
            .create_job(job_dto("u1", "Second posting", vec![]))
            .await
            .unwrap();
        service
            .create_job(job_dto("someone-else", "Other posting", vec![]))
            .await
            .unwrap();

        let jobs = service.fetch_user_jobs_with_questions("u1").await.unwrap();
        assert_eq!(jobs.len(), 2);
        assert!(jobs.iter().all(|j| j.job.basic_info.user_id == "u1"));
        assert_eq!(jobs[0].job.basic_info.title, "Second posting");
        assert_eq!(jobs[1].job.basic_info.title, "First posting");
    }

    #[tokio::test]
    async fn questions_stay_with_their_own_job() {
        let (service, _db, _mailer) = test_service().await;

        service
            .create_job(job_dto(
                "u1",
                "Job with two questions",
                vec![question("One?"), question("Two?")],
            ))
            .await
            .unwrap();
        service
            .create_job(job_dto("u1", "Job with none", vec![]))
            .await
            .unwrap();

        let jobs = service.fetch_jobs_with_questions().await.unwrap();
        let with_questions = jobs
            .iter()
            .find(|j| j.job.basic_info.title == "Job with two questions")
            .unwrap();
        let without = jobs
            .iter()
            .find(|j| j.job.basic_info.title == "Job with none")
            .unwrap();

        assert_eq!(with_questions.questions.len(), 2);
        assert!(without.questions.is_empty());
    }

    #[tokio::test]
    async fn applications_carry_resolved_applicant_identity() {
        let (service, db, _mailer) = test_service().await;

        db.save_user(&User {
            id: "applicant1".to_string(),
            name: "Ada".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
        })
        .await
        .unwrap();
        db.save_profile_image(&ProfileImage {
            id: "img1".to_string(),
            user_id: "applicant1".to_string(),
            image_url: "https://cdn.test/apply.png".to_string(),
        })
        .await
        .unwrap();
        db.save_profile_image_set_as(&ProfileImageSetAs {
            id: "setas1".to_string(),
            user_id: "applicant1".to_string(),
            profile_image_id: "img1".to_string(),
            set_as: ImageRole::JobApplyProfile,
        })
        .await
        .unwrap();

        let job = service.create_job(job_dto("poster1", "Carpenter wanted", vec![])).await.unwrap();
        service
            .apply_to_job(ApplyToJobDto {
                job_id: job.id.clone(),
                user_id: "applicant1".to_string(),
                cover_letter: "I build chairs".to_string(),
                resume_url: None,
                portfolio_link: None,
                answers: HashMap::new(),
            })
            .await
            .unwrap();

        let jobs = service
            .fetch_user_jobs_with_questions("poster1")
            .await
            .unwrap();
        let applications = jobs[0].applications.as_ref().unwrap();
        assert_eq!(applications.len(), 1);
        assert_eq!(applications[0].applicant.name, "Ada");
        assert_eq!(applications[0].applicant.email, "ada@example.com");
        assert_eq!(
            applications[0].applicant.profile_image,
            "https://cdn.test/apply.png"
        );
    }

    #[tokio::test]
    async fn accepting_an_application_sends_exactly_one_acceptance_email() {
        let (service, db, mailer) = test_service().await;

        db.save_user(&User {
            id: "applicant1".to_string(),
            name: "Ada".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
        })
        .await
        .unwrap();

        let job = service.create_job(job_dto("poster1", "Carpenter wanted", vec![])).await.unwrap();
        let application = service
            .apply_to_job(ApplyToJobDto {
                job_id: job.id.clone(),
                user_id: "applicant1".to_string(),
                cover_letter: "".to_string(),
                resume_url: None,
                portfolio_link: None,
                answers: HashMap::new(),
            })
            .await
            .unwrap();

        service
            .update_application_status(&application.id, ApplicationStatus::Accepted)
            .await
            .unwrap();

        let sent = mailer.sent_to();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "ada@example.com");
        assert_eq!(sent[0].1, "Application Accepted");

        let stored = db.get_application(&application.id).await.unwrap().unwrap();
        assert_eq!(stored.basic_info.status, ApplicationStatus::Accepted);
    }

    #[tokio::test]
    async fn pending_status_update_sends_no_email() {
        let (service, db, mailer) = test_service().await;

        db.save_user(&User {
            id: "applicant1".to_string(),
            name: "Ada".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
        })
        .await
        .unwrap();

        let job = service.create_job(job_dto("poster1", "Carpenter wanted", vec![])).await.unwrap();
        let application = service
            .apply_to_job(ApplyToJobDto {
                job_id: job.id,
                user_id: "applicant1".to_string(),
                cover_letter: "".to_string(),
                resume_url: None,
                portfolio_link: None,
                answers: HashMap::new(),
            })
            .await
            .unwrap();

        service
            .update_application_status(&application.id, ApplicationStatus::Pending)
            .await
            .unwrap();

        assert!(mailer.sent_to().is_empty());
    }

    #[tokio::test]
    async fn updating_a_missing_application_is_not_found() {
        let (service, _db, _mailer) = test_service().await;

        let result = service
            .update_application_status("nope", ApplicationStatus::Accepted)
            .await;

        assert!(matches!(result, Err(ServiceError::ApplicationNotFound(_))));
    }
}
