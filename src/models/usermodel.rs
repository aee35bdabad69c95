// models/usermodel.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Extended attributes, split off from `users` in the store.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub location: String,
}

/// Semantic role a stored picture can be assigned to. A user's pictures are
/// stored once; `profileImageSetAs` maps a role tag to one of them, so
/// resolving "the" picture for a context is a join plus a priority order.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ImageRole {
    Profile,
    CoverProfile,
    PostProfile,
    JobProfile,
    JobApplyProfile,
}

impl ImageRole {
    pub fn to_str(&self) -> &str {
        match self {
            ImageRole::Profile => "profile",
            ImageRole::CoverProfile => "coverProfile",
            ImageRole::PostProfile => "postProfile",
            ImageRole::JobProfile => "jobProfile",
            ImageRole::JobApplyProfile => "jobApplyProfile",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProfileImage {
    pub id: String,
    pub user_id: String,
    pub image_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProfileImageSetAs {
    pub id: String,
    pub user_id: String,
    pub profile_image_id: String,
    pub set_as: ImageRole,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub user_id: String,
    pub school: String,
    pub degree: String,
    #[serde(default)]
    pub from_date: String,
    #[serde(default)]
    pub to_date: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    pub user_id: String,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub from_date: String,
    #[serde(default)]
    pub to_date: String,
}
