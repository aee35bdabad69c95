// service/profile_image.rs
use crate::models::usermodel::{ImageRole, ProfileImage, ProfileImageSetAs};

pub const DEFAULT_AVATAR: &str = "/images/avatars/default-avatar.png";

/// Ordered role chains per call site. The orders differ on purpose: the job
/// list resolves through `jobProfile` while the application list prefers
/// `jobApplyProfile` first, exactly as the pages consume them.
pub const JOB_LIST_PRIORITY: &[ImageRole] = &[ImageRole::JobProfile, ImageRole::Profile];

pub const APPLICANT_PRIORITY: &[ImageRole] = &[
    ImageRole::JobApplyProfile,
    ImageRole::JobProfile,
    ImageRole::Profile,
];

pub const COMMUNITY_MEMBER_PRIORITY: &[ImageRole] = &[ImageRole::Profile];

pub const COMMUNITY_POST_PRIORITY: &[ImageRole] = &[ImageRole::PostProfile, ImageRole::Profile];

/// Resolve "the" picture for one user in one context: walk the role chain,
/// first role with an assignment that maps to a stored image wins, default
/// avatar otherwise. `role_records` and `images` are the user's rows from
/// `profileImageSetAs` and `profileImages`.
pub fn resolve_profile_image(
    role_records: &[ProfileImageSetAs],
    images: &[ProfileImage],
    priority: &[ImageRole],
) -> String {
    for role in priority {
        if let Some(record) = role_records.iter().find(|r| r.set_as == *role) {
            if let Some(image) = images.iter().find(|i| i.id == record.profile_image_id) {
                return image.image_url.clone();
            }
        }
    }

    DEFAULT_AVATAR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str, url: &str) -> ProfileImage {
        ProfileImage {
            id: id.to_string(),
            user_id: "u1".to_string(),
            image_url: url.to_string(),
        }
    }

    fn role(image_id: &str, set_as: ImageRole) -> ProfileImageSetAs {
        ProfileImageSetAs {
            id: format!("setas-{}", image_id),
            user_id: "u1".to_string(),
            profile_image_id: image_id.to_string(),
            set_as,
        }
    }

    #[test]
    fn applicant_chain_prefers_job_apply_profile() {
        let images = vec![
            image("a", "https://cdn.test/a.png"),
            image("b", "https://cdn.test/b.png"),
            image("c", "https://cdn.test/c.png"),
        ];
        let roles = vec![
            role("a", ImageRole::Profile),
            role("b", ImageRole::JobProfile),
            role("c", ImageRole::JobApplyProfile),
        ];

        let url = resolve_profile_image(&roles, &images, APPLICANT_PRIORITY);
        assert_eq!(url, "https://cdn.test/c.png");
    }

    #[test]
    fn applicant_chain_falls_back_to_job_profile() {
        let images = vec![
            image("a", "https://cdn.test/a.png"),
            image("b", "https://cdn.test/b.png"),
        ];
        let roles = vec![
            role("a", ImageRole::Profile),
            role("b", ImageRole::JobProfile),
        ];

        let url = resolve_profile_image(&roles, &images, APPLICANT_PRIORITY);
        assert_eq!(url, "https://cdn.test/b.png");
    }

    #[test]
    fn applicant_chain_falls_back_to_profile() {
        let images = vec![image("a", "https://cdn.test/a.png")];
        let roles = vec![role("a", ImageRole::Profile)];

        let url = resolve_profile_image(&roles, &images, APPLICANT_PRIORITY);
        assert_eq!(url, "https://cdn.test/a.png");
    }

    #[test]
    fn no_roles_resolves_to_default_avatar() {
        let url = resolve_profile_image(&[], &[], APPLICANT_PRIORITY);
        assert_eq!(url, DEFAULT_AVATAR);
    }

    #[test]
    fn assignment_without_stored_image_keeps_walking_the_chain() {
        // Dangling profileImageId: the store never enforced the foreign key.
        let images = vec![image("a", "https://cdn.test/a.png")];
        let roles = vec![
            role("missing", ImageRole::JobApplyProfile),
            role("a", ImageRole::Profile),
        ];

        let url = resolve_profile_image(&roles, &images, APPLICANT_PRIORITY);
        assert_eq!(url, "https://cdn.test/a.png");
    }

    #[test]
    fn job_list_chain_ignores_job_apply_profile() {
        let images = vec![
            image("b", "https://cdn.test/b.png"),
            image("c", "https://cdn.test/c.png"),
        ];
        let roles = vec![
            role("b", ImageRole::JobProfile),
            role("c", ImageRole::JobApplyProfile),
        ];

        let url = resolve_profile_image(&roles, &images, JOB_LIST_PRIORITY);
        assert_eq!(url, "https://cdn.test/b.png");
    }
}
