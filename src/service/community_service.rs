// service/community_service.rs
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;

use crate::{
    db::{
        communitydb::CommunityExt,
        db::{new_document_id, DBClient},
        userdb::UserExt,
    },
    dtos::communitydtos::{AddMemberDto, CommunityMemberView, CommunityPostView, CreatePostDto},
    models::{
        communitymodel::{CommunityMember, CommunityPost, CommunityPostMedia},
        usermodel::User,
    },
    service::{
        error::ServiceError,
        profile_image::{
            resolve_profile_image, COMMUNITY_MEMBER_PRIORITY, COMMUNITY_POST_PRIORITY,
        },
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

/// Community aggregation: membership and post listings with resolved
/// member/author identity. Child documents are fetched in batched
/// set-membership queries and joined in memory.
#[derive(Debug, Clone)]
pub struct CommunityService {
    db_client: Arc<DBClient>,
}

impl CommunityService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    pub async fn fetch_community_members(
        &self,
        community_id: &str,
    ) -> Result<Vec<CommunityMemberView>, ServiceError> {
        let members = self.db_client.get_members(community_id).await?;
        let user_ids = distinct(members.iter().map(|m| m.user_id.clone()));

        let (users, images, image_roles) = tokio::try_join!(
            self.db_client.get_users_by_ids(&user_ids),
            self.db_client.get_profile_images_for_users(&user_ids),
            self.db_client.get_image_roles_for_users(&user_ids),
        )?;

        let users_by_id: HashMap<String, User> =
            users.into_iter().map(|u| (u.id.clone(), u)).collect();
        let images_by_user = group_by(images, |i| i.user_id.clone());
        let roles_by_user = group_by(image_roles, |r| r.user_id.clone());

        Ok(members
            .into_iter()
            .map(|member| {
                let images = images_by_user
                    .get(&member.user_id)
                    .map(|v| v.as_slice())
                    .unwrap_or(&[]);
                let roles = roles_by_user
                    .get(&member.user_id)
                    .map(|v| v.as_slice())
                    .unwrap_or(&[]);
                let profile_image =
                    resolve_profile_image(roles, images, COMMUNITY_MEMBER_PRIORITY);

                let (name, username) = users_by_id
                    .get(&member.user_id)
                    .map(|user| (user.name.clone(), user.username.clone()))
                    .unwrap_or_default();

                CommunityMemberView {
                    name,
                    username,
                    profile_image,
                    member,
                }
            })
            .collect())
    }

    pub async fn fetch_community_posts(
        &self,
        community_id: &str,
    ) -> Result<Vec<CommunityPostView>, ServiceError> {
        let posts = self.db_client.get_posts(community_id).await?;
        let post_ids: Vec<String> = posts.iter().map(|p| p.id.clone()).collect();
        let author_ids = distinct(posts.iter().map(|p| p.user_id.clone()));

        let (media, users, images, image_roles) = tokio::try_join!(
            self.db_client.get_media_for_posts(&post_ids),
            self.db_client.get_users_by_ids(&author_ids),
            self.db_client.get_profile_images_for_users(&author_ids),
            self.db_client.get_image_roles_for_users(&author_ids),
        )?;

        let mut media_by_post = group_by(media, |m| m.post_id.clone());
        let users_by_id: HashMap<String, User> =
            users.into_iter().map(|u| (u.id.clone(), u)).collect();
        let images_by_user = group_by(images, |i| i.user_id.clone());
        let roles_by_user = group_by(image_roles, |r| r.user_id.clone());

        Ok(posts
            .into_iter()
            .map(|post| {
                let images = images_by_user
                    .get(&post.user_id)
                    .map(|v| v.as_slice())
                    .unwrap_or(&[]);
                let roles = roles_by_user
                    .get(&post.user_id)
                    .map(|v| v.as_slice())
                    .unwrap_or(&[]);
                let author_image =
                    resolve_profile_image(roles, images, COMMUNITY_POST_PRIORITY);

                let author_name = users_by_id
                    .get(&post.user_id)
                    .map(|user| user.name.clone())
                    .unwrap_or_default();

                CommunityPostView {
                    author_name,
                    author_image,
                    media: media_by_post.remove(&post.id).unwrap_or_default(),
                    post,
                }
            })
            .collect())
    }

    pub async fn add_member(
        &self,
        community_id: &str,
        dto: AddMemberDto,
    ) -> Result<CommunityMember, ServiceError> {
        let member = CommunityMember {
            id: new_document_id(),
            community_id: community_id.to_string(),
            user_id: dto.user_id,
            role: dto.role,
            joined_at: Utc::now(),
        };

        self.db_client.save_member(&member).await?;
        Ok(member)
    }

    pub async fn create_post(
        &self,
        community_id: &str,
        dto: CreatePostDto,
    ) -> Result<CommunityPost, ServiceError> {
        let post = CommunityPost {
            id: new_document_id(),
            community_id: community_id.to_string(),
            user_id: dto.user_id,
            title: dto.title,
            content: dto.content,
            created_at: Utc::now(),
        };
        self.db_client.save_post(&post).await?;

        for media in dto.media {
            let media = CommunityPostMedia {
                id: new_document_id(),
                post_id: post.id.clone(),
                media_url: media.media_url,
                media_type: media.media_type,
            };
            self.db_client.save_post_media(&media).await?;
        }

        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::communitydtos::CreatePostMediaDto;
    use crate::models::usermodel::{ImageRole, ProfileImage, ProfileImageSetAs};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_service() -> (CommunityService, Arc<DBClient>) {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let db_client = Arc::new(DBClient::new(pool));
        db_client.init_collections().await.unwrap();

        (CommunityService::new(db_client.clone()), db_client)
    }

    async fn seed_user(db: &DBClient, id: &str, name: &str) {
        db.save_user(&User {
            id: id.to_string(),
            name: name.to_string(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
        })
        .await
        .unwrap();
    }

    async fn seed_image(db: &DBClient, user_id: &str, image_id: &str, url: &str, role: ImageRole) {
        db.save_profile_image(&ProfileImage {
            id: image_id.to_string(),
            user_id: user_id.to_string(),
            image_url: url.to_string(),
        })
        .await
        .unwrap();
        db.save_profile_image_set_as(&ProfileImageSetAs {
            id: format!("setas-{}", image_id),
            user_id: user_id.to_string(),
            profile_image_id: image_id.to_string(),
            set_as: role,
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn members_resolve_identity_and_image() {
        let (service, db) = test_service().await;

        seed_user(&db, "m1", "Grace").await;
        seed_image(&db, "m1", "img1", "https://cdn.test/grace.png", ImageRole::Profile).await;

        service
            .add_member(
                "c1",
                AddMemberDto {
                    user_id: "m1".to_string(),
                    role: "member".to_string(),
                },
            )
            .await
            .unwrap();

        let members = service.fetch_community_members("c1").await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Grace");
        assert_eq!(members[0].profile_image, "https://cdn.test/grace.png");
    }

    #[tokio::test]
    async fn unknown_member_gets_default_display() {
        let (service, _db) = test_service().await;

        service
            .add_member(
                "c1",
                AddMemberDto {
                    user_id: "stranger".to_string(),
                    role: "member".to_string(),
                },
            )
            .await
            .unwrap();

        let members = service.fetch_community_members("c1").await.unwrap();
        assert_eq!(members[0].name, "");
        assert_eq!(
            members[0].profile_image,
            crate::service::profile_image::DEFAULT_AVATAR
        );
    }

    #[tokio::test]
    async fn posts_attach_media_and_prefer_post_profile_image() {
        let (service, db) = test_service().await;

        seed_user(&db, "author1", "Linus").await;
        seed_image(&db, "author1", "img-a", "https://cdn.test/plain.png", ImageRole::Profile).await;
        seed_image(&db, "author1", "img-b", "https://cdn.test/post.png", ImageRole::PostProfile)
            .await;

        service
            .create_post(
                "c1",
                CreatePostDto {
                    user_id: "author1".to_string(),
                    title: "Build log".to_string(),
                    content: "Today we shipped".to_string(),
                    media: vec![
                        CreatePostMediaDto {
                            media_url: "https://cdn.test/1.png".to_string(),
                            media_type: "image".to_string(),
                        },
                        CreatePostMediaDto {
                            media_url: "https://cdn.test/2.mp4".to_string(),
                            media_type: "video".to_string(),
                        },
                    ],
                },
            )
            .await
            .unwrap();

        let posts = service.fetch_community_posts("c1").await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author_name, "Linus");
        assert_eq!(posts[0].author_image, "https://cdn.test/post.png");
        assert_eq!(posts[0].media.len(), 2);
    }

    #[tokio::test]
    async fn posts_come_back_newest_first() {
        let (service, _db) = test_service().await;

        service
            .create_post(
                "c1",
                CreatePostDto {
                    user_id: "author1".to_string(),
                    title: "First".to_string(),
                    content: "one".to_string(),
                    media: vec![],
                },
            )
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        service
            .create_post(
                "c1",
                CreatePostDto {
                    user_id: "author1".to_string(),
                    title: "Second".to_string(),
                    content: "two".to_string(),
                    media: vec![],
                },
            )
            .await
            .unwrap();

        let posts = service.fetch_community_posts("c1").await.unwrap();
        assert_eq!(posts[0].post.title, "Second");
        assert_eq!(posts[1].post.title, "First");
    }
}
