//! First-run seed data.
//!
//! Inserted only when a collection is empty, so the site is not blank on a
//! fresh deployment and restarts never duplicate rows.

use crate::models::post::CreatePost;
use crate::models::project::CreateProject;
use crate::repositories::{PostRepo, ProjectRepo};
use crate::DbPool;

/// Insert example projects and posts into empty collections.
pub async fn seed_if_empty(pool: &DbPool) -> Result<(), sqlx::Error> {
    let (project_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await?;

    if project_count == 0 {
        for project in example_projects() {
            ProjectRepo::create(pool, &project).await?;
        }
        tracing::info!("Seeded example projects");
    }

    let (post_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;

    if post_count == 0 {
        for post in example_posts() {
            PostRepo::create(pool, &post).await?;
        }
        tracing::info!("Seeded example posts");
    }

    Ok(())
}

fn example_projects() -> Vec<CreateProject> {
    vec![
        CreateProject {
            title: "강남 테헤란로 오피스 빌딩".into(),
            category: "업무".into(),
            location: Some("서울특별시 강남구".into()),
            year: Some("2023".into()),
            description: Some("신축 오피스 빌딩 구조설계".into()),
            system: Some("RC조".into()),
            client: Some("OO건설".into()),
            image_url: Some(
                "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?auto=format&fit=crop&q=80&w=800"
                    .into(),
            ),
        },
        CreateProject {
            title: "한남동 고급 주거 단지".into(),
            category: "주거".into(),
            location: Some("서울특별시 용산구".into()),
            year: Some("2024".into()),
            description: Some("고급 빌라 단지 구조설계".into()),
            system: Some("SRC조".into()),
            client: Some("XX개발".into()),
            image_url: Some(
                "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&q=80&w=800"
                    .into(),
            ),
        },
    ]
}

fn example_posts() -> Vec<CreatePost> {
    vec![
        CreatePost {
            title: "2024년 개정 건축구조기준(KDS) 안내".into(),
            content: "최신 개정된 건축구조기준에 대한 요약 자료입니다.".into(),
            category: "기술자료".into(),
            author: Some("관리자".into()),
            file_url: None,
            file_name: None,
        },
        CreatePost {
            title: "원파트너스 홈페이지 리뉴얼 안내".into(),
            content: "더 나은 서비스를 위해 홈페이지를 새롭게 단장하였습니다.".into(),
            category: "공지".into(),
            author: Some("관리자".into()),
            file_url: None,
            file_name: None,
        },
    ]
}
