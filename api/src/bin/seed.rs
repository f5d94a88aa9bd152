//! Database seed utility.
//!
//! Creates the PackTrack tables if they are absent and provisions demo
//! accounts, a few queued orders, and sample video records for local
//! development. Safe to run repeatedly: users are upserted by username and
//! the order/video samples are only inserted into empty tables.

use std::error::Error;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use pt_core::domain::entities::order::{Order, OrderPriority, OrderStatus};
use pt_core::domain::entities::user::{User, UserRole};
use pt_core::domain::entities::video::{UploadStatus, Video};
use pt_core::repositories::{OrderRepository, UserRepository, VideoRepository};
use pt_core::services::password;
use pt_infra::database::connection::DatabasePool;
use pt_infra::database::mysql::{
    MySqlOrderRepository, MySqlUserRepository, MySqlVideoRepository,
};
use pt_shared::config::DatabaseConfig;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id CHAR(36) PRIMARY KEY,
        username VARCHAR(64) NOT NULL UNIQUE,
        password_hash VARCHAR(255) NOT NULL,
        role VARCHAR(16) NOT NULL,
        created_at DATETIME(6) NOT NULL
    )
"#;

const CREATE_ORDERS: &str = r#"
    CREATE TABLE IF NOT EXISTS orders (
        id CHAR(36) PRIMARY KEY,
        customer_name VARCHAR(128) NOT NULL,
        customer_email VARCHAR(255) NOT NULL,
        items_count INT NOT NULL,
        priority VARCHAR(16) NOT NULL,
        status VARCHAR(16) NOT NULL,
        created_at DATETIME(6) NOT NULL,
        updated_at DATETIME(6) NOT NULL
    )
"#;

const CREATE_VIDEOS: &str = r#"
    CREATE TABLE IF NOT EXISTS videos (
        id CHAR(36) PRIMARY KEY,
        job_id VARCHAR(64) NOT NULL,
        file_name VARCHAR(255) NOT NULL,
        drive_file_id VARCHAR(255) NULL,
        shareable_link VARCHAR(512) NULL,
        duration_seconds INT NOT NULL,
        file_size_bytes BIGINT NOT NULL,
        upload_status VARCHAR(16) NOT NULL,
        packer_id CHAR(36) NOT NULL,
        recorded_at DATETIME(6) NOT NULL,
        CONSTRAINT fk_videos_packer FOREIGN KEY (packer_id) REFERENCES users (id)
    )
"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    println!("Start seeding...");

    let config = DatabaseConfig::from_env();
    let pool = DatabasePool::new(&config).await?;

    for ddl in [CREATE_USERS, CREATE_ORDERS, CREATE_VIDEOS] {
        sqlx::query(ddl).execute(pool.get_pool()).await?;
    }

    let users = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let orders = Arc::new(MySqlOrderRepository::new(pool.get_pool().clone()));
    let videos = Arc::new(MySqlVideoRepository::new(pool.get_pool().clone()));

    let admin = seed_user(&users, "admin", "admin123", UserRole::Admin).await?;
    let packer1 = seed_user(&users, "packer1", "packer123", UserRole::Packer).await?;
    let packer2 = seed_user(&users, "packer2", "packer123", UserRole::Packer).await?;
    println!(
        "Users ready: {}, {}, {}",
        admin.username, packer1.username, packer2.username
    );

    seed_orders(&orders).await?;
    seed_videos(&videos, packer1.id, packer2.id).await?;

    println!("Seeding finished.");
    println!();
    println!("Login credentials:");
    println!("  Admin:   admin / admin123");
    println!("  Packer1: packer1 / packer123");
    println!("  Packer2: packer2 / packer123");

    Ok(())
}

async fn seed_user(
    repository: &MySqlUserRepository,
    username: &str,
    plaintext_password: &str,
    role: UserRole,
) -> Result<User, Box<dyn Error>> {
    if let Some(existing) = repository.find_by_username(username).await? {
        return Ok(existing);
    }

    let password_hash = password::hash(plaintext_password)?;
    let user = repository
        .create(User::new(username.to_string(), password_hash, role))
        .await?;
    Ok(user)
}

async fn seed_orders(repository: &MySqlOrderRepository) -> Result<(), Box<dyn Error>> {
    if repository.count(None).await? > 0 {
        println!("Orders already present, skipping");
        return Ok(());
    }

    let samples = [
        ("John Doe", "john@example.com", 3, OrderPriority::High),
        ("Jane Smith", "jane@example.com", 1, OrderPriority::Medium),
        ("Bob Johnson", "bob@example.com", 5, OrderPriority::Low),
        ("Alice Brown", "alice@example.com", 2, OrderPriority::High),
    ];

    let mut created = Vec::new();
    for (name, email, items, priority) in samples {
        let order = repository
            .create(Order::new(name.to_string(), email.to_string(), items, priority))
            .await?;
        created.push(order);
    }

    // One order mid-flight so the board has something in progress
    repository
        .update_status(created[3].id, OrderStatus::InProgress)
        .await?;

    println!("Created orders: {}", created.len());
    Ok(())
}

async fn seed_videos(
    repository: &MySqlVideoRepository,
    packer1: Uuid,
    packer2: Uuid,
) -> Result<(), Box<dyn Error>> {
    if repository.count().await? > 0 {
        println!("Videos already present, skipping");
        return Ok(());
    }

    repository
        .create(Video::new(
            "JOB001".to_string(),
            "job-001-video.webm".to_string(),
            Some("demo-drive-id-1".to_string()),
            Some("https://drive.example.com/d/demo-drive-id-1/view".to_string()),
            120,
            5_242_880,
            packer1,
        ))
        .await?;

    repository
        .create(Video::new(
            "JOB002".to_string(),
            "job-002-video.webm".to_string(),
            Some("demo-drive-id-2".to_string()),
            Some("https://drive.example.com/d/demo-drive-id-2/view".to_string()),
            95,
            4_194_304,
            packer2,
        ))
        .await?;

    // An upload still in flight
    repository
        .create(Video {
            id: Uuid::new_v4(),
            job_id: "JOB003".to_string(),
            file_name: "job-003-video.webm".to_string(),
            drive_file_id: None,
            shareable_link: None,
            duration_seconds: 0,
            file_size_bytes: 0,
            upload_status: UploadStatus::Uploading,
            packer_id: packer1,
            recorded_at: Utc::now(),
        })
        .await?;

    println!("Created videos: 3");
    Ok(())
}
