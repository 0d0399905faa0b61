//! Admin dashboard demo
//!
//! Serves every built-in view from seeded in-memory stores:
//!
//! ```text
//! cargo run --example dashboard
//! curl 'http://127.0.0.1:3000/discounts?sort=amount:desc'
//! curl 'http://127.0.0.1:3000/fraud_alerts?filter={"status":"Open"}'
//! ```

use admin_views::prelude::*;
use admin_views::views::{AlertSubject, Engagement, ThreadAuthor};
use chrono::Duration;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

fn id() -> String {
    Uuid::new_v4().to_string()
}

fn seed_products() -> Vec<Product> {
    let now = Utc::now();
    [
        ("Wireless Mouse", "Electronics", "Active", 24.99, 140, 512),
        ("Mechanical Keyboard", "Electronics", "Active", 89.0, 35, 220),
        ("Standing Desk", "Furniture", "Draft", 349.0, 0, 0),
        ("Desk Lamp", "Furniture", "Active", 39.5, 60, 97),
        ("Field Notes", "Stationery", "Archived", 12.0, 4, 1030),
    ]
    .into_iter()
    .map(|(name, category, status, price, stock, sales)| Product {
        id: id(),
        name: name.to_string(),
        description: format!("{} from the {} range", name, category.to_lowercase()),
        category: category.to_string(),
        status: status.to_string(),
        price,
        stock,
        sales,
        updated_at: now,
    })
    .collect()
}

fn seed_orders() -> Vec<Order> {
    let now = Utc::now();
    [
        ("Ada Byron", "ada@example.com", "Pending", "Unpaid", 54.0, 2),
        ("Grace Hopper", "grace@example.com", "Shipped", "Paid", 210.4, 5),
        ("Alan Turing", "alan@example.com", "Delivered", "Paid", 18.0, 1),
        ("Edsger Dijkstra", "edsger@example.com", "Cancelled", "Refunded", 99.9, 3),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, email, status, payment, total, items))| Order {
        id: id(),
        number: format!("ORD-{:05}", 1000 + i),
        customer_name: name.to_string(),
        customer_email: email.to_string(),
        status: status.to_string(),
        payment_status: payment.to_string(),
        total,
        items,
        placed_at: now - Duration::hours(i as i64 * 7),
    })
    .collect()
}

fn seed_discounts() -> Vec<Discount> {
    let now = Utc::now();
    vec![
        Discount {
            id: id(),
            code: "SPRING20".to_string(),
            description: "Spring sale".to_string(),
            kind: DiscountKind::Percentage,
            amount: 20.0,
            status: "Active".to_string(),
            usage_count: 134,
            usage_limit: Some(500),
            starts_at: now - Duration::days(10),
            ends_at: Some(now + Duration::days(20)),
        },
        Discount {
            id: id(),
            code: "FIFTYOFF".to_string(),
            description: "Fifty off orders over 200".to_string(),
            kind: DiscountKind::Fixed,
            amount: 50.0,
            status: "Scheduled".to_string(),
            usage_count: 0,
            usage_limit: None,
            starts_at: now + Duration::days(3),
            ends_at: None,
        },
        Discount {
            id: id(),
            code: "WELCOME15".to_string(),
            description: "First order".to_string(),
            kind: DiscountKind::Percentage,
            amount: 15.0,
            status: "Expired".to_string(),
            usage_count: 980,
            usage_limit: Some(1000),
            starts_at: now - Duration::days(90),
            ends_at: Some(now - Duration::days(1)),
        },
    ]
}

fn seed_alerts() -> Vec<FraudAlert> {
    let now = Utc::now();
    [
        ("Mallory", "Velocity", "High", "Open", 1200.0, 3),
        ("Trent", "Chargeback", "Low", "Resolved", 45.0, 0),
        ("Eve", "Card testing", "Medium", "Investigating", 5.0, 1),
    ]
    .into_iter()
    .map(|(name, alert_type, severity, status, amount, flags)| FraudAlert {
        id: id(),
        subject: AlertSubject {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            previous_flags: flags,
        },
        alert_type: alert_type.to_string(),
        severity: severity.to_string(),
        status: status.to_string(),
        amount,
        detected_at: now,
    })
    .collect()
}

fn seed_threads() -> Vec<Thread> {
    let now = Utc::now();
    [
        ("Shipping to Canada?", "Sam", "Support", "Open", 12, 340, 4),
        ("Release notes 2.4", "Team", "Announcements", "Pinned", 48, 2210, 91),
        ("Spam spam spam", "bot_42", "General", "Flagged", 0, 12, 0),
    ]
    .into_iter()
    .map(|(title, author, category, status, replies, views, likes)| Thread {
        id: id(),
        title: title.to_string(),
        content: format!("{} (posted in {})", title, category),
        author: ThreadAuthor {
            name: author.to_string(),
            avatar_url: None,
        },
        category: category.to_string(),
        status: status.to_string(),
        engagement: Engagement {
            replies,
            views,
            likes,
        },
        created_at: now,
    })
    .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (RUST_LOG=admin_views=debug for view-level logs)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/dashboard/views.yaml");

    let builder = ServerBuilder::new()
        .with_config_file(config_path)?
        .with_store(InMemoryRecordStore::with_records(seed_products()))
        .with_store(InMemoryRecordStore::with_records(seed_orders()))
        .with_store(InMemoryRecordStore::with_records(seed_discounts()))
        .with_store(InMemoryRecordStore::with_records(seed_alerts()))
        .with_store(InMemoryRecordStore::with_records(seed_threads()));

    println!("\n🌐 Dashboard running on http://127.0.0.1:3000");
    println!("\n📚 Available endpoints:");
    println!("    GET    /health                  - Health check");
    println!("    GET    /views                   - Registered views");
    println!("    GET    /{{resource}}              - List (search, filter, sort, page, limit)");
    println!("    POST   /{{resource}}              - Create from draft");
    println!("    POST   /{{resource}}/actions      - Bulk action {{ action, ids }}");

    builder.serve("127.0.0.1:3000").await
}
