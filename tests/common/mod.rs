//! Shared fixtures for integration tests

#![allow(dead_code)]

use admin_views::prelude::*;
use admin_views::views::{AlertSubject, Engagement, ThreadAuthor};
use chrono::TimeZone;

pub fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap()
}

pub fn product(id: &str, name: &str, category: &str, status: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} for everyday use", name),
        category: category.to_string(),
        status: status.to_string(),
        price,
        stock: 10,
        sales: 0,
        updated_at: at(1),
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product("p1", "Alpha", "Electronics", "Active", 120.0),
        product("p2", "Beta", "Books", "Draft", 15.0),
        product("p3", "Gamma", "Electronics", "Archived", 80.0),
        product("p4", "Delta", "Home", "Active", 45.5),
    ]
}

pub fn discount(id: &str, code: &str, kind: DiscountKind, amount: f64) -> Discount {
    Discount {
        id: id.to_string(),
        code: code.to_string(),
        description: String::new(),
        kind,
        amount,
        status: "Active".to_string(),
        usage_count: 0,
        usage_limit: None,
        starts_at: at(1),
        ends_at: None,
    }
}

/// `[20%, $50, 15%]`
pub fn discounts() -> Vec<Discount> {
    vec![
        discount("d1", "SPRING20", DiscountKind::Percentage, 20.0),
        discount("d2", "FIFTYOFF", DiscountKind::Fixed, 50.0),
        discount("d3", "WELCOME15", DiscountKind::Percentage, 15.0),
    ]
}

pub fn alert(id: &str, name: &str, severity: &str, previous_flags: u32) -> FraudAlert {
    FraudAlert {
        id: id.to_string(),
        subject: AlertSubject {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            previous_flags,
        },
        alert_type: "Chargeback".to_string(),
        severity: severity.to_string(),
        status: "Open".to_string(),
        amount: 250.0,
        detected_at: at(2),
    }
}

pub fn alerts() -> Vec<FraudAlert> {
    vec![
        alert("a1", "Kim", "Low", 0),
        alert("a2", "Omar", "High", 5),
        alert("a3", "Ines", "Medium", 2),
        alert("a4", "Yuki", "High", 1),
    ]
}

pub fn thread(id: &str, title: &str, author: &str, replies: u32, likes: u32) -> Thread {
    Thread {
        id: id.to_string(),
        title: title.to_string(),
        content: format!("Discussion about {}", title.to_lowercase()),
        author: ThreadAuthor {
            name: author.to_string(),
            avatar_url: None,
        },
        category: "General".to_string(),
        status: "Open".to_string(),
        engagement: Engagement {
            replies,
            views: replies * 12,
            likes,
        },
        created_at: at(3),
    }
}

pub fn threads() -> Vec<Thread> {
    vec![
        thread("t1", "Shipping delays", "Ana", 14, 3),
        thread("t2", "Feature request: dark mode", "Ben", 40, 22),
        thread("t3", "Refund policy", "Chloe", 2, 0),
    ]
}

pub fn ids<R: Record>(rows: &[&R]) -> Vec<String> {
    rows.iter().map(|r| r.id().to_string()).collect()
}
