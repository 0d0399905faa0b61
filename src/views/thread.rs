//! Forum threads moderation view

use crate::core::field::FieldValue;
use crate::core::presentation::{BadgeColor, BadgePalette};
use crate::core::record::Record;
use crate::core::sort::SortState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

crate::record_fields! {
    /// Columns of the threads table
    pub enum ThreadField {
        Title => "title",
        Content => "content",
        Author => "author",
        Category => "category",
        Status => "status",
        Replies => "replies",
        Views => "views",
        Likes => "likes",
        CreatedAt => "created_at",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadAuthor {
    pub name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub replies: u32,
    pub views: u32,
    pub likes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: ThreadAuthor,
    pub category: String,
    /// `Open`, `Pinned`, `Locked` or `Flagged`
    pub status: String,
    pub engagement: Engagement,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ThreadDraft {
    #[validate(length(min = 3, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(min = 1))]
    pub author: String,
    #[validate(length(min = 1))]
    pub category: String,
}

impl Record for Thread {
    type Field = ThreadField;
    type Draft = ThreadDraft;

    fn resource_name() -> &'static str {
        "threads"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: ThreadField) -> FieldValue {
        match field {
            ThreadField::Title => self.title.as_str().into(),
            ThreadField::Content => self.content.as_str().into(),
            ThreadField::Author => self.author.name.as_str().into(),
            ThreadField::Category => self.category.as_str().into(),
            ThreadField::Status => self.status.as_str().into(),
            ThreadField::Replies => self.engagement.replies.into(),
            ThreadField::Views => self.engagement.views.into(),
            ThreadField::Likes => self.engagement.likes.into(),
            ThreadField::CreatedAt => self.created_at.into(),
        }
    }

    fn search_fields() -> &'static [ThreadField] {
        &[ThreadField::Title, ThreadField::Content, ThreadField::Author]
    }

    fn filter_fields() -> &'static [ThreadField] {
        &[ThreadField::Category, ThreadField::Status]
    }

    fn sort_fields() -> &'static [ThreadField] {
        &[
            ThreadField::Title,
            ThreadField::Replies,
            ThreadField::Views,
            ThreadField::Likes,
            ThreadField::CreatedAt,
        ]
    }

    fn display_fields() -> &'static [ThreadField] {
        &[
            ThreadField::Title,
            ThreadField::Author,
            ThreadField::Category,
            ThreadField::Replies,
            ThreadField::Views,
            ThreadField::CreatedAt,
        ]
    }

    fn default_sort() -> SortState<ThreadField> {
        SortState::desc(ThreadField::CreatedAt)
    }

    fn bulk_actions() -> &'static [&'static str] {
        &["pin", "lock", "delete"]
    }

    fn badge_fields() -> &'static [ThreadField] {
        &[ThreadField::Status]
    }

    fn palette(field: ThreadField) -> Option<BadgePalette> {
        match field {
            ThreadField::Status => Some(BadgePalette::from_pairs(&[
                ("Open", BadgeColor::Green),
                ("Pinned", BadgeColor::Blue),
                ("Locked", BadgeColor::Gray),
                ("Flagged", BadgeColor::Red),
            ])),
            _ => None,
        }
    }

    fn status_field() -> Option<ThreadField> {
        Some(ThreadField::Status)
    }

    fn from_draft(id: String, draft: &ThreadDraft) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            author: ThreadAuthor {
                name: draft.author.clone(),
                avatar_url: None,
            },
            category: draft.category.clone(),
            status: "Open".to_string(),
            engagement: Engagement::default(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewSettings;
    use crate::core::view::ListView;

    fn thread(id: &str, title: &str, author: &str, replies: u32) -> Thread {
        Thread {
            id: id.to_string(),
            title: title.to_string(),
            content: "Body text".to_string(),
            author: ThreadAuthor {
                name: author.to_string(),
                avatar_url: None,
            },
            category: "General".to_string(),
            status: "Open".to_string(),
            engagement: Engagement {
                replies,
                views: replies * 10,
                likes: 0,
            },
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_search_includes_author_name() {
        let mut view = ListView::new(
            vec![
                thread("t1", "Welcome", "Maya", 2),
                thread("t2", "Release notes", "Ravi", 5),
            ],
            ViewSettings::default(),
        );
        view.set_search("ravi");
        let ids: Vec<&str> = view.visible().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t2"]);
    }

    #[test]
    fn test_sort_by_nested_engagement() {
        let mut view = ListView::new(
            vec![
                thread("t1", "Welcome", "Maya", 2),
                thread("t2", "Release notes", "Ravi", 5),
                thread("t3", "Bug report", "Ana", 0),
            ],
            ViewSettings::default(),
        );
        view.set_sort_by_name("replies:desc").unwrap();
        let ids: Vec<&str> = view.visible().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t2", "t1", "t3"]);
    }
}
