//! Profile data model and the topic catalogue.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Longest accepted user name, in characters.
pub const MAX_NAME_LEN: usize = 32;

/// A learning topic with a fixed number of tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub id: &'static str,
    pub title: &'static str,
    pub tasks: u32,
}

/// Every topic, in display order.
pub const TOPICS: [Topic; 5] = [
    Topic {
        id: "sierpinski",
        title: "Sierpinski triangle",
        tasks: 3,
    },
    Topic {
        id: "linear",
        title: "Linear functions",
        tasks: 2,
    },
    Topic {
        id: "quadratic",
        title: "Quadratic functions",
        tasks: 2,
    },
    Topic {
        id: "inverse",
        title: "Inverse proportion",
        tasks: 2,
    },
    Topic {
        id: "sqrt",
        title: "Square roots",
        tasks: 2,
    },
];

/// Look up a topic by id.
#[must_use]
pub fn find_topic(id: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|t| t.id == id)
}

/// Progress of one user on one topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicStatus {
    NotStarted,
    InProgress { done: u32, total: u32 },
    Completed,
}

impl TopicStatus {
    #[must_use]
    pub fn from_counts(done: u32, total: u32) -> Self {
        if done == 0 {
            Self::NotStarted
        } else if done >= total {
            Self::Completed
        } else {
            Self::InProgress { done, total }
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::InProgress { .. } => "in progress",
            Self::Completed => "completed",
        }
    }
}

/// One user and their completed-task counters, keyed by topic id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub name: String,
    #[serde(default)]
    pub progress: BTreeMap<String, u32>,
}

impl UserRecord {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            progress: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn tasks_done(&self, topic_id: &str) -> u32 {
        self.progress.get(topic_id).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn status(&self, topic: &Topic) -> TopicStatus {
        TopicStatus::from_counts(self.tasks_done(topic.id), topic.tasks)
    }

    /// Number of catalogue topics this user has finished.
    #[must_use]
    pub fn completed_topics(&self) -> usize {
        TOPICS
            .iter()
            .filter(|t| self.status(t) == TopicStatus::Completed)
            .count()
    }
}

/// Everything persisted for the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub current_user: Option<String>,
}

impl ProfileData {
    #[must_use]
    pub fn user(&self, name: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.name == name)
    }

    pub fn user_mut(&mut self, name: &str) -> Option<&mut UserRecord> {
        self.users.iter_mut().find(|u| u.name == name)
    }

    /// The selected user, if it still exists.
    #[must_use]
    pub fn current(&self) -> Option<&UserRecord> {
        self.current_user.as_deref().and_then(|name| self.user(name))
    }
}

/// Apply the form constraints to a user name and return it trimmed.
pub fn validate_name(raw: &str) -> Result<String, StoreError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(StoreError::InvalidName("name must not be empty".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(StoreError::InvalidName(format!(
            "name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(name.to_string())
}
