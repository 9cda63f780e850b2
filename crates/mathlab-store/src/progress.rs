//! Profile persistence and progress tracking on top of a key-value store.

use crate::error::StoreError;
use crate::profile::{find_topic, validate_name, ProfileData, Topic, TopicStatus, UserRecord, TOPICS};
use crate::store::KeyValueStore;

/// Key under which the profile JSON is stored.
pub const PROFILE_KEY: &str = "mathlab_profile";

/// Loads, mutates and saves the profile.
///
/// Every mutating call is a full load-modify-save cycle; there is a single
/// writer.
pub struct ProgressStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProgressStore<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the profile. A store without one yields the empty profile.
    pub fn load_profile(&self) -> Result<ProfileData, StoreError> {
        match self.store.get(PROFILE_KEY)? {
            Some(content) => {
                let profile: ProfileData = serde_json::from_str(&content)?;
                tracing::debug!(users = profile.users.len(), "loaded profile");
                Ok(profile)
            }
            None => Ok(ProfileData::default()),
        }
    }

    pub fn save_profile(&self, profile: &ProfileData) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(profile)?;
        self.store.set(PROFILE_KEY, &content)?;
        tracing::debug!(users = profile.users.len(), "saved profile");
        Ok(())
    }

    /// Add a user and select it.
    pub fn create_user(&self, name: &str) -> Result<UserRecord, StoreError> {
        let name = validate_name(name)?;
        let mut profile = self.load_profile()?;
        if profile.user(&name).is_some() {
            return Err(StoreError::DuplicateUser(name));
        }
        let user = UserRecord::new(name.clone());
        profile.users.push(user.clone());
        profile.current_user = Some(name);
        self.save_profile(&profile)?;
        tracing::info!(user = %user.name, "created user");
        Ok(user)
    }

    /// Make `name` the current user.
    pub fn select_user(&self, name: &str) -> Result<(), StoreError> {
        let name = name.trim();
        let mut profile = self.load_profile()?;
        if profile.user(name).is_none() {
            return Err(StoreError::UnknownUser(name.to_string()));
        }
        profile.current_user = Some(name.to_string());
        self.save_profile(&profile)
    }

    /// Record one finished task of `topic_id` for the current user.
    ///
    /// The counter stops at the topic's task total.
    pub fn mark_topic_task_complete(&self, topic_id: &str) -> Result<TopicStatus, StoreError> {
        let topic =
            find_topic(topic_id).ok_or_else(|| StoreError::UnknownTopic(topic_id.to_string()))?;
        let mut profile = self.load_profile()?;
        let current = profile.current_user.clone().ok_or(StoreError::NoActiveUser)?;
        let user = profile
            .user_mut(&current)
            .ok_or_else(|| StoreError::UnknownUser(current.clone()))?;

        let done = user.progress.entry(topic.id.to_string()).or_insert(0);
        *done = (*done + 1).min(topic.tasks);
        let status = user.status(topic);

        self.save_profile(&profile)?;
        tracing::info!(user = %current, topic = topic.id, status = status.label(), "task completed");
        Ok(status)
    }

    /// Topics the current user has finished; zero without a current user.
    pub fn completed_topics(&self) -> Result<usize, StoreError> {
        Ok(self
            .load_profile()?
            .current()
            .map_or(0, UserRecord::completed_topics))
    }

    /// Status of every topic for the current user, in catalogue order.
    pub fn topic_statuses(&self) -> Result<Vec<(Topic, TopicStatus)>, StoreError> {
        let profile = self.load_profile()?;
        let current = profile.current();
        Ok(TOPICS
            .iter()
            .map(|t| {
                let status = current.map_or(TopicStatus::NotStarted, |u| u.status(t));
                (*t, status)
            })
            .collect())
    }
}
