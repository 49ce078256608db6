// ABOUTME: JSON-file storage backend with atomic writes per logical key
// ABOUTME: profile.json, plan.json, and logs.json under one directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::warn;

use super::StorageProvider;
use crate::errors::CoachResult;
use crate::models::{DailyLog, Plan, Profile};

const PROFILE_KEY: &str = "profile.json";
const PLAN_KEY: &str = "plan.json";
const LOGS_KEY: &str = "logs.json";

/// File-backed storage with pretty-printed JSON encoding
///
/// Writes go through a temp file followed by a rename, and a single write
/// lock serializes mutations so concurrent meal logging and plan
/// regeneration cannot interleave into a corrupted record.
#[derive(Debug)]
pub struct FileStorage {
    directory: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// Create a store rooted at `directory`, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::StorageError` when the directory cannot be created.
    pub fn new(directory: impl Into<PathBuf>) -> CoachResult<Self> {
        let directory = directory.into();
        std::fs::create_dir_all(&directory)?;
        Ok(Self {
            directory,
            write_lock: Mutex::new(()),
        })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.directory.join(key)
    }

    async fn read_value<T: DeserializeOwned>(&self, key: &str) -> CoachResult<Option<T>> {
        match tokio::fs::read(self.path(key)).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    async fn write_value<T: Serialize>(&self, key: &str, value: &T) -> CoachResult<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        let target = self.path(key);
        let staged = staging_path(&target);
        tokio::fs::write(&staged, &bytes).await?;
        tokio::fs::rename(&staged, &target).await?;
        Ok(())
    }
}

fn staging_path(target: &Path) -> PathBuf {
    let mut staged = target.as_os_str().to_owned();
    staged.push(".tmp");
    PathBuf::from(staged)
}

#[async_trait]
impl StorageProvider for FileStorage {
    async fn fetch_profile(&self) -> CoachResult<Option<Profile>> {
        self.read_value(PROFILE_KEY).await
    }

    async fn save_profile(&self, profile: &Profile) -> CoachResult<()> {
        let _guard = self.write_lock.lock().await;
        self.write_value(PROFILE_KEY, profile).await
    }

    async fn fetch_plan(&self) -> CoachResult<Option<Plan>> {
        self.read_value(PLAN_KEY).await
    }

    async fn save_plan(&self, plan: &Plan) -> CoachResult<()> {
        let _guard = self.write_lock.lock().await;
        self.write_value(PLAN_KEY, plan).await
    }

    async fn fetch_logs(&self) -> CoachResult<Vec<DailyLog>> {
        Ok(self.read_value(LOGS_KEY).await?.unwrap_or_default())
    }

    async fn save_log(&self, log: &DailyLog) -> CoachResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut logs: Vec<DailyLog> = match self.read_value(LOGS_KEY).await {
            Ok(existing) => existing.unwrap_or_default(),
            Err(error) => {
                warn!(%error, "daily log file unreadable, starting a fresh log set");
                Vec::new()
            }
        };

        match logs.iter_mut().find(|existing| existing.date == log.date) {
            Some(existing) => *existing = log.clone(),
            None => logs.push(log.clone()),
        }

        self.write_value(LOGS_KEY, &logs).await
    }
}
