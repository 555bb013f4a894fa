// Facade: a user repository hiding a file-backed key/value store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

const USER_KEY: &str = "USER_KEY";

/// On-disk shape of the store: a flat TOML table of string values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences {
    entries: BTreeMap<String, String>,
}

/// A key/value cache persisted as a TOML table of strings.
#[derive(Debug)]
pub struct ComplexSystemStore {
    file_path: PathBuf,
    cache: Preferences,
}

impl ComplexSystemStore {
    /// Loads `file_path`, or starts empty when the file does not exist yet.
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        let cache: Preferences = match fs::read_to_string(&file_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(err) if err.kind() == ErrorKind::NotFound => Preferences::default(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self { file_path, cache })
    }

    pub fn store(&mut self, key: impl Into<String>, payload: impl Into<String>) {
        self.cache.entries.insert(key.into(), payload.into());
    }

    /// Missing keys read as the empty string.
    pub fn read(&self, key: &str) -> String {
        self.cache.entries.get(key).cloned().unwrap_or_default()
    }

    pub fn commit(&self) -> Result<()> {
        let content = toml::to_string(&self.cache)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn preferences(&self) -> &Preferences {
        &self.cache
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub login: String,
}

impl User {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }
}

pub struct UserRepository {
    system_preferences: ComplexSystemStore,
}

impl UserRepository {
    pub fn new(preferences_path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            system_preferences: ComplexSystemStore::open(preferences_path)?,
        })
    }

    pub fn save(&mut self, user: &User) -> Result<()> {
        self.system_preferences.store(USER_KEY, user.login.as_str());
        self.system_preferences.commit()
    }

    pub fn find_first(&self) -> User {
        User::new(self.system_preferences.read(USER_KEY))
    }
}
