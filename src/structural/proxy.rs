// Protection proxy: only delegate reads once the right password is set.

use crate::error::{PatternError, Result};

const PASSWORD: &str = "secret";

pub trait File {
    fn read(&self, name: &str) -> Result<String>;
}

#[derive(Debug, Default)]
pub struct NormalFile;

impl File for NormalFile {
    fn read(&self, name: &str) -> Result<String> {
        Ok(format!("Reading file: {name}"))
    }
}

pub struct SecuredFile<F> {
    inner: F,
    password: String,
}

impl<F: File> SecuredFile<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            password: String::new(),
        }
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }
}

impl<F: File> File for SecuredFile<F> {
    fn read(&self, name: &str) -> Result<String> {
        if self.password != PASSWORD {
            return Err(PatternError::AccessDenied);
        }
        self.inner.read(name)
    }
}
