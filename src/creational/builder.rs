// Builder: configure a dialog through nested closures, then build it in one go.

use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// A dialog widget with a fixed setter API that we cannot change.
///
/// Every call made on it is recorded so callers can see what the builder did.
#[derive(Debug, Default)]
pub struct Dialog {
    calls: Vec<String>,
    title: Option<String>,
    message: Option<String>,
    image_len: Option<usize>,
}

impl Dialog {
    pub fn set_title(&mut self, text: &str) {
        self.calls.push(format!("setting title text {text}"));
        self.title = Some(text.to_string());
    }

    pub fn set_title_color(&mut self, color: &str) {
        self.calls.push(format!("setting title color {color}"));
    }

    pub fn set_message(&mut self, text: &str) {
        self.calls.push(format!("setting message {text}"));
        self.message = Some(text.to_string());
    }

    pub fn set_message_color(&mut self, color: &str) {
        self.calls.push(format!("setting message color {color}"));
    }

    pub fn set_image(&mut self, bitmap_bytes: &[u8]) {
        self.calls
            .push(format!("setting image with size {}", bitmap_bytes.len()));
        self.image_len = Some(bitmap_bytes.len());
    }

    pub fn show(&self) -> String {
        format!(
            "showing dialog title={:?} message={:?} image_bytes={:?}",
            self.title, self.message, self.image_len
        )
    }

    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextView {
    pub text: String,
    pub color: String,
}

impl Default for TextView {
    fn default() -> Self {
        Self {
            text: String::new(),
            color: "#000000".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct DialogBuilder {
    title: Option<TextView>,
    message: Option<TextView>,
    image: Option<PathBuf>,
}

impl DialogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, attributes: impl FnOnce(&mut TextView)) -> &mut Self {
        let mut view = TextView::default();
        attributes(&mut view);
        self.title = Some(view);
        self
    }

    pub fn message(&mut self, attributes: impl FnOnce(&mut TextView)) -> &mut Self {
        let mut view = TextView::default();
        attributes(&mut view);
        self.message = Some(view);
        self
    }

    pub fn image(&mut self, source: impl FnOnce() -> PathBuf) -> &mut Self {
        self.image = Some(source());
        self
    }

    /// Applies the configured sections to a fresh `Dialog`.
    ///
    /// The image file is only read here, so a bad path surfaces as an I/O error
    /// from `build`.
    pub fn build(&self) -> Result<Dialog> {
        let mut dialog = Dialog::default();

        if let Some(title) = &self.title {
            dialog.set_title(&title.text);
            dialog.set_title_color(&title.color);
        }

        if let Some(message) = &self.message {
            dialog.set_message(&message.text);
            dialog.set_message_color(&message.color);
        }

        if let Some(path) = &self.image {
            let bytes = fs::read(path)?;
            dialog.set_image(&bytes);
        }

        Ok(dialog)
    }
}

/// Builds a dialog from a configuration closure.
pub fn dialog(init: impl FnOnce(&mut DialogBuilder)) -> Result<Dialog> {
    let mut builder = DialogBuilder::new();
    init(&mut builder);
    builder.build()
}
