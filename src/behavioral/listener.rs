// Listener (Observer): a text view notifies its listener whenever the text changes.

pub trait TextChangedListener {
    fn on_text_changed(&mut self, old_text: &str, new_text: &str);
}

impl<F> TextChangedListener for F
where
    F: FnMut(&str, &str),
{
    fn on_text_changed(&mut self, old_text: &str, new_text: &str) {
        self(old_text, new_text)
    }
}

/// Keeps a readable line per change.
#[derive(Debug, Default)]
pub struct PrintingTextChangedListener {
    lines: Vec<String>,
}

impl PrintingTextChangedListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl TextChangedListener for PrintingTextChangedListener {
    fn on_text_changed(&mut self, old_text: &str, new_text: &str) {
        self.lines
            .push(format!("Text is changed {old_text} -> {new_text}"));
    }
}

pub struct TextView {
    text: String,
    listener: Option<Box<dyn TextChangedListener>>,
}

impl Default for TextView {
    fn default() -> Self {
        Self {
            text: "<empty>".to_string(),
            listener: None,
        }
    }
}

impl TextView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_listener(&mut self, listener: impl TextChangedListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, new_text: impl Into<String>) {
        let old_text = std::mem::replace(&mut self.text, new_text.into());
        if let Some(listener) = self.listener.as_mut() {
            listener.on_text_changed(&old_text, &self.text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_listener_sees_old_and_new() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);

        let mut view = TextView::new();
        view.set_listener(move |old: &str, new: &str| {
            sink.borrow_mut().push(format!("{old} -> {new}"));
        });

        view.set_text("Lorem ipsum");
        view.set_text("dolor sit amet");

        assert!(view.has_listener());
        assert_eq!(view.text(), "dolor sit amet");
        assert_eq!(
            *changes.borrow(),
            ["<empty> -> Lorem ipsum", "Lorem ipsum -> dolor sit amet"]
        );
    }

    #[test]
    fn test_no_listener_still_updates() {
        let mut view = TextView::new();
        view.set_text("quiet");
        assert!(!view.has_listener());
        assert_eq!(view.text(), "quiet");
    }

    #[test]
    fn test_printing_listener_lines() {
        let mut listener = PrintingTextChangedListener::new();
        listener.on_text_changed("a", "b");
        assert_eq!(listener.lines(), ["Text is changed a -> b"]);
    }
}
