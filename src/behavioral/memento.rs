// Memento: snapshot an originator's state and roll back to it later.

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento {
    state: String,
}

impl Memento {
    pub fn state(&self) -> &str {
        &self.state
    }
}

#[derive(Debug)]
pub struct Originator {
    pub state: String,
}

impl Originator {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
        }
    }

    pub fn create_memento(&self) -> Memento {
        Memento {
            state: self.state.clone(),
        }
    }

    pub fn restore(&mut self, memento: &Memento) {
        self.state = memento.state.clone();
    }
}

#[derive(Debug, Default)]
pub struct CareTaker {
    memento_list: Vec<Memento>,
}

impl CareTaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_state(&mut self, memento: Memento) {
        self.memento_list.push(memento);
    }

    pub fn restore(&self, index: usize) -> Result<&Memento> {
        self.memento_list
            .get(index)
            .ok_or(PatternError::SnapshotNotFound {
                index,
                len: self.memento_list.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.memento_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memento_list.is_empty()
    }
}
