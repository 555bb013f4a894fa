// Mediator: chat users never reference each other, only the room.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::{PatternError, Result};

#[derive(Default)]
pub struct ChatMediator {
    users: RefCell<Vec<Rc<ChatUser>>>,
}

impl ChatMediator {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn add_user(&self, user: Rc<ChatUser>) -> &Self {
        self.users.borrow_mut().push(user);
        self
    }

    /// Delivers `msg` to every member except `sender`, compared by identity.
    pub fn send_message(&self, msg: &str, sender: &ChatUser) {
        for user in self.users.borrow().iter() {
            if !std::ptr::eq(Rc::as_ptr(user), sender) {
                user.receive(msg);
            }
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.borrow().len()
    }
}

pub struct ChatUser {
    name: String,
    // Weak so the room and its members do not keep each other alive.
    mediator: Weak<ChatMediator>,
    inbox: RefCell<Vec<String>>,
}

impl ChatUser {
    pub fn new(mediator: &Rc<ChatMediator>, name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            mediator: Rc::downgrade(mediator),
            inbox: RefCell::new(Vec::new()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn send(&self, msg: &str) -> Result<()> {
        let mediator = self.mediator.upgrade().ok_or(PatternError::MediatorDropped)?;
        mediator.send_message(msg, self);
        Ok(())
    }

    pub fn receive(&self, msg: &str) {
        self.inbox.borrow_mut().push(msg.to_string());
    }

    pub fn received(&self) -> Vec<String> {
        self.inbox.borrow().clone()
    }
}
