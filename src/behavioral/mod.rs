//! Behavioral patterns: how objects talk to each other.

pub mod chain_of_responsibility;
pub mod command;
pub mod listener;
pub mod mediator;
pub mod memento;
pub mod state;
pub mod strategy;
pub mod visitor;
