//! Structural patterns: how objects are composed.

pub mod adapter;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod proxy;
