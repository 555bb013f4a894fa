//! # Design Patterns
//!
//! Classic object-oriented design patterns, each applied to a small toy domain.
//!
//! ## Creational Patterns
//! - Abstract Factory (plants, `TypeId` dispatch)
//! - Builder (dialog DSL with closures)
//! - Factory Method (currency per country, exhaustive `match`)
//! - Prototype (`Clone`)
//! - Singleton (`lazy_static`, `OnceLock`)
//!
//! ## Structural Patterns
//! - Adapter (Fahrenheit view over a shared Celsius value)
//! - Composite (equipment tree)
//! - Decorator (coffee machine)
//! - Facade (user repository over a TOML-backed store)
//! - Flyweight (shared race cars)
//! - Protection Proxy (password-guarded file)
//!
//! ## Behavioral Patterns
//! - Chain of Responsibility (request headers)
//! - Command (order queue)
//! - Listener / Observer (text view)
//! - Mediator (chat room)
//! - Memento (originator snapshots)
//! - State (authorization presenter)
//! - Strategy (string formatters, closures)
//! - Visitor (contract cost reports)
//!
//! Run the walkthroughs with:
//! ```bash
//! cargo run --bin p1_creational
//! cargo run --bin p2_structural
//! cargo run --bin p3_behavioral -- visitor mediator
//! ```

pub mod behavioral;
pub mod creational;
pub mod error;
pub mod structural;

pub use error::{PatternError, Result};
