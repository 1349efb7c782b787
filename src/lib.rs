//! Wordspace
//!
//! Every password of 4 to 32 symbols, each at its own exact position in one
//! enormous ordered list, with search tools that never have to build the list.
//!
//! # Quick Start
//!
//! ```rust
//! use wordspace::core::{decode, encode};
//! use wordspace::search::{Direction, SearchController};
//! use wordspace::navigation::span;
//!
//! // Words and indices convert exactly in both directions
//! let index = encode("hunter2").unwrap();
//! assert_eq!(decode(&index).unwrap().text(), "hunter2");
//!
//! // Search near the current position, falling back to random probing
//! let mut session = SearchController::default();
//! session.jump_to_literal("tesq").unwrap();
//! let displayed = span(&session.current().index, 20).unwrap();
//! let found = session.search("test", Direction::Higher, &displayed, false);
//! assert_eq!(found.unwrap().word.text(), "test");
//! ```

// Core domain types
pub mod core;

// Stepping and neighborhoods
pub mod navigation;

// Window and random search
pub mod search;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
