//! Transit network router.
//!
//! Models stops and bus lines, and answers two kinds of question: static
//! statistics about a line or stop, and the fastest way from one stop to
//! another as an ordered list of rides.

pub mod catalogue;
pub mod domain;
pub mod graph;
pub mod router;
pub mod web;
