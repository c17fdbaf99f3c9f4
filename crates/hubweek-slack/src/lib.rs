//! Slack notification layer for Hubweek.
//!
//! Two concerns: posting the rendered digest to a channel, and resolving
//! designers to platform mentions by email. Mention resolution degrades to
//! literal `@name` text instead of erroring.

pub mod client;
pub mod error;
pub mod mention;

pub use client::{SlackClient, DEFAULT_API_ROOT};
pub use error::{Result, SlackError};
pub use mention::{fallback_mention, MentionResolver, PlainResolver, SlackResolver};
