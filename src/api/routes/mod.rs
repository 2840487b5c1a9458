//! API Routes
//!
//! Route handlers organized by functionality.

pub mod analytics;
pub mod auth;
pub mod campaigns;
pub mod content;
pub mod health;
pub mod media;
