/// State management module
///
/// This module handles all application state, including:
/// - The study spot catalog and its mutations (catalog.rs)
/// - Shared data structures (data.rs)
/// - Category, search and structured filters (filter.rs)
/// - Screen navigation and back history (navigation.rs)
/// - The review form (review.rs)
/// - The session container tying it all together (session.rs)

pub mod catalog;
pub mod data;
pub mod filter;
pub mod navigation;
pub mod review;
pub mod session;
