//! Browser-side implementations of the gateway seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! `fetch` executes HTTP requests, `storage` keeps the auth session in
//! `localStorage`, `navigate` performs full-page redirects, and `files` reads
//! picked files into memory. Every module compiles on the server too, where
//! the browser-only behavior degrades to a no-op or an error.

pub mod fetch;
pub mod files;
pub mod navigate;
pub mod storage;
