// src/pages/mod.rs
//! Page assembly: the document shell, blocks shared between layouts, and
//! the two page kinds (single-service detail, head-to-head comparison).

pub mod blocks;
pub mod compare;
pub mod document;
pub mod service;
