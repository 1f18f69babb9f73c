// src/core/mod.rs

pub mod html;
pub mod slug;
pub mod text;
