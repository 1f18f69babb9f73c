// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod schema;

pub mod catalog;
pub mod file;
pub mod pages;
pub mod progress;
pub mod render;
pub mod rows;
pub mod runner;
pub mod sitegen;
