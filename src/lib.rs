// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod extract;
pub mod gui;
pub mod initiative;
pub mod reference;
pub mod specs;
