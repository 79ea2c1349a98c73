//! Football Teams Library
//!
//! Picks two balanced teams for informal football games and keeps a simple
//! win/loss record of the games played, including domain types, the team
//! balancer, game repositories, and roster loading.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
