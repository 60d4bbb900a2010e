//! Dialogue Tactics - Goal-Directed Conversational Tactic Engine
//!
//! A pure policy layer that decides, turn by turn, what an assistant
//! should say next to steer a free-form conversation through a fixed
//! sequence of conversational goals, while tolerating pushback and
//! bounded off-topic detours.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
