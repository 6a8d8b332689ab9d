//! Station ranking server.
//!
//! Answers "which rental stations near me should I go to?" by filtering a
//! fleet of stations to a radius around the user and ranking what is left
//! by priority, traffic, distance, a combined score, or a discount.

pub mod config;
pub mod domain;
pub mod geo;
pub mod ranking;
pub mod stations;
pub mod web;
