//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `contacts` – collider pairs overlapping at the end of the previous tick
//! - `gameconfig` – gameplay tuning loaded from an INI file
//! - `input` – per-tick action edges and horizontal axis level
//! - `prefabstore` – named entity templates for spawn requests
//! - `worldtime` – simulation time and delta
pub mod contacts;
pub mod gameconfig;
pub mod input;
pub mod prefabstore;
pub mod worldtime;
