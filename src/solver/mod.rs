pub mod consistency;
pub mod domain;
pub mod engine;
pub mod grid;
pub mod heuristics;
pub mod network;
pub mod report;
pub mod trail;
