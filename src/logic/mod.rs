//! Logic Module - Detection Engine Components
//!
//! Contains the acoustic detection pipeline: audio source, feature
//! extraction, heuristic classification, threat evaluation, escalation
//! state machine, metrics/ledger and the scan scheduler.

// Core modules
pub mod audio;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod errors;
pub mod escalation;
pub mod features;
pub mod ledger;
pub mod report;
pub mod scanner;

// Pipeline stages
pub mod classifier;
pub mod threat;
