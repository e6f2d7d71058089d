// Service module exports

pub mod dashboard;
pub mod database;
pub mod holiday;
pub mod notification;
pub mod schedule;
pub mod settings;
pub mod storage;
pub mod watcher;
pub mod week_tracker;
