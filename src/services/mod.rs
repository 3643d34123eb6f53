// Service module exports

pub mod calendar_grid;
pub mod database;
pub mod event;
pub mod overflow;
pub mod settings;
pub mod storage;
