// Unit tests exercising the public API of the calendar core

#[path = "../fixtures/mod.rs"]
mod fixtures;

mod event_form_tests;
mod month_grid_tests;
mod storage_tests;
