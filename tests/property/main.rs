// Property-based tests for the event store, day ordering and overflow layout

#[path = "../fixtures/mod.rs"]
mod fixtures;

mod event_store_properties;
mod ordering_properties;
mod overflow_properties;
mod strategies;
