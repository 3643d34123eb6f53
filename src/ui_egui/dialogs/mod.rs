pub mod day_events_dialog;
