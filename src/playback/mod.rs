pub mod state;

pub use state::{signs_per_minute_to_milliseconds, PlaybackState};
