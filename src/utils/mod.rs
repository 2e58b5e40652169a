pub mod cancel;
pub mod progress;
