pub mod buffers;
pub mod clock;
pub mod sample;

pub use clock::Clock;
pub use sample::Sample;
