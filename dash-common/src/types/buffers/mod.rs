pub mod sample_buffer;
pub mod shared;
pub mod snapshot;

pub use crate::types::buffers::sample_buffer::SampleBuffer;
pub use crate::types::buffers::shared::SharedSampleBuffer;
pub use crate::types::buffers::snapshot::Snapshot;
