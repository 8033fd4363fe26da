//! Turn orchestration: streaming generation with automatic tool invocation.

pub mod stream;

pub use stream::{collect_stream, stream_turn};
