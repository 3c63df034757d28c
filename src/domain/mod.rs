//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Story Context: 故事请求与提示词构建
//!
//! text_chunker 为共享的语音合成文本分块器

pub mod story;

mod text_chunker;

pub use text_chunker::{chunk_text, ChunkConfig};
