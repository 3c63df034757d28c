//! LLM Adapter - 文本生成客户端实现

mod fake_story_generator;
mod gemini_client;

pub use fake_story_generator::{FakeStoryGenerator, FakeStoryGeneratorConfig};
pub use gemini_client::*;
