//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod speech_synthesizer;
mod story_generator;

pub use speech_synthesizer::{AudioClip, AudioFormat, SpeechSynthesizerPort, SynthesisError};
pub use story_generator::{GenerationError, StoryGeneratorPort};
