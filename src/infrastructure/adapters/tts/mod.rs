//! TTS Adapter - 语音合成客户端实现

mod fake_speech_synthesizer;
mod translate_tts_client;

pub use fake_speech_synthesizer::{FakeSpeechSynthesizer, FakeSpeechSynthesizerConfig};
pub use translate_tts_client::*;
