//! Story Context - 故事限界上下文
//!
//! 职责:
//! - 故事请求的取值约束（类型/语言/受众）
//! - 提示词构建（模板 vs 自定义的优先级规则）
//! - 合成语言代码映射

mod errors;
mod request;
mod value_objects;

pub use errors::StoryError;
pub use request::{PromptString, StoryRequest};
pub use value_objects::{synthesis_code_for, Audience, Language, StoryType};
