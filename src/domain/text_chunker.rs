//! 语音合成文本分块器
//!
//! 合成接口对单次请求的文本长度有上限，长故事需要先切块再逐块合成。
//! 切块在句末标点处断开，短句打包进同一块，超长句按次级标点或字符数硬切

/// 默认单块最大字符数
/// 与合成接口的输入上限一致
pub const DEFAULT_MAX_CHARS: usize = 100;

/// 文本分块配置
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    /// 单块最大字符数
    pub max_chars: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

/// 检查是否为句末标点（首选断块位置）
///
/// '।' (U+0964) 与 '॥' (U+0965) 是印地语等印度诸语言的句号
#[inline]
fn is_sentence_end(ch: char) -> bool {
    matches!(ch, '.' | '?' | '!' | '।' | '॥')
}

/// 检查是否为次级断点（逗号等，仅在句子超长时使用）
#[inline]
fn is_clause_break(ch: char) -> bool {
    matches!(ch, ',' | ';' | ':')
}

/// 按句末标点分割单行文本
fn split_sentences(line: &str) -> Vec<String> {
    let mut sentences: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in line.chars() {
        current.push(ch);

        if is_sentence_end(ch) {
            let trimmed = current.trim().to_string();
            if !trimmed.is_empty() {
                sentences.push(trimmed);
            }
            current.clear();
        }
    }

    // 剩余内容（无句末标点的结尾）
    let trimmed = current.trim().to_string();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }

    sentences
}

/// 切分超过 max_chars 的单句
///
/// 优先在次级标点处断开，否则到达上限时按字符数硬切
fn split_long_sentence(sentence: &str, max_chars: usize) -> Vec<String> {
    let mut pieces: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut char_count = 0;

    for ch in sentence.chars() {
        current.push(ch);
        char_count += 1;

        let should_split = if char_count >= max_chars {
            true // 硬上限
        } else {
            // 次级标点且已过半，提前断开避免下一个断点越界
            is_clause_break(ch) && char_count >= max_chars / 2
        };

        if should_split {
            let trimmed = current.trim().to_string();
            if !trimmed.is_empty() {
                pieces.push(trimmed);
            }
            current.clear();
            char_count = 0;
        }
    }

    let trimmed = current.trim().to_string();
    if !trimmed.is_empty() {
        pieces.push(trimmed);
    }

    pieces
}

/// 对文本进行分块
///
/// 分块策略:
/// 1. 按行分割（支持 \n 和 \r\n），跨行不合并
/// 2. 每行按句末标点分割为句子
/// 3. 超长句按次级标点/字符数再切
/// 4. 相邻短句打包进同一块，直到接近 max_chars
///
/// 每个返回块的字符数都不超过 max_chars
pub fn chunk_text(text: &str, config: &ChunkConfig) -> Vec<String> {
    let max_chars = config.max_chars.max(1);
    let mut chunks: Vec<String> = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let mut buffer = String::new();
        let mut buffer_chars = 0;

        for sentence in split_sentences(line) {
            let pieces = if sentence.chars().count() > max_chars {
                split_long_sentence(&sentence, max_chars)
            } else {
                vec![sentence]
            };

            for piece in pieces {
                let piece_chars = piece.chars().count();

                // 放不下就先落盘当前块（加 1 是句间空格）
                if buffer_chars > 0 && buffer_chars + 1 + piece_chars > max_chars {
                    chunks.push(std::mem::take(&mut buffer));
                    buffer_chars = 0;
                }

                if buffer_chars > 0 {
                    buffer.push(' ');
                    buffer_chars += 1;
                }
                buffer.push_str(&piece);
                buffer_chars += piece_chars;
            }
        }

        if !buffer.is_empty() {
            chunks.push(buffer);
        }
    }

    chunks
}

/// 使用默认配置分块（便捷方法）
pub fn chunk_text_default(text: &str) -> Vec<String> {
    chunk_text(text, &ChunkConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_chunk() {
        let chunks = chunk_text_default("A small story.");
        assert_eq!(chunks, vec!["A small story."]);
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(chunk_text_default("").is_empty());
        assert!(chunk_text_default("   \n\n  ").is_empty());
    }

    #[test]
    fn test_sentences_packed_up_to_limit() {
        let config = ChunkConfig { max_chars: 30 };
        let text = "One fox ran. Two owls sat. Three bears slept well.";
        let chunks = chunk_text(text, &config);

        // 前两句打包（26 字符），第三句放不下另起一块
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], "One fox ran. Two owls sat.");
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 30);
        }
    }

    #[test]
    fn test_every_chunk_respects_max_chars() {
        let config = ChunkConfig { max_chars: 40 };
        let text = "Once upon a time there was a very long sentence without any punctuation that keeps on going and going";
        let chunks = chunk_text(text, &config);

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 40, "chunk too long: {}", chunk);
        }
    }

    #[test]
    fn test_long_sentence_prefers_clause_break() {
        let config = ChunkConfig { max_chars: 30 };
        let text = "A clever crow found a pitcher, but the water level was too low for its beak.";
        let chunks = chunk_text(text, &config);

        // 逗号处断开，而不是切在单词中间
        assert!(chunks[0].ends_with(','), "expected clause break: {:?}", chunks);
    }

    #[test]
    fn test_devanagari_danda_splits_sentences() {
        let config = ChunkConfig { max_chars: 25 };
        let text = "एक समय की बात है। जंगल में एक शेर रहता था।";
        let chunks = chunk_text(text, &config);

        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].ends_with('।'));
    }

    #[test]
    fn test_lines_not_merged_across_chunks() {
        let config = ChunkConfig { max_chars: 100 };
        let text = "First paragraph.\nSecond paragraph.";
        let chunks = chunk_text(text, &config);

        // 跨行不合并
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], "First paragraph.");
        assert_eq!(chunks[1], "Second paragraph.");
    }
}
