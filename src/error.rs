//! # 错误类型模块
//!
//! 定义隐写核心算法可能返回的所有错误。
//! 文件 I/O 错误不在此列，由调用方 (handler) 通过 `anyhow` 附加上下文后传播。

use std::fmt;

/// 编码与嵌入过程中可能出现的错误。
#[derive(Debug, PartialEq, Eq)]
pub enum StegoError {
    /// 消息中存在码点超出 0-255 的字符，无法按 8 bits 编码。
    UnencodableChar { ch: char, index: usize },
    /// 消息 (含终止标记) 的比特数超过了像素数据能容纳的上限。
    MessageTooLarge { required: usize, available: usize },
    /// 比特序列长度不是 8 的整数倍，无法按字符分组解码。
    MalformedBitstream { len: usize },
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnencodableChar { ch, index } => {
                write!(
                    f,
                    "character {ch:?} at index {index} is outside the single-byte range 0-255"
                )
            }
            Self::MessageTooLarge {
                required,
                available,
            } => {
                write!(
                    f,
                    "message too large to hide in image: {required} bits required, {available} payload bytes available"
                )
            }
            Self::MalformedBitstream { len } => {
                write!(f, "bit sequence length {len} is not a multiple of 8")
            }
        }
    }
}

impl std::error::Error for StegoError {}
