//! # lsb_stash 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：
//! 文本与比特序列的互相转换、消息的嵌入与提取，
//! 以及供二进制入口使用的命令行定义与命令处理逻辑。

// 声明库包含的所有模块。

pub mod bits;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod steganography;
