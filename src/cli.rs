//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在 BMP 位图的像素数据中隐藏或提取一段秘密文本。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在 BMP 位图的像素数据中隐藏或提取一段秘密文本。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encode (隐藏) 和 decode (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将一段秘密消息连同终止标记隐藏到 BMP 图像的像素数据中。
    Encode(EncodeArgs),

    /// 从经过隐写的 BMP 图像中提取隐藏的消息。
    Decode(DecodeArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 用作载体的输入 BMP 图像路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的秘密消息文本 (字符码点须在 0-255 之间)。
    #[arg(short, long)]
    pub message: String,

    /// 隐写完成后保存结果图像的输出路径。
    /// 省略时默认保存为同目录下的 hidden_<原文件名>。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 已隐藏消息数据的 BMP 图像路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 可选：将提取出的消息保存到此文本文件，而不是打印到终端。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}
