//! # 命令处理逻辑模块
//!
//! 包含处理 `encode` 和 `decode` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{DecodeArgs, EncodeArgs};
use crate::constants::BMP_HEADER_SIZE;
use crate::steganography::{embed, extract};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 根据输入图像路径生成默认的输出路径：同目录下的 hidden_<原文件名>。
fn default_dest(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("hidden_{name}"))
}

/// 输出文件已存在且未指定 `--force` 时拒绝写入。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {} \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 处理 'Encode' 命令的执行逻辑。
///
/// 负责读取载体图像、调用核心嵌入函数将消息与终止标记写入像素数据的最低位，
/// 最后将结果保存到目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入路径、消息文本与输出路径的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 无法读取输入的图像文件。
/// * 消息中存在码点超出 0-255 的字符。
/// * 图像的像素数据没有足够的空间容纳消息与终止标记。
/// * 无法写入到目标图像文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let dest = args.dest.unwrap_or_else(|| default_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    let mut picture = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    embed(&mut picture, BMP_HEADER_SIZE, &args.message).with_context(|| {
        format!(
            "Failed to hide the message in image: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&dest, picture).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用核心提取函数扫描像素数据中的隐藏消息，
/// 并将结果打印到终端或保存到指定的文本文件。
/// 未发现终止标记时报告 "No hidden message found."，这是正常结果而非错误。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `DecodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 无法写入到目标文本文件。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    let picture = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let Some(message) = extract(&picture, BMP_HEADER_SIZE) else {
        println!("{}", "No hidden message found.".yellow());
        return Ok(());
    };

    match args.text {
        Some(text_path) => {
            ensure_writable(&text_path, args.force)?;

            fs::write(&text_path, message.as_bytes()).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    text_path.to_string_lossy().red().bold()
                )
            })?;

            println!(
                "The hidden message has been recovered and saved: {}",
                text_path.to_string_lossy().green().bold()
            );
        }
        None => {
            println!("Extracted message: {}", message.bold());
        }
    }

    Ok(())
}
