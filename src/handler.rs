//! # 命令处理逻辑模块
//!
//! 包含处理 `encode`、`decode` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{CapacityArgs, DecodeArgs, EncodeArgs};
use crate::constants::{DOCTORED_PREFIX, OUTPUT_EXTENSION};
use crate::image_io::{load_grid, save_grid};
use crate::message::Message;
use crate::steganography::{capacity, decode, encode_message};
use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// 确定 encode 的输出路径。
///
/// 未指定时使用输入图像旁的 `doctored_<文件名>.png`；
/// 指定了但扩展名不是 `.png` 时在末尾补上 `.png`。
pub fn encode_destination(image: &Path, dest: Option<&Path>) -> PathBuf {
    match dest {
        Some(dest) => {
            let is_png = dest
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(OUTPUT_EXTENSION));
            if is_png {
                dest.to_path_buf()
            } else {
                let mut name = dest.as_os_str().to_owned();
                name.push(".");
                name.push(OUTPUT_EXTENSION);
                PathBuf::from(name)
            }
        }
        None => {
            let stem = image
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            image.with_file_name(format!("{DOCTORED_PREFIX}{stem}.{OUTPUT_EXTENSION}"))
        }
    }
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 处理 'Encode' 命令的执行逻辑。
///
/// 过滤并校验消息、读取图像、检查容量、写入消息，最后以 PNG 保存结果。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 消息过滤后为空或超过 1000 个字符。
/// * 无法读取输入图像，或图像像素不足以承载消息。
/// * 无法写入到目标图像文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let dest = encode_destination(&args.image, args.dest.as_deref());
    ensure_writable(&dest, args.force)?;

    let message = Message::parse(&args.message).with_context(|| {
        format!(
            "Nothing to hide in {}. \nOnly letters and spaces can be hidden.",
            format!("{:?}", args.message).red().bold()
        )
    })?;
    let dropped = args.message.chars().count() - message.len();

    let mut grid = load_grid(&args.image)?;
    let available = capacity(&grid);

    anyhow::ensure!(
        message.len() <= available,
        "Not enough space in the image to hide the message. \nRequired: {}, Available: {}",
        message.len().to_string().red().bold(),
        available.to_string().green().bold()
    );

    encode_message(&message, &mut grid).with_context(|| {
        format!(
            "Failed to hide the message in {}.",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    info!("Hid {} characters ({dropped} ignored)", message.len());

    save_grid(&dest, &grid)?;

    if dropped > 0 {
        println!(
            "Ignored {} characters that are neither letters nor spaces.",
            dropped.to_string().yellow().bold()
        );
    }
    println!(
        "{} characters have been successfully hidden and saved: {}",
        message.len().to_string().green().bold(),
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 读取图像并恢复消息。指定了 `--text` 时写入该文件，否则打印到标准输出。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 文本输出文件已存在且未指定 `--force`。
/// * 无法读取输入图像。
/// * 头部记录的长度与图像尺寸不符。
/// * 无法写入到目标文本文件。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    if let Some(text) = &args.text {
        ensure_writable(text, args.force)?;
    }

    let grid = load_grid(&args.image)?;

    let message = decode(&grid).with_context(|| {
        format!(
            "Failed to recover the message from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    info!("Recovered {} characters", message.len());

    match &args.text {
        Some(text) => {
            fs::write(text, &message).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    text.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "The message has been successfully recovered and saved: {}",
                text.to_string_lossy().green().bold()
            );
        }
        None => println!("{message}"),
    }

    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑。
///
/// # Errors
///
/// 无法读取输入图像时返回错误。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let grid = load_grid(&args.image)?;
    let pixels = u64::from(grid.width()) * u64::from(grid.height());

    println!(
        "{}: {}x{} ({} pixels), up to {} characters",
        args.image.to_string_lossy().bold(),
        grid.width(),
        grid.height(),
        pixels,
        capacity(&grid).to_string().green().bold()
    );

    Ok(())
}
