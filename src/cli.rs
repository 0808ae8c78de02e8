//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// 把只含字母和空格的短消息藏进 RGB 像素通道的十进制末位，结果保存为 PNG。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "把只含字母和空格的短消息 (最多 1000 个字符) 藏进 RGB 像素通道的十进制末位。\n输入可以是 PNG 或 JPEG，输出始终为无损的 PNG。"
)]
pub struct Cli {
    /// 输出更多诊断日志，可重复使用 (-v, -vv, -vvv)。
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encode (隐藏)、decode (恢复) 和 capacity (容量)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将消息隐藏到图像中，并保存为 PNG。
    Encode(EncodeArgs),

    /// 从经过隐写的图像中恢复消息。
    Decode(DecodeArgs),

    /// 显示图像最多可以隐藏多少个字符。
    Capacity(CapacityArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, JPEG)。
    pub image: PathBuf,

    /// 要隐藏的消息。字母和空格以外的字符会被忽略。
    pub message: String,

    /// 结果图像的输出路径，缺少 `.png` 扩展名时自动补上。
    /// 默认为输入图像旁的 `doctored_<文件名>.png`。
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 已隐藏消息的图像文件路径。
    pub image: PathBuf,

    /// 将恢复的消息保存到此文件，而不是打印到标准输出。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 要检查的图像文件路径。
    pub image: PathBuf,
}
