//! # decimal_hide 库
//!
//! 本库包含十进制末位隐写工具的核心逻辑：通道算术、消息过滤、
//! 编码与解码，以及图像文件的读写边界。

// 声明库包含的所有模块。

pub mod channel;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod image_io;
pub mod message;
pub mod steganography;

pub use error::StegoError;
pub use message::Message;
pub use steganography::{capacity, decode, encode, encoded};
