//! # 错误类型模块
//!
//! 定义隐写核心与图像读写边界可能产生的全部错误。

use std::path::PathBuf;
use thiserror::Error;

/// 编码、解码或读写图像时可能发生的错误。
#[derive(Error, Debug)]
pub enum StegoError {
    #[error("Invalid message: {length} usable characters (allowed: 1 to {max})")]
    InvalidMessage { length: usize, max: usize },

    #[error("Image too small: {needed} characters need at least {} pixels, image has {available}", .needed + 1)]
    ImageTooSmall { needed: usize, available: usize },

    #[error("Corrupt header: length {length} does not fit an image of {total_pixels} pixels")]
    CorruptHeader { length: usize, total_pixels: usize },

    #[error("Unable to read image {}: {source}", .path.display())]
    UnreadableImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unable to write image {}: {source}", .path.display())]
    UnwritableImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
