//! # 图像读写模块
//!
//! 隐写核心只处理内存中的像素网格，本模块负责网格与文件之间的转换。

use crate::error::StegoError;
use image::{ImageFormat, RgbImage};
use log::debug;
use std::path::Path;

/// 读取图像文件并转换为 RGB 网格，透明通道会被丢弃。
///
/// 支持 `image` 库启用的全部格式，包括 PNG 与 JPEG。
pub fn load_grid(path: &Path) -> Result<RgbImage, StegoError> {
    let image = image::open(path).map_err(|source| StegoError::UnreadableImage {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image.to_rgb8())
}

/// 以 PNG 格式保存网格，与文件扩展名无关。
///
/// 有损格式会改变通道的末位数字，破坏隐藏的消息。
pub fn save_grid(path: &Path, grid: &RgbImage) -> Result<(), StegoError> {
    grid.save_with_format(path, ImageFormat::Png)
        .map_err(|source| StegoError::UnwritableImage {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("Saved {} as PNG", path.display());
    Ok(())
}
