//! # 隐写核心模块
//!
//! 在 RGB 像素网格中隐藏和恢复消息。
//!
//! 像素 (0, 0) 是头部，保存 `消息长度 - 1`。其余字符按行优先顺序等间距地分布在整幅图像上，
//! 间距 (步长) 为 `(总像素数 - 1) / 消息长度`。编码和解码使用同一个 [`CarrierWalk`]，
//! 所以只要头部读出的长度正确，两边选中的载体像素就完全一致。

use crate::channel::{embed_char, embed_number, retrieve_char, retrieve_number};
use crate::constants::{HEADER_INDEX, MESSAGE_MAX};
use crate::error::StegoError;
use crate::message::Message;
use image::{Rgb, RgbImage};
use log::{debug, trace};

/// 按行优先顺序遍历所有像素，产出载体像素的线性索引。
///
/// 计数器从 `stride - 1` 开始，每访问一个像素先判断 `counter % stride == 0`，再自增。
/// 头部像素会被访问 (计数器照常自增)，但从不被选中。
#[derive(Debug, Clone)]
pub struct CarrierWalk {
    stride: usize,
    counter: usize,
    index: usize,
    total_pixels: usize,
    remaining: usize,
}

impl CarrierWalk {
    /// 为 `length` 个字符在 `total_pixels` 个像素上规划载体位置。
    ///
    /// # Errors
    ///
    /// 除头部外的像素不足 `length` 个时返回 `ImageTooSmall`。
    pub fn new(total_pixels: usize, length: usize) -> Result<Self, StegoError> {
        let available = total_pixels.saturating_sub(1);
        if length == 0 || length > available {
            return Err(StegoError::ImageTooSmall {
                needed: length,
                available: total_pixels,
            });
        }

        let stride = available / length;
        Ok(Self {
            stride,
            counter: stride - 1,
            index: 0,
            total_pixels,
            remaining: length,
        })
    }

    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl Iterator for CarrierWalk {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.remaining > 0 && self.index < self.total_pixels {
            let index = self.index;
            let selected = self.counter % self.stride == 0 && index != HEADER_INDEX;

            self.index += 1;
            self.counter += 1;

            if selected {
                self.remaining -= 1;
                return Some(index);
            }
        }
        None
    }
}

fn total_pixels(grid: &RgbImage) -> usize {
    grid.width() as usize * grid.height() as usize
}

fn pixel_mut(grid: &mut RgbImage, index: usize) -> &mut Rgb<u8> {
    let width = grid.width() as usize;
    grid.get_pixel_mut((index % width) as u32, (index / width) as u32)
}

fn pixel(grid: &RgbImage, index: usize) -> &Rgb<u8> {
    let width = grid.width() as usize;
    grid.get_pixel((index % width) as u32, (index / width) as u32)
}

/// 网格能承载的最长消息：除头部外每个像素一个字符，且不超过 `MESSAGE_MAX`。
pub fn capacity(grid: &RgbImage) -> usize {
    total_pixels(grid).saturating_sub(1).min(MESSAGE_MAX)
}

/// 过滤 `message` 后就地写入 `grid`。
///
/// # Errors
///
/// * 过滤后的消息为空或超过 `MESSAGE_MAX` 个字符：`InvalidMessage`。
/// * 图像像素不足以承载消息：`ImageTooSmall`。
///
/// 出错时网格保持不变。
pub fn encode(message: &str, grid: &mut RgbImage) -> Result<(), StegoError> {
    let message = Message::parse(message)?;
    encode_message(&message, grid)
}

/// 与 [`encode`] 相同，但不修改原网格，而是返回写入后的副本。
pub fn encoded(message: &str, grid: &RgbImage) -> Result<RgbImage, StegoError> {
    let mut copy = grid.clone();
    encode(message, &mut copy)?;
    Ok(copy)
}

pub fn encode_message(message: &Message, grid: &mut RgbImage) -> Result<(), StegoError> {
    let walk = CarrierWalk::new(total_pixels(grid), message.len())?;
    debug!(
        "Encoding {} characters into {}x{} pixels with stride {}",
        message.len(),
        grid.width(),
        grid.height(),
        walk.stride()
    );

    let header = u16::try_from(message.len() - 1).map_err(|_| StegoError::InvalidMessage {
        length: message.len(),
        max: MESSAGE_MAX,
    })?;
    embed_number(header, &mut pixel_mut(grid, HEADER_INDEX).0);

    for (index, &code) in walk.zip(message.codes()) {
        trace!("Carrier pixel {index} <- code {code}");
        embed_char(&mut pixel_mut(grid, index).0, code);
    }

    Ok(())
}

/// 从网格中恢复消息，结果只包含大写字母和空格。
///
/// # Errors
///
/// * 网格没有任何像素：`ImageTooSmall`。
/// * 头部记录的长度超出图像能承载的范围：`CorruptHeader`。
pub fn decode(grid: &RgbImage) -> Result<String, StegoError> {
    let total_pixels = total_pixels(grid);
    if total_pixels == 0 {
        return Err(StegoError::ImageTooSmall {
            needed: 1,
            available: 0,
        });
    }

    let length = usize::from(retrieve_number(&pixel(grid, HEADER_INDEX).0)) + 1;
    let walk = CarrierWalk::new(total_pixels, length).map_err(|_| StegoError::CorruptHeader {
        length,
        total_pixels,
    })?;
    debug!(
        "Decoding {length} characters from {total_pixels} pixels with stride {}",
        walk.stride()
    );

    Ok(walk
        .map(|index| retrieve_char(&pixel(grid, index).0))
        .collect())
}
