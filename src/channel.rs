//! # 通道算术模块
//!
//! 编码与解码共用的基本运算：把一位十进制数字写入通道值的个位，
//! 以及从通道值的个位读回数字。通道值的十位和百位保留原像素的外观。

use crate::constants::{CHANNELS, MAX_CODE, MAX_DIGIT};

/// 三个通道 (R, G, B)，与 `image::Rgb<u8>` 的内部数组一致。
pub type Channels = [u8; CHANNELS];

/// 清除通道值的个位。
///
/// 若清除后的基数加上任意数字 (0-9) 会超过 255，则基数再减 10，
/// 因此对任意 `d <= 9`，`round_down_to_ten(v) + d` 都不会溢出。
pub fn round_down_to_ten(value: u8) -> u8 {
    let base = value - value % 10;
    if base > u8::MAX - MAX_DIGIT {
        base - 10
    } else {
        base
    }
}

fn put_digit(channel: &mut u8, digit: u8) {
    debug_assert!(digit <= MAX_DIGIT);
    *channel = round_down_to_ten(*channel) + digit;
}

/// 将 0..=999 的数写入三个通道：个位写入 R，十位写入 G，百位写入 B。
pub fn embed_number(number: u16, channels: &mut Channels) {
    debug_assert!(number < 1000, "header value {number} exceeds three digits");

    put_digit(&mut channels[0], (number % 10) as u8);
    put_digit(&mut channels[1], (number / 10 % 10) as u8);
    put_digit(&mut channels[2], (number / 100 % 10) as u8);
}

/// [`embed_number`] 的逆运算。
pub fn retrieve_number(channels: &Channels) -> u16 {
    u16::from(channels[0] % 10)
        + u16::from(channels[1] % 10) * 10
        + u16::from(channels[2] % 10) * 100
}

/// 空格映射为 0，字母 (不区分大小写) 映射为 1..=26，其余字符映射为 0。
pub fn char_to_code(c: char) -> u8 {
    if c.is_ascii_alphabetic() {
        c.to_ascii_uppercase() as u8 - b'A' + 1
    } else {
        0
    }
}

/// 1..=26 映射为 'A'..='Z'，其余值 (包括 0) 映射为空格。
pub fn code_to_char(code: u8) -> char {
    match code {
        1..=MAX_CODE => char::from(b'A' + code - 1),
        _ => ' ',
    }
}

/// 把字符编码拆成三位数字，每位不超过 9，三位之和等于编码。
///
/// 贪心拆分：编码大于 9 时第一位先取满 9，剩余仍大于 9 时第二位取满 9，
/// 余数放入第三位。因此 0-9 只占用第三位，10-18 为 `[9, 0, r]`，19-26 为 `[9, 9, r]`。
pub fn split_code(code: u8) -> Channels {
    debug_assert!(code <= MAX_CODE);

    let mut digits = [0u8; CHANNELS];
    let mut rest = code;

    if rest > MAX_DIGIT {
        digits[0] = MAX_DIGIT;
        rest -= MAX_DIGIT;
    }
    if rest > MAX_DIGIT {
        digits[1] = MAX_DIGIT;
        rest -= MAX_DIGIT;
    }
    digits[2] = rest;

    digits
}

pub fn embed_char(channels: &mut Channels, code: u8) {
    for (channel, digit) in channels.iter_mut().zip(split_code(code)) {
        put_digit(channel, digit);
    }
}

/// 三个通道个位之和。篡改过的像素可能得到 0..=27 以外的值。
pub fn retrieve_code(channels: &Channels) -> u8 {
    channels.iter().map(|&channel| channel % 10).sum()
}

pub fn retrieve_char(channels: &Channels) -> char {
    code_to_char(retrieve_code(channels))
}
