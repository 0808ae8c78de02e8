//! # 消息模块
//!
//! 把用户输入的任意文本过滤为可隐藏的消息：只保留字母和空格。
//! A-Z 以外的字母 (如 `é`、`这`) 会被保留，但编码为 0，解码后显示为空格。

use crate::channel::{char_to_code, code_to_char};
use crate::constants::MESSAGE_MAX;
use crate::error::StegoError;
use std::fmt;

/// 经过过滤与长度校验的消息，长度在 `1..=MESSAGE_MAX` 之间。
///
/// 内部保存每个字符的编码 (0 为空格，1..=26 为字母)，因此大小写信息不会保留。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    codes: Vec<u8>,
}

impl Message {
    /// 过滤并校验输入文本。
    ///
    /// # Errors
    ///
    /// 过滤后没有剩余字符，或剩余字符超过 `MESSAGE_MAX` 时返回 `InvalidMessage`。
    pub fn parse(input: &str) -> Result<Self, StegoError> {
        let codes: Vec<u8> = input
            .chars()
            .filter(|c| c.is_alphabetic() || *c == ' ')
            .map(char_to_code)
            .collect();

        if codes.is_empty() || codes.len() > MESSAGE_MAX {
            return Err(StegoError::InvalidMessage {
                length: codes.len(),
                max: MESSAGE_MAX,
            });
        }

        Ok(Self { codes })
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// 始终为 `false`，空消息无法构造。
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn codes(&self) -> &[u8] {
        &self.codes
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.codes
            .iter()
            .try_for_each(|&code| write!(f, "{}", code_to_char(code)))
    }
}
