/// 一条消息最多可包含的字符数。
/// 头部像素的三个通道各存一位十进制数字，最大可表示 999，
/// 而头部存储的是 `长度 - 1`，因此上限为 1000。
pub const MESSAGE_MAX: usize = 1000;

/// 头部像素在行优先顺序中的索引，即像素 (0, 0)。
/// 它只存储消息长度，永远不会被选作载体像素。
pub const HEADER_INDEX: usize = 0;

/// 每个像素参与隐写的通道数 (R, G, B)。
pub const CHANNELS: usize = 3;

/// 单个通道可承载的最大十进制数字。
pub const MAX_DIGIT: u8 = 9;

/// 字符编码的最大值：0 为空格，1..=26 为 A..=Z。
pub const MAX_CODE: u8 = 26;

/// 未指定输出路径时，隐写结果文件名的前缀。
pub const DOCTORED_PREFIX: &str = "doctored_";

/// 隐写结果始终以 PNG 保存，因为只有无损格式才能保留通道的末位数字。
pub const OUTPUT_EXTENSION: &str = "png";
