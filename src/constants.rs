/// BMP 文件的标准头部大小 (字节)。
/// 隐写操作将跳过这个头部，从像素数据开始。
pub const BMP_HEADER_SIZE: usize = 54;

/// 附加在隐藏消息末尾的终止标记。
/// 提取时以该标记第一次出现的位置作为消息的结束；
/// 消息本身若包含该标记，提取结果会在此处被截断，这是格式的固有限制。
pub const TERMINATOR: &str = "###";

/// 每个字符编码所占的比特数。
/// 每个字符按 `u8` (8 bits) 处理，每个像素字节的最低位存储 1 bit，
/// 因此每个字符需要 8 个像素字节。
pub const BITS_PER_CHAR: usize = 8;
