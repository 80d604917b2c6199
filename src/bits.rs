//! # 比特编解码模块
//!
//! 在文本与比特序列之间互相转换：每个字符编码为 8 bits，高位在前。
//! 本模块只做纯数据转换，对图像一无所知。

use crate::constants::BITS_PER_CHAR;
use crate::error::StegoError;

/// 将文本逐字符编码为比特序列，每个字符 8 bits，MSB 在前。
/// 输出长度恒等于字符数的 8 倍。
///
/// # Errors
///
/// 遇到码点超出 0-255 的字符时返回 [`StegoError::UnencodableChar`]。
pub fn text_to_bits(text: &str) -> Result<Vec<u8>, StegoError> {
    let mut bits = Vec::with_capacity(text.len() * BITS_PER_CHAR);

    for (index, ch) in text.chars().enumerate() {
        let byte =
            u8::try_from(u32::from(ch)).map_err(|_| StegoError::UnencodableChar { ch, index })?;

        for shift in (0..BITS_PER_CHAR).rev() {
            bits.push((byte >> shift) & 1);
        }
    }

    Ok(bits)
}

/// 将比特序列按 8 bits 一组解码回文本，是 [`text_to_bits`] 的逆运算。
///
/// # Errors
///
/// 序列长度不是 8 的整数倍时返回 [`StegoError::MalformedBitstream`]。
pub fn bits_to_text(bits: &[u8]) -> Result<String, StegoError> {
    if bits.len() % BITS_PER_CHAR != 0 {
        return Err(StegoError::MalformedBitstream { len: bits.len() });
    }

    let mut text = String::with_capacity(bits.len() / BITS_PER_CHAR);
    for group in bits.chunks_exact(BITS_PER_CHAR) {
        let byte = group.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1));
        text.push(char::from(byte));
    }

    Ok(text)
}
