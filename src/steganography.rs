//! # 隐写核心算法模块
//!
//! 在固定头部之后的像素数据上做最低有效位 (LSB) 替换：
//! 嵌入时清除每个像素字节的最低位并填入一个消息比特，
//! 提取时依次收集最低位并按 8 bits 重组为字符，直到遇到终止标记。

use crate::bits::text_to_bits;
use crate::constants::{BITS_PER_CHAR, TERMINATOR};
use crate::error::StegoError;

/// 将消息连同终止标记嵌入 `carrier` 中偏移 `header_size` 之后的像素数据。
///
/// 每个消息比特占用一个像素字节的最低位；比特序列之后的字节保持原样，
/// 头部字节既不读取也不修改。校验失败时 `carrier` 不会有任何改动。
///
/// # Errors
///
/// * 消息中存在码点超出 0-255 的字符时返回 [`StegoError::UnencodableChar`]。
/// * 消息与终止标记的比特数超过像素字节数时返回 [`StegoError::MessageTooLarge`]。
pub fn embed(carrier: &mut [u8], header_size: usize, message: &str) -> Result<(), StegoError> {
    let mut bits = text_to_bits(message)?;
    bits.extend(text_to_bits(TERMINATOR)?);

    let payload = carrier.get_mut(header_size..).unwrap_or_default();

    if bits.len() > payload.len() {
        return Err(StegoError::MessageTooLarge {
            required: bits.len(),
            available: payload.len(),
        });
    }

    for (byte, &bit) in payload.iter_mut().zip(bits.iter()) {
        *byte = (*byte & 0xFE) | bit;
    }

    Ok(())
}

/// 从 `carrier` 中偏移 `header_size` 之后的像素数据里提取隐藏消息。
///
/// 依次读取每个像素字节的最低位，每凑满 8 bits 重组为一个字符，
/// 一旦出现终止标记就返回标记之前的内容。扫描完全部像素数据仍未发现
/// 标记时返回 `None`，表示图像中没有隐藏消息；这是正常结果而非错误。
/// 末尾不足 8 bits 的剩余比特构不成字符，不参与解码。
pub fn extract(carrier: &[u8], header_size: usize) -> Option<String> {
    let payload = carrier.get(header_size..).unwrap_or_default();

    let mut decoded = String::with_capacity(payload.len() / BITS_PER_CHAR);
    for group in payload.chunks_exact(BITS_PER_CHAR) {
        let byte = group.iter().fold(0u8, |acc, &pixel| (acc << 1) | (pixel & 1));
        decoded.push(char::from(byte));

        if let Some(message) = decoded.strip_suffix(TERMINATOR) {
            return Some(message.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BMP_HEADER_SIZE;
    use rand::RngCore;

    /// 构造一个 54 字节零头部加 `payload_len` 字节零像素的载体。
    fn zero_carrier(payload_len: usize) -> Vec<u8> {
        vec![0u8; BMP_HEADER_SIZE + payload_len]
    }

    fn random_carrier(payload_len: usize) -> Vec<u8> {
        let mut carrier = zero_carrier(payload_len);
        rand::rng().fill_bytes(&mut carrier);
        carrier
    }

    /// 全零载体中隐藏 "Hi"：前 40 个像素字节逐位对应 "Hi###"，其余保持为零。
    #[test]
    fn embeds_hi_into_zero_carrier() {
        let mut carrier = zero_carrier(64);
        embed(&mut carrier, BMP_HEADER_SIZE, "Hi").unwrap();

        let expected_bits: [u8; 40] = [
            0, 1, 0, 0, 1, 0, 0, 0, // 'H'
            0, 1, 1, 0, 1, 0, 0, 1, // 'i'
            0, 0, 1, 0, 0, 0, 1, 1, // '#'
            0, 0, 1, 0, 0, 0, 1, 1, // '#'
            0, 0, 1, 0, 0, 0, 1, 1, // '#'
        ];
        assert_eq!(
            &carrier[BMP_HEADER_SIZE..BMP_HEADER_SIZE + 40],
            &expected_bits[..]
        );
        assert!(carrier[BMP_HEADER_SIZE + 40..].iter().all(|&byte| byte == 0));
        assert_eq!(extract(&carrier, BMP_HEADER_SIZE), Some("Hi".to_string()));
    }

    /// 头部与写入范围之外的字节逐字节不变，写入范围内只有最低位可能变化。
    #[test]
    fn header_and_tail_stay_untouched() {
        let message = "carving bits";
        let original = random_carrier(256);
        let mut modified = original.clone();
        embed(&mut modified, BMP_HEADER_SIZE, message).unwrap();

        let written = (message.chars().count() + TERMINATOR.len()) * BITS_PER_CHAR;
        assert_eq!(&modified[..BMP_HEADER_SIZE], &original[..BMP_HEADER_SIZE]);
        assert_eq!(
            &modified[BMP_HEADER_SIZE + written..],
            &original[BMP_HEADER_SIZE + written..]
        );
        for (new, old) in modified[BMP_HEADER_SIZE..]
            .iter()
            .zip(&original[BMP_HEADER_SIZE..])
        {
            assert_eq!(new & 0xFE, old & 0xFE);
        }
    }

    #[test]
    fn roundtrips_latin1_text() {
        let message = "Voilà, ça marche! É ô ü ÿ";
        let mut carrier = random_carrier(512);
        embed(&mut carrier, BMP_HEADER_SIZE, message).unwrap();
        assert_eq!(extract(&carrier, BMP_HEADER_SIZE), Some(message.to_string()));
    }

    /// "ok" 加终止标记共 5 个字符，恰好需要 40 个像素字节。
    #[test]
    fn capacity_boundary_is_exact() {
        let mut exact = zero_carrier(40);
        assert!(embed(&mut exact, BMP_HEADER_SIZE, "ok").is_ok());

        let mut short = zero_carrier(39);
        assert_eq!(
            embed(&mut short, BMP_HEADER_SIZE, "ok"),
            Err(StegoError::MessageTooLarge {
                required: 40,
                available: 39
            })
        );
        assert!(short.iter().all(|&byte| byte == 0));
    }

    #[test]
    fn empty_message_roundtrips() {
        let mut carrier = zero_carrier(24);
        embed(&mut carrier, BMP_HEADER_SIZE, "").unwrap();
        assert_eq!(extract(&carrier, BMP_HEADER_SIZE), Some(String::new()));
    }

    /// 消息自身含终止标记时，提取在第一次出现处截断。
    #[test]
    fn terminator_inside_message_truncates_extraction() {
        let mut carrier = zero_carrier(256);
        embed(&mut carrier, BMP_HEADER_SIZE, "see###you").unwrap();
        assert_eq!(extract(&carrier, BMP_HEADER_SIZE), Some("see".to_string()));
    }

    #[test]
    fn unencodable_char_is_rejected_before_writing() {
        let mut carrier = zero_carrier(256);
        assert_eq!(
            embed(&mut carrier, BMP_HEADER_SIZE, "你好"),
            Err(StegoError::UnencodableChar { ch: '你', index: 0 })
        );
        assert!(carrier.iter().all(|&byte| byte == 0));
    }

    /// 从未嵌入过消息的载体返回 None，而不是错误。
    #[test]
    fn extract_without_terminator_finds_nothing() {
        assert_eq!(extract(&zero_carrier(128), BMP_HEADER_SIZE), None);
        assert_eq!(
            extract(&[0xFF; BMP_HEADER_SIZE + 128], BMP_HEADER_SIZE),
            None
        );
    }

    /// 载体比固定头部还短时没有像素数据可用：嵌入报容量错误，提取报无消息。
    #[test]
    fn carrier_shorter_than_header_has_no_capacity() {
        let mut carrier = vec![7u8; 10];
        assert_eq!(
            embed(&mut carrier, BMP_HEADER_SIZE, "x"),
            Err(StegoError::MessageTooLarge {
                required: 32,
                available: 0
            })
        );
        assert_eq!(carrier, vec![7u8; 10]);
        assert_eq!(extract(&carrier, BMP_HEADER_SIZE), None);
    }

    /// 像素字节数不是 8 的整数倍时，末尾的零散比特被忽略，不会恐慌。
    #[test]
    fn partial_trailing_group_is_ignored() {
        let carrier = vec![1u8; BMP_HEADER_SIZE + 13];
        assert_eq!(extract(&carrier, BMP_HEADER_SIZE), None);
    }
}
