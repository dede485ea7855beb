// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 按字符数截断文本
///
/// 截断发生在字符边界上，多字节字符不会被切开
///
/// # 参数
///
/// * `text` - 输入文本
/// * `max_chars` - 最大字符数
///
/// # 返回值
///
/// 不超过 `max_chars` 个字符的前缀
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
