// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::domain::models::RawNotice;
use crate::utils::text::truncate_chars;

mod template;

/// 渲染错误类型
///
/// 输出文件是程序唯一的外部可见产物，写入失败是致命错误
#[derive(Error, Debug)]
pub enum RenderError {
    /// 写入输出文件失败
    #[error("Failed to write output file: {0}")]
    Io(#[from] std::io::Error),
}

/// 卡片视图对象
///
/// 所有文本字段在构造时即完成HTML转义，
/// 模板替换阶段不再接触未转义的上游数据
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeCard {
    pub title: String,
    pub deadline: String,
    pub preview: String,
    pub detail_link: String,
}

impl NoticeCard {
    /// 从公告构造卡片视图
    ///
    /// # 参数
    ///
    /// * `notice` - 已确认匹配的公告
    /// * `preview_chars` - 内容预览的最大字符数
    pub fn from_notice(notice: &RawNotice, preview_chars: usize) -> Self {
        Self {
            title: html_escape::encode_text(&notice.title).to_string(),
            deadline: html_escape::encode_text(&format_deadline(&notice.deadline)).to_string(),
            preview: html_escape::encode_text(truncate_chars(&notice.description, preview_chars))
                .to_string(),
            detail_link: html_escape::encode_double_quoted_attribute(&notice.detail_link)
                .to_string(),
        }
    }
}

/// 页面视图对象
#[derive(Debug, Clone)]
pub struct PageView {
    pub cards: Vec<NoticeCard>,
    pub generated_at: DateTime<Utc>,
}

/// 重排截止日期
///
/// 恰好8位数字的 `YYYYMMDD` 重排为 `YYYY-MM-DD`，其余原样返回
pub fn format_deadline(raw: &str) -> String {
    if raw.len() == 8 && raw.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}-{}-{}", &raw[..4], &raw[4..6], &raw[6..8])
    } else {
        raw.to_string()
    }
}

/// 渲染完整页面
///
/// # 参数
///
/// * `view` - 页面视图对象
///
/// # 返回值
///
/// 完整的HTML文档；无卡片时包含"无结果"占位块
pub fn render_page(view: &PageView) -> String {
    let cards_html = if view.cards.is_empty() {
        template::EMPTY_TEMPLATE.to_string()
    } else {
        view.cards
            .iter()
            .map(|card| {
                template::CARD_TEMPLATE
                    .replace("{{title}}", &card.title)
                    .replace("{{deadline}}", &card.deadline)
                    .replace("{{preview}}", &card.preview)
                    .replace("{{detail_link}}", &card.detail_link)
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    template::PAGE_TEMPLATE
        .replace(
            "{{generated_at}}",
            &view.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        )
        .replace("{{cards}}", &cards_html)
}

/// 写入输出文件
///
/// 先写临时文件再原子改名，写入中途崩溃不会留下截断的页面
///
/// # 参数
///
/// * `path` - 输出文件路径
/// * `html` - 完整的HTML文档
///
/// # 返回值
///
/// * `Ok(())` - 写入并替换成功
/// * `Err(RenderError)` - IO错误
pub fn write_page(path: &Path, html: &str) -> Result<(), RenderError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut tmp_name = OsString::from(path.as_os_str());
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    fs::write(tmp_path, html)?;
    fs::rename(tmp_path, path)?;
    debug!(path = %path.display(), bytes = html.len(), "Output page written");

    Ok(())
}

#[cfg(test)]
#[path = "renderer_test.rs"]
mod tests;
