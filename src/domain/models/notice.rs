// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::settings::QuerySettings;

/// 招标公告
///
/// 来自外部招标源的单条公告记录。上游字段可能缺失，
/// 缺失字段在边界处以固定占位值替代
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawNotice {
    pub id: String,
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub detail_link: String,
}

impl Default for RawNotice {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: "No Title".to_string(),
            description: String::new(),
            deadline: "N/A".to_string(),
            detail_link: "#".to_string(),
        }
    }
}

impl RawNotice {
    /// 从可能缺失的上游字段构造公告
    ///
    /// # 参数
    ///
    /// * `id` - 公告标识
    /// * `title` - 标题
    /// * `description` - 描述内容
    /// * `deadline` - 截止日期（格式不保证）
    /// * `detail_link` - 详情页链接
    pub fn from_parts(
        id: Option<String>,
        title: Option<String>,
        description: Option<String>,
        deadline: Option<String>,
        detail_link: Option<String>,
    ) -> Self {
        Self {
            id: id.unwrap_or_default(),
            title: title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "No Title".to_string()),
            description: description.unwrap_or_default(),
            deadline: deadline
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
            detail_link: detail_link
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| "#".to_string()),
        }
    }
}

/// 排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// 按发布日期降序
    PublicationDesc,
    /// 按发布日期升序
    PublicationAsc,
}

/// 查询条件
///
/// 统一的过滤条件对象，两个抓取后端共用同一组条件
#[derive(Debug, Clone)]
pub struct NoticeQuery {
    /// CPV分类代码集合
    pub cpv_codes: Vec<String>,
    /// 自由文本关键词
    pub keyword: Option<String>,
    /// 最早发布日期
    pub published_after: Option<NaiveDate>,
    /// 结果数量上限
    pub limit: u32,
    /// 排序方式
    pub sort: SortOrder,
}

impl NoticeQuery {
    /// 从配置构造查询条件
    ///
    /// # 返回值
    ///
    /// * `Ok(NoticeQuery)` - 构造成功
    /// * `Err` - 日期或排序配置非法
    pub fn from_settings(settings: &QuerySettings) -> anyhow::Result<Self> {
        let published_after = settings
            .published_after
            .as_deref()
            .map(|raw| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|e| anyhow::anyhow!("invalid query.published_after {:?}: {}", raw, e))
            })
            .transpose()?;

        let sort = match settings.sort.as_str() {
            "desc" => SortOrder::PublicationDesc,
            "asc" => SortOrder::PublicationAsc,
            other => anyhow::bail!("invalid query.sort {:?}, expected \"desc\" or \"asc\"", other),
        };

        Ok(Self {
            cpv_codes: settings.cpv_codes.clone(),
            keyword: settings.keyword.clone(),
            published_after,
            limit: settings.limit,
            sort,
        })
    }

    /// 构造JSON后端的专家查询表达式
    ///
    /// 将CPV代码、关键词和发布日期下限拼接为单一过滤表达式
    pub fn filter_expression(&self) -> String {
        let mut clauses = Vec::new();

        if !self.cpv_codes.is_empty() {
            clauses.push(format!(
                "classification-cpv IN ({})",
                self.cpv_codes.join(" ")
            ));
        }

        if let Some(keyword) = self.keyword.as_deref().filter(|k| !k.trim().is_empty()) {
            clauses.push(format!("FT ~ (\"{}\")", keyword));
        }

        if let Some(date) = self.published_after {
            clauses.push(format!("publication-date >= {}", date.format("%Y%m%d")));
        }

        clauses.join(" AND ")
    }
}
