// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::config::settings::SearchSettings;
use crate::domain::models::{NoticeQuery, RawNotice, SortOrder};
use crate::fetchers::{FetchError, NoticeFetcher};

/// 搜索接口返回的字段选择列表
const NOTICE_FIELDS: [&str; 5] = ["id", "title", "description", "deadline", "detailLink"];

/// 搜索响应
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    notices: Vec<NoticeDto>,
}

/// 上游公告记录
///
/// 所有字段都可能缺失，映射到领域模型时替换为占位值
#[derive(Debug, Deserialize)]
struct NoticeDto {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, alias = "content")]
    description: Option<String>,
    #[serde(default)]
    deadline: Option<String>,
    #[serde(default, rename = "detailLink")]
    detail_link: Option<String>,
}

impl From<NoticeDto> for RawNotice {
    fn from(dto: NoticeDto) -> Self {
        RawNotice::from_parts(
            dto.id,
            dto.title,
            dto.description,
            dto.deadline,
            dto.detail_link,
        )
    }
}

/// JSON搜索后端
///
/// 向招标搜索接口发送一次结构化查询的HTTP POST
pub struct JsonApiFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl JsonApiFetcher {
    pub fn new(settings: &SearchSettings) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (compatible; tendrs/1.0)")
            .timeout(Duration::from_secs(settings.timeout))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            endpoint: settings.url.clone(),
        }
    }

    /// 构造结构化查询对象
    ///
    /// 包含过滤表达式、字段选择列表、数量上限和排序指令
    fn build_body(&self, query: &NoticeQuery) -> serde_json::Value {
        let order = match query.sort {
            SortOrder::PublicationDesc => "DESC",
            SortOrder::PublicationAsc => "ASC",
        };

        json!({
            "query": query.filter_expression(),
            "fields": NOTICE_FIELDS,
            "limit": query.limit,
            "sort": { "field": "publication-date", "order": order },
        })
    }
}

#[async_trait]
impl NoticeFetcher for JsonApiFetcher {
    /// 执行JSON搜索
    ///
    /// # 参数
    ///
    /// * `query` - 查询条件
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<RawNotice>)` - 上游顺序的公告列表
    /// * `Err(FetchError)` - 传输、状态或解析错误
    async fn fetch(&self, query: &NoticeQuery) -> Result<Vec<RawNotice>, FetchError> {
        let body = self.build_body(query);
        debug!(endpoint = %self.endpoint, "Sending notice search request");

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let text = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&text).map_err(|e| FetchError::ParseError(e.to_string()))?;

        Ok(parsed
            .notices
            .into_iter()
            .take(query.limit as usize)
            .map(RawNotice::from)
            .collect())
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
#[path = "json_api_test.rs"]
mod tests;
