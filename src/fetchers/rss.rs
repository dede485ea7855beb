// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;
use tracing::debug;

use crate::config::settings::SearchSettings;
use crate::domain::models::{NoticeQuery, RawNotice, SortOrder};
use crate::fetchers::{FetchError, NoticeFetcher};

// Pre-compiled patterns for feed item extraction
static ITEM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<item>(.*?)</item>").expect("Failed to compile item regex"));
static TITLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<title>(.*?)</title>").expect("Failed to compile title regex"));
static LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<link>(.*?)</link>").expect("Failed to compile link regex"));
static DESC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<description>(.*?)</description>").expect("Failed to compile desc regex")
});
static GUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<guid[^>]*>(.*?)</guid>").expect("Failed to compile guid regex")
});
static DEADLINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<(?:\w+:)?deadline>(.*?)</(?:\w+:)?deadline>")
        .expect("Failed to compile deadline regex")
});
static TAG_STRIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("Failed to compile tag strip regex"));

/// RSS源后端
///
/// 向招标RSS源发送一次带查询串过滤的HTTP GET，
/// 从XML的 `<item>` 元素中提取公告字段
pub struct RssFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl RssFetcher {
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

    /// 构造带查询串过滤的源URL
    fn build_url(&self, query: &NoticeQuery) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();

        if !query.cpv_codes.is_empty() {
            params.push(("cpv", query.cpv_codes.join(",")));
        }
        if let Some(keyword) = query.keyword.as_deref().filter(|k| !k.trim().is_empty()) {
            params.push(("q", keyword.to_string()));
        }
        if let Some(date) = query.published_after {
            params.push(("from", date.format("%Y%m%d").to_string()));
        }
        params.push(("limit", query.limit.to_string()));
        let order = match query.sort {
            SortOrder::PublicationDesc => "desc",
            SortOrder::PublicationAsc => "asc",
        };
        params.push(("order", order.to_string()));

        format!(
            "{}?{}",
            self.endpoint,
            serde_urlencoded::to_string(&params).unwrap_or_default()
        )
    }

    /// 从单个 `<item>` 块提取一条公告
    fn parse_item(&self, item: &str) -> RawNotice {
        let id = GUID_REGEX
            .captures(item)
            .map(|c| clean_field(&c[1], false));
        let title = TITLE_REGEX
            .captures(item)
            .map(|c| clean_field(&c[1], false));
        let link = LINK_REGEX
            .captures(item)
            .map(|c| clean_field(&c[1], false));
        let deadline = DEADLINE_REGEX
            .captures(item)
            .map(|c| clean_field(&c[1], false));
        // Feed descriptions embed entity-encoded markup; strip it to plain text
        let description = DESC_REGEX
            .captures(item)
            .map(|c| clean_field(&c[1], true));

        RawNotice::from_parts(id, title, description, deadline, link)
    }
}

/// 清理一个源字段
///
/// 去掉CDATA包装，解码HTML实体，可选地剥除内嵌标签
fn clean_field(raw: &str, strip_tags: bool) -> String {
    let trimmed = raw.trim();
    let unwrapped = trimmed
        .strip_prefix("<![CDATA[")
        .and_then(|s| s.strip_suffix("]]>"))
        .unwrap_or(trimmed);

    let decoded = html_escape::decode_html_entities(unwrapped).to_string();
    if strip_tags {
        TAG_STRIP_REGEX
            .replace_all(&decoded, " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        decoded.trim().to_string()
    }
}

#[async_trait]
impl NoticeFetcher for RssFetcher {
    /// 执行一次源抓取
    ///
    /// # 参数
    ///
    /// * `query` - 查询条件
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<RawNotice>)` - 源中顺序的公告列表，无匹配项时为空
    /// * `Err(FetchError)` - 传输或状态错误
    async fn fetch(&self, query: &NoticeQuery) -> Result<Vec<RawNotice>, FetchError> {
        let url = self.build_url(query);
        debug!(url = %url, "Fetching notice feed");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let body = response.text().await?;

        Ok(ITEM_REGEX
            .captures_iter(&body)
            .take(query.limit as usize)
            .map(|c| self.parse_item(&c[1]))
            .collect())
    }

    fn name(&self) -> &'static str {
        "rss"
    }
}

#[cfg(test)]
#[path = "rss_test.rs"]
mod tests;
