// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use tendrs::classifier::NoticeClassifier;
use tendrs::config::settings::OutputSettings;
use tendrs::domain::models::{NoticeQuery, RawNotice, SortOrder, Verdict};
use tendrs::fetchers::{FetchError, NoticeFetcher};

/// 返回固定公告列表的测试抓取器
pub struct StubFetcher {
    pub notices: Vec<RawNotice>,
}

#[async_trait]
impl NoticeFetcher for StubFetcher {
    async fn fetch(&self, _query: &NoticeQuery) -> Result<Vec<RawNotice>, FetchError> {
        Ok(self.notices.clone())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// 总是失败的测试抓取器
pub struct FailingFetcher;

#[async_trait]
impl NoticeFetcher for FailingFetcher {
    async fn fetch(&self, _query: &NoticeQuery) -> Result<Vec<RawNotice>, FetchError> {
        Err(FetchError::ParseError("unexpected end of input".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing-stub"
    }
}

/// 对每条公告返回同一结论的测试分类器
pub struct StubClassifier {
    pub verdict: Verdict,
}

#[async_trait]
impl NoticeClassifier for StubClassifier {
    async fn classify(&self, _notice: &RawNotice) -> Verdict {
        self.verdict.clone()
    }
}

pub fn sample_query() -> NoticeQuery {
    NoticeQuery {
        cpv_codes: vec!["33111400".to_string()],
        keyword: Some("C-arm".to_string()),
        published_after: None,
        limit: 25,
        sort: SortOrder::PublicationDesc,
    }
}

pub fn output_into(dir: &std::path::Path) -> OutputSettings {
    OutputSettings {
        path: dir.join("index.html").to_string_lossy().into_owned(),
        preview_chars: 300,
    }
}

pub fn carm_notice() -> RawNotice {
    RawNotice {
        id: "645731-2025".to_string(),
        title: "Mobile C-arm fluoroscopy unit for orthopedic theatre".to_string(),
        description: "Delivery of one mobile C-arm with flat panel detector".to_string(),
        deadline: "20250115".to_string(),
        detail_link: "https://example.com/notice/645731".to_string(),
    }
}

pub fn welding_notice() -> RawNotice {
    RawNotice {
        id: "645732-2025".to_string(),
        title: "Robotic arm for industrial welding".to_string(),
        description: "Six-axis industrial robot for the welding line".to_string(),
        deadline: "N/A".to_string(),
        detail_link: "https://example.com/notice/645732".to_string(),
    }
}
