// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::settings::SearchSettings;
use crate::domain::models::{NoticeQuery, RawNotice};

pub mod json_api;
pub mod rss;

pub use json_api::JsonApiFetcher;
pub use rss::RssFetcher;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 上游返回非成功状态
    #[error("Upstream returned status {0}")]
    BadStatus(u16),
    /// 响应体无法解析
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// 公告抓取特质
///
/// 历史版本在JSON搜索接口和RSS源之间摇摆，
/// 两个后端实现同一特质并共用同一查询条件
#[async_trait]
pub trait NoticeFetcher: Send + Sync {
    /// 执行一次抓取，返回不超过限额的公告列表
    async fn fetch(&self, query: &NoticeQuery) -> Result<Vec<RawNotice>, FetchError>;

    /// 后端名称
    fn name(&self) -> &'static str;
}

/// 根据配置构造抓取后端
///
/// # 参数
///
/// * `settings` - 搜索端点配置
///
/// # 返回值
///
/// * `Ok(Box<dyn NoticeFetcher>)` - 选定的后端
/// * `Err` - 后端类型未知
pub fn build_fetcher(settings: &SearchSettings) -> anyhow::Result<Box<dyn NoticeFetcher>> {
    match settings.backend.as_str() {
        "json" => Ok(Box::new(JsonApiFetcher::new(settings))),
        "rss" => Ok(Box::new(RssFetcher::new(settings))),
        other => anyhow::bail!(
            "unknown search.backend {:?}, expected \"json\" or \"rss\"",
            other
        ),
    }
}
