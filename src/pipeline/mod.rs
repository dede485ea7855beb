// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::Context;
use chrono::Utc;
use std::path::Path;
use tracing::{info, warn};

use crate::classifier::NoticeClassifier;
use crate::config::settings::OutputSettings;
use crate::domain::models::{NoticeQuery, Verdict};
use crate::fetchers::NoticeFetcher;
use crate::renderer::{self, NoticeCard, PageView};

/// 单次运行报告
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// 抓取到的公告数
    pub fetched: usize,
    /// 确认匹配数
    pub matched: usize,
    /// 无法得出结论数
    pub indeterminate: usize,
}

/// 执行一次完整的流水线
///
/// 严格顺序执行：抓取一次，逐条分类，渲染一次。
/// 错误策略统一为失败软化：抓取失败降级为空列表，
/// 分类失败降级为 `Indeterminate`，仅输出写入失败是致命的
///
/// # 参数
///
/// * `fetcher` - 抓取后端
/// * `classifier` - 公告分类器
/// * `query` - 查询条件
/// * `output` - 输出配置
///
/// # 返回值
///
/// * `Ok(RunReport)` - 本次运行的计数报告
/// * `Err` - 输出文件写入失败
pub async fn run(
    fetcher: &dyn NoticeFetcher,
    classifier: &dyn NoticeClassifier,
    query: &NoticeQuery,
    output: &OutputSettings,
) -> anyhow::Result<RunReport> {
    let notices = match fetcher.fetch(query).await {
        Ok(notices) => notices,
        Err(e) => {
            warn!(
                backend = fetcher.name(),
                error = %e,
                "Fetch failed, continuing with empty notice set"
            );
            Vec::new()
        }
    };

    let mut report = RunReport {
        fetched: notices.len(),
        ..RunReport::default()
    };
    info!(fetched = report.fetched, backend = fetcher.name(), "Notices fetched");

    // One blocking model call per notice, in upstream order
    let mut cards = Vec::new();
    for notice in &notices {
        match classifier.classify(notice).await {
            Verdict::Match => {
                info!(notice_id = %notice.id, title = %notice.title, "Notice matched");
                cards.push(NoticeCard::from_notice(notice, output.preview_chars));
                report.matched += 1;
            }
            Verdict::NoMatch => {}
            Verdict::Indeterminate(reason) => {
                warn!(notice_id = %notice.id, reason = %reason, "Verdict indeterminate");
                report.indeterminate += 1;
            }
        }
    }

    let view = PageView {
        cards,
        generated_at: Utc::now(),
    };
    let html = renderer::render_page(&view);
    renderer::write_page(Path::new(&output.path), &html)
        .with_context(|| format!("failed to publish output page to {}", output.path))?;

    info!(
        fetched = report.fetched,
        matched = report.matched,
        indeterminate = report.indeterminate,
        path = %output.path,
        "Run complete"
    );

    Ok(report)
}
