// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 分类结论
///
/// 模型调用失败与模型回答"否"是不同的结论，
/// 两者都不会渲染卡片，但在日志和测试中可以区分
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// 公告涉及目标设备
    Match,
    /// 公告不涉及目标设备
    NoMatch,
    /// 无法得出结论（调用失败、配额、响应无法解析）
    Indeterminate(String),
}

impl Verdict {
    /// 从模型的自由文本回复解析结论
    ///
    /// 回复中包含不区分大小写的 "YES" 即视为匹配
    pub fn from_reply(reply: &str) -> Self {
        if reply.to_uppercase().contains("YES") {
            Verdict::Match
        } else {
            Verdict::NoMatch
        }
    }

    /// 是否为确认的匹配
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match)
    }
}
