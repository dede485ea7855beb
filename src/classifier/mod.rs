// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::config::settings::ApiSettings;
use crate::domain::models::{RawNotice, Verdict};
use crate::utils::text::truncate_chars;

/// 分类错误类型
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 模型API返回非成功状态
    #[error("Model API returned status {0}")]
    BadStatus(u16),
    /// 响应格式无法解析
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// 公告分类特质
///
/// 对单条公告给出分类结论。实现必须是失败关闭的：
/// 调用失败产生 `Indeterminate`，绝不中止整个批次
#[async_trait]
pub trait NoticeClassifier: Send + Sync {
    /// 对一条公告进行分类
    async fn classify(&self, notice: &RawNotice) -> Verdict;
}

/// 生成式模型分类器
///
/// 对每条公告向 generateContent 端点发送一次提示词，
/// 将自由文本回复解析为分类结论
pub struct GeminiClassifier {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    prompt_chars: usize,
}

impl GeminiClassifier {
    /// 创建分类器
    ///
    /// # 参数
    ///
    /// * `api_key` - 已通过启动校验的API密钥
    /// * `settings` - 模型API配置
    pub fn new(api_key: String, settings: &ApiSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            api_key,
            model: settings.model.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            prompt_chars: settings.prompt_chars,
        }
    }

    /// 构造分类提示词
    ///
    /// 嵌入公告文本和严格的判定标准：
    /// 移动式外科成像设备为正例，机械臂、工业臂和散件为负例
    fn build_prompt(&self, notice: &RawNotice) -> String {
        let description = truncate_chars(&notice.description, self.prompt_chars);

        format!(
            "You are screening public procurement notices for mobile surgical imaging equipment.\n\
            Answer YES only if this notice is about a mobile C-arm fluoroscopy unit or comparable \
            mobile/surgical imaging equipment.\n\
            Answer NO if it concerns robotic arms, industrial arms, loose spare parts, or anything else.\n\
            Reply with exactly one word: YES or NO.\n\n\
            Title: {}\n\
            Description: {}",
            notice.title, description
        )
    }

    /// 发送一次提示词并取回模型的文本回复
    async fn request_reply(&self, prompt: &str) -> Result<String, ClassifyError> {
        let request_body = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ],
            "generationConfig": { "temperature": 0.0 }
        });

        // The key travels in a header so transport errors never echo it:
        // reqwest error messages include the full request URL
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::BadStatus(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ClassifyError::InvalidResponse(e.to_string()))?;

        body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                ClassifyError::InvalidResponse("missing candidate text in response".to_string())
            })
    }
}

#[async_trait]
impl NoticeClassifier for GeminiClassifier {
    /// 对一条公告进行分类
    ///
    /// 失败关闭：任何调用失败都作为 `Indeterminate` 返回，
    /// 未经确认的结论绝不产生假阳性卡片
    ///
    /// # 参数
    ///
    /// * `notice` - 待分类的公告
    ///
    /// # 返回值
    ///
    /// 分类结论，本方法不返回错误
    async fn classify(&self, notice: &RawNotice) -> Verdict {
        let prompt = self.build_prompt(notice);

        match self.request_reply(&prompt).await {
            Ok(reply) => Verdict::from_reply(&reply),
            Err(e) => {
                warn!(
                    notice_id = %notice.id,
                    error = %e,
                    "Classification call failed, treating notice as indeterminate"
                );
                Verdict::Indeterminate(e.to_string())
            }
        }
    }
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;
