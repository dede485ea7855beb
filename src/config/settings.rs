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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含搜索端点、生成式模型API、查询条件和输出等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 招标搜索端点配置
    pub search: SearchSettings,
    /// 生成式模型API配置
    pub api: ApiSettings,
    /// 查询条件配置
    pub query: QuerySettings,
    /// 输出配置
    pub output: OutputSettings,
}

/// 招标搜索端点配置设置
#[derive(Debug, Deserialize)]
pub struct SearchSettings {
    /// 抓取后端类型 (json, rss)
    pub backend: String,
    /// 搜索端点URL
    pub url: String,
    /// 请求超时时间（秒）
    pub timeout: u64,
}

/// 生成式模型API配置设置
#[derive(Debug, Deserialize)]
pub struct ApiSettings {
    /// API密钥 (来自 GEMINI_API_KEY 或 TENDRS__API__KEY)
    pub key: Option<String>,
    /// 使用的模型名称
    pub model: String,
    /// API基础URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout: u64,
    /// 提示词中公告描述的最大字符数
    pub prompt_chars: usize,
}

/// 查询条件配置设置
#[derive(Debug, Deserialize)]
pub struct QuerySettings {
    /// CPV分类代码集合
    pub cpv_codes: Vec<String>,
    /// 自由文本关键词
    pub keyword: Option<String>,
    /// 最早发布日期 (YYYY-MM-DD)
    pub published_after: Option<String>,
    /// 结果数量上限
    pub limit: u32,
    /// 排序方式 (desc, asc)
    pub sort: String,
}

/// 输出配置设置
#[derive(Debug, Deserialize)]
pub struct OutputSettings {
    /// 输出HTML文件路径
    pub path: String,
    /// 卡片内容预览的最大字符数
    pub preview_chars: usize,
}

impl ApiSettings {
    /// 获取API密钥
    ///
    /// 密钥缺失会导致首次分类调用才失败，因此在启动时进行检查
    ///
    /// # Returns
    ///
    /// * `Ok(&str)` - 非空的API密钥
    /// * `Err(ConfigError)` - 密钥未配置
    pub fn key(&self) -> Result<&str, ConfigError> {
        self.key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::Message(
                    "generative API key is not configured; set GEMINI_API_KEY".to_string(),
                )
            })
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default Search settings
            .set_default("search.backend", "json")?
            .set_default("search.url", "https://api.ted.europa.eu/v3/notices/search")?
            .set_default("search.timeout", 30)?
            // Default API settings
            .set_default("api.model", "gemini-1.5-flash")?
            .set_default(
                "api.base_url",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("api.timeout", 30)?
            .set_default("api.prompt_chars", 700)?
            // Default Query settings
            // 33111400 = X-ray fluoroscopy devices
            .set_default("query.cpv_codes", vec!["33111400".to_string()])?
            .set_default("query.keyword", "C-arm")?
            .set_default("query.limit", 25)?
            .set_default("query.sort", "desc")?
            // Default Output settings
            .set_default("output.path", "index.html")?
            .set_default("output.preview_chars", 300)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("TENDRS").separator("__"));

        // The credential keeps its historical variable name
        let builder = match std::env::var("GEMINI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => builder.set_override("api.key", key)?,
            _ => builder,
        };

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
