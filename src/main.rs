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

use tendrs::classifier::GeminiClassifier;
use tendrs::config::settings::Settings;
use tendrs::domain::models::NoticeQuery;
use tendrs::fetchers;
use tendrs::pipeline;
use tendrs::utils::telemetry;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，单次无参数调用：
/// 加载配置，抓取公告，逐条分类，渲染输出页面
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting tendrs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Validate the credential before any network call
    let api_key = settings.api.key()?.to_string();

    // 4. Initialize components
    let fetcher = fetchers::build_fetcher(&settings.search)?;
    let classifier = GeminiClassifier::new(api_key, &settings.api);
    let query = NoticeQuery::from_settings(&settings.query)?;

    // 5. Run the pipeline once
    pipeline::run(
        fetcher.as_ref(),
        &classifier,
        &query,
        &settings.output,
    )
    .await?;

    Ok(())
}
