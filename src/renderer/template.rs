// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 页面模板
///
/// `{{generated_at}}` 和 `{{cards}}` 在渲染时替换
pub const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>C-ARM Tender Monitor</title>
<style>
  body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; margin: 0; background: #f4f6f8; color: #1f2933; }
  header { background: #1d4ed8; color: #fff; padding: 24px 32px; }
  header h1 { margin: 0; font-size: 22px; }
  header p { margin: 6px 0 0; font-size: 13px; opacity: 0.85; }
  main { max-width: 860px; margin: 24px auto; padding: 0 16px; }
  .card { background: #fff; border-radius: 8px; padding: 18px 20px; margin-bottom: 14px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
  .badge { display: inline-block; background: #dbeafe; color: #1d4ed8; font-size: 12px; font-weight: 600; padding: 2px 10px; border-radius: 10px; }
  .card h2 { margin: 10px 0 6px; font-size: 17px; }
  .deadline { font-size: 13px; color: #6b7280; margin: 0 0 8px; }
  .preview { font-size: 14px; line-height: 1.5; margin: 0 0 10px; }
  .card a { color: #1d4ed8; font-size: 14px; text-decoration: none; }
  .empty { background: #fff; border-radius: 8px; padding: 28px; text-align: center; color: #6b7280; }
</style>
</head>
<body>
<header>
<h1>C-ARM Tender Monitor</h1>
<p>Generated at {{generated_at}}</p>
</header>
<main>
{{cards}}
</main>
</body>
</html>
"#;

/// 单张卡片模板
pub const CARD_TEMPLATE: &str = r#"<div class="card">
<span class="badge">Mobile C-arm</span>
<h2>{{title}}</h2>
<p class="deadline">Deadline: {{deadline}}</p>
<p class="preview">{{preview}}</p>
<a href="{{detail_link}}">View notice</a>
</div>"#;

/// 无结果占位块
pub const EMPTY_TEMPLATE: &str =
    r#"<div class="empty">No matching tender notices found in this run.</div>"#;
