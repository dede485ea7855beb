// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 分类模块
///
/// 调用生成式语言模型判断公告是否涉及移动式外科成像设备
pub mod classifier;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体：招标公告、查询条件和分类结论
pub mod domain;

/// 抓取模块
///
/// 实现招标公告的抓取后端（JSON API 和 RSS 源）
pub mod fetchers;

/// 流水线模块
///
/// 组合抓取、分类和渲染为一次完整的运行
pub mod pipeline;

/// 渲染模块
///
/// 将匹配的公告渲染为静态HTML页面
pub mod renderer;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
