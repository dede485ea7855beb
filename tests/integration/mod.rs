// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 集成测试主模块
///
/// 覆盖完整的抓取-分类-渲染流水线，
/// 包括端到端场景和失败软化行为
mod helpers;
mod pipeline_test;
