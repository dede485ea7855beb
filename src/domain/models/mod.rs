// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod notice;
pub mod verdict;

pub use notice::{NoticeQuery, RawNotice, SortOrder};
pub use verdict::Verdict;
