// Copyright @yucwang 2026

pub mod dfg;
