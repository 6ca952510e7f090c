//! 单元测试

mod graph;
mod registry;
