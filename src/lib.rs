//! # Toy Datasets
//!
//! 二维玩具分类数据集生成器：在单位正方形内采样 N 个随机点，
//! 按固定的几何判别规则赋予 0/1 标签，用于可视化和测试分类算法
//! （如玩具神经网络演示）。
//!
//! # 主要组件
//!
//! - [`Graph`]: 持有点和标签的数据集聚合体
//! - [`generators`]: 六种生成规则（Simple/Diag/Split/Xor/Circle/Spiral）
//! - [`registry`]: 名称 → 生成函数的查找表
//! - [`sampler`]: 均匀随机点采样原语
//! - [`DataError`]: 数据集错误类型
//!
//! # 使用示例
//!
//! ```
//! use toy_datasets::{generate, generators};
//!
//! // 直接调用生成函数
//! let graph = generators::xor(100);
//! assert_eq!(graph.points().len(), graph.labels().len());
//!
//! // 或通过注册表按名称生成
//! let graph = generate("Circle", 100).unwrap();
//! assert_eq!(graph.n(), 100);
//! ```

pub mod error;
pub mod generators;
pub mod graph;
pub mod registry;
pub mod sampler;

#[cfg(test)]
mod tests;

// Re-exports
pub use error::DataError;
pub use graph::Graph;
pub use registry::{
    DATASET_NAMES, GeneratorFn, SeededGeneratorFn, datasets, generate, generator_by_name,
    seeded_generator_by_name,
};
pub use sampler::{make_points, make_points_with_rng};
