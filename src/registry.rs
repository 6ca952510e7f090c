//! 数据集注册表
//!
//! 固定的名称 → 生成函数查找表。按未知名称查找会返回
//! [`DataError::UnknownDataset`]；注册表在运行期不可变。

use std::collections::HashMap;

use rand::rngs::StdRng;

use crate::error::DataError;
use crate::generators;
use crate::graph::Graph;

/// 生成函数：n → Graph（使用进程级随机源）
pub type GeneratorFn = fn(usize) -> Graph;

/// 可复现生成函数：(n, rng) → Graph
pub type SeededGeneratorFn = fn(usize, &mut StdRng) -> Graph;

/// 全部数据集名称（固定顺序）
pub const DATASET_NAMES: [&str; 6] = ["Simple", "Diag", "Split", "Xor", "Circle", "Spiral"];

/// 按名称查找生成函数
///
/// # 参数
/// - `name`: 数据集名称，见 [`DATASET_NAMES`]（区分大小写）
pub fn generator_by_name(name: &str) -> Result<GeneratorFn, DataError> {
    match name {
        "Simple" => Ok(generators::simple),
        "Diag" => Ok(generators::diag),
        "Split" => Ok(generators::split),
        "Xor" => Ok(generators::xor),
        "Circle" => Ok(generators::circle),
        "Spiral" => Ok(generators::spiral),
        _ => Err(DataError::UnknownDataset(name.to_string())),
    }
}

/// 按名称查找可复现生成函数（`_with_rng` 变体）
pub fn seeded_generator_by_name(name: &str) -> Result<SeededGeneratorFn, DataError> {
    match name {
        "Simple" => Ok(generators::simple_with_rng),
        "Diag" => Ok(generators::diag_with_rng),
        "Split" => Ok(generators::split_with_rng),
        "Xor" => Ok(generators::xor_with_rng),
        "Circle" => Ok(generators::circle_with_rng),
        "Spiral" => Ok(generators::spiral_with_rng),
        _ => Err(DataError::UnknownDataset(name.to_string())),
    }
}

/// 构造完整的名称 → 生成函数查找表
pub fn datasets() -> HashMap<&'static str, GeneratorFn> {
    HashMap::from([
        ("Simple", generators::simple as GeneratorFn),
        ("Diag", generators::diag),
        ("Split", generators::split),
        ("Xor", generators::xor),
        ("Circle", generators::circle),
        ("Spiral", generators::spiral),
    ])
}

/// 按名称生成数据集
///
/// # 示例
/// ```
/// use toy_datasets::generate;
///
/// let graph = generate("Xor", 100).unwrap();
/// assert_eq!(graph.n(), 100);
///
/// assert!(generate("NoSuch", 100).is_err());
/// ```
pub fn generate(name: &str, n: usize) -> Result<Graph, DataError> {
    let generator = generator_by_name(name)?;
    Ok(generator(n))
}
