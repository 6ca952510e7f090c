//! Graph - 持有点和标签的数据集聚合体

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// 二维标注点数据集
///
/// 点按生成顺序排列，标签与点按下标一一对应。
/// 构造后不可变，只能通过访问器读取。
///
/// # 示例
/// ```
/// use toy_datasets::generators::simple;
///
/// let graph = simple(50);
/// assert_eq!(graph.n(), 50);
/// for (&(x1, _x2), &label) in graph.points().iter().zip(graph.labels()) {
///     assert_eq!(label, u8::from(x1 < 0.5));
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// 样本数量
    n: usize,
    /// 点序列，坐标通常在 [0, 1) 内（螺旋点可能略微超出）
    points: Vec<(f32, f32)>,
    /// 标签序列，取值 0 或 1
    labels: Vec<u8>,
}

impl Graph {
    /// 创建新的 Graph
    ///
    /// # 参数
    /// - `points`: 点序列
    /// - `labels`: 标签序列（必须与 points 等长）
    ///
    /// # Panics
    /// 如果 points 和 labels 的长度不一致
    pub fn new(points: Vec<(f32, f32)>, labels: Vec<u8>) -> Self {
        assert_eq!(
            points.len(),
            labels.len(),
            "Graph: 点数与标签数必须一致，得到 {} vs {}",
            points.len(),
            labels.len()
        );
        let n = points.len();
        Self { n, points, labels }
    }

    /// 样本数量
    pub fn n(&self) -> usize {
        self.n
    }

    /// 样本数量（同 `n()`，惯用命名）
    pub fn len(&self) -> usize {
        self.n
    }

    /// 数据集是否为空
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// 获取点序列
    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }

    /// 获取标签序列
    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// 获取第 index 个样本
    ///
    /// # 返回
    /// (point, label) 元组
    pub fn get(&self, index: usize) -> Result<((f32, f32), u8), DataError> {
        if index >= self.n {
            return Err(DataError::IndexOutOfBounds {
                index,
                len: self.n,
            });
        }
        Ok((self.points[index], self.labels[index]))
    }

    /// 转换为 ndarray 数组，便于训练代码直接消费
    ///
    /// # 返回
    /// (features, labels) 元组
    /// - features: [N, 2]
    /// - labels: [N]（0.0 或 1.0）
    pub fn to_arrays(&self) -> (Array2<f32>, Array1<f32>) {
        let mut data = Vec::with_capacity(self.n * 2);
        for &(x1, x2) in &self.points {
            data.push(x1);
            data.push(x2);
        }
        let features =
            Array2::from_shape_vec((self.n, 2), data).expect("特征数据长度与形状 [N, 2] 一致");
        let labels = Array1::from_iter(self.labels.iter().map(|&label| f32::from(label)));
        (features, labels)
    }
}
