//! 六种数据集生成规则
//!
//! 每种规则采样（或解析构造）n 个点并赋予 0/1 标签：
//! - [`simple`]: 垂直线 x1=0.5 划分
//! - [`diag`]: 对角线 x1+x2=0.5 划分
//! - [`split`]: 两条垂直线 x1=0.2 和 x1=0.8 划出的带状区域
//! - [`xor`]: 两个半平面的异或
//! - [`circle`]: 以 (0.5, 0.5) 为中心的圆
//! - [`spiral`]: 两条交错的螺旋臂（按位置赋标签）
//!
//! 每种规则均有 `_with_rng` 变体，接受调用方持有的 `StdRng`
//! 以获得可复现输出。

use rand::rngs::StdRng;

use crate::graph::Graph;
use crate::sampler::{make_points, make_points_with_rng};

/// 按判别式给点序列赋标签并构造 Graph
fn label_points(points: Vec<(f32, f32)>, predicate: impl Fn(f32, f32) -> bool) -> Graph {
    let labels = points
        .iter()
        .map(|&(x1, x2)| u8::from(predicate(x1, x2)))
        .collect();
    Graph::new(points, labels)
}

/// 垂直线 x1=0.5 划分的数据集：x1 < 0.5 时标签为 1
pub fn simple(n: usize) -> Graph {
    label_points(make_points(n), |x1, _x2| x1 < 0.5)
}

/// [`simple`] 的可复现版本
pub fn simple_with_rng(n: usize, rng: &mut StdRng) -> Graph {
    label_points(make_points_with_rng(n, rng), |x1, _x2| x1 < 0.5)
}

/// 对角线划分的数据集：x1 + x2 < 0.5 时标签为 1
pub fn diag(n: usize) -> Graph {
    label_points(make_points(n), |x1, x2| x1 + x2 < 0.5)
}

/// [`diag`] 的可复现版本
pub fn diag_with_rng(n: usize, rng: &mut StdRng) -> Graph {
    label_points(make_points_with_rng(n, rng), |x1, x2| x1 + x2 < 0.5)
}

/// 两条垂直线划分的数据集：x1 < 0.2 或 x1 > 0.8 时标签为 1
pub fn split(n: usize) -> Graph {
    label_points(make_points(n), |x1, _x2| x1 < 0.2 || x1 > 0.8)
}

/// [`split`] 的可复现版本
pub fn split_with_rng(n: usize, rng: &mut StdRng) -> Graph {
    label_points(make_points_with_rng(n, rng), |x1, _x2| {
        x1 < 0.2 || x1 > 0.8
    })
}

/// 异或数据集：两坐标分居 0.5 两侧时标签为 1
pub fn xor(n: usize) -> Graph {
    label_points(make_points(n), |x1, x2| {
        (x1 < 0.5 && x2 > 0.5) || (x1 > 0.5 && x2 < 0.5)
    })
}

/// [`xor`] 的可复现版本
pub fn xor_with_rng(n: usize, rng: &mut StdRng) -> Graph {
    label_points(make_points_with_rng(n, rng), |x1, x2| {
        (x1 < 0.5 && x2 > 0.5) || (x1 > 0.5 && x2 < 0.5)
    })
}

/// 圆形数据集：点落在以 (0.5, 0.5) 为中心、半径平方 0.1 的圆外时标签为 1
pub fn circle(n: usize) -> Graph {
    label_points(make_points(n), circle_predicate)
}

/// [`circle`] 的可复现版本
pub fn circle_with_rng(n: usize, rng: &mut StdRng) -> Graph {
    label_points(make_points_with_rng(n, rng), circle_predicate)
}

fn circle_predicate(x1: f32, x2: f32) -> bool {
    let (cx, cy) = (x1 - 0.5, x2 - 0.5);
    cx * cx + cy * cy > 0.1
}

/// 螺旋数据集：两条交错的螺旋臂，前 n/2 个点（臂 A）标签为 0，
/// 后 n/2 个点（臂 B）标签为 1
///
/// 点由参数曲线解析构造，不经过均匀采样器。
/// n 为奇数时按向下取整划分，实际样本数为 2*(n/2)。
pub fn spiral(n: usize) -> Graph {
    // f(t) = t*cos(t)/20, g(t) = t*sin(t)/20
    fn x_of(t: f32) -> f32 {
        t * t.cos() / 20.0
    }
    fn y_of(t: f32) -> f32 {
        t * t.sin() / 20.0
    }

    let half = n / 2;
    let mut points = Vec::with_capacity(half * 2);

    // 臂 A：正向参数
    for i in 5..5 + half {
        let t = 10.0 * (i as f32 / half as f32);
        points.push((x_of(t) + 0.5, y_of(t) + 0.5));
    }
    // 臂 B：负向参数且交换坐标，得到旋转的第二条臂
    for i in 5..5 + half {
        let t = -10.0 * (i as f32 / half as f32);
        points.push((y_of(t) + 0.5, x_of(t) + 0.5));
    }

    let mut labels = vec![0; half];
    labels.extend(vec![1; half]);
    Graph::new(points, labels)
}

/// [`spiral`] 的签名统一版本
///
/// 螺旋点是解析构造的，不消耗随机源；参数仅为与其他
/// `_with_rng` 变体保持函数签名一致。
pub fn spiral_with_rng(n: usize, _rng: &mut StdRng) -> Graph {
    spiral(n)
}
