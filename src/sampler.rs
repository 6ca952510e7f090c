//! 均匀随机点采样原语
//!
//! 在单位正方形内采样点，每个坐标独立均匀地取自 [0, 1)。

use rand::Rng;
use rand::rngs::StdRng;

/// 生成 n 个随机点（使用进程级随机源）
///
/// # 参数
/// - `n`: 点数量，n=0 时返回空序列
///
/// # 返回
/// n 个点，每个坐标独立均匀地取自 [0, 1)
pub fn make_points(n: usize) -> Vec<(f32, f32)> {
    let mut rng = rand::thread_rng();
    sample(n, &mut rng)
}

/// 生成 n 个随机点（使用调用方持有的随机源）
///
/// 并发生成或需要可复现输出时，每个调用方应持有独立的
/// `StdRng`（如 `StdRng::seed_from_u64(seed)`），避免跨调用干扰。
/// 相同种子、相同 n 的两次调用产出逐位一致。
pub fn make_points_with_rng(n: usize, rng: &mut StdRng) -> Vec<(f32, f32)> {
    sample(n, rng)
}

fn sample<R: Rng>(n: usize, rng: &mut R) -> Vec<(f32, f32)> {
    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let x1: f32 = rng.gen_range(0.0..1.0);
        let x2: f32 = rng.gen_range(0.0..1.0);
        points.push((x1, x2));
    }
    points
}
