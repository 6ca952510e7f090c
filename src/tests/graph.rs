//! graph 模块单元测试

use crate::error::DataError;
use crate::graph::Graph;

fn sample_graph() -> Graph {
    Graph::new(
        vec![(0.1, 0.9), (0.6, 0.2), (0.4, 0.4), (0.9, 0.1)],
        vec![1, 0, 1, 0],
    )
}

#[test]
fn test_new_basic() {
    let graph = sample_graph();

    assert_eq!(graph.n(), 4);
    assert_eq!(graph.len(), 4);
    assert!(!graph.is_empty());
    assert_eq!(graph.points()[1], (0.6, 0.2));
    assert_eq!(graph.labels(), &[1, 0, 1, 0]);
}

#[test]
fn test_new_empty() {
    let graph = Graph::new(vec![], vec![]);

    assert_eq!(graph.n(), 0);
    assert!(graph.is_empty());
}

#[test]
#[should_panic(expected = "点数与标签数必须一致")]
fn test_new_length_mismatch_panics() {
    Graph::new(vec![(0.1, 0.2)], vec![0, 1]);
}

#[test]
fn test_get() {
    let graph = sample_graph();

    let (point, label) = graph.get(0).unwrap();
    assert_eq!(point, (0.1, 0.9));
    assert_eq!(label, 1);

    let (point, label) = graph.get(3).unwrap();
    assert_eq!(point, (0.9, 0.1));
    assert_eq!(label, 0);
}

#[test]
fn test_get_out_of_bounds() {
    let graph = sample_graph();

    assert_eq!(
        graph.get(4),
        Err(DataError::IndexOutOfBounds { index: 4, len: 4 })
    );
}

#[test]
fn test_to_arrays() {
    let graph = sample_graph();
    let (features, labels) = graph.to_arrays();

    assert_eq!(features.shape(), &[4, 2]);
    assert_eq!(labels.shape(), &[4]);

    assert_eq!(features[[0, 0]], 0.1);
    assert_eq!(features[[0, 1]], 0.9);
    assert_eq!(features[[3, 0]], 0.9);
    assert_eq!(features[[3, 1]], 0.1);

    assert_eq!(labels[0], 1.0);
    assert_eq!(labels[1], 0.0);
    assert_eq!(labels[2], 1.0);
    assert_eq!(labels[3], 0.0);
}

#[test]
fn test_to_arrays_empty() {
    let (features, labels) = Graph::new(vec![], vec![]).to_arrays();

    assert_eq!(features.shape(), &[0, 2]);
    assert_eq!(labels.shape(), &[0]);
}

/// JSON 序列化往返后数据集应保持不变
#[test]
fn test_serde_json_roundtrip() {
    let graph = sample_graph();

    let json = serde_json::to_string(&graph).unwrap();
    let restored: Graph = serde_json::from_str(&json).unwrap();

    assert_eq!(graph, restored);
}
