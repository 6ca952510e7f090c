//! registry 模块单元测试

use crate::error::DataError;
use crate::registry::{
    DATASET_NAMES, datasets, generate, generator_by_name, seeded_generator_by_name,
};

#[test]
fn test_dataset_names_fixed_order() {
    assert_eq!(
        DATASET_NAMES,
        ["Simple", "Diag", "Split", "Xor", "Circle", "Spiral"]
    );
}

#[test]
fn test_generator_by_name_known() {
    for name in DATASET_NAMES {
        let generator = generator_by_name(name).unwrap();
        let graph = generator(20);
        assert_eq!(graph.points().len(), graph.labels().len());
    }
}

#[test]
fn test_generator_by_name_unknown() {
    let err = generator_by_name("NoSuchDataset").unwrap_err();
    assert_eq!(err, DataError::UnknownDataset("NoSuchDataset".to_string()));
}

/// 名称区分大小写
#[test]
fn test_generator_by_name_case_sensitive() {
    assert!(generator_by_name("simple").is_err());
    assert!(generator_by_name("SIMPLE").is_err());
}

#[test]
fn test_seeded_generator_by_name() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    for name in DATASET_NAMES {
        let generator = seeded_generator_by_name(name).unwrap();

        let mut rng1 = StdRng::seed_from_u64(3);
        let mut rng2 = StdRng::seed_from_u64(3);
        assert_eq!(generator(30, &mut rng1), generator(30, &mut rng2));
    }

    assert!(seeded_generator_by_name("NoSuchDataset").is_err());
}

#[test]
fn test_datasets_table_complete() {
    let table = datasets();

    assert_eq!(table.len(), 6);
    for name in DATASET_NAMES {
        assert!(table.contains_key(name), "查找表缺少 {}", name);
    }
}

#[test]
fn test_generate() {
    let graph = generate("Diag", 50).unwrap();
    assert_eq!(graph.n(), 50);

    assert!(generate("Triangle", 50).is_err());
}
