use std::path::PathBuf;

use mirror_fs::{normalize, relative_path};
use proptest::prelude::*;

fn segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z.][a-z0-9_-]{0,6}", 0..5)
}

fn absolute(parts: &[String]) -> PathBuf {
    let mut path = PathBuf::from("/");
    for part in parts {
        path.push(part);
    }
    path
}

proptest! {
    #[test]
    fn test_relative_path_resolves_back(from in segments(), to in segments()) {
        let from = normalize(absolute(&from));
        let to = normalize(absolute(&to));

        let relative = relative_path(&from, &to);
        prop_assert!(relative.is_relative());
        prop_assert_eq!(normalize(from.join(&relative)), to);
    }

    #[test]
    fn test_normalize_is_idempotent(parts in segments()) {
        let once = normalize(absolute(&parts));
        prop_assert_eq!(normalize(&once), once.clone());
    }
}
