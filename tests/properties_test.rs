//! Property-based tests for the rewrite engine
//!
//! Two invariants hold for any input: a second pass over already-synced
//! lines changes nothing, and rewriting never adds or removes lines.

use proptest::prelude::*;

use sync_with_uv::config::db::{DependencyDb, RepoMapping};
use sync_with_uv::core::index::VersionIndex;
use sync_with_uv::core::lock::LockedPackage;
use sync_with_uv::core::rewrite;

fn fixture_index(locked: &str, dep_version: &str) -> VersionIndex {
    let packages = vec![
        LockedPackage {
            name: "exampletool".to_string(),
            version: locked.to_string(),
        },
        LockedPackage {
            name: "examplelib".to_string(),
            version: dep_version.to_string(),
        },
    ];
    let db: DependencyDb = std::iter::once((
        "exampletool".to_string(),
        RepoMapping {
            repo: "https://example.org/exampletool".to_string(),
            rev: "v${rev}".to_string(),
        },
    ))
    .collect();
    VersionIndex::build(&packages, &[], &db)
}

fn fixture_config(indent: usize, pinned: &str, dep_spec: &str) -> String {
    format!(
        concat!(
            "repos:\n",
            "  - repo: https://example.org/exampletool\n",
            "{indent}rev: v{pinned}\n",
            "    hooks:\n",
            "      - id: exampletool\n",
            "        additional_dependencies:\n",
            "        - examplelib{spec}\n",
        ),
        indent = " ".repeat(indent),
        pinned = pinned,
        spec = dep_spec,
    )
}

proptest! {
    #[test]
    fn sync_is_idempotent_and_preserves_line_count(
        locked in "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}",
        pinned in "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}",
        dep_version in "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}",
        dep_spec in "[><=]=[0-9]{1,2}(\\.[0-9]{1,2})?",
        indent in 2usize..8,
    ) {
        let index = fixture_index(&locked, &dep_version);
        let config = fixture_config(indent, &pinned, &dep_spec);

        let mut lines: Vec<String> = config.split_inclusive('\n').map(str::to_string).collect();
        let count = lines.len();

        rewrite::sync_revisions(&mut lines, &index, false);
        rewrite::sync_additional_dependencies(&mut lines, &index);
        prop_assert_eq!(lines.len(), count);

        let after_first = lines.clone();
        let rev_updates = rewrite::sync_revisions(&mut lines, &index, false);
        let dep_updates = rewrite::sync_additional_dependencies(&mut lines, &index);

        prop_assert!(rev_updates.is_empty());
        prop_assert!(dep_updates.is_empty());
        prop_assert_eq!(&lines, &after_first);
        prop_assert_eq!(lines.len(), count);
    }

    #[test]
    fn sync_touches_only_candidate_lines(
        locked in "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}",
        pinned in "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}",
        dep_version in "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}",
        dep_spec in "[><=]=[0-9]{1,2}(\\.[0-9]{1,2})?",
    ) {
        let index = fixture_index(&locked, &dep_version);
        let config = fixture_config(4, &pinned, &dep_spec);

        let original: Vec<String> = config.split_inclusive('\n').map(str::to_string).collect();
        let mut lines = original.clone();

        rewrite::sync_revisions(&mut lines, &index, false);
        rewrite::sync_additional_dependencies(&mut lines, &index);

        // only the rev line (2) and the pin line (6) may differ
        for (i, (before, after)) in original.iter().zip(&lines).enumerate() {
            if i != 2 && i != 6 {
                prop_assert_eq!(before, after, "line {} changed", i);
            }
        }
        prop_assert_eq!(&lines[2], &format!("    rev: v{locked}\n"));
        prop_assert_eq!(&lines[6], &format!("        - examplelib=={dep_version}\n"));
    }
}
