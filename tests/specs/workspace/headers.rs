//! Source header specs
//!
//! Every library source file carries the workspace license and owner.

use std::fs;
use std::path::{Path, PathBuf};

const HEADER: &str = "// SPDX-License-Identifier: MIT\n// Copyright (c) 2026 The Village SDK Authors\n";

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

#[test]
fn crate_sources_carry_workspace_license_header() {
    let crates = Path::new(env!("CARGO_MANIFEST_DIR")).join("crates");
    let mut files = Vec::new();
    rust_sources(&crates, &mut files);
    assert!(!files.is_empty());

    for file in files {
        let source = fs::read_to_string(&file).unwrap();
        assert!(
            source.starts_with(HEADER),
            "{} has a foreign header",
            file.display()
        );
    }
}
