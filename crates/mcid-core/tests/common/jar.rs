//! Writes small jar (ZIP) fixtures for integration tests.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Create a jar at `path` with one tiny JSON body per entry name.
pub fn write_jar<S: AsRef<str>>(path: &Path, entries: &[S]) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let opts = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for entry in entries {
        let name: &str = entry.as_ref();
        zip.start_file(name, opts).unwrap();
        zip.write_all(br#"{"parent":"item/generated"}"#).unwrap();
    }
    zip.finish().unwrap();
}

/// Item model entry path for `stem` under `namespace`.
pub fn item(namespace: &str, stem: &str) -> String {
    format!("assets/{namespace}/models/item/{stem}.json")
}
