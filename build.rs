use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_OUTPUT: &str = "assets/dist/bundle.css";

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    if let Err(e) = bundle_css(Path::new(CSS_ENTRY), Path::new(CSS_OUTPUT)) {
        panic!("CSS bundling failed: {}", e);
    }
}

/// Resolve the `@import`s of `entry`, minify, and write the result to `output`
fn bundle_css(entry: &Path, output: &Path) -> Result<(), String> {
    if let Some(dir) = output.parent() {
        fs::create_dir_all(dir).map_err(|e| format!("create {}: {}", dir.display(), e))?;
    }

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(entry)
        .map_err(|e| format!("bundle {}: {}", entry.display(), e))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minify: {}", e))?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("print: {}", e))?;

    fs::write(output, css.code).map_err(|e| format!("write {}: {}", output.display(), e))
}
