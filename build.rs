use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_DIR: &str = "assets/css";
const ENTRY: &str = "assets/css/main.css";
const OUTPUT: &str = "assets/dist/bundle.css";

fn main() {
    // Rebuild when any partial changes, not just the entry file
    println!("cargo:rerun-if-changed={}", CSS_DIR);
    for entry in fs::read_dir(CSS_DIR).expect("Failed to read assets/css") {
        let path = entry.expect("Failed to read assets/css entry").path();
        if path.extension().is_some_and(|ext| ext == "css") {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }

    // Create output directory if it doesn't exist
    fs::create_dir_all("assets/dist").expect("Failed to create assets/dist directory");

    // Bundle base, shell, sidebar and page styles through main.css @imports
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());
    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .expect("Failed to bundle CSS");

    // Minify the bundled stylesheet (in-place)
    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    fs::write(OUTPUT, css.code).expect("Failed to write bundle.css");

    println!("Falcon Panel CSS bundled: {}", OUTPUT);
}
