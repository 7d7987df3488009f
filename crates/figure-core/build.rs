// File: crates/figure-core/build.rs
// Summary: Build script to link Windows system libraries Skia needs for the raster backend.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW (font manager lookup)
        println!("cargo:rustc-link-lib=advapi32");
    }
}
