#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    let mut res = WindowsResource::new();
    res.set("FileDescription", "convtrack CLI")
        .set("ProductName", "convtrack")
        .set("OriginalFilename", "convtrack.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed version resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
