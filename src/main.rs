#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), eframe::Error> {
    // Set up logging; verbosity follows RUST_LOG
    env_logger::init();

    // Run the valentine page
    valentine::run_app()
}

// The browser build starts through the library's wasm entry point.
#[cfg(target_arch = "wasm32")]
fn main() {}
