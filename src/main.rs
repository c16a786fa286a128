mod app;
mod clipboard;
mod config;
mod grid;
mod loader;
mod nav;
mod runtime;
mod selection;
mod tags;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
