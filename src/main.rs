mod app;
mod catalogue;
mod config;
mod player;
mod recommend;
mod runtime;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
