#![allow(non_snake_case)]

mod client;

use dioxus_logger::tracing::{self, Level};

fn main() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    tracing::info!("Starting Havasi client");

    dioxus::launch(client::App);
}
