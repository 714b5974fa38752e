//! Full-screen demo of the selectable list.
//!
//! Logs go to `select-nav-bar.log` in the working directory because the
//! terminal belongs to the UI. Set `SELECTABLE_LIST_LOG=debug` to see every
//! selection change.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use bubbletea_rs::{Cmd, Model, Msg, Program};
use selectable_list::prelude::*;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_ENV: &str = "SELECTABLE_LIST_LOG";
const LOG_FILE: &str = "select-nav-bar.log";

struct App {
    list: SelectableList,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut controller = Controller::seeded();
        controller.subscribe(|snapshot| {
            tracing::info!(
                title = %snapshot.bar.title,
                rows = snapshot.rows.len(),
                "state changed"
            );
        });
        let list = SelectableList::new(controller, 80);
        (Self { list }, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.list.update(msg)
    }

    fn view(&self) -> String {
        self.list.view()
    }
}

fn init_logging() -> Result<()> {
    let file = File::create(LOG_FILE).with_context(|| format!("failed to create {LOG_FILE}"))?;
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;
    tracing::info!("starting select-nav-bar demo");

    let program = Program::<App>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .build()?;
    program.run().await?;

    tracing::info!("select-nav-bar demo exited");
    Ok(())
}
