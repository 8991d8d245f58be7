use crate::error::NavError;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use super::client::{build_client, fetch_fragment};

/// One fragment request. `seq` is the navigation sequence number the
/// controller uses to discard stale results.
pub struct FetchCommand {
    pub seq: u64,
    pub view_id: String,
    pub url: String,
}

pub struct FetchResult {
    pub seq: u64,
    pub view_id: String,
    pub url: String,
    pub outcome: Result<String, NavError>,
}

pub fn spawn_worker(
    ctx: eframe::egui::Context,
    timeout_secs: u64,
) -> (Sender<FetchCommand>, Receiver<FetchResult>) {
    let (cmd_tx, cmd_rx) = channel::<FetchCommand>();
    let (res_tx, res_rx) = channel::<FetchResult>();

    thread::spawn(move || {
        let client = build_client(timeout_secs);
        while let Ok(cmd) = cmd_rx.recv() {
            let outcome = match &client {
                Ok(client) => fetch_fragment(client, &cmd.url),
                Err(e) => Err(NavError::Transport(e.to_string())),
            };
            let _ = res_tx.send(FetchResult {
                seq: cmd.seq,
                view_id: cmd.view_id,
                url: cmd.url,
                outcome,
            });
            ctx.request_repaint();
        }
    });

    (cmd_tx, res_rx)
}
