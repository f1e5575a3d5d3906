//! Tauri host adapter
//! Tauri 宿主适配器
//!
//! Exposes the gallery channel to a Tauri webview as the `gallery_saver`
//! plugin. The frontend calls
//! `invoke("plugin:gallery_saver|invoke_method", { method, arguments })` and
//! receives the serialized [`MethodResponse`].

use gs_core::channel::{ArgumentMap, MethodResponse};
use tauri::plugin::{Builder, TauriPlugin};
use tauri::{Manager, Runtime, State};

use crate::channel::MethodChannel;

pub const PLUGIN_NAME: &str = "gallery_saver";

/// Client side of the channel, managed as Tauri state.
pub struct GallerySaverState {
    channel: MethodChannel,
}

#[tauri::command]
async fn invoke_method(
    state: State<'_, GallerySaverState>,
    method: String,
    arguments: Option<ArgumentMap>,
) -> Result<MethodResponse, String> {
    state
        .channel
        .invoke_method(&method, arguments.unwrap_or_default())
        .await
        .map_err(|e| e.to_string())
}

/// Build the Tauri plugin forwarding into `channel`.
///
/// The native handler must already be attached to the same bus.
pub fn init<R: Runtime>(channel: MethodChannel) -> TauriPlugin<R> {
    Builder::new(PLUGIN_NAME)
        .invoke_handler(tauri::generate_handler![invoke_method])
        .setup(move |app, _api| {
            app.manage(GallerySaverState { channel });
            Ok(())
        })
        .build()
}
