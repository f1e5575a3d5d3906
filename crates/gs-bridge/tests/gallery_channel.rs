//! End-to-end tests of the gallery channel through the message bus
//! 通过消息总线的图库通道端到端测试

use std::path::{Path, PathBuf};
use std::sync::Arc;

use gs_app::SaveImage;
use gs_bridge::bootstrap::wire_runtime;
use gs_bridge::commands::GallerySaverHandler;
use gs_bridge::{BridgeRuntime, GallerySaverPlugin, MethodChannel};
use gs_core::channel::{ArgumentMap, EncodableValue, MethodResponse};
use gs_core::config::AppConfig;
use gs_core::gallery::Locale;
use gs_core::ports::{BinaryMessengerPort, ImageStoreError, ImageStorePort};
use gs_platform::InProcessMessenger;

const CHANNEL: &str = "com.mercadea/gallery_saver";
const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

fn runtime(backend: &str, gallery_dir: &Path) -> BridgeRuntime {
    let config = AppConfig {
        channel_name: CHANNEL.to_string(),
        locale: "es".to_string(),
        storage_backend: backend.to_string(),
        gallery_dir: gallery_dir.to_path_buf(),
    };
    match wire_runtime(config) {
        Ok(runtime) => runtime,
        Err(err) => panic!("wiring failed: {}", err),
    }
}

fn save_args(bytes: Option<Vec<u8>>, file_name: Option<&str>) -> ArgumentMap {
    let mut args = ArgumentMap::new();
    if let Some(bytes) = bytes {
        args.insert("bytes".to_string(), EncodableValue::Bytes(bytes));
    }
    if let Some(name) = file_name {
        args.insert("fileName".to_string(), EncodableValue::from(name));
    }
    args
}

/// Storage collaborator with a scripted answer, standing in for the device.
struct ScriptedStore(&'static str);

impl ImageStorePort for ScriptedStore {
    fn persist(&self, _bytes: &[u8], _file_name: &str) -> Result<String, ImageStoreError> {
        Ok(self.0.to_string())
    }
}

fn scripted_client(answer: &'static str) -> (GallerySaverPlugin, MethodChannel) {
    let bus = Arc::new(InProcessMessenger::new());
    let plugin = GallerySaverPlugin::new(
        MethodChannel::new(CHANNEL, bus.clone()),
        GallerySaverHandler::new(SaveImage::new(Arc::new(ScriptedStore(answer))), Locale::Es),
    );
    plugin.attach();
    (plugin, MethodChannel::new(CHANNEL, bus))
}

#[tokio::test]
async fn scenario_a_missing_bytes_is_invalid_args() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = runtime("filesystem", dir.path());

    let response = runtime
        .client()
        .invoke_method("saveImage", save_args(None, Some("x.png")))
        .await
        .unwrap();

    assert_eq!(response.error_code(), Some("invalid_args"));
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[tokio::test]
async fn scenario_b_empty_file_name_is_invalid_args() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = runtime("filesystem", dir.path());

    let response = runtime
        .client()
        .invoke_method("saveImage", save_args(Some(PNG_MAGIC.to_vec()), Some("")))
        .await
        .unwrap();

    assert_eq!(response.error_code(), Some("invalid_args"));
}

#[tokio::test]
async fn scenario_c_storage_location_is_returned() {
    let (_plugin, client) = scripted_client("/storage/emulated/0/Pictures/photo.png");

    let response = client
        .invoke_method("saveImage", save_args(Some(PNG_MAGIC.to_vec()), Some("photo.png")))
        .await
        .unwrap();

    assert_eq!(
        response,
        MethodResponse::success("/storage/emulated/0/Pictures/photo.png")
    );
}

#[tokio::test]
async fn scenario_d_empty_location_is_save_failed() {
    let (_plugin, client) = scripted_client("");

    let response = client
        .invoke_method("saveImage", save_args(Some(PNG_MAGIC.to_vec()), Some("photo.png")))
        .await
        .unwrap();

    match response {
        MethodResponse::Error(err) => {
            assert_eq!(err.code, "save_failed");
            assert_eq!(err.message, "No se pudo guardar la imagen");
            assert!(err.details.is_none());
        }
        other => panic!("expected save_failed, got {:?}", other),
    }
}

#[tokio::test]
async fn scenario_e_unknown_method_is_not_implemented() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = runtime("filesystem", dir.path());

    let response = runtime
        .client()
        .invoke_method("listAlbums", ArgumentMap::new())
        .await
        .unwrap();

    assert_eq!(response, MethodResponse::NotImplemented);
}

#[tokio::test]
async fn filesystem_backend_writes_the_payload() {
    let dir = tempfile::tempdir().unwrap();
    let gallery = dir.path().join("Pictures").join("Mercadea");
    let runtime = runtime("filesystem", &gallery);

    let response = runtime
        .client()
        .invoke_method("saveImage", save_args(Some(PNG_MAGIC.to_vec()), Some("photo.png")))
        .await
        .unwrap();

    let path = match response {
        MethodResponse::Success(EncodableValue::String(path)) => PathBuf::from(path),
        other => panic!("expected a path, got {:?}", other),
    };
    assert_eq!(path, gallery.join("photo.png"));
    assert_eq!(std::fs::read(&path).unwrap(), PNG_MAGIC);
}

#[tokio::test]
async fn unavailable_backend_always_fails() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = runtime("unavailable", dir.path());

    let response = runtime
        .client()
        .invoke_method("saveImage", save_args(Some(PNG_MAGIC.to_vec()), Some("photo.png")))
        .await
        .unwrap();

    assert_eq!(response.error_code(), Some("save_failed"));
}

#[tokio::test]
async fn raw_wire_reply_for_invalid_args() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = runtime("filesystem", dir.path());

    let request = br#"{"method":"saveImage","arguments":{"fileName":{"string":"x.png"}}}"#;
    let reply = runtime
        .messenger()
        .send(CHANNEL, request.to_vec())
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(reply).unwrap(),
        r#"{"error":{"code":"invalid_args","message":"Bytes o nombre del archivo inválidos","details":null}}"#
    );
}

#[tokio::test]
async fn raw_wire_reply_for_unknown_method_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = runtime("filesystem", dir.path());

    let reply = runtime
        .messenger()
        .send(CHANNEL, br#"{"method":"listAlbums","arguments":{}}"#.to_vec())
        .await
        .unwrap();

    assert!(reply.is_empty());
}

#[tokio::test]
async fn unknown_method_with_untagged_arguments_is_not_implemented() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = runtime("filesystem", dir.path());

    let reply = runtime
        .messenger()
        .send(CHANNEL, br#"{"method":"listAlbums","arguments":{"limit":10}}"#.to_vec())
        .await
        .unwrap();

    assert!(reply.is_empty());
}

#[tokio::test]
async fn save_image_with_bad_base64_gets_localized_invalid_args() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = runtime("filesystem", dir.path());

    let request =
        br#"{"method":"saveImage","arguments":{"bytes":{"bytes":"%%%"},"fileName":{"string":"x.png"}}}"#;
    let reply = runtime
        .messenger()
        .send(CHANNEL, request.to_vec())
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(reply).unwrap(),
        r#"{"error":{"code":"invalid_args","message":"Bytes o nombre del archivo inválidos","details":null}}"#
    );
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_calls_each_get_exactly_one_reply() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = runtime("filesystem", dir.path());
    let client = runtime.client();

    let mut tasks = Vec::new();
    for i in 0..12u8 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            let args = if i % 3 == 0 {
                save_args(None, Some("bad.png"))
            } else {
                save_args(Some(vec![i; 32]), Some("burst.png"))
            };
            client.invoke_method("saveImage", args).await.unwrap()
        }));
    }

    let mut saved = Vec::new();
    for (i, task) in tasks.into_iter().enumerate() {
        let response = task.await.unwrap();
        if i % 3 == 0 {
            assert_eq!(response.error_code(), Some("invalid_args"));
        } else {
            match response {
                MethodResponse::Success(EncodableValue::String(path)) => saved.push(path),
                other => panic!("call {} expected a path, got {:?}", i, other),
            }
        }
    }

    saved.sort();
    saved.dedup();
    assert_eq!(saved.len(), 8);
}
