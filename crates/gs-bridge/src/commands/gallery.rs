//! Gallery saver method handler
//! 图库保存方法处理器

use async_trait::async_trait;
use gs_app::SaveImage;
use gs_core::channel::{MethodCall, MethodResponse};
use gs_core::gallery::{ErrorCode, GalleryMethod, Locale};
use tracing::{debug, info_span, Instrument};

use crate::channel::MethodCallHandler;
use crate::commands::map_err;

/// Routes gallery channel calls to their use cases.
///
/// ## Behavior / 行为
/// - `saveImage` → [`SaveImage`], success carries the saved path
/// - any other method → not-implemented
///
/// Blocking storage runs on the blocking pool inside the use case, so this
/// handler never stalls the dispatch task.
pub struct GallerySaverHandler {
    save_image: SaveImage,
    locale: Locale,
}

impl GallerySaverHandler {
    pub fn new(save_image: SaveImage, locale: Locale) -> Self {
        Self { save_image, locale }
    }
}

#[async_trait]
impl MethodCallHandler for GallerySaverHandler {
    fn handles(&self, method: &str) -> bool {
        GalleryMethod::is_supported(method)
    }

    fn error_reply(&self, code: ErrorCode) -> MethodResponse {
        code.into_response(self.locale)
    }

    async fn on_method_call(&self, call: MethodCall) -> MethodResponse {
        let span = info_span!("command.gallery_saver", method = %call.method);

        async {
            match GalleryMethod::from_call(call) {
                GalleryMethod::SaveImage(args) => match self.save_image.execute(args).await {
                    Ok(saved) => MethodResponse::success(saved.path),
                    Err(err) => map_err(&err, self.locale),
                },
                GalleryMethod::Unknown(method) => {
                    debug!(method = %method, "Method not implemented on gallery channel");
                    MethodResponse::NotImplemented
                }
            }
        }
        .instrument(span)
        .await
    }
}
