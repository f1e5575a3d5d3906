//! Method channel contract shared by the native side and the UI runtime side.
//! 原生端与 UI 运行时之间共享的方法通道契约。

mod call;
pub mod codec;
mod value;

pub use call::{MethodCall, MethodError, MethodResponse};
pub use codec::{CodecError, PendingCall};
pub use value::{ArgumentMap, EncodableValue};
