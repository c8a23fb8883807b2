// エラーハンドリング
pub mod error;
// 符号化スキームのインターフェースとダイジェスト長の問い合わせ
pub mod emsa;
// Raw (恒等) EMSA 符号化スキーム
pub mod raw;

pub use emsa::{AnyLength, DigestLength, EncodingScheme, FixedLength, HashLength};
pub use error::EmsaError;
pub use raw::EmsaRaw;
