use crate::emsa::{DigestLength, EncodingScheme, HashLength};
use crate::error::EmsaError;
use anyhow::Result;
use constant_time_eq::constant_time_eq;
use digest::Digest;
use log::{debug, trace};
use rand::RngCore;

/// Raw EMSA: ダイジェストをそのまま署名対象とする符号化スキーム
///
/// `encode` は注入された [`DigestLength`] に対する長さ検査の後、入力バイト列を
/// 無変換で返す。`verify` は署名から復元された表現値と新たに計算された
/// ダイジェストを比較する。署名値を固定幅ビッグエンディアン整数として
/// 符号化した際に生じる先頭のゼロバイトは等価として扱う。
#[derive(Clone, Copy, Debug, Default)]
pub struct EmsaRaw<L> {
    hash: L,
}

impl<L: DigestLength> EmsaRaw<L> {
    /// ダイジェスト長の問い合わせ先を注入してスキームを構築する
    pub fn new(hash: L) -> Self {
        EmsaRaw { hash }
    }
}

impl<D: Digest> EmsaRaw<HashLength<D>> {
    /// ハッシュ型 `D` の出力サイズを期待するスキームを構築する
    pub fn for_hash() -> Self {
        EmsaRaw::new(HashLength::new())
    }
}

/// 先頭 `bytes` がすべてゼロかどうかを、途中で打ち切らずに判定する
fn all_zero(bytes: &[u8]) -> bool {
    let mut acc = 0u8;
    for &b in bytes {
        acc |= b;
    }
    acc == 0
}

impl<L: DigestLength> EncodingScheme for EmsaRaw<L> {
    fn encode(&self, digest: &[u8], _rng: &mut dyn RngCore) -> Result<Vec<u8>> {
        let expected = self.hash.digest_length();
        debug!(
            "emsa_raw encode: digest_len = {}, expected = {}",
            digest.len(),
            expected
        );
        // 固定長ハッシュの場合、ダイジェスト長は一致しなければならない
        if expected != 0 && digest.len() != expected {
            return Err(EmsaError::LengthMismatch {
                expected,
                actual: digest.len(),
            }
            .into());
        }
        // Raw スキームは乱数を消費しない (恒等コピー)
        Ok(digest.to_vec())
    }

    /// 検証の否定はすべて `false` で返し、エラーにはしない。パディング経路では
    /// 先頭ゼロ検査と定数時間比較を常に両方評価し、単一の AND で合成する。
    /// 比較結果に依存する分岐で比較を再実行すると、定数時間比較が除去するはずの
    /// タイミングチャネルを再導入してしまうため行わない。
    fn verify(&self, coded: &[u8], raw: &[u8], key_bits: usize) -> bool {
        let expected = self.hash.digest_length();
        trace!(
            "emsa_raw verify: coded_len = {}, raw_len = {}, expected = {}, key_bits = {}",
            coded.len(),
            raw.len(),
            expected,
            key_bits
        );
        // raw は新たに計算されたダイジェストであり、ハッシュの出力サイズに
        // 一致しなければならない
        if expected != 0 && raw.len() != expected {
            debug!(
                "emsa_raw verify: raw_len {} がダイジェスト長 {} と一致しません",
                raw.len(),
                expected
            );
            return false;
        }
        // 署名側の表現値がダイジェストより長いことはあり得ない
        if coded.len() > raw.len() {
            return false;
        }

        // 固定幅整数符号化による先頭ゼロバイトの差を吸収する
        let pad = raw.len() - coded.len();
        let leading_ok = all_zero(&raw[..pad]);
        let suffix_ok = constant_time_eq(coded, &raw[pad..]);
        // 長さ比較以外にデータ依存の分岐を置かない (短絡しない AND)
        leading_ok & suffix_ok
    }
}
