use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;

/// Random value for the `state` parameter of the authorization URL.
///
/// Store it in the session and compare it with
/// [`CallbackParams::state`](crate::CallbackParams::state) on the callback
/// to reject forged redirects. The value is safe to place in a URL: 32
/// random bytes, base64url-encoded without padding.
pub fn generate_state() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    URL_SAFE_NO_PAD.encode(bytes)
}
