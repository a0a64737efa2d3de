//! Catalog icon
//!
//! The PNG ships as a binary asset and is base64-encoded once on first use.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::olm::Icon;

/// Raw PNG bytes of the OpenStack logo
pub const ICON_PNG: &[u8] = include_bytes!("../../assets/openstack-icon.png");

/// Media type of [`ICON_PNG`]
pub const ICON_MEDIA_TYPE: &str = "image/png";

lazy_static::lazy_static! {
    static ref ICON_BASE64: String = STANDARD.encode(ICON_PNG);
}

/// Icon entry for the CSV spec
pub fn icon() -> Icon {
    Icon {
        data: ICON_BASE64.clone(),
        media_type: ICON_MEDIA_TYPE.to_string(),
    }
}
