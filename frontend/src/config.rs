use log::Level;

pub const SITE_NAME: &str = "IWorld";

pub const PLACEHOLDER_HOST: &str = "https://placehold.co";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Observer transitions are logged at debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Black-on-white placeholder image with `label` printed on it.
pub fn placeholder_image(width: u32, height: u32, label: &str) -> String {
    format!(
        "{}/{}x{}/000000/FFFFFF/png?text={}",
        PLACEHOLDER_HOST,
        width,
        height,
        urlencoding::encode(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_url_encodes_label() {
        assert_eq!(
            placeholder_image(600, 400, "Our Story"),
            "https://placehold.co/600x400/000000/FFFFFF/png?text=Our%20Story"
        );
    }
}
