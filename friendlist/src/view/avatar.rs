/// What is shown in the avatar slot of a friend.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Avatar {
    /// The friend's picture. `initials` are kept hidden in case the picture fails to load.
    Image { uri: String, initials: String },

    /// Textual fallback.
    Initials(String),
}

impl Avatar {
    /// An [Avatar::Image] if there is an image to show, [Avatar::Initials] otherwise.
    pub fn new(image: Option<&str>, initials: String) -> Self {
        match image {
            Some(uri) => Avatar::Image {
                uri: uri.to_string(),
                initials,
            },
            None => Avatar::Initials(initials),
        }
    }

    pub fn image(&self) -> Option<&str> {
        match self {
            Avatar::Image { uri, .. } => Some(uri),
            Avatar::Initials(_) => None,
        }
    }

    pub fn initials(&self) -> &str {
        match self {
            Avatar::Image { initials, .. } | Avatar::Initials(initials) => initials,
        }
    }

    pub fn shows_initials(&self) -> bool {
        matches!(self, Avatar::Initials(_))
    }

    /// Switches from the image to the initials. One-way: returns `true` only for the call that
    /// performed the switch.
    pub fn on_image_load_failed(&mut self) -> bool {
        match self {
            Avatar::Image { initials, .. } => {
                let initials = std::mem::take(initials);
                *self = Avatar::Initials(initials);
                true
            }
            Avatar::Initials(_) => false,
        }
    }
}
