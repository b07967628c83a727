use crate::constants::{ICON_MUTED, ICON_UNMUTED};

/// What the host should do with its audio element after a mute-button click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoundUpdate {
    /// Create the looping audio element first (only on the first click).
    pub create: bool,
    pub muted: bool,
    pub play: bool,
}

impl SoundUpdate {
    pub fn icon(&self) -> &'static str {
        if self.muted {
            ICON_MUTED
        } else {
            ICON_UNMUTED
        }
    }
}

/// Mute toggle state. Audio is created lazily on the first click so
/// autoplay policies are satisfied; it starts muted, so that click unmutes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SoundToggle {
    created: bool,
    muted: bool,
}

impl SoundToggle {
    pub fn toggle(&mut self) -> SoundUpdate {
        let create = !self.created;
        if create {
            self.created = true;
            self.muted = true;
        }
        self.muted = !self.muted;
        SoundUpdate {
            create,
            muted: self.muted,
            play: !self.muted,
        }
    }

    pub fn is_muted(&self) -> bool {
        !self.created || self.muted
    }
}
